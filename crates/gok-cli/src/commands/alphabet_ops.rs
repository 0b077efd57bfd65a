use gok_core::alphabet::{code_point_label, letter_info, letters, LIGATURES};

use super::pad;

pub fn alphabet_cmd() {
    print!("{}", format_alphabet());
}

/// Letter table followed by the ligature table, columns aligned.
pub fn format_alphabet() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} {} code point\n",
        pad("letter", 7),
        pad("rune", 5),
        pad("front", 13),
    ));

    for (letter, _) in letters() {
        let Some(info) = letter_info(letter) else {
            continue;
        };
        let front = info
            .front_form
            .map(|f| format!("{f} ({})", code_point_label(f)))
            .unwrap_or_default();
        out.push_str(&format!(
            "{} {} {} {}\n",
            pad(&info.letter.to_string(), 7),
            pad(&info.rune.to_string(), 5),
            pad(&front, 13),
            info.code_point
        ));
    }

    out.push_str("\nligatures (in match order):\n");
    for &(pattern, rune) in LIGATURES {
        out.push_str(&format!(
            "  {} {} {}\n",
            pad(pattern, 4),
            rune,
            code_point_label(rune)
        ));
    }
    out
}
