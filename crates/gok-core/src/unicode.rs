//! Character-level Unicode helpers for Turkish input and Old Turkic output.

/// Check the Old Turkic block (U+10C00..U+10C4F). Every rune sits outside the
/// BMP and takes a surrogate pair in UTF-16.
pub fn is_rune(c: char) -> bool {
    ('\u{10C00}'..='\u{10C4F}').contains(&c)
}

/// ASCII "word" character in the regex `\w` sense.
pub fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercase one character with Turkish casing rules.
///
/// Dotless capital I lowers to `ı` and dotted capital İ to `i`; everything
/// else follows the default Unicode mapping when it yields a single char.
pub fn turkish_lowercase_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => l,
                _ => c,
            }
        }
    }
}

/// Lowercase a string with Turkish casing rules.
pub fn turkish_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}
