use std::io;
use std::path::Path;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use gok_core::alphabet::code_point_label;
use gok_core::WordTrace;
use gok_engine::GokEngine;

use super::pad;

pub fn translit_cmd(
    text: Option<&str>,
    separator: Option<&str>,
    no_numbers: bool,
    settings_file: Option<&str>,
) {
    let mut engine = match settings_file {
        Some(path) => die!(
            GokEngine::from_settings_file(Path::new(path)),
            "Error loading settings: {}"
        ),
        None => GokEngine::new(),
    };
    if let Some(sep) = separator {
        engine.options_mut().word_separator = sep.to_string();
    }
    if no_numbers {
        engine.options_mut().expand_numbers = false;
    }

    let input = match text {
        Some(t) => t.to_string(),
        None => {
            let raw = die!(io::read_to_string(io::stdin()), "Error reading stdin: {}");
            raw.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    println!("{}", engine.transliterate(&input));
}

#[derive(Debug, Serialize)]
struct SyllabifiedWord {
    word: String,
    syllables: Vec<String>,
}

pub fn syllabify_cmd(words: &[String], json: bool) {
    let engine = GokEngine::new();
    let results: Vec<SyllabifiedWord> = words
        .iter()
        .map(|w| SyllabifiedWord {
            word: w.clone(),
            syllables: engine.syllabify(w),
        })
        .collect();

    if json {
        let out = die!(serde_json::to_string_pretty(&results), "Error: {}");
        println!("{out}");
        return;
    }
    print!("{}", format_syllables(&results));
}

/// One line per word, syllables aligned on display width.
fn format_syllables(results: &[SyllabifiedWord]) -> String {
    let width = results
        .iter()
        .map(|r| UnicodeWidthStr::width(r.word.as_str()))
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for r in results {
        out.push_str(&format!(
            "{}  {}\n",
            pad(&r.word, width),
            r.syllables.join("-")
        ));
    }
    out
}

pub fn numbers_cmd(text: &str) {
    println!("{}", gok_core::expand_numbers(text));
}

pub fn words_cmd(n: u64) {
    let words = die!(
        gok_core::number_to_words(n).ok_or(n),
        "Error: {} has no Turkish magnitude word"
    );
    println!("{words}");
}

pub fn explain_cmd(word: &str, json: bool) {
    let trace = GokEngine::new().explain(word);
    if json {
        let out = die!(serde_json::to_string_pretty(&trace), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_explain(&trace));
    }
}

/// Human-readable rendering of a word trace.
pub fn format_explain(trace: &WordTrace) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== \"{}\" ({} syllables) ===\n",
        trace.input,
        trace.syllables.len()
    ));
    out.push_str(&format!("  ligated: {}\n", trace.ligated));

    let width = trace
        .syllables
        .iter()
        .map(|s| UnicodeWidthStr::width(s.text.as_str()))
        .max()
        .unwrap_or(0);
    for (i, s) in trace.syllables.iter().enumerate() {
        let nucleus = s
            .nucleus
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  syl[{}]: {}  nucleus={}  -> {}\n",
            i,
            pad(&s.text, width),
            nucleus,
            s.output
        ));
    }

    let points: Vec<String> = trace.output.chars().map(code_point_label).collect();
    out.push_str(&format!("  result: {}  [{}]\n", trace.output, points.join(" ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_text_lists_every_syllable() {
        let trace = gok_core::explain_word("kaldı");
        let text = format_explain(&trace);
        assert!(text.starts_with("=== \"kaldı\" (2 syllables) ==="));
        assert!(text.contains("syl[0]: ka"));
        assert!(text.contains("nucleus=ı"));
        assert!(text.contains("U+10C34 U+10C21 U+10C03"));
    }

    #[test]
    fn explain_text_marks_missing_nucleus() {
        let trace = gok_core::explain_word("yok");
        assert!(format_explain(&trace).contains("nucleus=-"));
    }

    #[test]
    fn syllable_column_aligns_on_display_width() {
        let results = vec![
            SyllabifiedWord {
                word: "ab".into(),
                syllables: vec!["ab".into()],
            },
            SyllabifiedWord {
                word: "日本語".into(),
                syllables: vec!["日本語".into()],
            },
        ];
        let text = format_syllables(&results);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["ab      ab", "日本語  日本語"]);
    }

    #[test]
    fn syllabified_word_serializes() {
        let w = SyllabifiedWord {
            word: "kedi".into(),
            syllables: vec!["ke".into(), "di".into()],
        };
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"word":"kedi","syllables":["ke","di"]}"#);
    }
}
