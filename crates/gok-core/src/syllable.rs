//! Greedy Turkish syllabification.
//!
//! A single left-to-right pass over the word's scalar values. Any character
//! that is not a Turkish vowel (consonants, punctuation, ligature runes)
//! counts as a consonant.

use tracing::debug;

use crate::alphabet::is_vowel;

/// Split a lowercased word into syllables whose concatenation is the word.
///
/// Words with fewer than two vowels are returned whole. Otherwise a pending
/// syllable is closed, once it holds a vowel, at the first rule that fires:
///
/// 1. the next character is a vowel;
/// 2. the vowel is second to last and one consonant trails it (taken along);
/// 3. the vowel is followed by two consonants (the first is taken along);
/// 4. the vowel is followed by consonant + vowel;
/// 5. the word ends.
pub fn syllabify(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.iter().filter(|&&c| is_vowel(c)).count() <= 1 {
        return vec![word.to_string()];
    }

    let n = chars.len();
    let vowel_at = |i: usize| i < n && is_vowel(chars[i]);
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut has_vowel = false;
    let mut i = 0;

    while i < n {
        let c = chars[i];
        current.push(c);
        has_vowel |= is_vowel(c);

        if has_vowel {
            let close = if vowel_at(i + 1) {
                true
            } else if is_vowel(c) && i + 2 == n {
                current.push(chars[i + 1]);
                i += 1;
                true
            } else if is_vowel(c) && i + 2 < n && !vowel_at(i + 2) {
                current.push(chars[i + 1]);
                i += 1;
                true
            } else {
                (is_vowel(c) && i + 2 < n) || i + 1 == n
            };

            if close {
                syllables.push(std::mem::take(&mut current));
                has_vowel = false;
            }
        }
        i += 1;
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    debug!(word, count = syllables.len(), "syllabified");
    syllables
}

/// First Turkish vowel of a syllable: the vowel whose frontness selects the
/// syllable's consonant forms.
pub fn nucleus(syllable: &str) -> Option<char> {
    syllable.chars().find(|&c| is_vowel(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(word: &str, expected: &[&str]) {
        let got = syllabify(word);
        assert_eq!(got, expected, "syllabify({word:?})");
        assert_eq!(got.concat(), word);
    }

    #[test]
    fn single_syllable_words() {
        check("tank", &["tank"]);
        check("türk", &["türk"]);
        check("genç", &["genç"]);
        check("a", &["a"]);
    }

    #[test]
    fn vowelless_words() {
        check("tbmm", &["tbmm"]);
        check("\u{10C38}l", &["\u{10C38}l"]);
    }

    #[test]
    fn consonant_between_vowels_starts_next_syllable() {
        check("kedi", &["ke", "di"]);
        check("araba", &["a", "ra", "ba"]);
        check("ankara", &["an", "ka", "ra"]);
    }

    #[test]
    fn cluster_splits() {
        check("türkiye", &["tür", "ki", "ye"]);
        check("istanbul", &["is", "tan", "bul"]);
        check("kontrol", &["kon", "trol"]);
        check("atatürk", &["a", "ta", "tür", "k"]);
    }

    #[test]
    fn adjacent_vowels() {
        check("saat", &["sa", "at"]);
        check("şiir", &["şi", "ir"]);
    }

    #[test]
    fn trailing_punctuation_attaches() {
        check("kedi,", &["ke", "di,"]);
    }

    #[test]
    fn ligature_rune_counts_as_consonant() {
        check("ka\u{10C21}ı", &["ka", "\u{10C21}ı"]);
    }

    #[test]
    fn empty_word() {
        assert!(syllabify("").is_empty());
    }

    #[test]
    fn test_nucleus() {
        assert_eq!(nucleus("tür"), Some('ü'));
        assert_eq!(nucleus("tank"), Some('a'));
        assert_eq!(nucleus("\u{10C38}l"), None);
    }
}
