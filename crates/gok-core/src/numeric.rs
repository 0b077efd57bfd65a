//! Arabic-numeral to Turkish number-word expansion.
//!
//! Finds standalone digit runs in free text ("100 kedi") and spells them out
//! ("yüz kedi") so the transliterator only ever sees letters. Values above
//! one trillion are left as digits.

use tracing::{debug, debug_span};

use crate::unicode::is_ascii_word;

/// Largest literal that is spelled out; anything above stays as digits.
pub const MAX_EXPANDABLE: u64 = 1_000_000_000_000;

/// Exclusive upper bound of [`number_to_words`].
pub const WORDS_LIMIT: u64 = 1_000_000_000_000_000;

const ZERO: &str = "sıfır";

const ONES: [&str; 10] = [
    "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

const HUNDRED: &str = "yüz";
const THOUSAND: &str = "bin";

/// Large magnitudes that always keep their multiplier ("bir milyon").
const LARGE_UNITS: [(u64, &str); 3] = [
    (1_000_000_000_000, "trilyon"),
    (1_000_000_000, "milyar"),
    (1_000_000, "milyon"),
];

/// Spell out `n` in Turkish.
///
/// Returns `None` for values of a quadrillion and above, which have no
/// magnitude word in the vocabulary.
pub fn number_to_words(n: u64) -> Option<String> {
    if n >= WORDS_LIMIT {
        return None;
    }
    if n == 0 {
        return Some(ZERO.to_string());
    }

    let mut parts: Vec<&str> = Vec::new();
    let mut rest = n;

    for &(unit, word) in &LARGE_UNITS {
        let group = rest / unit;
        if group > 0 {
            push_group(&mut parts, group);
            parts.push(word);
            rest %= unit;
        }
    }

    // "bin", not "bir bin"
    let thousands = rest / 1000;
    if thousands > 0 {
        if thousands > 1 {
            push_group(&mut parts, thousands);
        }
        parts.push(THOUSAND);
        rest %= 1000;
    }

    push_group(&mut parts, rest);
    Some(parts.join(" "))
}

/// Push the words for a group value in 0..=999. Zero pushes nothing.
fn push_group(parts: &mut Vec<&'static str>, group: u64) {
    debug_assert!(group < 1000);
    let hundreds = (group / 100) as usize;
    let tens = (group % 100 / 10) as usize;
    let ones = (group % 10) as usize;

    // "yüz", not "bir yüz"
    if hundreds > 0 {
        if hundreds > 1 {
            parts.push(ONES[hundreds]);
        }
        parts.push(HUNDRED);
    }
    if tens > 0 {
        parts.push(TENS[tens]);
    }
    if ones > 0 {
        parts.push(ONES[ones]);
    }
}

/// Replace every standalone run of ASCII digits with its Turkish words.
///
/// A run is standalone when neither neighbour is an ASCII word character, so
/// "abc123" and "3d" are left alone while "5." and "(12)" expand. Runs whose
/// value exceeds [`MAX_EXPANDABLE`] (including ones too long for `u64`) are
/// copied through unchanged.
pub fn expand_numbers(text: &str) -> String {
    let _span = debug_span!("expand_numbers", len = text.len()).entered();

    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        if !c.is_ascii_digit() {
            out.push(c);
            prev = Some(c);
            continue;
        }

        let mut end = start + 1;
        while let Some(&(i, d)) = iter.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            end = i + d.len_utf8();
            iter.next();
        }
        let literal = &text[start..end];
        let next = iter.peek().map(|&(_, n)| n);
        let bounded = !prev.is_some_and(is_ascii_word) && !next.is_some_and(is_ascii_word);

        match literal.parse::<u64>() {
            Ok(value) if bounded && value <= MAX_EXPANDABLE => {
                // value <= MAX_EXPANDABLE < WORDS_LIMIT
                let words = number_to_words(value).unwrap_or_default();
                debug!(literal, words = words.as_str(), "expanded");
                out.push_str(&words);
            }
            _ => out.push_str(literal),
        }
        prev = literal.chars().last();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: u64) -> String {
        number_to_words(n).unwrap()
    }

    #[test]
    fn test_ones_and_tens() {
        assert_eq!(words(0), "sıfır");
        assert_eq!(words(1), "bir");
        assert_eq!(words(9), "dokuz");
        assert_eq!(words(10), "on");
        assert_eq!(words(11), "on bir");
        assert_eq!(words(42), "kırk iki");
        assert_eq!(words(99), "doksan dokuz");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(words(100), "yüz");
        assert_eq!(words(101), "yüz bir");
        assert_eq!(words(200), "iki yüz");
        assert_eq!(words(999), "dokuz yüz doksan dokuz");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(words(1000), "bin");
        assert_eq!(words(1001), "bin bir");
        assert_eq!(words(1100), "bin yüz");
        assert_eq!(words(2000), "iki bin");
        assert_eq!(words(100_000), "yüz bin");
        assert_eq!(words(101_000), "yüz bir bin");
        assert_eq!(words(1984), "bin dokuz yüz seksen dört");
    }

    #[test]
    fn test_large_units_keep_bir() {
        assert_eq!(words(1_000_000), "bir milyon");
        assert_eq!(words(1_000_000_000), "bir milyar");
        assert_eq!(words(1_000_000_000_000), "bir trilyon");
        assert_eq!(words(2_500_000), "iki milyon beş yüz bin");
        assert_eq!(words(101_000_000), "yüz bir milyon");
    }

    #[test]
    fn test_max_values() {
        assert_eq!(
            words(999_999_999_999),
            "dokuz yüz doksan dokuz milyar dokuz yüz doksan dokuz milyon \
             dokuz yüz doksan dokuz bin dokuz yüz doksan dokuz"
        );
        assert!(number_to_words(WORDS_LIMIT - 1).is_some());
        assert_eq!(number_to_words(WORDS_LIMIT), None);
    }

    #[test]
    fn test_expand_simple() {
        assert_eq!(expand_numbers("100"), "yüz");
        assert_eq!(expand_numbers("1000"), "bin");
        assert_eq!(expand_numbers("0"), "sıfır");
        assert_eq!(expand_numbers("100 kedi"), "yüz kedi");
        assert_eq!(expand_numbers("3 elma 2 armut"), "üç elma iki armut");
    }

    #[test]
    fn test_expand_cap_boundary() {
        assert_ne!(expand_numbers("999999999999"), "999999999999");
        assert_eq!(expand_numbers("1000000000000"), "bir trilyon");
        assert_eq!(expand_numbers("1000000000001"), "1000000000001");
        assert_eq!(expand_numbers("1001000000000"), "1001000000000");
        assert_eq!(
            expand_numbers("99999999999999999999999"),
            "99999999999999999999999"
        );
    }

    #[test]
    fn test_expand_word_boundaries() {
        assert_eq!(expand_numbers("abc123"), "abc123");
        assert_eq!(expand_numbers("3d"), "3d");
        assert_eq!(expand_numbers("_7"), "_7");
        assert_eq!(expand_numbers("(12)"), "(on iki)");
        assert_eq!(expand_numbers("5."), "beş.");
        assert_eq!(expand_numbers("ş5"), "şbeş");
        assert_eq!(expand_numbers("1,5"), "bir,beş");
    }

    #[test]
    fn test_expand_leading_zeros_and_passthrough() {
        assert_eq!(expand_numbers("007"), "yedi");
        assert_eq!(expand_numbers(""), "");
        assert_eq!(expand_numbers("merhaba dünya"), "merhaba dünya");
        assert_eq!(expand_numbers("line1\n2"), "line1\niki");
    }
}
