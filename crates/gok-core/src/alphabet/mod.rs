//! Static lexical tables for the Orkhon script.
//!
//! Maps Turkish letters to their base rune, pairs the back ("thick") and
//! front ("thin") forms of the ten paired consonants, and groups vowels into
//! the harmony classes that drive elision.

mod ligature;
mod punctuation;

pub use ligature::{apply_ligatures, is_ligature, LIGATURES};
pub use punctuation::is_punctuation;

/// Old Turkic code points used by the transliterator.
///
/// Names follow the Unicode character names (ORKHON AB = back b,
/// ORKHON AEB = front b, and so on).
pub mod rune {
    pub const A: char = '\u{10C00}';
    pub const I: char = '\u{10C03}';
    pub const O: char = '\u{10C06}';
    pub const OE: char = '\u{10C07}';

    pub const AB: char = '\u{10C09}';
    pub const AEB: char = '\u{10C0B}';
    pub const AG: char = '\u{10C0D}';
    pub const AEG: char = '\u{10C0F}';
    pub const AD: char = '\u{10C11}';
    pub const AED: char = '\u{10C13}';
    pub const EZ: char = '\u{10C14}';
    pub const AY: char = '\u{10C16}';
    pub const AEY: char = '\u{10C18}';
    pub const AEK: char = '\u{10C1A}';
    pub const AL: char = '\u{10C1E}';
    pub const AEL: char = '\u{10C20}';
    pub const ELT: char = '\u{10C21}';
    pub const EM: char = '\u{10C22}';
    pub const AN: char = '\u{10C23}';
    pub const AEN: char = '\u{10C24}';
    pub const ENT: char = '\u{10C26}';
    pub const ENC: char = '\u{10C28}';
    pub const ENY: char = '\u{10C2A}';
    pub const ENG: char = '\u{10C2D}';
    pub const EP: char = '\u{10C2F}';
    pub const OP: char = '\u{10C30}';
    pub const IC: char = '\u{10C31}';
    pub const EC: char = '\u{10C32}';
    pub const AQ: char = '\u{10C34}';
    pub const IQ: char = '\u{10C36}';
    pub const OQ: char = '\u{10C38}';
    pub const AR: char = '\u{10C3A}';
    pub const AER: char = '\u{10C3C}';
    pub const AS: char = '\u{10C3D}';
    pub const AES: char = '\u{10C3E}';
    pub const ESH: char = '\u{10C41}';
    pub const AT: char = '\u{10C43}';
    pub const AET: char = '\u{10C45}';
}

/// Default separator written between words.
pub const WORD_SEPARATOR: &str = ":";

/// Turkish vowels, in the order the harmony classes list them.
pub const VOWELS: [char; 8] = ['a', 'e', 'ı', 'i', 'o', 'u', 'ö', 'ü'];

/// Letter → base rune. Paired consonants map to their back form; letters
/// the script lacks (c, f, ğ, h, j) borrow the nearest sound.
const LETTERS: &[(char, char)] = &[
    ('a', rune::A),
    ('e', rune::A),
    ('ı', rune::I),
    ('i', rune::I),
    ('o', rune::O),
    ('u', rune::O),
    ('ö', rune::OE),
    ('ü', rune::OE),
    ('b', rune::AB),
    ('p', rune::EP),
    ('d', rune::AD),
    ('t', rune::AT),
    ('g', rune::AG),
    ('k', rune::AQ),
    ('ç', rune::EC),
    ('l', rune::AL),
    ('m', rune::EM),
    ('n', rune::AN),
    ('r', rune::AR),
    ('s', rune::AS),
    ('ş', rune::ESH),
    ('y', rune::AY),
    ('z', rune::EZ),
    ('c', rune::EC),
    ('f', rune::AB),
    ('ğ', rune::AG),
    ('h', rune::AQ),
    ('j', rune::AY),
];

/// (back, front) forms of each paired consonant: b, d, g, k, l, n, r, s, t, y.
pub const CONSONANT_PAIRS: [(char, char); 10] = [
    (rune::AB, rune::AEB),
    (rune::AD, rune::AED),
    (rune::AG, rune::AEG),
    (rune::AQ, rune::AEK),
    (rune::AL, rune::AEL),
    (rune::AN, rune::AEN),
    (rune::AR, rune::AER),
    (rune::AS, rune::AES),
    (rune::AT, rune::AET),
    (rune::AY, rune::AEY),
];

/// Vowel harmony class used by the elision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyClass {
    /// a, e
    Low,
    /// ı, i
    HighUnrounded,
    /// o, u
    BackRounded,
    /// ö, ü
    FrontRounded,
}

/// Front/back quality of a vowel; selects the consonant allomorph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frontness {
    Back,
    Front,
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn harmony_class(vowel: char) -> Option<HarmonyClass> {
    match vowel {
        'a' | 'e' => Some(HarmonyClass::Low),
        'ı' | 'i' => Some(HarmonyClass::HighUnrounded),
        'o' | 'u' => Some(HarmonyClass::BackRounded),
        'ö' | 'ü' => Some(HarmonyClass::FrontRounded),
        _ => None,
    }
}

pub fn frontness(vowel: char) -> Option<Frontness> {
    match vowel {
        'a' | 'ı' | 'o' | 'u' => Some(Frontness::Back),
        'e' | 'i' | 'ö' | 'ü' => Some(Frontness::Front),
        _ => None,
    }
}

/// Base rune for a lowercase Turkish letter.
pub fn rune_for_letter(letter: char) -> Option<char> {
    LETTERS
        .iter()
        .find_map(|&(l, r)| (l == letter).then_some(r))
}

/// The other form of a paired consonant (thick ↔ thin). Symmetric.
pub fn counterpart(rune: char) -> Option<char> {
    CONSONANT_PAIRS.iter().find_map(|&(back, front)| {
        if rune == back {
            Some(front)
        } else if rune == front {
            Some(back)
        } else {
            None
        }
    })
}

/// Select the allomorph of `rune` matching `frontness`.
///
/// Runes outside the consonant pairs are returned as-is.
pub fn allomorph(rune: char, frontness: Frontness) -> char {
    for &(back, front) in &CONSONANT_PAIRS {
        if rune == back || rune == front {
            return match frontness {
                Frontness::Back => back,
                Frontness::Front => front,
            };
        }
    }
    rune
}

/// `U+10C09`-style label for a code point.
pub fn code_point_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Display information for one letter of the Turkish alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterInfo {
    pub letter: char,
    pub rune: char,
    /// Front form when the rune is a paired consonant.
    pub front_form: Option<char>,
    pub code_point: String,
}

pub fn letter_info(letter: char) -> Option<LetterInfo> {
    let lower = crate::unicode::turkish_lowercase_char(letter);
    let rune = rune_for_letter(lower)?;
    let front_form = counterpart(rune).filter(|_| !is_vowel(lower));
    Some(LetterInfo {
        letter: lower,
        rune,
        front_form,
        code_point: code_point_label(rune),
    })
}

/// All letter mappings, in alphabet-table order.
pub fn letters() -> impl Iterator<Item = (char, char)> {
    LETTERS.iter().copied()
}
