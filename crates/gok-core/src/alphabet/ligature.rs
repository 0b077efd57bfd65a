use super::rune;

/// Combined-sound clusters and the single rune that writes each.
///
/// Order matters: each pattern is replaced across the whole word before the
/// next one is tried, so a cluster consumed by an earlier entry is never seen
/// by a later one.
pub const LIGATURES: &[(&str, char)] = &[
    ("ny", rune::ENY),
    ("ng", rune::ENG),
    ("nç", rune::ENC),
    ("nd", rune::ENT),
    ("nt", rune::ENT),
    ("ld", rune::ELT),
    ("lt", rune::ELT),
    ("ok", rune::OQ),
    ("uk", rune::OQ),
    ("ko", rune::OQ),
    ("ku", rune::OQ),
    ("ök", rune::OP),
    ("ük", rune::OP),
    ("ık", rune::IQ),
    ("kı", rune::IQ),
    ("iç", rune::IC),
    ("çi", rune::IC),
];

pub fn is_ligature(c: char) -> bool {
    LIGATURES.iter().any(|&(_, r)| r == c)
}

/// Replace every combined-sound cluster in `word` with its ligature rune.
///
/// Replacement runes contain no Latin letters, so a substitution can never
/// create a new match for a later pattern.
pub fn apply_ligatures(word: &str) -> String {
    let mut out = word.to_string();
    for &(pattern, lig) in LIGATURES {
        if out.contains(pattern) {
            let mut buf = [0u8; 4];
            out = out.replace(pattern, lig.encode_utf8(&mut buf));
        }
    }
    out
}
