/// Quotes, brackets and other marks dropped from words before mapping.
const MARKS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '{', '}', '[', ']', '<', '>', '/', '\\',
    '|', '@', '#', '$', '%', '^', '&', '*', '_', '=', '+', '-', '`', '~', '´', '«', '»', '‹',
    '›', '“', '”', '„', '‘', '’', '‚', '‛', '′', '″', '‴', '‵', '‶', '‷', '⁅', '⁆', '〈', '〉',
];

/// Bracket and editorial-mark blocks dropped wholesale.
const RANGES: &[(char, char)] = &[
    // mathematical white square brackets .. flattened parentheses
    ('\u{27E6}', '\u{27EF}'),
    // left white curly bracket .. right arc greater-than bracket
    ('\u{2983}', '\u{2998}'),
    // top half brackets
    ('\u{2E22}', '\u{2E25}'),
    // double parentheses .. supplemental punctuation tail
    ('\u{2E28}', '\u{2E4F}'),
];

pub fn is_punctuation(c: char) -> bool {
    MARKS.contains(&c) || RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}
