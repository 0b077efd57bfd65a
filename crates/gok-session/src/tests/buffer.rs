use crate::{delete_backward, insert_at, EditBuffer};

const KEDI_RUNE: &str = "\u{10C1A}";

// --- insert_at ---

#[test]
fn insert_in_middle_advances_cursor() {
    assert_eq!(insert_at("ab", 1, "X"), ("aXb".to_string(), 2));
}

#[test]
fn insert_rune_counts_two_units() {
    assert_eq!(insert_at("", 0, KEDI_RUNE), (KEDI_RUNE.to_string(), 2));
    assert_eq!(insert_at("ab", 2, "ş"), ("abş".to_string(), 3));
}

#[test]
fn insert_past_end_is_clamped() {
    assert_eq!(insert_at("ab", 99, "c"), ("abc".to_string(), 3));
}

#[test]
fn insert_never_splits_a_pair() {
    // position 1 sits between the two halves of the rune
    let (text, cursor) = insert_at(KEDI_RUNE, 1, "a");
    assert_eq!(text, format!("a{KEDI_RUNE}"));
    assert_eq!(cursor, 1);
}

// --- delete_backward ---

#[test]
fn delete_rune_removes_both_units() {
    let text = format!("ke{KEDI_RUNE}");
    assert_eq!(text.encode_utf16().count(), 4);
    assert_eq!(delete_backward(&text, 4, 4), ("ke".to_string(), 2));
}

#[test]
fn delete_bmp_char_removes_one_unit() {
    assert_eq!(delete_backward("kedi", 4, 4), ("ked".to_string(), 3));
    assert_eq!(delete_backward("kedi", 2, 2), ("kdi".to_string(), 1));
}

#[test]
fn delete_other_astral_chars_as_pairs() {
    assert_eq!(delete_backward("a😀", 3, 3), ("a".to_string(), 1));
}

#[test]
fn delete_selection() {
    assert_eq!(delete_backward("kedi", 1, 3), ("ki".to_string(), 1));
    assert_eq!(delete_backward("kedi", 3, 1), ("ki".to_string(), 1));
}

#[test]
fn delete_at_start_is_noop() {
    assert_eq!(delete_backward("kedi", 0, 0), ("kedi".to_string(), 0));
    assert_eq!(delete_backward("", 0, 0), (String::new(), 0));
}

#[test]
fn selection_inside_pair_is_widened() {
    let text = format!("a{KEDI_RUNE}b");
    assert_eq!(delete_backward(&text, 0, 2), ("b".to_string(), 0));
    assert_eq!(delete_backward(&text, 2, 4), ("a".to_string(), 1));
}

#[test]
fn unpaired_high_surrogate_removed_alone() {
    let mut b = EditBuffer::from_utf16(vec![0x61, 0xD803]);
    assert_eq!(b.backspace(), 1);
    assert_eq!(b.units(), &[0x61]);
}

#[test]
fn unpaired_low_surrogate_removed_alone() {
    let mut b = EditBuffer::from_utf16(vec![0xDC1A, 0x61]);
    assert_eq!(b.delete_backward(1, 1), 0);
    assert_eq!(b.units(), &[0x61]);
}

#[test]
fn reversed_halves_are_not_a_pair() {
    let mut b = EditBuffer::from_utf16(vec![0xDC1A, 0xD803]);
    assert_eq!(b.backspace(), 1);
    assert_eq!(b.units(), &[0xDC1A]);
    assert_eq!(b.text(), "\u{FFFD}");
}

// --- EditBuffer ---

#[test]
fn from_text_puts_cursor_at_end() {
    let b = EditBuffer::from_text("ke\u{10C1A}");
    assert_eq!(b.len(), 4);
    assert_eq!(b.selection(), (4, 4));
    assert!(!b.has_selection());
}

#[test]
fn replace_selection_splices_text() {
    let mut b = EditBuffer::from_text("kedi");
    b.select(1, 3);
    assert!(b.has_selection());
    assert_eq!(b.replace_selection("X"), 2);
    assert_eq!(b.text(), "kXi");
    assert_eq!(b.selection(), (2, 2));
}

#[test]
fn replace_collapsed_selection_inserts() {
    let mut b = EditBuffer::from_text("kedi");
    b.select(0, 0);
    assert_eq!(b.replace_selection("a"), 1);
    assert_eq!(b.text(), "akedi");
}

#[test]
fn select_clamps_and_orders() {
    let mut b = EditBuffer::from_text("kedi");
    b.select(10, 2);
    assert_eq!(b.selection(), (2, 4));
}

#[test]
fn clear_resets_cursor() {
    let mut b = EditBuffer::from_text("kedi");
    b.clear();
    assert!(b.is_empty());
    assert_eq!(b.cursor(), 0);
}
