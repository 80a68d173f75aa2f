use crate::error::LatebindError;
use crate::splice::{SpliceOperation, splice_many};

fn op(start: usize, end: usize, replacement: &str) -> SpliceOperation {
    SpliceOperation {
        start,
        end,
        replacement: replacement.to_string(),
    }
}

#[test]
fn zero_operations_return_the_input_unchanged() {
    assert_eq!(splice_many("const a = 1;", &[]).unwrap(), "const a = 1;");
    assert_eq!(splice_many("", &[]).unwrap(), "");
}

#[test]
fn replaces_a_middle_range() {
    assert_eq!(splice_many("abcdef", &[op(2, 4, "XY")]).unwrap(), "abXYef");
}

#[test]
fn operations_covering_the_whole_input_concatenate_replacements() {
    let out = splice_many("abcdef", &[op(0, 3, "A"), op(3, 6, "B")]).unwrap();
    assert_eq!(out, "AB");
}

#[test]
fn handles_operations_at_the_very_start_and_end() {
    let out = splice_many("abcdef", &[op(0, 1, "<"), op(5, 6, ">")]).unwrap();
    assert_eq!(out, "<bcde>");
}

#[test]
fn adjacent_operations_are_allowed() {
    let out = splice_many("abcd", &[op(1, 2, "x"), op(2, 3, "y")]).unwrap();
    assert_eq!(out, "axyd");
}

#[test]
fn a_replacement_can_be_empty() {
    assert_eq!(splice_many("abcdef", &[op(0, 3, "")]).unwrap(), "def");
}

#[test]
fn out_of_order_operations_are_an_internal_error() {
    let err = splice_many("abcdef", &[op(3, 4, "x"), op(0, 1, "y")]).unwrap_err();
    assert!(matches!(err, LatebindError::Internal { .. }));
}

#[test]
fn overlapping_operations_are_an_internal_error() {
    let err = splice_many("abcdef", &[op(0, 3, "x"), op(2, 5, "y")]).unwrap_err();
    assert!(matches!(err, LatebindError::Internal { .. }));
}

#[test]
fn a_reversed_range_is_an_internal_error() {
    let err = splice_many("abcdef", &[op(4, 2, "x")]).unwrap_err();
    assert!(matches!(err, LatebindError::Internal { .. }));
}

#[test]
fn a_range_past_the_end_is_an_internal_error() {
    let err = splice_many("abc", &[op(1, 9, "x")]).unwrap_err();
    assert!(matches!(err, LatebindError::Internal { .. }));
}
