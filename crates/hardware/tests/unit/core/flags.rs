//! # Flag Register Tests
//!
//! `CMP` sets exactly one of L, G, E.

use ls8_core::core::arch::flags::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, Flags};
use rstest::rstest;

#[rstest]
#[case(1, 2, FLAG_LESS)]
#[case(0, 255, FLAG_LESS)]
#[case(2, 1, FLAG_GREATER)]
#[case(255, 0, FLAG_GREATER)]
#[case(7, 7, FLAG_EQUAL)]
#[case(0, 0, FLAG_EQUAL)]
fn test_compare_sets_single_flag(#[case] a: u8, #[case] b: u8, #[case] expected: u8) {
    let flags = Flags::compare(a, b);
    assert_eq!(flags.bits(), expected);
    assert_eq!(flags.bits().count_ones(), 1);
}

#[test]
fn test_greater_branch_is_reachable() {
    let flags = Flags::compare(9, 3);
    assert!(flags.greater());
    assert!(!flags.less());
    assert!(!flags.equal());
}

#[test]
fn test_default_has_no_flag() {
    let flags = Flags::default();
    assert_eq!(flags.bits(), 0);
    assert!(!flags.equal());
    assert!(!flags.less());
    assert!(!flags.greater());
}

#[test]
fn test_flags_display() {
    assert_eq!(Flags::default().to_string(), "---");
    assert_eq!(Flags::compare(1, 2).to_string(), "L--");
    assert_eq!(Flags::compare(2, 1).to_string(), "-G-");
    assert_eq!(Flags::compare(1, 1).to_string(), "--E");
}
