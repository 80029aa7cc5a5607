//! # Main Memory Tests
//!
//! Bounds checking, bulk loading, and hex dumps.

use ls8_core::{Memory, VmError};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_memory_new_is_zero_filled() {
    let memory = Memory::new(256);
    assert_eq!(memory.len(), 256);
    assert!(!memory.is_empty());
    assert!((0..256).all(|addr| memory.read(addr).unwrap() == 0));
}

#[test]
fn test_memory_write_then_read() {
    let mut memory = Memory::new(256);
    memory.write(0x10, 0xAB).unwrap();
    assert_eq!(memory.read(0x10).unwrap(), 0xAB);
    assert_eq!(memory.read(0x11).unwrap(), 0);
}

#[rstest]
#[case(0)]
#[case(0x7F)]
#[case(0xFF)]
fn test_memory_accepts_addresses_in_range(#[case] addr: usize) {
    let mut memory = Memory::new(256);
    memory.write(addr, 1).unwrap();
    assert_eq!(memory.read(addr).unwrap(), 1);
}

#[rstest]
#[case(256)]
#[case(257)]
#[case(10_000)]
fn test_memory_read_out_of_bounds(#[case] addr: usize) {
    let memory = Memory::new(256);
    match memory.read(addr) {
        Err(VmError::OutOfBounds { addr: a, size }) => {
            assert_eq!(a, addr);
            assert_eq!(size, 256);
        }
        other => panic!("expected OutOfBounds, got {other:?}"),
    }
}

#[test]
fn test_memory_write_out_of_bounds_changes_nothing() {
    let mut memory = Memory::new(16);
    let before = memory.clone();
    assert!(matches!(
        memory.write(16, 0xFF),
        Err(VmError::OutOfBounds { addr: 16, size: 16 })
    ));
    assert_eq!(memory, before);
}

#[test]
fn test_memory_load_places_image_at_zero() {
    let mut memory = Memory::new(8);
    memory.load(&[1, 2, 3]).unwrap();
    let cells: Vec<u8> = (0..8).map(|addr| memory.read(addr).unwrap()).collect();
    assert_eq!(cells, [1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn test_memory_load_exact_fit() {
    let mut memory = Memory::new(4);
    memory.load(&[9, 9, 9, 9]).unwrap();
    assert!((0..4).all(|addr| memory.read(addr).unwrap() == 9));
}

#[test]
fn test_memory_load_too_large_writes_nothing() {
    let mut memory = Memory::new(4);
    let err = memory.load(&[1, 2, 3, 4, 5]).unwrap_err();
    assert!(matches!(err, VmError::OutOfBounds { addr: 4, size: 4 }));
    assert_eq!(memory, Memory::new(4));
}

#[test]
fn test_memory_peek_never_fails() {
    let memory = Memory::new(2);
    assert_eq!(memory.peek(1), Some(0));
    assert_eq!(memory.peek(2), None);
}

#[test]
fn test_memory_dump_rows_of_sixteen() {
    let mut memory = Memory::new(256);
    memory.load(&(0..20).collect::<Vec<u8>>()).unwrap();
    assert_eq!(
        memory.dump(0, 20),
        "00: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\n10: 10 11 12 13"
    );
}

#[test]
fn test_memory_dump_clips_to_end() {
    let mut memory = Memory::new(256);
    memory.write(0xFF, 0xEE).unwrap();
    assert_eq!(memory.dump(0xFE, 10), "FE: 00 EE");
    assert_eq!(memory.dump(0x200, 4), "");
}
