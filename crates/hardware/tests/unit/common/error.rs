//! # Error Tests
//!
//! Display text and exit-code mapping for every error variant.

use std::io;
use std::path::PathBuf;

use ls8_core::VmError;
use rstest::rstest;

fn not_found() -> VmError {
    VmError::ProgramNotFound {
        path: PathBuf::from("missing.ls8"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    }
}

#[test]
fn test_program_not_found_exits_with_two() {
    assert_eq!(not_found().exit_code(), 2);
}

#[rstest]
#[case(VmError::UnknownInstruction { opcode: 0, addr: 0 })]
#[case(VmError::InvalidRegister { index: 9, addr: 4 })]
#[case(VmError::OutOfBounds { addr: 300, size: 256 })]
#[case(VmError::MalformedProgram { line: 3, text: "2".into() })]
#[case(VmError::Config("bad".into()))]
#[case(VmError::Output(io::Error::other("closed")))]
fn test_other_errors_exit_with_one(#[case] err: VmError) {
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_program_not_found_message_names_path() {
    let msg = not_found().to_string();
    assert!(msg.contains("missing.ls8"), "{msg}");
}

#[test]
fn test_unknown_instruction_message() {
    let err = VmError::UnknownInstruction {
        opcode: 0b1111_0000,
        addr: 0x12,
    };
    assert_eq!(
        err.to_string(),
        "unknown instruction 0b11110000 at address 0x12"
    );
}

#[test]
fn test_invalid_register_message() {
    let err = VmError::InvalidRegister { index: 8, addr: 3 };
    assert_eq!(
        err.to_string(),
        "invalid register index 8 in instruction at address 0x03"
    );
}

#[test]
fn test_out_of_bounds_message() {
    let err = VmError::OutOfBounds {
        addr: 0x100,
        size: 256,
    };
    assert_eq!(
        err.to_string(),
        "memory address 0x100 is out of bounds (memory size 256)"
    );
}

#[test]
fn test_malformed_program_message() {
    let err = VmError::MalformedProgram {
        line: 7,
        text: "1020".into(),
    };
    assert_eq!(
        err.to_string(),
        "line 7: '1020' is not an 8-bit binary literal"
    );
}

#[test]
fn test_program_not_found_keeps_io_source() {
    use std::error::Error;
    let err = not_found();
    assert!(err.source().is_some());
}
