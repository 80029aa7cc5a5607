use super::builder::ProgramBuilder;
use super::harness::TestContext;
use ls8_core::isa::opcodes::*;

#[test]
fn builder_emits_opcode_then_operands() {
    let bytes = ProgramBuilder::new().ldi(0, 8).prn(0).hlt().build();
    assert_eq!(bytes, vec![LDI, 0, 8, PRN, 0, HLT]);
}

#[test]
fn builder_here_tracks_next_address() {
    let builder = ProgramBuilder::new().ldi(1, 2).push(1);
    assert_eq!(builder.here(), 5);
}

#[test]
fn builder_org_pads_with_zeroes() {
    let bytes = ProgramBuilder::new().hlt().org(4).ret().build();
    assert_eq!(bytes, vec![HLT, 0, 0, 0, RET]);
}

#[test]
fn builder_source_is_one_binary_byte_per_line() {
    let source = ProgramBuilder::new().ldi(0, 8).to_source();
    let lines: Vec<&str> = source
        .lines()
        .filter(|l| !l.starts_with('#') && !l.is_empty())
        .collect();
    assert_eq!(lines, vec!["10000010 # 0x00", "00000000 # 0x01", "00001000 # 0x02"]);
}

#[test]
fn harness_captures_output() {
    let program = ProgramBuilder::new().ldi(3, 42).prn(3).hlt().build();
    let mut ctx = TestContext::new().load(&program);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output_lines(), vec!["42"]);
    assert_eq!(ctx.reg(3), 42);
}
