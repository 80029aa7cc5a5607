//! # General-Purpose Register Tests
//!
//! Tests for the LS-8 register file.

use ls8_core::core::arch::gpr::Gpr;
use ls8_core::isa::Reg;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for reg in Reg::all() {
        assert_eq!(gpr.read(reg), 0);
    }
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for reg in Reg::all() {
        gpr.write(reg, reg.raw() * 10);
    }
    for reg in Reg::all() {
        assert_eq!(gpr.read(reg), reg.raw() * 10);
    }
}

#[test]
fn test_gpr_register_independence() {
    let mut gpr = Gpr::new();
    gpr.write(Reg::R1, 111);
    gpr.write(Reg::R2, 222);
    assert_eq!(gpr.read(Reg::R1), 111);
    assert_eq!(gpr.read(Reg::R2), 222);
    assert_eq!(gpr.read(Reg::R3), 0);
}

#[test]
fn test_gpr_sp_is_r7() {
    let mut gpr = Gpr::new();
    gpr.set_sp(0xF4);
    assert_eq!(gpr.read(Reg::SP), 0xF4);
    assert_eq!(gpr.values()[7], 0xF4);
    gpr.write(Reg::SP, 0x10);
    assert_eq!(gpr.sp(), 0x10);
}

#[test]
fn test_gpr_dump_format() {
    let mut gpr = Gpr::new();
    gpr.write(Reg::R0, 0xAB);
    gpr.set_sp(0xF4);
    assert_eq!(
        gpr.dump(),
        "R0=AB R1=00 R2=00 R3=00 R4=00 R5=00 R6=00 R7=F4"
    );
}

#[test]
fn test_reg_validation() {
    assert_eq!(Reg::new(0), Some(Reg::R0));
    assert_eq!(Reg::new(7), Some(Reg::SP));
    assert_eq!(Reg::new(8), None);
    assert_eq!(Reg::new(255), None);
    assert_eq!(Reg::all().count(), 8);
    assert_eq!(Reg::R5.to_string(), "R5");
}
