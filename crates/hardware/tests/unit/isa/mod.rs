//! ISA tests.
