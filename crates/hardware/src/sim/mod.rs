//! Program loading and whole-run entry points.
//!
//! Provides the text program loader and helpers that load a program into a
//! fresh machine and run it to completion.

pub mod loader;
pub mod simulator;

pub use simulator::{run_file, run_source};
