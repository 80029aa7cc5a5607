//! Whole-run helpers: load a program into a fresh machine and run it.

use std::io::Write;
use std::path::Path;

use crate::common::Result;
use crate::config::Config;
use crate::core::Machine;
use crate::sim::loader;
use crate::stats::RunStats;

/// Loads the program at `path` and runs it until it halts.
///
/// The file is read and parsed before the machine is built, so a missing
/// file never touches memory.
///
/// # Errors
///
/// Any loader, configuration, or execution error.
pub fn run_file<O: Write>(path: &Path, config: &Config, output: O) -> Result<RunStats> {
    let image = loader::read_program(path)?;
    run_image(&image, config, output)
}

/// Parses program text and runs it until it halts.
///
/// # Errors
///
/// Any loader, configuration, or execution error.
pub fn run_source<O: Write>(source: &str, config: &Config, output: O) -> Result<RunStats> {
    let image = loader::parse_program(source)?;
    run_image(&image, config, output)
}

fn run_image<O: Write>(image: &[u8], config: &Config, output: O) -> Result<RunStats> {
    let mut machine = Machine::new(config, output)?;
    machine.load_program(image)?;
    let stats = machine.run()?;
    machine.output_mut().flush()?;
    Ok(stats)
}
