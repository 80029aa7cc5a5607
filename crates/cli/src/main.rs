//! LS-8 emulator CLI.
//!
//! This binary loads an LS-8 program and runs it. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overridden by the JSON file named in `LS8_CONFIG`.
//! 2. **Loading:** Reads the program text given as the only positional argument.
//! 3. **Execution:** Runs until `HLT`, printing `PRN` output to stdout.
//! 4. **Reporting:** On a fatal error, prints the error and machine state to stderr and exits non-zero.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::{env, fs};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8_core::sim::loader;
use ls8_core::{Config, Machine, VmError};

/// Environment variable naming an optional JSON configuration file.
const CONFIG_ENV: &str = "LS8_CONFIG";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit computer emulator",
    long_about = "Run an LS-8 program.\n\nThe program file holds one 8-bit binary literal per line; `#` starts a comment.\n\nSet LS8_CONFIG to a JSON file to override memory_size, initial_sp, or trace_instructions.\nLog verbosity follows RUST_LOG.\n\nExample:\n  ls8 programs/mult.ls8"
)]
struct Cli {
    /// Program file to load and run.
    program: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = load_config();
    let trace = config.as_ref().is_ok_and(|c| c.trace_instructions);
    init_tracing(trace);

    // A missing program takes precedence over a configuration error.
    let result = loader::read_program(&cli.program)
        .and_then(|image| config.and_then(|config| run(&image, &config)));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Reads the configuration named by `LS8_CONFIG`, or the defaults when unset.
fn load_config() -> Result<Config, VmError> {
    let Some(path) = env::var_os(CONFIG_ENV) else {
        return Ok(Config::default());
    };
    let text = fs::read_to_string(&path).map_err(|e| {
        VmError::Config(format!("cannot read {}: {e}", Path::new(&path).display()))
    })?;
    Config::from_json(&text)
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output when instruction tracing is enabled.
fn init_tracing(trace: bool) {
    let default_level = if trace { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Runs a parsed program to completion and reports the outcome.
///
/// If execution fails, the machine state at the failing instruction is
/// printed to stderr.
fn run(image: &[u8], config: &Config) -> Result<(), VmError> {
    let mut machine = Machine::new(config, io::stdout().lock())?;
    machine.load_program(image)?;

    match machine.run() {
        Ok(stats) => {
            machine.output_mut().flush()?;
            tracing::debug!("{}", stats.summary());
            Ok(())
        }
        Err(e) => {
            let _ = machine.output_mut().flush();
            eprintln!("{}", machine.dump_state());
            Err(e)
        }
    }
}
