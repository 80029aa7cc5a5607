//! Configuration for the LS-8 emulator.
//!
//! This module defines the settings that parameterize a run. It provides:
//! 1. **Defaults:** Canonical memory size and stack pointer reset value.
//! 2. **Structure:** A flat [`Config`] deserialized from JSON.
//! 3. **Validation:** Rejection of values the 8-bit machine cannot address.
//!
//! Use `Config::default()` for the canonical machine or [`Config::from_json`]
//! to override individual fields.

use serde::Deserialize;

use crate::common::constants::{MAX_MEMORY_SIZE, MEMORY_SIZE, STACK_POINTER_INIT};
use crate::common::{Result, VmError};

/// Default configuration values.
mod defaults {
    use super::{MEMORY_SIZE, STACK_POINTER_INIT};

    /// Main memory size in bytes (256).
    pub const fn memory_size() -> usize {
        MEMORY_SIZE
    }

    /// Stack pointer reset value (`0xF4`).
    pub const fn initial_sp() -> u8 {
        STACK_POINTER_INIT
    }
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory_size, 256);
/// assert_eq!(config.initial_sp, 0xF4);
///
/// let config = Config::from_json(r#"{ "trace_instructions": true }"#).unwrap();
/// assert!(config.trace_instructions);
/// assert_eq!(config.memory_size, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Size of main memory in bytes; must be in `1..=256`.
    #[serde(default = "defaults::memory_size")]
    pub memory_size: usize,

    /// Value the stack pointer (`R7`) holds when the machine starts; at most `memory_size`.
    #[serde(default = "defaults::initial_sp")]
    pub initial_sp: u8,

    /// Emit a trace line (PC, instruction bytes, registers, disassembly) for every cycle.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_size: defaults::memory_size(),
            initial_sp: defaults::initial_sp(),
            trace_instructions: false,
        }
    }
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// [`VmError::Config`] if the text is not valid JSON for this structure or
    /// a value fails [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| VmError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a machine that can run.
    ///
    /// # Errors
    ///
    /// [`VmError::Config`] if `memory_size` is zero or larger than 256 bytes,
    /// or if `initial_sp` lies past the end of memory.
    pub fn validate(&self) -> Result<()> {
        if self.memory_size == 0 || self.memory_size > MAX_MEMORY_SIZE {
            return Err(VmError::Config(format!(
                "memory_size must be between 1 and {MAX_MEMORY_SIZE}, got {}",
                self.memory_size
            )));
        }
        if self.initial_sp as usize > self.memory_size {
            return Err(VmError::Config(format!(
                "initial_sp {:#04x} is past the end of a {}-byte memory",
                self.initial_sp, self.memory_size
            )));
        }
        Ok(())
    }
}
