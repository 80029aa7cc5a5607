//! Program Loader.
//!
//! This module reads LS-8 program text into a memory image. It performs:
//! 1. **Comment stripping:** Everything from `#` to the end of a line is ignored.
//! 2. **Line filtering:** Blank and comment-only lines are skipped.
//! 3. **Parsing:** Each remaining token is a base-2 literal of up to eight digits, one byte per line.

use std::fs;
use std::path::Path;

use crate::common::{Result, VmError};

/// Maximum number of binary digits in one program byte.
const BYTE_DIGITS: usize = 8;

/// Reads and parses a program file.
///
/// # Arguments
///
/// * `path` - Path to the program text.
///
/// # Returns
///
/// The program bytes in load order.
///
/// # Errors
///
/// * [`VmError::ProgramNotFound`] if the file cannot be read.
/// * [`VmError::MalformedProgram`] if a line is not a binary byte literal.
pub fn read_program(path: &Path) -> Result<Vec<u8>> {
    let source = fs::read_to_string(path).map_err(|source| VmError::ProgramNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

/// Parses program text into bytes.
///
/// # Errors
///
/// [`VmError::MalformedProgram`] naming the first line whose token is not a
/// base-2 literal of one to eight digits.
pub fn parse_program(source: &str) -> Result<Vec<u8>> {
    let mut image = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let token = line.split_once('#').map_or(line, |(code, _)| code).trim();
        if token.is_empty() {
            continue;
        }
        image.push(parse_byte(token).ok_or_else(|| VmError::MalformedProgram {
            line: idx + 1,
            text: token.to_string(),
        })?);
    }
    Ok(image)
}

fn parse_byte(token: &str) -> Option<u8> {
    let is_binary = token.len() <= BYTE_DIGITS && token.bytes().all(|b| b == b'0' || b == b'1');
    if !is_binary {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}
