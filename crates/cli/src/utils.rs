use std::path::PathBuf;

use anyhow::{bail, Result};

/// Split a `file:line` location into its parts; the line is optional.
pub fn parse_location(location: &str) -> (PathBuf, Option<u32>) {
    if let Some((path, line)) = location.rsplit_once(':') {
        if let Ok(line) = line.parse::<u32>() {
            return (PathBuf::from(path), Some(line));
        }
    }
    (PathBuf::from(location), None)
}

/// Parse a `from:to` line range.
pub fn parse_range(range: &str) -> Result<(u32, u32)> {
    if let Some((from, to)) = range.split_once(':') {
        if let (Ok(from), Ok(to)) = (from.parse(), to.parse()) {
            return Ok((from, to));
        }
    }
    bail!("invalid line range '{range}', expected from:to");
}
