use crate::domain::model::Mass;
use crate::utils::error::{FuelError, Result};
use std::io::Read;

/// Reads all of `reader` and parses it with [`parse_mass_lines`].
pub fn parse_masses<R: Read>(mut reader: R) -> Result<Vec<Mass>> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| FuelError::FileUnreadable {
            path: "<input>".into(),
            source,
        })?;
    parse_mass_lines(&content)
}

/// Parses one decimal integer per line.
///
/// Only whitespace around the whole input is ignored, so a trailing newline
/// is fine. Every line in between must be exactly an integer: blank input,
/// blank lines and per-line padding (including a `\r` from CRLF endings)
/// fail the whole read.
pub fn parse_mass_lines(content: &str) -> Result<Vec<Mass>> {
    content
        .trim()
        .split('\n')
        .enumerate()
        .map(|(idx, value)| {
            value
                .parse::<Mass>()
                .map_err(|source| FuelError::MalformedInteger {
                    line: idx + 1,
                    value: value.to_string(),
                    source,
                })
        })
        .collect()
}
