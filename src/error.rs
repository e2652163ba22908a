//! Crate-level error types.

use std::fmt;

/// Errors produced by the algoviz crate.
#[derive(Debug)]
pub enum VizError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Step file JSON could not be parsed.
    StepParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::StepParse(msg) => write!(f, "step file parse error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
