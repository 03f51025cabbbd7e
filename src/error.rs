//! Crate-level error types.

use std::fmt;

/// Errors produced by the glide crate.
///
/// The behavior components themselves degrade silently by design; only the
/// options layer (file I/O and TOML parsing) is fallible.
#[derive(Debug)]
pub enum GlideError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GlideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GlideError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
