//! Crate-level error types.

use std::fmt;

/// Errors produced by the lookout crate.
///
/// Camera geometry never fails with an error: out-of-range or degenerate
/// operations report `false` and leave state untouched. Only file-backed
/// configuration and replay scripts surface errors.
#[derive(Debug)]
pub enum LookoutError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but break a camera or gesture invariant.
    InvalidOptions(String),
    /// Replay script could not be parsed.
    Script(String),
}

impl fmt::Display for LookoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Script(msg) => write!(f, "script error: {msg}"),
        }
    }
}

impl std::error::Error for LookoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LookoutError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = LookoutError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: missing preset");
    }

    #[test]
    fn parse_errors_have_no_source() {
        let err = LookoutError::Script("expected `[`".into());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "script error: expected `[`");
    }

    #[test]
    fn invalid_options_name_the_field() {
        let err =
            LookoutError::InvalidOptions("camera.distance must be positive".into());
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "invalid options: camera.distance must be positive"
        );
    }
}
