//! Unified error type for deck generation.
use thiserror::Error;

/// Main error type for ghostdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Error raised while assembling, serializing or reading back the presentation package
    #[error("Presentation error: {0}")]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// The written file did not read back with the expected slide count
    #[error("Verification failed: wrote {written} slides, read back {read}")]
    Verify { written: usize, read: usize },
}

/// Result type for ghostdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::error::OoxmlError;
    use crate::ooxml::opc::error::OpcError;

    fn save_failure() -> Result<()> {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        Err(OoxmlError::Io(io))?;
        Ok(())
    }

    #[test]
    fn test_ooxml_error_converts_with_question_mark() {
        let err = save_failure().unwrap_err();
        assert!(matches!(err, Error::Ooxml(OoxmlError::Io(_))));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_opc_error_keeps_its_message() {
        let err: Error = OoxmlError::from(OpcError::InvalidPackUri("bad".to_string())).into();
        assert!(err.to_string().starts_with("Presentation error: "));
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_verify_message() {
        let err = Error::Verify { written: 5, read: 4 };
        assert_eq!(err.to_string(), "Verification failed: wrote 5 slides, read back 4");
    }
}
