//! Template rendering errors.

use thiserror::Error;

/// Error returned when a template cannot be rendered.
///
/// Rendering never yields partial output: on error the caller only gets this value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The data source has no value for an injection key.
    #[error("injection \"{key}\" not provided")]
    MissingInjection { key: String },

    /// Serialized render data could not be used as an injection map.
    #[error("invalid render data: {message}")]
    InvalidData { message: String },
}

impl RenderError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        RenderError::MissingInjection { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_injection_display() {
        let err = RenderError::missing("title");
        assert_eq!(err.to_string(), "injection \"title\" not provided");
    }

    #[test]
    fn test_invalid_data_display() {
        let err = RenderError::InvalidData {
            message: "expected an object".into(),
        };
        assert!(err.to_string().contains("expected an object"));
    }
}
