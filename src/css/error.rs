//! Stylesheet errors.

use thiserror::Error;

use crate::template::RenderError;

/// Error returned by [`Stylesheet`](super::Stylesheet) registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// A styling with this name is already registered.
    #[error("styling \"{name}\" already specified")]
    DuplicateStyling { name: String },

    /// No styling with this name is registered.
    #[error("styling \"{name}\" is not specified")]
    UnknownStyling { name: String },

    /// The caller supplied a value for a key reserved by instantiation.
    #[error("injection key \"{key}\" is reserved")]
    ReservedKeyConflict { key: String },

    /// A selector template could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_styling_display() {
        let err = StylesheetError::DuplicateStyling {
            name: "cardHeader".into(),
        };
        assert_eq!(err.to_string(), "styling \"cardHeader\" already specified");
    }

    #[test]
    fn test_render_error_is_transparent() {
        let err = StylesheetError::from(RenderError::MissingInjection {
            key: "modifier".into(),
        });
        assert_eq!(err.to_string(), "injection \"modifier\" not provided");
    }

    #[test]
    fn test_reserved_key_display() {
        let err = StylesheetError::ReservedKeyConflict { key: "self".into() };
        assert!(err.to_string().contains("self"));
    }
}
