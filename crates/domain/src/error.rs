//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PortfolioError`] via `#[from]` (or an explicit `From` impl) when the
//! error has to cross a port boundary.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// The preference store could not be read or written.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A DOM mutation failed.
    #[error("dom error")]
    Dom(#[from] DomError),

    /// A configured value violates a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A class name or key that must be non-empty was empty or blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A class name contained whitespace, which a class list cannot hold.
    #[error("{field} must be a single class name, got {value:?}")]
    NotAClassName {
        /// Which contract field.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

/// A DOM mutation that the browser refused.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// Adding or removing a class failed.
    #[error("failed to update class {class:?}: {reason}")]
    ClassList {
        /// The class being added or removed.
        class: String,
        /// Browser-provided description.
        reason: String,
    },

    /// Setting an inline style property failed.
    #[error("failed to set style property {property:?}: {reason}")]
    Style {
        /// CSS property name (e.g. `background-image`).
        property: &'static str,
        /// Browser-provided description.
        reason: String,
    },
}

/// A string that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct UnknownThemeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_theme_with_value() {
        let err = UnknownThemeError("sepia".to_string());
        assert_eq!(
            err.to_string(),
            "unknown theme \"sepia\", expected \"light\" or \"dark\""
        );
    }

    #[test]
    fn should_display_class_list_error() {
        let err = DomError::ClassList {
            class: "active".to_string(),
            reason: "InvalidCharacterError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to update class \"active\": InvalidCharacterError"
        );
    }

    #[test]
    fn should_convert_dom_error_into_portfolio_error() {
        let err: PortfolioError = DomError::Style {
            property: "background-image",
            reason: "read-only".to_string(),
        }
        .into();
        assert!(matches!(err, PortfolioError::Dom(DomError::Style { .. })));
    }

    #[test]
    fn should_display_empty_field_error() {
        let err = ValidationError::EmptyField("storage_key");
        assert_eq!(err.to_string(), "storage_key must not be empty");
    }

    #[test]
    fn should_keep_storage_source() {
        let io = std::io::Error::other("quota exceeded");
        let err = PortfolioError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "quota exceeded");
    }
}
