//! Importer error types.

/// Errors raised while validating and importing a network document.
///
/// Every variant is fatal to the import: the caller never receives a
/// partially built network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    /// Structural mismatch: wrong type, missing required field, malformed
    /// array shape, or an unusable station code. The message carries the
    /// stop and line codes involved where they are known.
    #[error("invalid network data: {0}")]
    Schema(String),

    /// An adjacent stop pair has no derivable travel cost: no usable
    /// `time`, `dist`, or `coords`.
    #[error("no way to determine the time it takes to travel from \"{from}\" to \"{to}\" on line {line}")]
    MissingCost {
        /// Code of the stop travelled from.
        from: String,
        /// Code of the stop travelled to.
        to: String,
        /// Label of the line the stops belong to.
        line: String,
    },
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Schema(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ImportError::Schema("missing field `version`".into());
        assert_eq!(err.to_string(), "invalid network data: missing field `version`");

        let err = ImportError::MissingCost {
            from: "SVW".into(),
            to: "XSG".into(),
            line: "EXP (Express)".into(),
        };
        assert!(err.to_string().contains("\"SVW\""));
        assert!(err.to_string().contains("\"XSG\""));
        assert!(err.to_string().contains("EXP (Express)"));
    }
}
