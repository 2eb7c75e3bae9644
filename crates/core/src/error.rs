//! Errors for the data model.

/// Failure to parse a model value from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Text did not name any known value
    #[error("unknown {kind}: {value:?}")]
    Unknown {
        /// What was being parsed
        kind: &'static str,
        /// The offending input
        value: String,
    },
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        ParseError::Unknown {
            kind,
            value: value.to_string(),
        }
    }
}
