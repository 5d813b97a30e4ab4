//! Error types shared by the abbreviation lexing, validation and matching
//! stages.

use thiserror::Error;

/// Errors surfaced while translating an abbreviation into a search pattern.
///
/// Every stage reports failures through this type and the pipeline returns the
/// first one unchanged.
///
/// # Examples
/// ```
/// use search_tags_patterns::AbbreviationError;
/// let err = AbbreviationError::InvalidAbbreviation { position: Some(4) };
/// assert_eq!(err.to_string(), "invalid abbreviation at byte 4 (zero-based)");
/// assert_eq!(AbbreviationError::EmptyAbbreviation.to_string(), "empty abbreviation");
/// ```
#[derive(Debug, Error)]
pub enum AbbreviationError {
    /// No grammar rule recognizes the input at `position`.
    ///
    /// The position is a zero-based byte offset when the lexer rejected the
    /// input and `None` when the validator rejected a token sequence.
    #[error("invalid abbreviation{}", format_position(.position))]
    InvalidAbbreviation {
        /// Byte offset where lexing stopped, when known.
        position: Option<usize>,
    },
    /// The abbreviation produced no tokens.
    #[error("empty abbreviation")]
    EmptyAbbreviation,
    /// A lone token of a kind that may not start an abbreviation.
    #[error("tokens are in the wrong order")]
    WrongOrder,
    /// The class matcher could not be compiled.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl AbbreviationError {
    /// Returns `true` for errors caused by the shape of the abbreviation
    /// rather than by regex compilation limits.
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, Self::Regex(_))
    }
}

fn format_position(position: &Option<usize>) -> String {
    position.map_or_else(String::new, |at| format!(" at byte {at} (zero-based)"))
}

pub(crate) fn invalid_at(position: usize) -> AbbreviationError {
    AbbreviationError::InvalidAbbreviation {
        position: Some(position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_invalid_abbreviation_with_position() {
        assert_eq!(
            invalid_at(0).to_string(),
            "invalid abbreviation at byte 0 (zero-based)"
        );
    }

    #[test]
    fn formats_invalid_abbreviation_without_position() {
        let err = AbbreviationError::InvalidAbbreviation { position: None };
        assert_eq!(err.to_string(), "invalid abbreviation");
    }

    #[test]
    fn formats_wrong_order() {
        assert_eq!(
            AbbreviationError::WrongOrder.to_string(),
            "tokens are in the wrong order"
        );
    }

    #[test]
    fn forwards_regex_error_display() {
        let err = AbbreviationError::Regex(regex::Error::Syntax("bad".into()));
        assert_eq!(
            err.to_string(),
            regex::Error::Syntax("bad".into()).to_string()
        );
        assert!(!err.is_syntax_error());
        assert!(AbbreviationError::EmptyAbbreviation.is_syntax_error());
    }
}
