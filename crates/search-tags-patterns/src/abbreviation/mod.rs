//! Abbreviation lexing, validation and pattern building.

mod builder;
mod lexer;
#[cfg(test)]
pub(crate) mod test_support;
mod token;
mod validator;

use crate::errors::AbbreviationError;

pub use builder::{ATTRIBUTE_PREFIX, build_pattern, escape_class_name};
pub use lexer::lex;
pub use token::Token;
pub use validator::check_tokens;

/// Lex and validate an abbreviation into its token sequence.
///
/// # Errors
/// Returns the first [`AbbreviationError`] raised by the lexer or validator.
pub fn parse_abbreviation(abbreviation: &str) -> Result<Vec<Token>, AbbreviationError> {
    check_tokens(lex(abbreviation)?)
}

/// Translate an abbreviation such as `.btn.primary` into a `className` search
/// pattern.
///
/// # Errors
/// Returns [`AbbreviationError`] when the abbreviation cannot be lexed or its
/// tokens are empty or out of order. No partial pattern is produced.
///
/// # Examples
/// ```
/// use search_tags_patterns::translate;
/// assert_eq!(
///     translate(".foo.bar").ok().as_deref(),
///     Some("className=(?=.*?foo)(?=.*?bar).*")
/// );
/// ```
pub fn translate(abbreviation: &str) -> Result<String, AbbreviationError> {
    let tokens = parse_abbreviation(abbreviation)?;
    let pattern = build_pattern(&tokens);
    tracing::debug!(abbreviation, %pattern, tokens = tokens.len(), "translated abbreviation");
    Ok(pattern)
}
