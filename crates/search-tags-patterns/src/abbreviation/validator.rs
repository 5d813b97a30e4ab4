//! Ordering rules for lexed token sequences.

use crate::errors::AbbreviationError;

use super::token::Token;

/// Check that a token sequence forms a valid abbreviation.
///
/// The first token may be a tag, id or class; every later token must be a
/// class or id. The sequence is returned unchanged on success.
///
/// # Errors
/// - [`AbbreviationError::EmptyAbbreviation`] for an empty sequence.
/// - [`AbbreviationError::WrongOrder`] for a lone token that may not lead.
/// - [`AbbreviationError::InvalidAbbreviation`] for any other ordering
///   violation.
///
/// # Examples
/// ```
/// use search_tags_patterns::{check_tokens, AbbreviationError, Token};
/// let tokens = vec![Token::Tag("div".into()), Token::Class("card".into())];
/// assert_eq!(check_tokens(tokens.clone()).ok(), Some(tokens));
/// assert!(matches!(
///     check_tokens(Vec::new()),
///     Err(AbbreviationError::EmptyAbbreviation)
/// ));
/// ```
pub fn check_tokens(tokens: Vec<Token>) -> Result<Vec<Token>, AbbreviationError> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(AbbreviationError::EmptyAbbreviation);
    };
    if first.may_lead() && rest.iter().all(Token::may_follow) {
        return Ok(tokens);
    }
    if rest.is_empty() {
        return Err(AbbreviationError::WrongOrder);
    }
    Err(AbbreviationError::InvalidAbbreviation { position: None })
}
