//! Abbreviation lexer converting input strings into selector tokens.

use crate::errors::{AbbreviationError, invalid_at};

use super::token::Token;

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Split an abbreviation into selector tokens.
///
/// Each step consumes the longest prefix of the form `.name`; the whole input
/// must decompose into such atoms. An empty input yields an empty sequence.
///
/// # Errors
/// Returns [`AbbreviationError::InvalidAbbreviation`] carrying the byte offset
/// of the first position where no atom could be read.
///
/// # Examples
/// ```
/// use search_tags_patterns::{lex, Token};
/// let tokens = lex(".foo.bar").expect("class atoms should lex");
/// assert_eq!(tokens, vec![Token::Class("foo".into()), Token::Class("bar".into())]);
/// assert!(lex("#id").is_err());
/// ```
pub fn lex(input: &str) -> Result<Vec<Token>, AbbreviationError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        if b != b'.' {
            return Err(invalid_at(pos));
        }
        let start = pos + 1;
        let end = bytes
            .get(start..)
            .map_or(start, |rest| {
                start + rest.iter().take_while(|&&c| is_name_byte(c)).count()
            });
        if end == start {
            return Err(invalid_at(pos));
        }
        let name = input.get(start..end).ok_or_else(|| invalid_at(start))?;
        tokens.push(Token::Class(name.to_owned()));
        pos = end;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbreviation::test_support::{lex_err_position, lex_ok};
    use rstest::rstest;

    #[test]
    fn empty_input_lexes_to_no_tokens() {
        assert!(lex_ok("").is_empty());
    }

    #[test]
    fn tokenises_consecutive_class_atoms() {
        assert_eq!(
            lex_ok(".foo.bar-baz._q1"),
            vec![
                Token::Class("foo".into()),
                Token::Class("bar-baz".into()),
                Token::Class("_q1".into()),
            ]
        );
    }

    #[test]
    fn keeps_duplicates_in_input_order() {
        assert_eq!(
            lex_ok(".b.a.b"),
            vec![
                Token::Class("b".into()),
                Token::Class("a".into()),
                Token::Class("b".into()),
            ]
        );
    }

    #[rstest]
    #[case("#id", 0)]
    #[case("div", 0)]
    #[case(".", 0)]
    #[case("..foo", 0)]
    #[case(".foo#bar", 4)]
    #[case(".foo.", 4)]
    #[case(".foo bar", 4)]
    #[case(".foo+bar", 4)]
    #[case(".café", 4)]
    #[case(" .foo", 0)]
    fn reports_first_unrecognised_offset(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(lex_err_position(input), Some(expected));
    }
}
