//! Fold validated tokens into a `className` search pattern.

use super::token::Token;

/// Literal that anchors every generated pattern on the attribute name.
pub const ATTRIBUTE_PREFIX: &str = "className=";

const META_CHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escape regex metacharacters in a class name for literal matching.
///
/// Only `. * + ? ^ $ { } ( ) | [ ] \` are escaped; `-` and `_` are kept
/// as-is so the output stays readable in editor search fields.
///
/// # Examples
/// ```
/// use search_tags_patterns::escape_class_name;
/// assert_eq!(escape_class_name("foo+bar"), r"foo\+bar");
/// assert_eq!(escape_class_name("nav-item"), "nav-item");
/// ```
#[must_use]
pub fn escape_class_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if META_CHARACTERS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build the search pattern for a validated token sequence.
///
/// Each class becomes a `(?=.*?name)` lookahead, in input order, and the
/// result is wrapped as `className=<lookaheads>.*`. Tag and id atoms do not
/// contribute to the pattern; they are accepted by the grammar but no pattern
/// fragment exists for them yet.
///
/// # Examples
/// ```
/// use search_tags_patterns::{build_pattern, Token};
/// let pattern = build_pattern(&[Token::Class("foo".into()), Token::Class("bar".into())]);
/// assert_eq!(pattern, "className=(?=.*?foo)(?=.*?bar).*");
/// ```
#[must_use]
pub fn build_pattern(tokens: &[Token]) -> String {
    let fragment = tokens.iter().fold(String::new(), |mut acc, token| {
        match token {
            Token::Class(name) => {
                acc.push_str("(?=.*?");
                acc.push_str(&escape_class_name(name));
                acc.push(')');
            }
            Token::Tag(_) | Token::Id(_) => {}
        }
        acc
    });
    format!("{ATTRIBUTE_PREFIX}{fragment}.*")
}
