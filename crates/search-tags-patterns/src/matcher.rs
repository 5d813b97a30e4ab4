//! Native evaluation of class-name queries against lines of text.
//!
//! The generated pattern relies on lookahead, which the `regex` crate does not
//! support. [`ClassMatcher`] answers the same question with a [`RegexSet`] of
//! literal class names applied to the text following the attribute prefix.

use regex::RegexSet;

use crate::abbreviation::{ATTRIBUTE_PREFIX, Token, build_pattern, parse_abbreviation};
use crate::errors::AbbreviationError;

/// A compiled abbreviation that tests lines for the presence of every class.
#[derive(Debug, Clone)]
pub struct ClassMatcher {
    class_names: Vec<String>,
    pattern: String,
    set: RegexSet,
}

impl ClassMatcher {
    /// Compile a matcher from a validated token sequence.
    ///
    /// # Errors
    /// Returns [`AbbreviationError::Regex`] when the class set exceeds the
    /// regex size limits.
    pub fn from_tokens(tokens: &[Token]) -> Result<Self, AbbreviationError> {
        let class_names: Vec<String> = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Class(name) => Some(name.clone()),
                Token::Tag(_) | Token::Id(_) => None,
            })
            .collect();
        let set = RegexSet::new(class_names.iter().map(|name| regex::escape(name)))?;
        Ok(Self {
            pattern: build_pattern(tokens),
            class_names,
            set,
        })
    }

    /// Class names the matcher requires, in abbreviation order.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// The lookahead search pattern equivalent to this matcher.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `line` carries the attribute prefix followed by every class.
    ///
    /// Class names must occur after the first `className=` on the line; text
    /// before it is ignored.
    ///
    /// # Examples
    /// ```
    /// use search_tags_patterns::compile_matcher;
    /// let matcher = compile_matcher(".btn.primary").expect("abbreviation should compile");
    /// assert!(matcher.is_match(r#"<a className="primary btn">"#));
    /// assert!(!matcher.is_match(r#"<a className="btn">"#));
    /// ```
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        let Some((_, tail)) = line.split_once(ATTRIBUTE_PREFIX) else {
            return false;
        };
        let tail = tail.split(['\n', '\r']).next().unwrap_or_default();
        self.set.matches(tail).matched_all()
    }
}

/// Translate an abbreviation and compile it into a [`ClassMatcher`].
///
/// # Errors
/// Returns [`AbbreviationError`] for invalid abbreviations or when the class
/// set cannot be compiled.
pub fn compile_matcher(abbreviation: &str) -> Result<ClassMatcher, AbbreviationError> {
    let tokens = parse_abbreviation(abbreviation)?;
    ClassMatcher::from_tokens(&tokens)
}
