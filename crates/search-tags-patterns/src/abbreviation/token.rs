//! Selector atoms recognized by the abbreviation grammar.

use std::fmt;

/// One selector atom of an abbreviation.
///
/// The lexer only produces [`Token::Class`] today. `Tag` and `Id` are part of
/// the grammar accepted by [`check_tokens`](crate::check_tokens) but have no
/// lexing rule yet.
///
/// # Examples
/// ```
/// use search_tags_patterns::Token;
/// let token = Token::Class("btn".into());
/// assert_eq!(token.name(), "btn");
/// assert_eq!(token.to_string(), ".btn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Bare element name such as `div`.
    Tag(String),
    /// `#name` atom.
    Id(String),
    /// `.name` atom with `name` drawn from `[a-zA-Z0-9_-]`.
    Class(String),
}

impl Token {
    /// The atom's name without its sigil.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Tag(name) | Self::Id(name) | Self::Class(name) => name,
        }
    }

    /// Whether the token may open an abbreviation.
    #[must_use]
    pub(crate) fn may_lead(&self) -> bool {
        match self {
            Self::Tag(_) | Self::Id(_) | Self::Class(_) => true,
        }
    }

    /// Whether the token may follow another token.
    #[must_use]
    pub(crate) fn may_follow(&self) -> bool {
        match self {
            Self::Id(_) | Self::Class(_) => true,
            Self::Tag(_) => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => f.write_str(name),
            Self::Id(name) => write!(f, "#{name}"),
            Self::Class(name) => write!(f, ".{name}"),
        }
    }
}
