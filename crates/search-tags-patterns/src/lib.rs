//! Translate Emmet-style class abbreviations into `className` search patterns.
//!
//! An abbreviation such as `.btn.primary` is lexed into selector tokens,
//! validated against the ordering rules, and folded into a pattern of the form
//! `className=(?=.*?btn)(?=.*?primary).*` suitable for editor regex search.
//! [`ClassMatcher`] evaluates the same query natively for callers that cannot
//! run lookahead regexes.

mod abbreviation;
mod errors;
mod matcher;

pub use abbreviation::{
    ATTRIBUTE_PREFIX, Token, build_pattern, check_tokens, escape_class_name, lex,
    parse_abbreviation, translate,
};
pub use errors::AbbreviationError;
pub use matcher::{ClassMatcher, compile_matcher};
