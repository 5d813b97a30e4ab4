//! Test helpers for asserting lexer and validator outcomes.
use super::lexer::lex;
use super::token::Token;
use super::validator::check_tokens;
use crate::errors::AbbreviationError;

pub(crate) fn lex_ok(input: &str) -> Vec<Token> {
    match lex(input) {
        Ok(tokens) => tokens,
        Err(err) => panic!("abbreviation should lex: {err}"),
    }
}

pub(crate) fn lex_err_position(input: &str) -> Option<usize> {
    match lex(input) {
        Ok(tokens) => panic!("lexing should fail, got {tokens:?}"),
        Err(AbbreviationError::InvalidAbbreviation { position }) => position,
        Err(other) => panic!("expected invalid abbreviation, got {other}"),
    }
}

pub(crate) fn check_err(tokens: Vec<Token>) -> AbbreviationError {
    match check_tokens(tokens) {
        Ok(tokens) => panic!("validation should fail, got {tokens:?}"),
        Err(err) => err,
    }
}
