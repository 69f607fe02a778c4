//! Lexer for the Lam language.

use std::fmt;

use crate::cursor::Cursor;
use crate::error::SyntaxError;
use crate::span::Position;

/// A single token. The sequence produced by [`tokenize`] preserves source
/// order; whitespace is skipped, never tokenized.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A maximal run of numeral characters, e.g. `-4.5`.
    NumberLiteral(String),
    /// An identifier or the reserved word `lambda`.
    Symbol(String),
    /// One of `(`, `)`, `,`, `:`.
    Delimiter(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::NumberLiteral(text) => f.write_str(text),
            Token::Symbol(name) => f.write_str(name),
            Token::Delimiter(ch) => write!(f, "{ch}"),
        }
    }
}

fn is_symbol_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_symbol_inner(ch: char) -> bool {
    is_symbol_start(ch) || ch.is_ascii_digit()
}

fn is_numeral(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-'
}

fn is_delimiter(ch: char) -> bool {
    matches!(ch, '(' | ')' | ',' | ':')
}

/// Split the source text into tokens.
///
/// `-` is accepted only as part of a numeral; there is no subtraction token
/// (subtraction is the named primitive `sub`). A numeral run that does not
/// form a number, or any character outside the known classes, fails lexing.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut src = Cursor::new(source.chars().collect());
    let mut tokens = Vec::new();
    while let Some(token) = next_token(source, &mut src)? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Consume a maximal run of characters satisfying `allowed`.
fn take(src: &mut Cursor<char>, allowed: fn(char) -> bool) -> String {
    let mut run = String::new();
    while let Some(&ch) = src.peek() {
        if !allowed(ch) {
            break;
        }
        run.push(ch);
        src.advance();
    }
    run
}

fn next_token(source: &str, src: &mut Cursor<char>) -> Result<Option<Token>, SyntaxError> {
    take(src, char::is_whitespace);
    let start = src.position();

    let Some(&ch) = src.peek() else {
        return Ok(None);
    };

    if is_numeral(ch) {
        let text = take(src, is_numeral);
        if text.parse::<f64>().is_err() {
            return Err(SyntaxError::MalformedNumeral {
                text,
                position: Position::locate(source, start),
            });
        }
        Ok(Some(Token::NumberLiteral(text)))
    } else if is_symbol_start(ch) {
        Ok(Some(Token::Symbol(take(src, is_symbol_inner))))
    } else if is_delimiter(ch) {
        src.advance();
        Ok(Some(Token::Delimiter(ch)))
    } else {
        Err(SyntaxError::UnexpectedCharacter {
            ch,
            position: Position::locate(source, start),
        })
    }
}
