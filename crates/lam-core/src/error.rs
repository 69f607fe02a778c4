//! Error types for lexing, parsing, and evaluation.
//!
//! Every error is terminal for the enclosing `read` or `eval` call: no
//! partial AST or value accompanies an error, and nothing is retried.

use thiserror::Error;

use crate::lexer::Token;
use crate::span::Position;

/// Malformed input detected while lexing or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("unexpected character '{ch}' at {position}")]
    UnexpectedCharacter { ch: char, position: Position },

    /// A maximal numeral run that does not form a number, such as a bare `-`.
    #[error("malformed numeral '{text}' at {position}")]
    MalformedNumeral { text: String, position: Position },

    #[error("incomplete expression")]
    IncompleteExpression,

    #[error("unexpected token '{0}'")]
    UnexpectedToken(Token),

    #[error("expected '{expected}', found '{found}'")]
    Expected { expected: String, found: String },

    #[error("trailing input after expression: '{0}'")]
    TrailingInput(Token),

    #[error("expected a parameter name, found '{0}'")]
    ExpectedParameter(Token),

    #[error("duplicate parameter '{0}'")]
    DuplicateParameter(String),
}

/// Failure while evaluating a well-formed expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("unbound name '{0}'")]
    UnboundName(String),

    #[error("{0} is not callable")]
    NotCallable(String),

    #[error("expected {expected} arguments, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// A native primitive rejected its arguments (wrong count, or a domain
    /// error such as division by zero).
    #[error("{name}: {detail}")]
    Primitive { name: String, detail: String },
}
