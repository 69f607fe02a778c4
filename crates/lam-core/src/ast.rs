//! Abstract syntax tree for Lam.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A parsed expression.
///
/// Expressions form a tree: a lambda's body and a call's operator and
/// operands are themselves expressions. The tree is immutable once built and
/// has no sharing, so plain owned children suffice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A number literal, e.g. `42`.
    Literal(f64),
    /// A variable reference, e.g. `my_var`.
    Name(String),
    /// A lambda expression, e.g. `lambda x, y: add(x, y)`. Parameters are
    /// pairwise distinct; the parser rejects duplicates.
    Lambda {
        parameters: Vec<String>,
        body: Box<Expr>,
    },
    /// A call expression, e.g. `add(3, 4)`.
    Call {
        operator: Box<Expr>,
        operands: Vec<Expr>,
    },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn lambda(parameters: Vec<String>, body: Expr) -> Self {
        Expr::Lambda {
            parameters,
            body: Box::new(body),
        }
    }

    pub fn call(operator: Expr, operands: Vec<Expr>) -> Self {
        Expr::Call {
            operator: Box::new(operator),
            operands,
        }
    }
}

/// Renders back to concrete syntax.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            Expr::Name(name) => f.write_str(name),
            Expr::Lambda { parameters, body } => {
                if parameters.is_empty() {
                    write!(f, "lambda: {body}")
                } else {
                    write!(f, "lambda {}: {}", parameters.join(", "), body)
                }
            }
            Expr::Call { operator, operands } => {
                let args: Vec<String> = operands.iter().map(|o| o.to_string()).collect();
                // A lambda operator only arises parenthesized.
                match operator.as_ref() {
                    Expr::Lambda { .. } => write!(f, "({})({})", operator, args.join(", ")),
                    _ => write!(f, "{}({})", operator, args.join(", ")),
                }
            }
        }
    }
}
