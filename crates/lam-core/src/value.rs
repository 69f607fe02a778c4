//! Runtime values.

use std::fmt;
use std::rc::Rc;

use crate::ast::Expr;
use crate::env::Environment;

/// The native function behind a named primitive. Receives the evaluated
/// argument values and returns a number, or a human-readable failure detail
/// (wrong argument count, or a domain error such as division by zero).
pub type PrimitiveFn = fn(&[Value]) -> Result<f64, String>;

/// The result of evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain number.
    Number(f64),
    /// A lambda function: a lambda expression that knows the environment it
    /// was evaluated in.
    Closure {
        parameters: Vec<String>,
        body: Box<Expr>,
        env: Rc<Environment>,
    },
    /// A named native function supplied by the host.
    Primitive { name: String, function: PrimitiveFn },
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Functions render opaquely, never their internals. Integral numbers print
/// without a fractional part.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            Value::Closure { .. } => f.write_str("<function>"),
            Value::Primitive { name, .. } => write!(f, "<function {name}>"),
        }
    }
}
