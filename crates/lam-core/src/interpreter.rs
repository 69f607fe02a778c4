//! Tree-walking evaluator for the Lam language.

use std::rc::Rc;

use crate::ast::Expr;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::Value;

/// Evaluate `expr` in `env`.
///
/// Evaluating a lambda captures the environment active at that point, even
/// for lambdas nested inside other lambda bodies. Call operands are
/// evaluated left to right, after the operator.
pub fn eval(expr: &Expr, env: &Rc<Environment>) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(Value::Number(*value)),
        Expr::Name(name) => env
            .lookup(name)
            .cloned()
            .ok_or_else(|| EvalError::UnboundName(name.clone())),
        Expr::Lambda { parameters, body } => Ok(Value::Closure {
            parameters: parameters.clone(),
            body: body.clone(),
            env: Rc::clone(env),
        }),
        Expr::Call { operator, operands } => {
            let function = eval(operator, env)?;
            let mut arguments = Vec::with_capacity(operands.len());
            for operand in operands {
                arguments.push(eval(operand, env)?);
            }
            apply(function, arguments)
        }
    }
}

/// Apply a function value to already-evaluated arguments.
///
/// A closure application creates exactly one new frame, chained to the
/// closure's captured environment.
pub fn apply(function: Value, arguments: Vec<Value>) -> Result<Value, EvalError> {
    match function {
        Value::Number(_) => Err(EvalError::NotCallable(function.to_string())),
        Value::Closure {
            parameters,
            body,
            env,
        } => {
            if parameters.len() != arguments.len() {
                return Err(EvalError::ArityMismatch {
                    expected: parameters.len(),
                    got: arguments.len(),
                });
            }
            let frame = Environment::child(&env, &parameters, arguments);
            eval(&body, &frame)
        }
        Value::Primitive { name, function } => match function(&arguments) {
            Ok(result) => Ok(Value::Number(result)),
            Err(detail) => Err(EvalError::Primitive { name, detail }),
        },
    }
}
