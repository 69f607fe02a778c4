//! The standard table of named primitives.
//!
//! The evaluator does not fix the primitive set: the global environment is
//! built from whatever table the host supplies. This module provides the
//! default arithmetic table. Subtraction, division and the rest are named
//! functions here because the language has no operator syntax.

use crate::value::{PrimitiveFn, Value};

/// The default primitive table, suitable for [`crate::Environment::global`].
pub fn standard_primitives() -> Vec<(&'static str, PrimitiveFn)> {
    vec![
        ("abs", abs),
        ("add", add),
        ("float", float),
        ("floordiv", floordiv),
        ("int", int),
        ("max", max),
        ("min", min),
        ("mod", modulo),
        ("mul", mul),
        ("pow", pow),
        ("sub", sub),
        ("truediv", truediv),
    ]
}

fn numbers(args: &[Value]) -> Result<Vec<f64>, String> {
    args.iter()
        .map(|value| {
            value
                .as_number()
                .ok_or_else(|| format!("expected a number, got {value}"))
        })
        .collect()
}

fn unary(args: &[Value]) -> Result<f64, String> {
    let ns = numbers(args)?;
    match ns.as_slice() {
        &[x] => Ok(x),
        xs => Err(format!("expected 1 argument, got {}", xs.len())),
    }
}

fn binary(args: &[Value]) -> Result<(f64, f64), String> {
    let ns = numbers(args)?;
    match ns.as_slice() {
        &[a, b] => Ok((a, b)),
        xs => Err(format!("expected 2 arguments, got {}", xs.len())),
    }
}

fn nonzero(divisor: f64) -> Result<f64, String> {
    if divisor == 0.0 {
        Err("division by zero".to_string())
    } else {
        Ok(divisor)
    }
}

fn fold(args: &[Value], pick: fn(f64, f64) -> f64) -> Result<f64, String> {
    let ns = numbers(args)?;
    let (first, rest) = ns
        .split_first()
        .ok_or_else(|| "expected at least 1 argument, got 0".to_string())?;
    Ok(rest.iter().fold(*first, |best, &n| pick(best, n)))
}

fn abs(args: &[Value]) -> Result<f64, String> {
    Ok(unary(args)?.abs())
}

fn add(args: &[Value]) -> Result<f64, String> {
    let (a, b) = binary(args)?;
    Ok(a + b)
}

fn sub(args: &[Value]) -> Result<f64, String> {
    let (a, b) = binary(args)?;
    Ok(a - b)
}

fn mul(args: &[Value]) -> Result<f64, String> {
    let (a, b) = binary(args)?;
    Ok(a * b)
}

fn pow(args: &[Value]) -> Result<f64, String> {
    let (a, b) = binary(args)?;
    Ok(a.powf(b))
}

fn truediv(args: &[Value]) -> Result<f64, String> {
    let (a, b) = binary(args)?;
    Ok(a / nonzero(b)?)
}

fn floordiv(args: &[Value]) -> Result<f64, String> {
    let (a, b) = binary(args)?;
    Ok((a / nonzero(b)?).floor())
}

/// Floored-division remainder: the result takes the divisor's sign.
fn modulo(args: &[Value]) -> Result<f64, String> {
    let (a, b) = binary(args)?;
    nonzero(b)?;
    Ok(a - b * (a / b).floor())
}

fn min(args: &[Value]) -> Result<f64, String> {
    fold(args, f64::min)
}

fn max(args: &[Value]) -> Result<f64, String> {
    fold(args, f64::max)
}

/// Truncate toward zero.
fn int(args: &[Value]) -> Result<f64, String> {
    Ok(unary(args)?.trunc())
}

/// Numbers are already floats, so this is the identity on valid input.
fn float(args: &[Value]) -> Result<f64, String> {
    unary(args)
}
