//! Calculator arithmetic.
//!
//! All functions are pure. Division and modulus refuse a zero divisor with an
//! [`ArithmeticError`]; the session turns that into a message plus the
//! [`INVALID_RESULT`] sentinel.

use std::fmt;

/// Sentinel for "no meaningful result". Never printed.
pub const INVALID_RESULT: f64 = f64::NAN;

/// The six arithmetic operations on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
}

/// Undefined arithmetic caught before it is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    DivideByZero,
    ModulusByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivideByZero => write!(f, "Cannot divide by zero"),
            ArithmeticError::ModulusByZero => {
                write!(f, "Division by zero in modulus operation")
            }
        }
    }
}

impl std::error::Error for ArithmeticError {}

impl Operation {
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
            Operation::Modulus => modulus(a, b),
            Operation::Power => Ok(power(a, b)),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivideByZero);
    }
    Ok(a / b)
}

/// Floating remainder; the result takes the sign of `a`.
pub fn modulus(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::ModulusByZero);
    }
    Ok(a % b)
}

pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}
