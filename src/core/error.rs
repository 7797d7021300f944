// src/core/error.rs

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Error for an argument outside a function's handled domain, e.g. zero
    /// where a positive integer is required, or an argument with no modular
    /// inverse under the configured modulus.
    #[error("InvalidInput: {0}")]
    InvalidInput(String),
    /// Error for a query past the bound a table was precomputed for.
    #[error("OutOfRange: {value} exceeds table bound {bound}")]
    OutOfRange { value: u64, bound: u64 },
}
