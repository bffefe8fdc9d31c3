//! Error types for the Neumark issuance curve.
use ruint::aliases::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("arithmetic overflow")] ArithmeticOverflow,
    #[error("invalid bracket: min {min} > max {max}")] InvalidBracket { min: U256, max: U256 },
    #[error("target {target} outside bracket [{low}, {high}]")] OutOfBracket { target: U256, low: U256, high: U256 },
    #[error("insufficient issuance: have {issued}, retiring {requested}")] InsufficientIssuance { issued: U256, requested: U256 },
    #[error("curve invariant violated: {0}")] InvariantViolated(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")] Empty,
    #[error("invalid character: {0}")] InvalidCharacter(char),
    #[error("too many decimals: {got} > {max}")] TooManyDecimals { got: usize, max: usize },
    #[error("amount overflow")] Overflow,
}
