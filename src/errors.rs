use alloy_primitives::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Tick {0} is outside the supported range")]
    TickOutOfRange(i64),

    #[error("Sqrt ratio {0} is outside the supported range")]
    SqrtRatioOutOfRange(U256),

    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),

    #[error("Invalid bounds: lower tick {lower} must be less than upper tick {upper}")]
    InvalidBounds { lower: i32, upper: i32 },

    #[error("Invalid bounds: lower sqrt ratio {lower} must be less than upper sqrt ratio {upper}")]
    InvalidSqrtRatioBounds { lower: U256, upper: U256 },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Fee of {0} bips is not a fraction below one")]
    InvalidFeeFraction(u32),

    #[error("Fee {0:?} is not a decimal fraction below one")]
    InvalidFeeDecimal(String),

    #[error("Invalid table parameters: {0}")]
    InvalidTableParams(String),
}
