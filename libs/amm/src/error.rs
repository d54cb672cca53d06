//! Error types for rebase-aware AMM math
//!
//! Every failure is terminal for the call that produced it. Variants carry the
//! quantity or branch that failed so the computation can be reproduced by the
//! orchestrating layer.

use crate::wad::Wad;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmmError {
    /// A reserve required as a divisor is zero
    #[error("Empty reserve: {context} reserve is zero")]
    EmptyReserve { context: &'static str },

    /// Proportional liquidity math requested against zero total supply
    #[error("No existing liquidity: total liquidity token supply is zero")]
    NoExistingLiquidity,

    /// Decay offset computed as non-positive where it must be positive
    #[error("Insufficient decay offset in {branch}: computed {qty}")]
    InsufficientDecayOffset { branch: &'static str, qty: Wad },

    /// Intermediate result does not fit in 256 bits
    #[error("Overflow in {operation}")]
    Overflow { operation: &'static str },

    /// Subtraction would produce a negative quantity
    #[error("Underflow in {operation}")]
    Underflow { operation: &'static str },

    /// Fixed-point division by zero outside of a named reserve
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    /// Basis-point parameter above 10000
    #[error("{context} of {value} basis points exceeds 10000")]
    BasisPointsOutOfRange { context: &'static str, value: u32 },

    #[error("Insufficient base token qty: {required} is below minimum {minimum}")]
    InsufficientBaseQty { required: Wad, minimum: Wad },

    #[error("Insufficient quote token qty: {required} is below minimum {minimum}")]
    InsufficientQuoteQty { required: Wad, minimum: Wad },

    /// Liquidity tokens redeemed exceed the outstanding supply
    #[error("Insufficient liquidity: requested {requested} of {available}")]
    InsufficientLiquidity { requested: Wad, available: Wad },

    #[error("Zero amount: {context} must be positive")]
    ZeroAmount { context: &'static str },

    #[error("Negative amount: {value}")]
    NegativeAmount { value: Decimal },

    #[error("Precision loss: {value} has more than 18 decimal places")]
    PrecisionLoss { value: Decimal },

    #[error("Unsupported token decimals: {decimals}")]
    UnsupportedDecimals { decimals: u8 },
}

pub type Result<T> = std::result::Result<T, AmmError>;
