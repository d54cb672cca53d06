//! Numeric limits shared by configuration and pool math

/// Fee and slippage denominator (1 basis point = 0.01%)
pub const BASIS_POINTS: u32 = 10_000;

/// Largest token precision whose scale factor fits in 256 bits
pub const MAX_TOKEN_DECIMALS: u8 = 77;

/// Pool defaults
pub mod defaults {
    /// Liquidity fee charged on swap input (basis points)
    pub const LIQUIDITY_FEE_BPS: u32 = 30;

    /// Token precision when none is configured
    pub const TOKEN_DECIMALS: u8 = 18;

    /// Slippage tolerance applied to quoted outputs (basis points)
    pub const SLIPPAGE_TOLERANCE_BPS: u32 = 50;
}
