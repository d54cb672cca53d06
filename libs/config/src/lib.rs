//! # Elastic AMM Configuration
//!
//! Pool parameters and the numeric limits shared by the pricing engine.
//!
//! ## Features
//!
//! - **Limits**: Basis point denominator, token precision bounds
//! - **Pool Configuration**: Liquidity fee, token decimals, slippage tolerance,
//!   loaded from TOML with environment-specific overrides
//!
//! ## Usage
//!
//! ```rust
//! use elastic_config::{limits, PoolConfig};
//!
//! let config = PoolConfig::default();
//! assert!(config.liquidity_fee_bps <= limits::BASIS_POINTS);
//! ```

pub mod limits;
pub mod pool_config;

// Re-export commonly used types
pub use pool_config::{load_config, PoolConfig};
