//! # Elastic AMM Library - Rebase-Aware Pool Mathematics
//!
//! ## Purpose
//!
//! Pricing and liquidity math for constant product pools whose base token
//! rebases (elastic supply) while the quote token stays fixed. The pool keeps
//! an internal reserve snapshot that only moves through pool actions; the gap
//! between that snapshot and the pool's actual base balance is *decay*, and
//! every calculation here accounts for it.
//!
//! ## Integration Points
//!
//! - **Input Sources**: External base balance, internal snapshot, liquidity token
//!   supply, trade and liquidity parameters
//! - **Output Destinations**: Settlement layers that move tokens and persist the
//!   returned snapshot
//! - **Configuration**: [`elastic_config::PoolConfig`] via [`PoolState::from_config`]
//! - **Precision**: 18-decimal fixed point ([`Wad`]) on 256-bit integers, with
//!   512-bit intermediates
//! - **Validation**: Every operation returns [`AmmError`] instead of panicking
//!
//! ## Architecture Role
//!
//! Pure functions over plain values: [`decay`] classifies the pool,
//! [`swap`] prices trades, [`liquidity`] resolves contribution and
//! redemption quantities, [`fees`] accrues the protocol's share of invariant
//! growth. [`PoolState`] threads those results through a single pool.
//!
//! See [`architecture_diagram()`] for visual representation of the data flow.
//!
//! ## Rounding Profile
//!
//! - **Swap outputs**: Truncated, so the pool keeps any remainder
//! - **Ratios and gamma**: Rounded to nearest at WAD precision
//! - **Liquidity tokens**: Truncated at the final step

pub mod balances;
pub mod decay;
pub mod error;
pub mod fees;
pub mod liquidity;
pub mod pool;
pub mod swap;
pub mod wad;

pub use balances::InternalBalances;
pub use decay::{get_token_imbalance_qtys, is_sufficient_decay_present, Decay, TokenImbalanceQtys};
pub use error::{AmmError, Result};
pub use fees::calculate_liquidity_token_fees;
pub use liquidity::{
    calculate_add_base_token_liquidity_quantities, calculate_add_liquidity_quantities,
    calculate_add_quote_token_liquidity_quantities, calculate_add_token_pair_liquidity_quantities,
    calculate_liquidity_token_qty_for_double_asset_entry,
    calculate_liquidity_token_qty_for_single_asset_entry_with_base_token_decay,
    calculate_liquidity_token_qty_for_single_asset_entry_with_quote_token_decay, calculate_qty,
    calculate_remove_liquidity_quantities, get_add_liquidity_base_token_qty_from_quote_token_qty,
    get_add_liquidity_quote_token_qty_from_base_token_qty, get_lp_token_qty_from_token_qtys,
    AddLiquidityQuantities, DoubleAssetEntry, RemoveLiquidityQuantities, SingleAssetEntry,
};
pub use pool::{AmmPool, PoolState, SwapDirection};
pub use swap::{
    apply_slippage, calculate_exchange_rate, calculate_fees, calculate_price_impact,
    calculate_qty_to_return_after_fees, calculate_swap_base_for_quote,
    calculate_swap_quote_for_base, get_base_token_qty_from_quote_token_qty,
    get_quote_token_qty_from_base_token_qty, SwapQuantities,
};
pub use wad::{diff, mul_div, sqrt, w_div, w_mul, Wad, BASIS_POINTS, WAD};

/// Common types for AMM calculations
pub use primitive_types::U256;
pub use rust_decimal::Decimal;

/// Architecture diagram showing how a liquidity event flows through the modules
#[cfg_attr(doc, aquamarine::aquamarine)]
/// ```mermaid
/// graph LR
///     subgraph Input["📊 Pool State"]
///         EB[External Base Balance]
///         IB[Internal Balances]
///         TS[LP Token Supply]
///     end
///
///     subgraph Classify["🔍 Decay"]
///         DD[Decay Detection]
///         TI[Token Imbalance]
///     end
///
///     subgraph Liquidity["🧮 Liquidity Math"]
///         PF[Protocol Fee via kLast]
///         SAE[Single Asset Entry]
///         DAE[Double Asset Entry]
///     end
///
///     subgraph Output["🎯 Settlement"]
///         LP[LP Tokens Issued]
///         NB[Updated Internal Balances]
///         TQ[Token Quantities]
///     end
///
///     EB --> DD
///     IB --> DD
///     DD --> TI
///     TS --> PF
///     IB --> PF
///
///     PF --> SAE
///     DD --> SAE
///     SAE --> DAE
///     PF --> DAE
///
///     SAE --> LP
///     DAE --> LP
///     DAE --> NB
///     SAE --> TQ
///     DAE --> TQ
///
///     style Input fill:#e1f5fe
///     style Classify fill:#fff3e0
///     style Liquidity fill:#f3e5f5
///     style Output fill:#e8f5e9
/// ```
pub fn architecture_diagram() {
    // This function exists solely for documentation purposes
    // The diagram is rendered by aquamarine in rustdoc
}
