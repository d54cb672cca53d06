//! Internally tracked reserve snapshot

use crate::error::{AmmError, Result};
use crate::wad::{u256_string, w_div, Wad};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Last internally recorded reserves of a pool
///
/// The base reserve can drift from the pool's external balance when the base
/// token rebases; the quote token is assumed not to. `k_last` is deliberately
/// left stale between liquidity events so that organic growth of
/// `base * quote` can be measured for the protocol fee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalBalances {
    pub base_token_reserve_qty: Wad,
    pub quote_token_reserve_qty: Wad,
    /// Raw reserve product at the last liquidity event (not rescaled)
    #[serde(with = "u256_string")]
    pub k_last: U256,
}

impl InternalBalances {
    /// Snapshot with `k_last` set to the current reserve product
    pub fn new(base_token_reserve_qty: Wad, quote_token_reserve_qty: Wad) -> Result<Self> {
        let k_last = base_token_reserve_qty.product(quote_token_reserve_qty, "k_last")?;
        Ok(Self {
            base_token_reserve_qty,
            quote_token_reserve_qty,
            k_last,
        })
    }

    pub fn with_k_last(
        base_token_reserve_qty: Wad,
        quote_token_reserve_qty: Wad,
        k_last: U256,
    ) -> Self {
        Self {
            base_token_reserve_qty,
            quote_token_reserve_qty,
            k_last,
        }
    }

    /// Omega: internal base-to-quote ratio in WAD
    pub fn omega(&self) -> Result<Wad> {
        self.ensure_reserves()?;
        nonzero_ratio(
            w_div(self.base_token_reserve_qty, self.quote_token_reserve_qty)?,
            "base to quote ratio",
        )
    }

    /// Internal quote-to-base ratio in WAD
    pub fn quote_to_base_ratio(&self) -> Result<Wad> {
        self.ensure_reserves()?;
        nonzero_ratio(
            w_div(self.quote_token_reserve_qty, self.base_token_reserve_qty)?,
            "quote to base ratio",
        )
    }

    /// Current raw reserve product
    pub fn k(&self) -> Result<U256> {
        self.base_token_reserve_qty
            .product(self.quote_token_reserve_qty, "reserve product")
    }

    /// Record the current reserve product as `k_last`, closing a liquidity event
    pub fn refresh_k_last(&mut self) -> Result<()> {
        self.k_last = self.k()?;
        Ok(())
    }

    fn ensure_reserves(&self) -> Result<()> {
        if self.base_token_reserve_qty.is_zero() {
            return Err(AmmError::EmptyReserve {
                context: "internal base",
            });
        }
        if self.quote_token_reserve_qty.is_zero() {
            return Err(AmmError::EmptyReserve {
                context: "internal quote",
            });
        }
        Ok(())
    }
}

// A ratio that rounds to zero cannot be divided by later
fn nonzero_ratio(ratio: Wad, operation: &'static str) -> Result<Wad> {
    if ratio.is_zero() {
        Err(AmmError::DivisionByZero { operation })
    } else {
        Ok(ratio)
    }
}
