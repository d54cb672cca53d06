//! Decay detection
//!
//! Decay is the drift between the externally observed base reserve and the
//! internal snapshot, caused by a rebase of the base token. A positive rebase
//! leaves surplus base token in the pool (base token decay); a negative rebase
//! leaves a base shortfall that shows up against the stable quote token
//! (quote token decay). Drift worth less than one whole quote token at the
//! internal price is treated as rounding noise.

use crate::balances::InternalBalances;
use crate::error::Result;
use crate::wad::{diff, w_div, Wad, WAD};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Material decay of a pool, with its magnitude in base token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decay {
    /// External and internal base reserves agree within the noise threshold
    None,
    /// External base reserve exceeds the internal snapshot (positive rebase)
    Base { decay: Wad },
    /// External base reserve is below the internal snapshot (negative rebase)
    Quote { decay: Wad },
}

impl Decay {
    pub fn detect(
        external_base_reserve_qty: Wad,
        internal_balances: &InternalBalances,
    ) -> Result<Self> {
        if !is_sufficient_decay_present(external_base_reserve_qty, internal_balances)? {
            return Ok(Decay::None);
        }

        let internal_base = internal_balances.base_token_reserve_qty;
        let decay = if external_base_reserve_qty > internal_base {
            Decay::Base {
                decay: diff(external_base_reserve_qty, internal_base),
            }
        } else {
            Decay::Quote {
                decay: diff(external_base_reserve_qty, internal_base),
            }
        };
        trace!(?decay, %external_base_reserve_qty, %internal_base, "Decay detected");
        Ok(decay)
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Decay::None)
    }
}

/// True when the base reserve drift is worth at least one whole quote token
/// at the internal base-to-quote ratio
pub fn is_sufficient_decay_present(
    external_base_reserve_qty: Wad,
    internal_balances: &InternalBalances,
) -> Result<bool> {
    let ratio = internal_balances.omega()?;
    let drift = diff(
        external_base_reserve_qty,
        internal_balances.base_token_reserve_qty,
    );
    Ok(w_div(drift, ratio)? >= WAD)
}

/// Token quantities needed to bring the pool back in line with its snapshot
///
/// At most one side is ever non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenImbalanceQtys {
    pub base_token_imbalance_qty: Wad,
    pub quote_token_imbalance_qty: Wad,
}

pub fn get_token_imbalance_qtys(
    external_base_reserve_qty: Wad,
    internal_balances: &InternalBalances,
) -> Result<TokenImbalanceQtys> {
    match Decay::detect(external_base_reserve_qty, internal_balances)? {
        Decay::None => Ok(TokenImbalanceQtys::default()),
        Decay::Base { decay } => Ok(TokenImbalanceQtys {
            base_token_imbalance_qty: Wad::ZERO,
            quote_token_imbalance_qty: w_div(decay, internal_balances.omega()?)?,
        }),
        Decay::Quote { decay } => Ok(TokenImbalanceQtys {
            base_token_imbalance_qty: decay,
            quote_token_imbalance_qty: Wad::ZERO,
        }),
    }
}
