//! Liquidity quantity resolution and liquidity-token issuance
//!
//! ## Entry types
//!
//! - **Double asset entry**: both tokens in the pool's current ratio; issuance
//!   is proportional to the quote token contributed.
//! - **Single asset entry**: one token only, used to offset decay. Issuance
//!   uses the gamma formula `supply * gamma / (1 - gamma)`, where gamma is the
//!   contribution's share of the pool valued at the internal price.
//!
//! ## Sequencing
//!
//! A liquidity event first folds the protocol fee owed through `k_last` into
//! the total supply, then offsets any decay with a single asset entry, and
//! only then prices what remains of the contribution as a double asset entry
//! against the post-offset working balances.

use crate::balances::InternalBalances;
use crate::decay::Decay;
use crate::error::{AmmError, Result};
use crate::fees::calculate_liquidity_token_fees;
use crate::wad::{mul_div, sqrt, w_div, w_mul, Wad, WAD};
use serde::{Deserialize, Serialize};
use tracing::debug;

const BASE_DECAY_BRANCH: &str = "base token decay";
const QUOTE_DECAY_BRANCH: &str = "quote token decay";

/// Token consumed and liquidity tokens issued to offset decay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleAssetEntry {
    pub token_qty: Wad,
    pub liquidity_token_qty: Wad,
    pub internal_balances: InternalBalances,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleAssetEntry {
    pub base_token_qty: Wad,
    pub quote_token_qty: Wad,
    pub liquidity_token_qty: Wad,
    pub internal_balances: InternalBalances,
}

/// Everything a caller needs to settle an add-liquidity event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidityQuantities {
    pub base_token_qty: Wad,
    pub quote_token_qty: Wad,
    /// Liquidity tokens owed to the contributor
    pub liquidity_token_qty: Wad,
    /// Liquidity tokens owed to the protocol
    pub liquidity_token_fee_qty: Wad,
    /// Internal snapshot after the event, with `k_last` refreshed
    pub internal_balances: InternalBalances,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidityQuantities {
    pub base_token_qty: Wad,
    pub quote_token_qty: Wad,
    pub liquidity_token_fee_qty: Wad,
    pub internal_balances: InternalBalances,
}

/// Amount of token B matching `token_a_qty` at the reserve ratio, truncated
pub fn calculate_qty(
    token_a_qty: Wad,
    token_a_reserve_qty: Wad,
    token_b_reserve_qty: Wad,
) -> Result<Wad> {
    if token_a_reserve_qty.is_zero() {
        return Err(AmmError::EmptyReserve { context: "token A" });
    }
    mul_div(
        token_a_qty,
        token_b_reserve_qty,
        token_a_reserve_qty,
        "proportional quantity",
    )
}

pub fn calculate_liquidity_token_qty_for_double_asset_entry(
    total_supply_of_liquidity_tokens: Wad,
    quote_token_qty: Wad,
    quote_token_reserve_qty: Wad,
) -> Result<Wad> {
    if total_supply_of_liquidity_tokens.is_zero() {
        return Err(AmmError::NoExistingLiquidity);
    }
    if quote_token_reserve_qty.is_zero() {
        return Err(AmmError::EmptyReserve {
            context: "internal quote",
        });
    }
    mul_div(
        quote_token_qty,
        total_supply_of_liquidity_tokens,
        quote_token_reserve_qty,
        "double asset entry",
    )
}

/// Issuance for quote token offsetting base token decay
///
/// `gamma = dY / (alpha / omega + Y + dY)` where `alpha` is the external base
/// reserve and `Y` the internal quote reserve before the contribution.
pub fn calculate_liquidity_token_qty_for_single_asset_entry_with_base_token_decay(
    external_base_reserve_qty: Wad,
    total_supply_of_liquidity_tokens: Wad,
    quote_token_qty_to_add: Wad,
    internal_quote_token_reserve_qty: Wad,
    omega: Wad,
) -> Result<Wad> {
    let implied_quote_token_qty = w_div(external_base_reserve_qty, omega)?;
    let denominator = implied_quote_token_qty
        .try_add(internal_quote_token_reserve_qty, BASE_DECAY_BRANCH)?
        .try_add(quote_token_qty_to_add, BASE_DECAY_BRANCH)?;
    let gamma = w_div(quote_token_qty_to_add, denominator)?;
    liquidity_tokens_for_gamma(total_supply_of_liquidity_tokens, gamma)
}

/// Issuance for base token offsetting quote token decay
///
/// `gamma = dX / (X + alpha + dX)` where `X` is the internal base reserve and
/// `alpha` the external base reserve.
pub fn calculate_liquidity_token_qty_for_single_asset_entry_with_quote_token_decay(
    external_base_reserve_qty: Wad,
    total_supply_of_liquidity_tokens: Wad,
    base_token_qty_to_add: Wad,
    internal_base_token_reserve_qty: Wad,
) -> Result<Wad> {
    let denominator = internal_base_token_reserve_qty
        .try_add(external_base_reserve_qty, QUOTE_DECAY_BRANCH)?
        .try_add(base_token_qty_to_add, QUOTE_DECAY_BRANCH)?;
    let gamma = w_div(base_token_qty_to_add, denominator)?;
    liquidity_tokens_for_gamma(total_supply_of_liquidity_tokens, gamma)
}

// supply * gamma / (1 - gamma), carried in WAD until the final truncation
fn liquidity_tokens_for_gamma(total_supply_of_liquidity_tokens: Wad, gamma: Wad) -> Result<Wad> {
    let scaled_supply = total_supply_of_liquidity_tokens
        .raw()
        .checked_mul(WAD.raw())
        .map(Wad::from_raw)
        .ok_or(AmmError::Overflow {
            operation: "single asset entry",
        })?;
    let one_minus_gamma = WAD.try_sub(gamma, "single asset entry gamma")?;
    let scaled = w_div(w_mul(scaled_supply, gamma)?, one_minus_gamma)?;
    Ok(Wad::from_raw(scaled.raw() / WAD.raw()))
}

/// Offset base token decay with quote token
///
/// At most `decay / omega` quote token is absorbed; any excess of
/// `quote_token_qty_desired` is left for a double asset entry. The returned
/// balances credit both the absorbed quote token and the base token decay it
/// resolves.
pub fn calculate_add_quote_token_liquidity_quantities(
    quote_token_qty_desired: Wad,
    external_base_reserve_qty: Wad,
    total_supply_of_liquidity_tokens: Wad,
    internal_balances: &InternalBalances,
) -> Result<SingleAssetEntry> {
    if total_supply_of_liquidity_tokens.is_zero() {
        return Err(AmmError::NoExistingLiquidity);
    }
    let base_token_decay = positive_decay(
        external_base_reserve_qty,
        internal_balances.base_token_reserve_qty,
        BASE_DECAY_BRANCH,
    )?;

    let omega = internal_balances.omega()?;
    let max_quote_token_qty = w_div(base_token_decay, omega)?;
    let quote_token_qty = quote_token_qty_desired.min(max_quote_token_qty);

    let base_token_qty_decay_change = w_mul(quote_token_qty, omega)?;
    if base_token_qty_decay_change.is_zero() {
        return Err(AmmError::InsufficientDecayOffset {
            branch: BASE_DECAY_BRANCH,
            qty: base_token_qty_decay_change,
        });
    }

    let liquidity_token_qty =
        calculate_liquidity_token_qty_for_single_asset_entry_with_base_token_decay(
            external_base_reserve_qty,
            total_supply_of_liquidity_tokens,
            quote_token_qty,
            internal_balances.quote_token_reserve_qty,
            omega,
        )?;

    let mut updated = *internal_balances;
    updated.base_token_reserve_qty = updated
        .base_token_reserve_qty
        .try_add(base_token_qty_decay_change, BASE_DECAY_BRANCH)?;
    updated.quote_token_reserve_qty = updated
        .quote_token_reserve_qty
        .try_add(quote_token_qty, BASE_DECAY_BRANCH)?;

    debug!(
        %quote_token_qty,
        %max_quote_token_qty,
        %base_token_qty_decay_change,
        %liquidity_token_qty,
        "Offset base token decay"
    );

    Ok(SingleAssetEntry {
        token_qty: quote_token_qty,
        liquidity_token_qty,
        internal_balances: updated,
    })
}

/// Offset quote token decay with base token
///
/// At most `internal_base - external_base` base token is absorbed. The base
/// token only restores the external balance to the internal snapshot, so the
/// returned balances are unchanged.
pub fn calculate_add_base_token_liquidity_quantities(
    base_token_qty_desired: Wad,
    external_base_reserve_qty: Wad,
    total_supply_of_liquidity_tokens: Wad,
    internal_balances: &InternalBalances,
) -> Result<SingleAssetEntry> {
    if total_supply_of_liquidity_tokens.is_zero() {
        return Err(AmmError::NoExistingLiquidity);
    }
    let max_base_token_qty = positive_decay(
        internal_balances.base_token_reserve_qty,
        external_base_reserve_qty,
        QUOTE_DECAY_BRANCH,
    )?;
    let base_token_qty = base_token_qty_desired.min(max_base_token_qty);

    let quote_token_qty_decay_change =
        w_mul(base_token_qty, internal_balances.quote_to_base_ratio()?)?;
    if quote_token_qty_decay_change.is_zero() {
        return Err(AmmError::InsufficientDecayOffset {
            branch: QUOTE_DECAY_BRANCH,
            qty: quote_token_qty_decay_change,
        });
    }

    let liquidity_token_qty =
        calculate_liquidity_token_qty_for_single_asset_entry_with_quote_token_decay(
            external_base_reserve_qty,
            total_supply_of_liquidity_tokens,
            base_token_qty,
            internal_balances.base_token_reserve_qty,
        )?;

    debug!(
        %base_token_qty,
        %max_base_token_qty,
        %quote_token_qty_decay_change,
        %liquidity_token_qty,
        "Offset quote token decay"
    );

    Ok(SingleAssetEntry {
        token_qty: base_token_qty,
        liquidity_token_qty,
        internal_balances: *internal_balances,
    })
}

fn positive_decay(larger: Wad, smaller: Wad, branch: &'static str) -> Result<Wad> {
    let decay = larger
        .try_sub(smaller, branch)
        .map_err(|_| AmmError::InsufficientDecayOffset {
            branch,
            qty: Wad::ZERO,
        })?;
    if decay.is_zero() {
        return Err(AmmError::InsufficientDecayOffset {
            branch,
            qty: decay,
        });
    }
    Ok(decay)
}

// Quote token that fully offsets base token decay, and the balances after it
fn offset_base_token_decay(
    base_token_decay: Wad,
    internal_balances: &InternalBalances,
) -> Result<(Wad, InternalBalances)> {
    let omega = internal_balances.omega()?;
    let max_quote_token_qty = w_div(base_token_decay, omega)?;
    let mut offset = *internal_balances;
    offset.base_token_reserve_qty = offset
        .base_token_reserve_qty
        .try_add(w_mul(max_quote_token_qty, omega)?, BASE_DECAY_BRANCH)?;
    offset.quote_token_reserve_qty = offset
        .quote_token_reserve_qty
        .try_add(max_quote_token_qty, BASE_DECAY_BRANCH)?;
    Ok((max_quote_token_qty, offset))
}

/// Quote token to contribute alongside `base_token_qty`
///
/// Base token decay must first be offset with quote token, and the base token
/// is then paired at the post-offset ratio. Under quote token decay the base
/// token offsets the decay first and only the remainder needs pairing.
pub fn get_add_liquidity_quote_token_qty_from_base_token_qty(
    base_token_qty: Wad,
    external_base_reserve_qty: Wad,
    internal_balances: &InternalBalances,
) -> Result<Wad> {
    match Decay::detect(external_base_reserve_qty, internal_balances)? {
        Decay::None => calculate_qty(
            base_token_qty,
            internal_balances.base_token_reserve_qty,
            internal_balances.quote_token_reserve_qty,
        ),
        Decay::Base { decay } => {
            let (max_quote_token_qty, offset) = offset_base_token_decay(decay, internal_balances)?;
            let paired = calculate_qty(
                base_token_qty,
                offset.base_token_reserve_qty,
                offset.quote_token_reserve_qty,
            )?;
            max_quote_token_qty.try_add(paired, BASE_DECAY_BRANCH)
        }
        Decay::Quote { decay } => calculate_qty(
            base_token_qty.saturating_sub(decay),
            internal_balances.base_token_reserve_qty,
            internal_balances.quote_token_reserve_qty,
        ),
    }
}

/// Base token to contribute alongside `quote_token_qty`
///
/// Mirror image of [`get_add_liquidity_quote_token_qty_from_base_token_qty`].
pub fn get_add_liquidity_base_token_qty_from_quote_token_qty(
    quote_token_qty: Wad,
    external_base_reserve_qty: Wad,
    internal_balances: &InternalBalances,
) -> Result<Wad> {
    match Decay::detect(external_base_reserve_qty, internal_balances)? {
        Decay::None => calculate_qty(
            quote_token_qty,
            internal_balances.quote_token_reserve_qty,
            internal_balances.base_token_reserve_qty,
        ),
        Decay::Base { decay } => {
            let (max_quote_token_qty, offset) = offset_base_token_decay(decay, internal_balances)?;
            calculate_qty(
                quote_token_qty.saturating_sub(max_quote_token_qty),
                offset.quote_token_reserve_qty,
                offset.base_token_reserve_qty,
            )
        }
        Decay::Quote { decay } => {
            let paired = calculate_qty(
                quote_token_qty,
                internal_balances.quote_token_reserve_qty,
                internal_balances.base_token_reserve_qty,
            )?;
            decay.try_add(paired, QUOTE_DECAY_BRANCH)
        }
    }
}

/// Double asset entry against `internal_balances`
///
/// Whichever desired amount is the binding constraint is used in full; the
/// other side is reduced to match the reserve ratio.
pub fn calculate_add_token_pair_liquidity_quantities(
    base_token_qty_desired: Wad,
    quote_token_qty_desired: Wad,
    base_token_qty_min: Wad,
    quote_token_qty_min: Wad,
    total_supply_of_liquidity_tokens: Wad,
    internal_balances: &InternalBalances,
) -> Result<DoubleAssetEntry> {
    let required_quote_token_qty = calculate_qty(
        base_token_qty_desired,
        internal_balances.base_token_reserve_qty,
        internal_balances.quote_token_reserve_qty,
    )?;

    let (base_token_qty, quote_token_qty) = if required_quote_token_qty <= quote_token_qty_desired {
        if required_quote_token_qty < quote_token_qty_min {
            return Err(AmmError::InsufficientQuoteQty {
                required: required_quote_token_qty,
                minimum: quote_token_qty_min,
            });
        }
        (base_token_qty_desired, required_quote_token_qty)
    } else {
        let required_base_token_qty = calculate_qty(
            quote_token_qty_desired,
            internal_balances.quote_token_reserve_qty,
            internal_balances.base_token_reserve_qty,
        )?;
        if required_base_token_qty < base_token_qty_min {
            return Err(AmmError::InsufficientBaseQty {
                required: required_base_token_qty,
                minimum: base_token_qty_min,
            });
        }
        (required_base_token_qty, quote_token_qty_desired)
    };

    let liquidity_token_qty = calculate_liquidity_token_qty_for_double_asset_entry(
        total_supply_of_liquidity_tokens,
        quote_token_qty,
        internal_balances.quote_token_reserve_qty,
    )?;

    let mut updated = *internal_balances;
    updated.base_token_reserve_qty = updated
        .base_token_reserve_qty
        .try_add(base_token_qty, "double asset entry")?;
    updated.quote_token_reserve_qty = updated
        .quote_token_reserve_qty
        .try_add(quote_token_qty, "double asset entry")?;

    debug!(
        %base_token_qty,
        %quote_token_qty,
        %liquidity_token_qty,
        "Double asset entry"
    );

    Ok(DoubleAssetEntry {
        base_token_qty,
        quote_token_qty,
        liquidity_token_qty,
        internal_balances: updated,
    })
}

/// Full add-liquidity computation
///
/// Seeds the pool at `sqrt(base * quote)` when no liquidity tokens exist.
/// Otherwise folds in the protocol fee, offsets decay, and pairs whatever is
/// left of the contribution. Minimums apply to the totals consumed.
pub fn calculate_add_liquidity_quantities(
    base_token_qty_desired: Wad,
    quote_token_qty_desired: Wad,
    base_token_qty_min: Wad,
    quote_token_qty_min: Wad,
    external_base_reserve_qty: Wad,
    total_supply_of_liquidity_tokens: Wad,
    internal_balances: &InternalBalances,
) -> Result<AddLiquidityQuantities> {
    if total_supply_of_liquidity_tokens.is_zero() {
        return seed_liquidity(base_token_qty_desired, quote_token_qty_desired);
    }

    let liquidity_token_fee_qty =
        calculate_liquidity_token_fees(total_supply_of_liquidity_tokens, internal_balances)?;
    let total_supply = total_supply_of_liquidity_tokens
        .try_add(liquidity_token_fee_qty, "total supply with protocol fee")?;

    let decay = Decay::detect(external_base_reserve_qty, internal_balances)?;
    let (base_token_qty_from_decay, quote_token_qty_from_decay, offset) = match decay {
        Decay::None => {
            let pair = calculate_add_token_pair_liquidity_quantities(
                base_token_qty_desired,
                quote_token_qty_desired,
                base_token_qty_min,
                quote_token_qty_min,
                total_supply,
                internal_balances,
            )?;
            return close_liquidity_event(
                pair.base_token_qty,
                pair.quote_token_qty,
                pair.liquidity_token_qty,
                liquidity_token_fee_qty,
                pair.internal_balances,
            );
        }
        Decay::Base { .. } => {
            let entry = calculate_add_quote_token_liquidity_quantities(
                quote_token_qty_desired,
                external_base_reserve_qty,
                total_supply,
                internal_balances,
            )?;
            (Wad::ZERO, entry.token_qty, entry)
        }
        Decay::Quote { .. } => {
            let entry = calculate_add_base_token_liquidity_quantities(
                base_token_qty_desired,
                external_base_reserve_qty,
                total_supply,
                internal_balances,
            )?;
            (entry.token_qty, Wad::ZERO, entry)
        }
    };

    let mut base_token_qty = base_token_qty_from_decay;
    let mut quote_token_qty = quote_token_qty_from_decay;
    let mut liquidity_token_qty = offset.liquidity_token_qty;
    let mut balances = offset.internal_balances;

    if base_token_qty_from_decay < base_token_qty_desired
        && quote_token_qty_from_decay < quote_token_qty_desired
    {
        let pair = calculate_add_token_pair_liquidity_quantities(
            base_token_qty_desired.try_sub(base_token_qty_from_decay, "base token residue")?,
            quote_token_qty_desired.try_sub(quote_token_qty_from_decay, "quote token residue")?,
            Wad::ZERO,
            Wad::ZERO,
            total_supply.try_add(offset.liquidity_token_qty, "total supply after offset")?,
            &offset.internal_balances,
        )?;
        base_token_qty = base_token_qty.try_add(pair.base_token_qty, "base token total")?;
        quote_token_qty = quote_token_qty.try_add(pair.quote_token_qty, "quote token total")?;
        liquidity_token_qty =
            liquidity_token_qty.try_add(pair.liquidity_token_qty, "liquidity token total")?;
        balances = pair.internal_balances;
    }

    if base_token_qty < base_token_qty_min {
        return Err(AmmError::InsufficientBaseQty {
            required: base_token_qty,
            minimum: base_token_qty_min,
        });
    }
    if quote_token_qty < quote_token_qty_min {
        return Err(AmmError::InsufficientQuoteQty {
            required: quote_token_qty,
            minimum: quote_token_qty_min,
        });
    }

    close_liquidity_event(
        base_token_qty,
        quote_token_qty,
        liquidity_token_qty,
        liquidity_token_fee_qty,
        balances,
    )
}

fn seed_liquidity(base_token_qty: Wad, quote_token_qty: Wad) -> Result<AddLiquidityQuantities> {
    if base_token_qty.is_zero() {
        return Err(AmmError::ZeroAmount {
            context: "initial base token",
        });
    }
    if quote_token_qty.is_zero() {
        return Err(AmmError::ZeroAmount {
            context: "initial quote token",
        });
    }

    let k = base_token_qty.product(quote_token_qty, "initial liquidity")?;
    let liquidity_token_qty = Wad::from_raw(sqrt(k));
    debug!(%base_token_qty, %quote_token_qty, %liquidity_token_qty, "Seeding pool");

    Ok(AddLiquidityQuantities {
        base_token_qty,
        quote_token_qty,
        liquidity_token_qty,
        liquidity_token_fee_qty: Wad::ZERO,
        internal_balances: InternalBalances::with_k_last(base_token_qty, quote_token_qty, k),
    })
}

fn close_liquidity_event(
    base_token_qty: Wad,
    quote_token_qty: Wad,
    liquidity_token_qty: Wad,
    liquidity_token_fee_qty: Wad,
    mut internal_balances: InternalBalances,
) -> Result<AddLiquidityQuantities> {
    internal_balances.refresh_k_last()?;
    Ok(AddLiquidityQuantities {
        base_token_qty,
        quote_token_qty,
        liquidity_token_qty,
        liquidity_token_fee_qty,
        internal_balances,
    })
}

/// Liquidity tokens issued for a contribution to an established pool
///
/// Single asset and double asset issuance are summed; the protocol fee is not
/// included.
pub fn get_lp_token_qty_from_token_qtys(
    base_token_qty: Wad,
    quote_token_qty: Wad,
    external_base_reserve_qty: Wad,
    total_supply_of_liquidity_tokens: Wad,
    internal_balances: &InternalBalances,
) -> Result<Wad> {
    if total_supply_of_liquidity_tokens.is_zero() {
        return Err(AmmError::NoExistingLiquidity);
    }
    let quantities = calculate_add_liquidity_quantities(
        base_token_qty,
        quote_token_qty,
        Wad::ZERO,
        Wad::ZERO,
        external_base_reserve_qty,
        total_supply_of_liquidity_tokens,
        internal_balances,
    )?;
    Ok(quantities.liquidity_token_qty)
}

/// Tokens returned for redeeming `liquidity_token_qty`
///
/// Base token is paid from the external reserve, so redeemers share in any
/// rebase; quote token is paid from the internal reserve.
pub fn calculate_remove_liquidity_quantities(
    liquidity_token_qty: Wad,
    external_base_reserve_qty: Wad,
    total_supply_of_liquidity_tokens: Wad,
    internal_balances: &InternalBalances,
) -> Result<RemoveLiquidityQuantities> {
    if total_supply_of_liquidity_tokens.is_zero() {
        return Err(AmmError::NoExistingLiquidity);
    }
    if liquidity_token_qty.is_zero() {
        return Err(AmmError::ZeroAmount {
            context: "liquidity tokens to redeem",
        });
    }
    if liquidity_token_qty > total_supply_of_liquidity_tokens {
        return Err(AmmError::InsufficientLiquidity {
            requested: liquidity_token_qty,
            available: total_supply_of_liquidity_tokens,
        });
    }

    let liquidity_token_fee_qty =
        calculate_liquidity_token_fees(total_supply_of_liquidity_tokens, internal_balances)?;
    let total_supply = total_supply_of_liquidity_tokens
        .try_add(liquidity_token_fee_qty, "total supply with protocol fee")?;

    let base_token_qty = mul_div(
        liquidity_token_qty,
        external_base_reserve_qty,
        total_supply,
        "remove liquidity",
    )?;
    let quote_token_qty = mul_div(
        liquidity_token_qty,
        internal_balances.quote_token_reserve_qty,
        total_supply,
        "remove liquidity",
    )?;
    let internal_base_token_removed = mul_div(
        liquidity_token_qty,
        internal_balances.base_token_reserve_qty,
        total_supply,
        "remove liquidity",
    )?;

    let mut updated = *internal_balances;
    updated.base_token_reserve_qty = updated
        .base_token_reserve_qty
        .try_sub(internal_base_token_removed, "remove liquidity")?;
    updated.quote_token_reserve_qty = updated
        .quote_token_reserve_qty
        .try_sub(quote_token_qty, "remove liquidity")?;
    updated.refresh_k_last()?;

    debug!(
        %liquidity_token_qty,
        %base_token_qty,
        %quote_token_qty,
        %liquidity_token_fee_qty,
        "Remove liquidity"
    );

    Ok(RemoveLiquidityQuantities {
        base_token_qty,
        quote_token_qty,
        liquidity_token_fee_qty,
        internal_balances: updated,
    })
}
