//! Constant product swap pricing with rebase re-centering
//!
//! Fees are taken in basis points from the input side before the constant
//! product division. Integer division truncates, so every quote favours the
//! pool by at most one unit.

use crate::balances::InternalBalances;
use crate::error::{AmmError, Result};
use crate::wad::{mul_div, w_div, Wad, BASIS_POINTS};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Output of a swap together with the internal snapshot after it settles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapQuantities {
    pub token_qty: Wad,
    pub internal_balances: InternalBalances,
}

pub(crate) fn check_basis_points(value: u32, context: &'static str) -> Result<U256> {
    if value > BASIS_POINTS {
        return Err(AmmError::BasisPointsOutOfRange { context, value });
    }
    Ok(U256::from(BASIS_POINTS - value))
}

/// Exact output amount for `x * y = k` with a basis-point input fee
///
/// `net = input * (10000 - fee)`,
/// `output = net * output_reserve / (input_reserve * 10000 + net)`
pub fn calculate_qty_to_return_after_fees(
    input_qty: Wad,
    input_reserve_qty: Wad,
    output_reserve_qty: Wad,
    fee_bps: u32,
) -> Result<Wad> {
    let fee_multiplier = check_basis_points(fee_bps, "Liquidity fee")?;
    if input_qty.is_zero() {
        return Err(AmmError::ZeroAmount {
            context: "swap input",
        });
    }
    if input_reserve_qty.is_zero() {
        return Err(AmmError::EmptyReserve { context: "input" });
    }
    if output_reserve_qty.is_zero() {
        return Err(AmmError::EmptyReserve { context: "output" });
    }

    let overflow = AmmError::Overflow {
        operation: "swap pricing",
    };
    let input_less_fee = input_qty
        .raw()
        .checked_mul(fee_multiplier)
        .ok_or_else(|| overflow.clone())?;
    let denominator = input_reserve_qty
        .raw()
        .checked_mul(U256::from(BASIS_POINTS))
        .and_then(|scaled| scaled.checked_add(input_less_fee))
        .ok_or(overflow)?;

    mul_div(
        Wad::from_raw(input_less_fee),
        output_reserve_qty,
        Wad::from_raw(denominator),
        "swap pricing",
    )
}

/// Base token returned for a quote token input
///
/// When the external base reserve has rebased below the internal snapshot,
/// the curve is re-centered on the external base reserve and the quote
/// reserve it implies at the internal price, rather than the stale snapshot.
pub fn get_base_token_qty_from_quote_token_qty(
    quote_token_qty: Wad,
    external_base_reserve_qty: Wad,
    fee_bps: u32,
    internal_balances: &InternalBalances,
) -> Result<Wad> {
    if external_base_reserve_qty < internal_balances.base_token_reserve_qty {
        let omega = internal_balances.omega()?;
        let implied_quote_token_qty = w_div(external_base_reserve_qty, omega)?;
        trace!(
            %external_base_reserve_qty,
            %implied_quote_token_qty,
            "Pricing off re-centered curve"
        );
        calculate_qty_to_return_after_fees(
            quote_token_qty,
            implied_quote_token_qty,
            external_base_reserve_qty,
            fee_bps,
        )
    } else {
        calculate_qty_to_return_after_fees(
            quote_token_qty,
            internal_balances.quote_token_reserve_qty,
            internal_balances.base_token_reserve_qty,
            fee_bps,
        )
    }
}

/// Quote token returned for a base token input, priced off internal reserves
pub fn get_quote_token_qty_from_base_token_qty(
    base_token_qty: Wad,
    fee_bps: u32,
    internal_balances: &InternalBalances,
) -> Result<Wad> {
    calculate_qty_to_return_after_fees(
        base_token_qty,
        internal_balances.base_token_reserve_qty,
        internal_balances.quote_token_reserve_qty,
        fee_bps,
    )
}

/// Swap base token in for quote token out, settling the internal snapshot
pub fn calculate_swap_base_for_quote(
    base_token_qty: Wad,
    fee_bps: u32,
    internal_balances: &InternalBalances,
) -> Result<SwapQuantities> {
    let quote_token_qty =
        get_quote_token_qty_from_base_token_qty(base_token_qty, fee_bps, internal_balances)?;

    let mut updated = *internal_balances;
    updated.base_token_reserve_qty = updated
        .base_token_reserve_qty
        .try_add(base_token_qty, "base reserve after swap")?;
    updated.quote_token_reserve_qty = updated
        .quote_token_reserve_qty
        .try_sub(quote_token_qty, "quote reserve after swap")?;

    Ok(SwapQuantities {
        token_qty: quote_token_qty,
        internal_balances: updated,
    })
}

/// Swap quote token in for base token out, settling the internal snapshot
pub fn calculate_swap_quote_for_base(
    quote_token_qty: Wad,
    external_base_reserve_qty: Wad,
    fee_bps: u32,
    internal_balances: &InternalBalances,
) -> Result<SwapQuantities> {
    let base_token_qty = get_base_token_qty_from_quote_token_qty(
        quote_token_qty,
        external_base_reserve_qty,
        fee_bps,
        internal_balances,
    )?;

    let mut updated = *internal_balances;
    updated.quote_token_reserve_qty = updated
        .quote_token_reserve_qty
        .try_add(quote_token_qty, "quote reserve after swap")?;
    updated.base_token_reserve_qty = updated
        .base_token_reserve_qty
        .try_sub(base_token_qty, "base reserve after swap")?;

    Ok(SwapQuantities {
        token_qty: base_token_qty,
        internal_balances: updated,
    })
}

/// Fee portion of a swap input, truncated
pub fn calculate_fees(swap_qty: Wad, fee_bps: u32) -> Result<Wad> {
    check_basis_points(fee_bps, "Liquidity fee")?;
    mul_div(
        swap_qty,
        Wad::from(u128::from(fee_bps)),
        Wad::from(u128::from(BASIS_POINTS)),
        "fee calculation",
    )
}

/// Spot price: output token per unit of input token, in WAD
pub fn calculate_exchange_rate(input_reserve_qty: Wad, output_reserve_qty: Wad) -> Result<Wad> {
    if input_reserve_qty.is_zero() {
        return Err(AmmError::EmptyReserve { context: "input" });
    }
    w_div(output_reserve_qty, input_reserve_qty)
}

/// Fraction of the spot price lost by executing `input_qty`, in WAD
///
/// Compares the spot price before the trade with the spot price of the
/// reserves after it.
pub fn calculate_price_impact(
    input_qty: Wad,
    input_reserve_qty: Wad,
    output_reserve_qty: Wad,
    fee_bps: u32,
) -> Result<Wad> {
    let output_qty =
        calculate_qty_to_return_after_fees(input_qty, input_reserve_qty, output_reserve_qty, fee_bps)?;

    let price_before = calculate_exchange_rate(input_reserve_qty, output_reserve_qty)?;
    let price_after = calculate_exchange_rate(
        input_reserve_qty.try_add(input_qty, "input reserve after swap")?,
        output_reserve_qty.try_sub(output_qty, "output reserve after swap")?,
    )?;

    if price_before.is_zero() {
        return Ok(Wad::ZERO);
    }
    w_div(price_before.saturating_sub(price_after), price_before)
}

/// Lower bound for a quoted amount after a slippage allowance, truncated
pub fn apply_slippage(qty: Wad, slippage_bps: u32) -> Result<Wad> {
    let retained = check_basis_points(slippage_bps, "Slippage tolerance")?;
    mul_div(
        qty,
        Wad::from_raw(retained),
        Wad::from(u128::from(BASIS_POINTS)),
        "slippage",
    )
}
