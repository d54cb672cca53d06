//! Protocol fee accrual through `k_last`
//!
//! Trading fees grow `sqrt(base * quote)` between liquidity events. A share of
//! that growth is owed to the protocol as liquidity tokens; they are minted at
//! the next liquidity event, before any other liquidity math in that event.

use crate::balances::InternalBalances;
use crate::error::Result;
use crate::wad::{mul_div, sqrt, Wad};
use primitive_types::U256;
use tracing::debug;

/// Liquidity tokens owed to the protocol for growth of the invariant
///
/// `total_supply * (root_k - root_k_last) / (2 * root_k)` when the invariant
/// grew, zero otherwise. A pool that has never recorded `k_last` owes nothing.
pub fn calculate_liquidity_token_fees(
    total_supply_of_liquidity_tokens: Wad,
    internal_balances: &InternalBalances,
) -> Result<Wad> {
    if internal_balances.k_last.is_zero() {
        return Ok(Wad::ZERO);
    }

    let root_k = sqrt(internal_balances.k()?);
    let root_k_last = sqrt(internal_balances.k_last);
    if root_k <= root_k_last {
        return Ok(Wad::ZERO);
    }

    // root_k <= 2^128, doubling cannot overflow
    let fee = mul_div(
        total_supply_of_liquidity_tokens,
        Wad::from_raw(root_k - root_k_last),
        Wad::from_raw(root_k * U256::from(2u8)),
        "liquidity token fee",
    )?;
    debug!(%fee, %root_k, %root_k_last, "Protocol fee accrued");
    Ok(fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_growth_no_fee() {
        let internal = InternalBalances::new(Wad::from_whole(1000), Wad::from_whole(5000)).unwrap();
        assert_eq!(
            calculate_liquidity_token_fees(Wad::from_whole(5000), &internal).unwrap(),
            Wad::ZERO
        );
    }

    #[test]
    fn test_shrinking_invariant_no_fee() {
        let k_last = Wad::from_whole(1000).product(Wad::from_whole(5000), "k").unwrap();
        let internal = InternalBalances::with_k_last(Wad::from_whole(900), Wad::from_whole(5000), k_last);
        assert_eq!(
            calculate_liquidity_token_fees(Wad::from_whole(5000), &internal).unwrap(),
            Wad::ZERO
        );
    }

    #[test]
    fn test_fee_from_invariant_growth() {
        // sqrt(100 * 100) = 100 grew to sqrt(121 * 121) = 121
        let k_last = Wad::from_whole(100).product(Wad::from_whole(100), "k").unwrap();
        let internal = InternalBalances::with_k_last(Wad::from_whole(121), Wad::from_whole(121), k_last);
        // 1000 * 21 / 242 = 86.776859504132231404...
        assert_eq!(
            calculate_liquidity_token_fees(Wad::from_whole(1000), &internal).unwrap(),
            Wad::from(86_776_859_504_132_231_404u128)
        );
    }

    #[test]
    fn test_unset_k_last_owes_nothing() {
        let internal = InternalBalances::with_k_last(Wad::from_whole(121), Wad::from_whole(121), U256::zero());
        assert_eq!(
            calculate_liquidity_token_fees(Wad::from_whole(1000), &internal).unwrap(),
            Wad::ZERO
        );
    }
}
