//! Pool Math Property Tests
//!
//! These tests validate properties that must hold for every pool state,
//! regardless of specific reserves, rebases or fee tiers.

use elastic_amm::{
    calculate_qty_to_return_after_fees, get_lp_token_qty_from_token_qtys,
    get_token_imbalance_qtys, is_sufficient_decay_present, AmmError, AmmPool, Decay,
    InternalBalances, PoolState, SwapDirection, Wad, U256,
};
use elastic_config::PoolConfig;
use proptest::prelude::*;

// Property test strategies
prop_compose! {
    fn valid_reserve()
        (reserve in 1_000u64..1_000_000_000u64) -> Wad {
        Wad::from_whole(u128::from(reserve))
    }
}

prop_compose! {
    fn valid_input()
        (input in 1u64..1_000_000u64) -> Wad {
        Wad::from_whole(u128::from(input))
    }
}

prop_compose! {
    fn valid_fee()
        (fee_basis_points in 1u32..=10_000u32) -> u32 {
        fee_basis_points
    }
}

prop_compose! {
    fn internal_balances()
        (base in 1u64..1_000_000u64, quote in 1u64..1_000_000u64) -> InternalBalances {
        InternalBalances::new(
            Wad::from_whole(u128::from(base)),
            Wad::from_whole(u128::from(quote)),
        )
        .unwrap()
    }
}

prop_compose! {
    fn external_base()
        (external in 0u64..2_000_000u64) -> Wad {
        Wad::from_whole(u128::from(external))
    }
}

proptest! {
    #[test]
    fn prop_fees_strictly_reduce_output(
        input in valid_input(),
        input_reserve in valid_reserve(),
        output_reserve in valid_reserve(),
        fee in valid_fee(),
    ) {
        let without_fee =
            calculate_qty_to_return_after_fees(input, input_reserve, output_reserve, 0).unwrap();
        let with_fee =
            calculate_qty_to_return_after_fees(input, input_reserve, output_reserve, fee).unwrap();
        prop_assert!(without_fee > with_fee);
    }

    #[test]
    fn prop_swap_output_bounded_by_reserve(
        input in valid_input(),
        input_reserve in valid_reserve(),
        output_reserve in valid_reserve(),
        fee in 0u32..=10_000u32,
    ) {
        let output =
            calculate_qty_to_return_after_fees(input, input_reserve, output_reserve, fee).unwrap();
        prop_assert!(output < output_reserve);
    }

    #[test]
    fn prop_imbalance_is_one_sided(
        internal in internal_balances(),
        external in external_base(),
    ) {
        let imbalance = get_token_imbalance_qtys(external, &internal).unwrap();
        prop_assert!(
            imbalance.base_token_imbalance_qty.is_zero()
                || imbalance.quote_token_imbalance_qty.is_zero()
        );
    }

    #[test]
    fn prop_decay_detection_is_idempotent(
        internal in internal_balances(),
        external in external_base(),
    ) {
        let first = is_sufficient_decay_present(external, &internal).unwrap();
        let second = is_sufficient_decay_present(external, &internal).unwrap();
        prop_assert_eq!(first, second);

        let decay = Decay::detect(external, &internal).unwrap();
        prop_assert_eq!(decay.is_present(), first);
    }

    #[test]
    fn prop_zero_supply_rejected(
        internal in internal_balances(),
        external in external_base(),
        base in valid_input(),
        quote in valid_input(),
    ) {
        prop_assert_eq!(
            get_lp_token_qty_from_token_qtys(base, quote, external, Wad::ZERO, &internal),
            Err(AmmError::NoExistingLiquidity)
        );
    }

    #[test]
    fn prop_add_then_remove_never_profits(
        seed_base in valid_reserve(),
        seed_quote in valid_reserve(),
        base in valid_input(),
        quote in valid_input(),
    ) {
        let mut pool = PoolState::from_config(&PoolConfig::default()).unwrap();
        pool.add_liquidity(seed_base, seed_quote, Wad::ZERO, Wad::ZERO).unwrap();

        let added = pool.add_liquidity(base, quote, Wad::ZERO, Wad::ZERO).unwrap();
        prop_assume!(!added.liquidity_token_qty.is_zero());
        let removed = pool.remove_liquidity(added.liquidity_token_qty).unwrap();

        prop_assert!(removed.quote_token_qty <= added.quote_token_qty);
        // The paired base amount is itself truncated, so allow one unit
        prop_assert!(removed.base_token_qty.raw() <= added.base_token_qty.raw() + U256::one());
    }

    #[test]
    fn prop_quoted_swap_matches_settled_swap(
        seed_base in valid_reserve(),
        seed_quote in valid_reserve(),
        input in valid_input(),
    ) {
        let mut pool = PoolState::from_config(&PoolConfig::default()).unwrap();
        pool.add_liquidity(seed_base, seed_quote, Wad::ZERO, Wad::ZERO).unwrap();

        let quoted = pool.get_amount_out(SwapDirection::QuoteForBase, input).unwrap();
        let settled = pool.swap(SwapDirection::QuoteForBase, input).unwrap();
        prop_assert_eq!(quoted, settled.token_qty);
    }
}
