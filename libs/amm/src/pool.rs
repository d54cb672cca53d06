//! Stateful pool wrapper and the unified pricing interface

use crate::balances::InternalBalances;
use crate::decay::{get_token_imbalance_qtys, Decay, TokenImbalanceQtys};
use crate::error::{AmmError, Result};
use crate::liquidity::{
    calculate_add_liquidity_quantities, calculate_remove_liquidity_quantities,
    AddLiquidityQuantities, RemoveLiquidityQuantities,
};
use crate::swap::{
    apply_slippage, calculate_swap_base_for_quote, calculate_swap_quote_for_base,
    check_basis_points, get_base_token_qty_from_quote_token_qty,
    get_quote_token_qty_from_base_token_qty, SwapQuantities,
};
use crate::wad::{Wad, MAX_TOKEN_DECIMALS};
use elastic_config::PoolConfig;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which token the trader sends in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapDirection {
    BaseForQuote,
    QuoteForBase,
}

/// Unified pool interface for pricing calculations
pub trait AmmPool {
    /// Calculate output amount for given input
    fn get_amount_out(&self, direction: SwapDirection, amount_in: Wad) -> Result<Wad>;

    /// Get current (base, quote) reserves used for pricing
    fn get_liquidity(&self) -> (Wad, Wad);

    /// Get fee tier
    fn get_fee_bps(&self) -> u32;
}

/// Full state of one elastic pool
///
/// `external_base_reserve_qty` is the pool's actual base token balance and
/// moves with rebases; `internal_balances` only moves through pool actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub external_base_reserve_qty: Wad,
    pub internal_balances: InternalBalances,
    pub total_supply_of_liquidity_tokens: Wad,
    pub fee_bps: u32,
    pub slippage_tolerance_bps: u32,
    pub base_token_decimals: u8,
    pub quote_token_decimals: u8,
}

impl PoolState {
    /// Empty pool with parameters from `config`
    pub fn from_config(config: &PoolConfig) -> Result<Self> {
        check_basis_points(config.liquidity_fee_bps, "Liquidity fee")?;
        check_basis_points(config.slippage_tolerance_bps, "Slippage tolerance")?;
        for decimals in [config.base_token_decimals, config.quote_token_decimals] {
            if decimals > MAX_TOKEN_DECIMALS {
                return Err(AmmError::UnsupportedDecimals { decimals });
            }
        }

        Ok(Self {
            external_base_reserve_qty: Wad::ZERO,
            internal_balances: InternalBalances::default(),
            total_supply_of_liquidity_tokens: Wad::ZERO,
            fee_bps: config.liquidity_fee_bps,
            slippage_tolerance_bps: config.slippage_tolerance_bps,
            base_token_decimals: config.base_token_decimals,
            quote_token_decimals: config.quote_token_decimals,
        })
    }

    pub fn decay(&self) -> Result<Decay> {
        Decay::detect(self.external_base_reserve_qty, &self.internal_balances)
    }

    pub fn token_imbalance_qtys(&self) -> Result<TokenImbalanceQtys> {
        get_token_imbalance_qtys(self.external_base_reserve_qty, &self.internal_balances)
    }

    /// Record a rebase of the base token held by the pool
    pub fn rebase(&mut self, external_base_reserve_qty: Wad) {
        debug!(
            from = %self.external_base_reserve_qty,
            to = %external_base_reserve_qty,
            "Base token rebase"
        );
        self.external_base_reserve_qty = external_base_reserve_qty;
    }

    /// Add liquidity and settle the result into the pool
    pub fn add_liquidity(
        &mut self,
        base_token_qty_desired: Wad,
        quote_token_qty_desired: Wad,
        base_token_qty_min: Wad,
        quote_token_qty_min: Wad,
    ) -> Result<AddLiquidityQuantities> {
        let added = calculate_add_liquidity_quantities(
            base_token_qty_desired,
            quote_token_qty_desired,
            base_token_qty_min,
            quote_token_qty_min,
            self.external_base_reserve_qty,
            self.total_supply_of_liquidity_tokens,
            &self.internal_balances,
        )?;

        let external_base_reserve_qty = self
            .external_base_reserve_qty
            .try_add(added.base_token_qty, "external base after add")?;
        let total_supply = self
            .total_supply_of_liquidity_tokens
            .try_add(added.liquidity_token_fee_qty, "total supply after add")?
            .try_add(added.liquidity_token_qty, "total supply after add")?;

        self.external_base_reserve_qty = external_base_reserve_qty;
        self.total_supply_of_liquidity_tokens = total_supply;
        self.internal_balances = added.internal_balances;
        Ok(added)
    }

    /// Redeem liquidity tokens and settle the result into the pool
    pub fn remove_liquidity(&mut self, liquidity_token_qty: Wad) -> Result<RemoveLiquidityQuantities> {
        let removed = calculate_remove_liquidity_quantities(
            liquidity_token_qty,
            self.external_base_reserve_qty,
            self.total_supply_of_liquidity_tokens,
            &self.internal_balances,
        )?;

        let external_base_reserve_qty = self
            .external_base_reserve_qty
            .try_sub(removed.base_token_qty, "external base after remove")?;
        let total_supply = self
            .total_supply_of_liquidity_tokens
            .try_add(removed.liquidity_token_fee_qty, "total supply after remove")?
            .try_sub(liquidity_token_qty, "total supply after remove")?;

        self.external_base_reserve_qty = external_base_reserve_qty;
        self.total_supply_of_liquidity_tokens = total_supply;
        self.internal_balances = removed.internal_balances;
        Ok(removed)
    }

    pub fn swap(&mut self, direction: SwapDirection, amount_in: Wad) -> Result<SwapQuantities> {
        let swapped = match direction {
            SwapDirection::BaseForQuote => {
                let swapped =
                    calculate_swap_base_for_quote(amount_in, self.fee_bps, &self.internal_balances)?;
                self.external_base_reserve_qty = self
                    .external_base_reserve_qty
                    .try_add(amount_in, "external base after swap")?;
                swapped
            }
            SwapDirection::QuoteForBase => {
                let swapped = calculate_swap_quote_for_base(
                    amount_in,
                    self.external_base_reserve_qty,
                    self.fee_bps,
                    &self.internal_balances,
                )?;
                self.external_base_reserve_qty = self
                    .external_base_reserve_qty
                    .try_sub(swapped.token_qty, "external base after swap")?;
                swapped
            }
        };
        self.internal_balances = swapped.internal_balances;
        debug!(?direction, %amount_in, amount_out = %swapped.token_qty, "Swap settled");
        Ok(swapped)
    }

    /// Quoted output reduced by the configured slippage tolerance
    pub fn get_min_amount_out(&self, direction: SwapDirection, amount_in: Wad) -> Result<Wad> {
        apply_slippage(
            self.get_amount_out(direction, amount_in)?,
            self.slippage_tolerance_bps,
        )
    }

    pub fn base_token_qty_from_units(&self, raw: U256) -> Result<Wad> {
        Wad::from_token_units(raw, self.base_token_decimals)
    }

    pub fn quote_token_qty_from_units(&self, raw: U256) -> Result<Wad> {
        Wad::from_token_units(raw, self.quote_token_decimals)
    }

    pub fn base_token_units(&self, qty: Wad) -> Result<U256> {
        qty.to_token_units(self.base_token_decimals)
    }

    pub fn quote_token_units(&self, qty: Wad) -> Result<U256> {
        qty.to_token_units(self.quote_token_decimals)
    }
}

impl AmmPool for PoolState {
    fn get_amount_out(&self, direction: SwapDirection, amount_in: Wad) -> Result<Wad> {
        match direction {
            SwapDirection::BaseForQuote => {
                get_quote_token_qty_from_base_token_qty(amount_in, self.fee_bps, &self.internal_balances)
            }
            SwapDirection::QuoteForBase => get_base_token_qty_from_quote_token_qty(
                amount_in,
                self.external_base_reserve_qty,
                self.fee_bps,
                &self.internal_balances,
            ),
        }
    }

    fn get_liquidity(&self) -> (Wad, Wad) {
        (
            self.internal_balances.base_token_reserve_qty,
            self.internal_balances.quote_token_reserve_qty,
        )
    }

    fn get_fee_bps(&self) -> u32 {
        self.fee_bps
    }
}
