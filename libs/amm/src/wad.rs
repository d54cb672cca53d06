//! WAD fixed-point amounts and arithmetic primitives
//!
//! Reserves, swap amounts and liquidity-token quantities are all `Wad`s:
//! unsigned 256-bit integers carrying 18 implied decimal places. Products are
//! formed in 512 bits and narrowed back with an explicit overflow check, so
//! no intermediate ever wraps.
//!
//! ## Rounding
//!
//! - [`w_div`] and [`w_mul`] round to the nearest unit
//! - [`mul_div`] truncates (used wherever the pool must be favoured)
//! - Token-unit down-scaling truncates

use crate::error::{AmmError, Result};
use primitive_types::{U256, U512};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;

/// Decimal places carried by a `Wad`
pub const WAD_DECIMALS: u8 = 18;

pub use elastic_config::limits::{BASIS_POINTS, MAX_TOKEN_DECIMALS};

/// The fixed-point scale, 10^18
pub const WAD: Wad = Wad(U256([1_000_000_000_000_000_000, 0, 0, 0]));

/// Token quantity scaled by 10^18
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wad(U256);

impl Wad {
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// Wrap a raw, already-scaled integer
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> U256 {
        self.0
    }

    /// Whole token units, e.g. `from_whole(1500)` is `1500 * 10^18`
    pub fn from_whole(units: u128) -> Self {
        // u128 * 10^18 < 2^188
        Self(U256::from(units) * WAD.0)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn try_add(self, rhs: Self, operation: &'static str) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(AmmError::Overflow { operation })
    }

    pub fn try_sub(self, rhs: Self, operation: &'static str) -> Result<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(AmmError::Underflow { operation })
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Raw (unscaled) product of two amounts, e.g. a reserve invariant `k`
    pub fn product(self, rhs: Self, operation: &'static str) -> Result<U256> {
        self.0
            .checked_mul(rhs.0)
            .ok_or(AmmError::Overflow { operation })
    }

    /// Normalize an amount in a token's native precision to 18 decimals
    ///
    /// Scaling up is exact; scaling down (tokens with more than 18 decimals)
    /// truncates.
    pub fn from_token_units(raw: U256, decimals: u8) -> Result<Self> {
        if decimals > MAX_TOKEN_DECIMALS {
            return Err(AmmError::UnsupportedDecimals { decimals });
        }
        if decimals <= WAD_DECIMALS {
            let factor = U256::exp10(usize::from(WAD_DECIMALS - decimals));
            raw.checked_mul(factor)
                .map(Self)
                .ok_or(AmmError::Overflow {
                    operation: "token unit normalization",
                })
        } else {
            let factor = U256::exp10(usize::from(decimals - WAD_DECIMALS));
            Ok(Self(raw / factor))
        }
    }

    /// Convert back to a token's native precision, truncating sub-unit dust
    pub fn to_token_units(self, decimals: u8) -> Result<U256> {
        if decimals > MAX_TOKEN_DECIMALS {
            return Err(AmmError::UnsupportedDecimals { decimals });
        }
        if decimals <= WAD_DECIMALS {
            let factor = U256::exp10(usize::from(WAD_DECIMALS - decimals));
            Ok(self.0 / factor)
        } else {
            let factor = U256::exp10(usize::from(decimals - WAD_DECIMALS));
            self.0.checked_mul(factor).ok_or(AmmError::Overflow {
                operation: "token unit denormalization",
            })
        }
    }

    /// Exact conversion from a human-readable decimal
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmmError::NegativeAmount { value });
        }

        let mantissa = U256::from(value.mantissa().unsigned_abs());
        let scale = value.scale();
        let wad_scale = u32::from(WAD_DECIMALS);

        if scale <= wad_scale {
            // mantissa < 2^96, factor <= 10^18
            let factor = U256::exp10((wad_scale - scale) as usize);
            Ok(Self(mantissa * factor))
        } else {
            let factor = U256::exp10((scale - wad_scale) as usize);
            if !(mantissa % factor).is_zero() {
                return Err(AmmError::PrecisionLoss { value });
            }
            Ok(Self(mantissa / factor))
        }
    }

    /// Human-readable decimal, for display and reporting only
    pub fn to_decimal(self) -> Result<Decimal> {
        let overflow = AmmError::Overflow {
            operation: "wad to decimal",
        };
        if self.0 > U256::from(i128::MAX as u128) {
            return Err(overflow);
        }
        let mantissa = self.0.as_u128() as i128;
        Decimal::try_from_i128_with_scale(mantissa, u32::from(WAD_DECIMALS))
            .map(|d| d.normalize())
            .map_err(|_| overflow)
    }
}

impl From<U256> for Wad {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

impl From<u128> for Wad {
    fn from(raw: u128) -> Self {
        Self(U256::from(raw))
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Wad {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        u256_string::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Wad {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        u256_string::deserialize(deserializer).map(Self)
    }
}

/// Serde adapter encoding a `U256` as a base-10 string
pub mod u256_string {
    use primitive_types::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_dec_str(&s)
            .map_err(|_| de::Error::custom(format!("invalid base-10 integer: '{}'", s)))
    }
}

const TWO: U256 = U256([2, 0, 0, 0]);

fn narrow(value: U512, operation: &'static str) -> Result<U256> {
    U256::try_from(value).map_err(|_| AmmError::Overflow { operation })
}

/// `(a * WAD + b / 2) / b`: fixed-point division rounded to nearest
pub fn w_div(a: Wad, b: Wad) -> Result<Wad> {
    if b.is_zero() {
        return Err(AmmError::DivisionByZero { operation: "w_div" });
    }
    let numerator = a.0.full_mul(WAD.0) + U512::from(b.0 / TWO);
    narrow(numerator / U512::from(b.0), "w_div").map(Wad)
}

/// `(a * b + WAD / 2) / WAD`: fixed-point multiplication rounded to nearest
pub fn w_mul(a: Wad, b: Wad) -> Result<Wad> {
    let numerator = a.0.full_mul(b.0) + U512::from(WAD.0 / TWO);
    narrow(numerator / U512::from(WAD.0), "w_mul").map(Wad)
}

/// `a * b / denominator`, truncating
pub fn mul_div(a: Wad, b: Wad, denominator: Wad, operation: &'static str) -> Result<Wad> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero { operation });
    }
    narrow(a.0.full_mul(b.0) / U512::from(denominator.0), operation).map(Wad)
}

/// Absolute difference
pub fn diff(a: Wad, b: Wad) -> Wad {
    if a >= b {
        Wad(a.0 - b.0)
    } else {
        Wad(b.0 - a.0)
    }
}

/// Floor square root via the Babylonian method
///
/// Starts at `ceil(x / 2)`, which is never below the root, and strictly
/// decreases until it settles.
pub fn sqrt(x: U256) -> U256 {
    let mut y = x;
    let mut z = x / TWO + x % TWO;
    while z < y {
        y = z;
        z = (x / z + z) / TWO;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_w_div_rounds_to_nearest() {
        assert_eq!(
            w_div(Wad::from_whole(1000), Wad::from_whole(5000)).unwrap(),
            Wad::from(200_000_000_000_000_000u128)
        );
        // 1/6 rounds up in the last place, 1/3 rounds down
        assert_eq!(
            w_div(Wad::from(1u128), Wad::from(6u128)).unwrap(),
            Wad::from(166_666_666_666_666_667u128)
        );
        assert_eq!(
            w_div(Wad::from(1u128), Wad::from(3u128)).unwrap(),
            Wad::from(333_333_333_333_333_333u128)
        );
    }

    #[test]
    fn test_w_div_by_zero() {
        assert_eq!(
            w_div(Wad::from_whole(1), Wad::ZERO),
            Err(AmmError::DivisionByZero { operation: "w_div" })
        );
    }

    #[test]
    fn test_w_mul_rounds_to_nearest() {
        let half = Wad::from(500_000_000_000_000_000u128);
        assert_eq!(w_mul(Wad::from_whole(3), half).unwrap(), Wad::from(1_500_000_000_000_000_000u128));
        // 0.5 wei rounds up, 0.4 wei rounds down
        assert_eq!(w_mul(Wad::from(1u128), half).unwrap(), Wad::from(1u128));
        assert_eq!(
            w_mul(Wad::from(1u128), Wad::from(400_000_000_000_000_000u128)).unwrap(),
            Wad::ZERO
        );
    }

    #[test]
    fn test_wide_intermediates_do_not_overflow() {
        // a * WAD exceeds 256 bits, the quotient does not
        let large = Wad::from_raw(U256::MAX / TWO);
        assert_eq!(w_div(large, WAD).unwrap(), large);
        assert_eq!(w_mul(large, WAD).unwrap(), large);
    }

    #[test]
    fn test_overflow_is_detected() {
        let max = Wad::from_raw(U256::MAX);
        assert_eq!(
            w_div(max, Wad::from(1u128)),
            Err(AmmError::Overflow { operation: "w_div" })
        );
        assert_eq!(
            w_mul(max, Wad::from_whole(2)),
            Err(AmmError::Overflow { operation: "w_mul" })
        );
        assert!(matches!(
            max.try_add(Wad::from(1u128), "test"),
            Err(AmmError::Overflow { operation: "test" })
        ));
    }

    #[test]
    fn test_mul_div_truncates() {
        let result = mul_div(Wad::from(10u128), Wad::from(10u128), Wad::from(3u128), "test").unwrap();
        assert_eq!(result, Wad::from(33u128));
    }

    #[test]
    fn test_sqrt_accuracy() {
        assert_eq!(sqrt(U256::zero()), U256::zero());
        assert_eq!(sqrt(U256::from(1u8)), U256::from(1u8));
        assert_eq!(sqrt(U256::from(2u8)), U256::from(1u8));
        assert_eq!(sqrt(U256::from(3u8)), U256::from(1u8));
        assert_eq!(sqrt(U256::from(4u8)), U256::from(2u8));
        assert_eq!(sqrt(U256::from(99u8)), U256::from(9u8));
        assert_eq!(sqrt(U256::from(100u8)), U256::from(10u8));

        let k = Wad::from_whole(1000).product(Wad::from_whole(5000), "k").unwrap();
        let root = sqrt(k);
        assert!(root * root <= k);
        assert!((root + U256::one()) * (root + U256::one()) > k);

        let max_root = sqrt(U256::MAX);
        assert_eq!(max_root, U256::from(u128::MAX));
    }

    #[test]
    fn test_diff_is_symmetric() {
        let a = Wad::from_whole(1500);
        let b = Wad::from_whole(1000);
        assert_eq!(diff(a, b), Wad::from_whole(500));
        assert_eq!(diff(b, a), Wad::from_whole(500));
        assert_eq!(diff(a, a), Wad::ZERO);
    }

    #[test]
    fn test_token_unit_normalization() {
        // 5 USDC (6 decimals)
        let usdc = Wad::from_token_units(U256::from(5_000_000u64), 6).unwrap();
        assert_eq!(usdc, Wad::from_whole(5));
        assert_eq!(usdc.to_token_units(6).unwrap(), U256::from(5_000_000u64));

        // 18 decimals is the identity
        let weth = U256::from(1_234_567_890_123_456_789u128);
        assert_eq!(Wad::from_token_units(weth, 18).unwrap().raw(), weth);

        // Down-scaling truncates dust
        let dust = Wad::from(1_999_999_999_999u128);
        assert_eq!(dust.to_token_units(6).unwrap(), U256::from(1u8));

        // 24 decimals scales down on the way in
        let wide = Wad::from_token_units(U256::from(3_000_000u64), 24).unwrap();
        assert_eq!(wide, Wad::from(3u128));
        assert_eq!(wide.to_token_units(24).unwrap(), U256::from(3_000_000u64));

        assert_eq!(
            Wad::from_token_units(U256::one(), 78),
            Err(AmmError::UnsupportedDecimals { decimals: 78 })
        );
    }

    #[test]
    fn test_decimal_conversion() {
        let amount = Wad::from_decimal(dec!(1500.25)).unwrap();
        assert_eq!(amount, Wad::from(1_500_250_000_000_000_000_000u128));
        assert_eq!(amount.to_decimal().unwrap(), dec!(1500.25));

        assert_eq!(Wad::from_decimal(dec!(0)).unwrap(), Wad::ZERO);
        assert!(matches!(
            Wad::from_decimal(dec!(-1)),
            Err(AmmError::NegativeAmount { .. })
        ));
        assert!(matches!(
            Wad::from_decimal(dec!(0.0000000000000000001)),
            Err(AmmError::PrecisionLoss { .. })
        ));
        // Trailing zeros past 18 places are not a loss
        assert_eq!(
            Wad::from_decimal(dec!(1.0000000000000000000)).unwrap(),
            Wad::from_whole(1)
        );
        assert!(Wad::from_raw(U256::MAX).to_decimal().is_err());
    }

    #[test]
    fn test_serde_uses_decimal_strings() {
        let amount = Wad::from_whole(1500);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"1500000000000000000000\"");
        let back: Wad = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
        assert!(serde_json::from_str::<Wad>("\"0x10\"").is_err());
    }
}
