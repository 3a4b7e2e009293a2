//! src/logic/fixed_point.rs
//!
//! @description
//! A deterministic fixed-point decimal used by the reward curve. Every value is an
//! `i128` with 18 implied decimal places, so each validator (and each off-chain
//! client mirroring the computation) produces exactly the same bits.
//!
//! @logic
//! - Arithmetic is checked; overflow and division by zero surface as
//!   `ArithmeticOverflow`.
//! - Conversions to integers truncate toward zero.
//! - `exp` reduces `x = n·ln2 + r` with `|r| <= ln2/2` and sums the Taylor series of `e^r`.
//! - `ln` normalizes into `[1, 2)` by powers of two and sums `2·atanh((y-1)/(y+1))`.
//! - `powd` is `exp(e·ln(b))`, with `0^e = 0` for positive `e`.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;

/// A signed fixed-point number with 18 decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(i128);

impl Decimal {
    pub const DECIMALS: u32 = 18;
    const SCALE: i128 = 1_000_000_000_000_000_000;

    pub const ZERO: Decimal = Decimal(0);
    pub const ONE: Decimal = Decimal(Self::SCALE);

    /// ln(2) truncated to 18 places.
    const LN_2: i128 = 693_147_180_559_945_309;
    /// e^-42 is below the smallest representable step.
    const EXP_UNDERFLOW: i128 = -42 * Self::SCALE;
    const SERIES_TERMS: u32 = 64;

    pub const fn from_raw(raw: i128) -> Self {
        Decimal(raw)
    }

    pub const fn raw(self) -> i128 {
        self.0
    }

    pub fn from_integer(value: i128) -> Result<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Decimal)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    /// Builds `mantissa · 10^-decimals`, e.g. `(10_005, 4)` is 1.0005.
    pub fn from_scaled(mantissa: i128, decimals: u32) -> Result<Self> {
        let raw = if decimals <= Self::DECIMALS {
            let factor = pow10(Self::DECIMALS - decimals)?;
            mantissa.checked_mul(factor)
        } else {
            let divisor = pow10(decimals - Self::DECIMALS)?;
            mantissa.checked_div(divisor)
        };
        raw.map(Decimal)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    /// Convenience for the `(mantissa, decimals)` pairs in `constants.rs`.
    pub fn from_pair(pair: (i128, u32)) -> Result<Self> {
        Self::from_scaled(pair.0, pair.1)
    }

    pub fn from_ratio(numerator: i128, denominator: i128) -> Result<Self> {
        Self::from_integer(numerator)?.checked_div(Self::from_integer(denominator)?)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Decimal)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    pub fn checked_sub(self, other: Self) -> Result<Self> {
        self.0
            .checked_sub(other.0)
            .map(Decimal)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    /// `self · other`, truncated. The integer and fractional parts of `self` are
    /// multiplied separately to keep the intermediate product inside `i128`.
    pub fn checked_mul(self, other: Self) -> Result<Self> {
        let whole = self.0 / Self::SCALE;
        let fraction = self.0 % Self::SCALE;
        whole
            .checked_mul(other.0)
            .and_then(|w| {
                fraction
                    .checked_mul(other.0)
                    .map(|f| f / Self::SCALE)
                    .and_then(|f| w.checked_add(f))
            })
            .map(Decimal)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    /// `self / other`, truncated.
    pub fn checked_div(self, other: Self) -> Result<Self> {
        require!(other.0 != 0, PlasmaLedgerErrorCode::ArithmeticOverflow);
        let quotient = self.0 / other.0;
        let remainder = self.0 % other.0;
        quotient
            .checked_mul(Self::SCALE)
            .and_then(|q| {
                remainder
                    .checked_mul(Self::SCALE)
                    .map(|r| r / other.0)
                    .and_then(|r| q.checked_add(r))
            })
            .map(Decimal)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    pub fn mul_integer(self, factor: u64) -> Result<Self> {
        self.0
            .checked_mul(factor as i128)
            .map(Decimal)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    /// Integer part, rounded toward zero.
    pub fn trunc(self) -> i128 {
        self.0 / Self::SCALE
    }

    /// Integer part as a token amount. Negative values are not representable.
    pub fn trunc_u64(self) -> Result<u64> {
        u64::try_from(self.trunc()).map_err(|_| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }

    pub fn exp(self) -> Result<Self> {
        if self.0 < Self::EXP_UNDERFLOW {
            return Ok(Self::ZERO);
        }

        // n = round(x / ln2), r = x - n·ln2
        let half = if self.0 >= 0 { Self::LN_2 / 2 } else { -Self::LN_2 / 2 };
        let n = self
            .0
            .checked_add(half)
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?
            / Self::LN_2;
        let r = self.0 - n * Self::LN_2;

        let mut sum = Self::SCALE;
        let mut term = Self::SCALE;
        for k in 1..=Self::SERIES_TERMS {
            term = term * r / Self::SCALE / k as i128;
            if term == 0 {
                break;
            }
            sum += term;
        }

        if n >= 0 {
            let shift = u32::try_from(n).map_err(|_| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
            2i128
                .checked_pow(shift)
                .and_then(|factor| sum.checked_mul(factor))
                .map(Decimal)
                .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
        } else {
            // n >= -61 here because of the underflow cut-off above.
            Ok(Decimal(sum >> (-n) as u32))
        }
    }

    pub fn ln(self) -> Result<Self> {
        // The logarithm is only defined for positive inputs.
        require!(self.0 > 0, PlasmaLedgerErrorCode::ArithmeticOverflow);

        let mut y = self.0;
        let mut k: i128 = 0;
        while y >= 2 * Self::SCALE {
            y >>= 1;
            k += 1;
        }
        while y < Self::SCALE {
            y <<= 1;
            k -= 1;
        }

        // y in [1, 2): ln(y) = 2·(z + z^3/3 + z^5/5 + ...), z = (y-1)/(y+1) < 1/3
        let z = (y - Self::SCALE) * Self::SCALE / (y + Self::SCALE);
        let z_squared = z * z / Self::SCALE;
        let mut term = z;
        let mut sum: i128 = 0;
        for i in 0..Self::SERIES_TERMS {
            let contribution = term / (2 * i as i128 + 1);
            if contribution == 0 {
                break;
            }
            sum += contribution;
            term = term * z_squared / Self::SCALE;
        }

        Ok(Decimal(2 * sum + k * Self::LN_2))
    }

    /// `self ^ exponent` for a non-negative base.
    pub fn powd(self, exponent: Self) -> Result<Self> {
        require!(!self.is_negative(), PlasmaLedgerErrorCode::ArithmeticOverflow);
        if exponent.is_zero() {
            return Ok(Self::ONE);
        }
        if exponent == Self::ONE {
            return Ok(self);
        }
        if self.is_zero() {
            require!(!exponent.is_negative(), PlasmaLedgerErrorCode::ArithmeticOverflow);
            return Ok(Self::ZERO);
        }
        self.ln()?.checked_mul(exponent)?.exp()
    }
}

fn pow10(exponent: u32) -> Result<i128> {
    10i128
        .checked_pow(exponent)
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
}
