//! src/logic/reward_curve.rs
//!
//! @description
//! Sizes the four base payouts (victory, top five, top ten, kill) from an
//! adoption-decay curve. The curve is a logistic function of the days elapsed
//! since the start of the reward season:
//!
//! ```text
//! growth     = c · d^(current_adopters / initial_adopters)
//! decay      = a − b · days^growth
//! saturation = 1 − 1 / (e^decay + 1)
//! scaled     = floor(saturation · 10^decimals)
//! amount     = floor(base_price / (divisor · quality) · scaled)
//! ```
//!
//! With the shipped constants the saturation starts just below 1 on day zero and
//! decays toward 0 as the season ages, so rewards shrink over time.
//!
//! @notes
//! - Every step truncates. The base amounts are exact integer floors of the
//!   rational `base_price · scaled / (divisor · quality)`.
//! - The adopter counts are placeholders (both 1) until adoption is tracked on-chain.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::logic::fixed_point::Decimal;
use crate::state::constants::{
    BASE_PRICE, CURVE_A, CURVE_B, CURVE_C, CURVE_D, KILL_DIVISOR, MULTIPLIER_DECIMALS,
    SEC_IN_DAY, TOP_FIVE_DIVISOR, TOP_TEN_DIVISOR, VICTORY_DIVISOR,
};

/// Base reward amounts in the token's smallest unit.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardParams {
    pub victory: u64,
    pub top_five: u64,
    pub top_ten: u64,
    pub kill: u64,
}

/// The adoption ratio that shapes the curve's growth exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adoption {
    pub current: u64,
    pub initial: u64,
}

/// Everything the curve depends on. Nothing is read from the environment.
#[derive(Clone, Copy, Debug)]
pub struct CurveInputs {
    pub now: i64,
    pub epoch_start: i64,
    /// Quality multiplier scaled by 10^9 (1_000_000_000 = 1.0).
    pub quality_multiplier: u64,
    pub decimals: u8,
    pub adoption: Adoption,
}

/// Whole days between the epoch start and `now`.
pub fn elapsed_days(now: i64, epoch_start: i64) -> Result<u64> {
    let elapsed = now
        .checked_sub(epoch_start)
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
    require!(elapsed >= 0, PlasmaLedgerErrorCode::EpochNotStarted);
    Ok((elapsed / SEC_IN_DAY) as u64)
}

/// `c · d^(current / initial)`
pub fn growth_exponent(adoption: Adoption) -> Result<Decimal> {
    require!(adoption.initial > 0, PlasmaLedgerErrorCode::ArithmeticOverflow);
    let ratio = Decimal::from_ratio(adoption.current as i128, adoption.initial as i128)?;
    Decimal::from_pair(CURVE_C)?.checked_mul(Decimal::from_pair(CURVE_D)?.powd(ratio)?)
}

/// The logistic saturation for a given day, in `[0, 1]`.
///
/// Mathematically the value lies strictly inside `(0, 1)`. It only reaches 0 once
/// `e^decay` drops below 10^-18, roughly three centuries into a season.
pub fn saturation(days: u64, adoption: Adoption) -> Result<Decimal> {
    let growth = growth_exponent(adoption)?;
    let days = Decimal::from_integer(days as i128)?;
    let decay = Decimal::from_pair(CURVE_A)?
        .checked_sub(Decimal::from_pair(CURVE_B)?.checked_mul(days.powd(growth)?)?)?;
    let denominator = decay.exp()?.checked_add(Decimal::ONE)?;
    Decimal::ONE.checked_sub(Decimal::ONE.checked_div(denominator)?)
}

/// `floor(saturation · 10^decimals)`
pub fn scaled_multiplier(saturation: Decimal, decimals: u8) -> Result<u64> {
    let factor = 10u64
        .checked_pow(decimals as u32)
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
    saturation.mul_integer(factor)?.trunc_u64()
}

fn pow10(exponent: u32) -> Result<i128> {
    10i128
        .checked_pow(exponent)
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
}

/// `floor(base_price / (divisor · quality) · scaled)`, evaluated as one integer
/// quotient so the single truncation is the final floor.
///
/// With `price = p / 10^pd`, `divisor = m / 10^md` and `quality = q / 10^9`:
///
/// ```text
/// amount = floor(p · scaled · 10^(md + 9) / (m · q · 10^pd))
/// ```
fn base_amount(divisor: (i128, u32), quality: u64, scaled: u64) -> Result<u64> {
    let (price, price_decimals) = BASE_PRICE;
    let (mantissa, divisor_decimals) = divisor;

    let numerator = price
        .checked_mul(scaled as i128)
        .and_then(|n| n.checked_mul(pow10(divisor_decimals + MULTIPLIER_DECIMALS).ok()?))
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
    let denominator = mantissa
        .checked_mul(quality as i128)
        .and_then(|d| d.checked_mul(pow10(price_decimals).ok()?))
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
    require!(denominator > 0, PlasmaLedgerErrorCode::InvalidQualityMultiplier);

    u64::try_from(numerator / denominator).map_err(|_| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
}

/// Computes the four base reward amounts.
pub fn compute_reward_params(inputs: &CurveInputs) -> Result<RewardParams> {
    require!(inputs.quality_multiplier > 0, PlasmaLedgerErrorCode::InvalidQualityMultiplier);

    let days = elapsed_days(inputs.now, inputs.epoch_start)?;
    let scaled = scaled_multiplier(saturation(days, inputs.adoption)?, inputs.decimals)?;
    let quality = inputs.quality_multiplier;

    Ok(RewardParams {
        victory: base_amount(VICTORY_DIVISOR, quality, scaled)?,
        top_five: base_amount(TOP_FIVE_DIVISOR, quality, scaled)?,
        top_ten: base_amount(TOP_TEN_DIVISOR, quality, scaled)?,
        kill: base_amount(KILL_DIVISOR, quality, scaled)?,
    })
}
