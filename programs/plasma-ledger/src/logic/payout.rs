//! src/logic/payout.rs
//!
//! @description
//! Turns one scored game result into a token amount and a rating update.
//!
//! @logic
//! 1. Rating multiplier from the player's rating: `[0,100]` → 0.8, `[101,200]` → 0.9,
//!    everything above → 1.0. Multipliers are stored in tenths.
//! 2. Rating delta from the placement: 1st +10, 2nd–5th +5, 6th–10th +2, otherwise −2.
//! 3. Placement reward from the placement, valued from `RewardParams`.
//! 4. `kill_reward = kills · params.kill`.
//! 5. `gross = multiplier · (placement_reward + kill_reward)`, truncated.
//! 6. `new_rating = max(0, rating + delta)`.
//!
//! Nothing here touches account state; the `calculate_reward` instruction applies
//! the outcome.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::logic::reward_curve::RewardParams;
use crate::logic::tiers::{RangeTier, TierTable};

const TENTHS: u128 = 10;

/// Rating multiplier tiers, in tenths.
pub const RATING_MULTIPLIER_TIERS: [(RangeTier, u64); 3] = [
    (RangeTier::Bounded { start: 0, end: 100 }, 8),
    (RangeTier::Bounded { start: 101, end: 200 }, 9),
    (RangeTier::Default, 10),
];

pub const RATING_DELTA_TIERS: [(RangeTier, i64); 4] = [
    (RangeTier::Exact(1), 10),
    (RangeTier::Bounded { start: 2, end: 5 }, 5),
    (RangeTier::Bounded { start: 6, end: 10 }, 2),
    (RangeTier::Default, -2),
];

/// Placement reward tiers. Values come from the current `RewardParams`.
pub fn placement_reward_tiers(params: &RewardParams) -> [(RangeTier, u64); 4] {
    [
        (RangeTier::Exact(1), params.victory),
        (RangeTier::Bounded { start: 2, end: 5 }, params.top_five),
        (RangeTier::Bounded { start: 6, end: 10 }, params.top_ten),
        (RangeTier::Default, 0),
    ]
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// 1-based finishing position.
    pub placement: u8,
    pub kills: u8,
}

/// The full breakdown of a payout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayoutOutcome {
    pub rating_multiplier_tenths: u64,
    pub rating_delta: i64,
    pub placement_reward: u64,
    pub kill_reward: u64,
    pub gross_reward: u64,
    pub new_rating: u64,
}

pub fn rating_multiplier(rating: u64) -> Result<u64> {
    let level = i64::try_from(rating).map_err(|_| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
    TierTable::new(&RATING_MULTIPLIER_TIERS)?.resolve(level)
}

pub fn rating_delta(placement: u8) -> Result<i64> {
    TierTable::new(&RATING_DELTA_TIERS)?.resolve(placement as i64)
}

/// `max(0, rating + delta)`
pub fn apply_rating_delta(rating: u64, delta: i64) -> Result<u64> {
    let rating = i64::try_from(rating).map_err(|_| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
    let updated = rating
        .checked_add(delta)
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;
    Ok(updated.max(0) as u64)
}

pub fn compute_payout(params: &RewardParams, result: &GameResult, rating: u64) -> Result<PayoutOutcome> {
    require!(result.placement >= 1, PlasmaLedgerErrorCode::InvalidPlacement);

    let rating_multiplier_tenths = rating_multiplier(rating)?;
    let rating_delta = rating_delta(result.placement)?;

    let placement_tiers = placement_reward_tiers(params);
    let placement_reward = TierTable::new(&placement_tiers)?.resolve(result.placement as i64)?;
    let kill_reward = (result.kills as u64)
        .checked_mul(params.kill)
        .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;

    let base = (placement_reward as u128) + (kill_reward as u128);
    let gross = base * rating_multiplier_tenths as u128 / TENTHS;
    let gross_reward = u64::try_from(gross).map_err(|_| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))?;

    Ok(PayoutOutcome {
        rating_multiplier_tenths,
        rating_delta,
        placement_reward,
        kill_reward,
        gross_reward,
        new_rating: apply_rating_delta(rating, rating_delta)?,
    })
}
