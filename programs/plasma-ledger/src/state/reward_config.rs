//! src/state/reward_config.rs
//!
//! @description
//! Defines the `RewardConfig` account, holding the four base payout amounts for
//! the current reward season. The amounts are recomputed in full by the
//! administrator; they are never edited individually.

use anchor_lang::prelude::*;
use crate::logic::reward_curve::{compute_reward_params, elapsed_days, Adoption, CurveInputs, RewardParams};
use crate::state::constants::{CURRENT_ADOPTERS, INITIAL_ADOPTERS};

#[account]
#[derive(InitSpace)]
pub struct RewardConfig {
    /// The administrator allowed to recompute the amounts.
    pub admin: Pubkey,
    /// The quality multiplier record the amounts are scaled by.
    pub quality_multiplier: Pubkey,

    /// Base reward for first place, in the token's smallest unit.
    pub victory: u64,
    /// Base reward for places two through five.
    pub top_five: u64,
    /// Base reward for places six through ten.
    pub top_ten: u64,
    /// Base reward per kill.
    pub kill: u64,

    /// Unix timestamp at which the season's curve starts.
    pub epoch_start: i64,
    /// Day index the current amounts were computed for.
    pub days: u64,
    /// The `common` multiplier (scaled 10^9) the current amounts were computed with.
    pub multiplier_used: u64,

    pub bump: u8,
}

impl RewardConfig {
    pub fn params(&self) -> RewardParams {
        RewardParams {
            victory: self.victory,
            top_five: self.top_five,
            top_ten: self.top_ten,
            kill: self.kill,
        }
    }

    pub fn set_params(&mut self, params: &RewardParams, days: u64, multiplier_used: u64) {
        self.victory = params.victory;
        self.top_five = params.top_five;
        self.top_ten = params.top_ten;
        self.kill = params.kill;
        self.days = days;
        self.multiplier_used = multiplier_used;
    }

    /// Reruns the reward curve for `now` and stores the result.
    pub fn recompute(&mut self, quality_multiplier: u64, decimals: u8, now: i64) -> Result<RewardParams> {
        let inputs = CurveInputs {
            now,
            epoch_start: self.epoch_start,
            quality_multiplier,
            decimals,
            adoption: Adoption { current: CURRENT_ADOPTERS, initial: INITIAL_ADOPTERS },
        };
        let params = compute_reward_params(&inputs)?;
        self.set_params(&params, elapsed_days(now, self.epoch_start)?, quality_multiplier);
        Ok(params)
    }
}
