//! src/instructions/recalculate_reward.rs
//!
//! @description
//! Recomputes the base rewards in full for the current day and the current
//! quality multiplier. The administrator calls it daily and after every
//! `update_quality_multiplier`.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::events::RewardParamsUpdated;
use crate::state::{
    LedgerConfig, QualityMultiplier, RewardConfig, LEDGER_CONFIG_SEED, QUALITY_MULTIPLIER_SEED,
    REWARD_CONFIG_SEED,
};

pub fn recalculate_reward(ctx: Context<RecalculateReward>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let quality = ctx.accounts.quality_multiplier.common;
    let reward = &mut ctx.accounts.reward_config;
    let params = reward.recompute(quality, ctx.accounts.ledger_config.decimals, now)?;

    emit!(RewardParamsUpdated {
        victory: params.victory,
        top_five: params.top_five,
        top_ten: params.top_ten,
        kill: params.kill,
        days: reward.days,
        quality_multiplier: quality,
    });
    msg!("Rewards recalculated for day {}", reward.days);
    Ok(())
}

#[derive(Accounts)]
pub struct RecalculateReward<'info> {
    #[account(
        mut,
        seeds = [REWARD_CONFIG_SEED],
        bump = reward_config.bump,
        has_one = admin @ PlasmaLedgerErrorCode::UnauthorizedCaller,
        has_one = quality_multiplier,
    )]
    pub reward_config: Account<'info, RewardConfig>,

    #[account(seeds = [QUALITY_MULTIPLIER_SEED], bump = quality_multiplier.bump)]
    pub quality_multiplier: Account<'info, QualityMultiplier>,

    #[account(seeds = [LEDGER_CONFIG_SEED], bump = ledger_config.bump)]
    pub ledger_config: Account<'info, LedgerConfig>,

    pub admin: Signer<'info>,
}
