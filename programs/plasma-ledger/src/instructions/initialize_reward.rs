//! src/instructions/initialize_reward.rs
//!
//! @description
//! Opens a reward season: creates the `RewardConfig` and sizes the four base
//! rewards from the adoption curve at the current clock.
//!
//! @accounts
//! - `reward_config`: The season record to be created.
//! - `quality_multiplier`: Supplies the `common` multiplier the amounts are divided by.
//! - `ledger_config`: Supplies the administrator and the mint decimals.
//!
//! @logic
//! 1. `epoch_start` defaults to `DEFAULT_EPOCH_START` when omitted.
//! 2. Runs the curve for `Clock::unix_timestamp`. A season that has not started yet
//!    is rejected with `EpochNotStarted`.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::events::RewardParamsUpdated;
use crate::state::{
    LedgerConfig, QualityMultiplier, RewardConfig, DEFAULT_EPOCH_START, LEDGER_CONFIG_SEED,
    QUALITY_MULTIPLIER_SEED, REWARD_CONFIG_SEED,
};

pub fn initialize_reward(ctx: Context<InitializeReward>, epoch_start: Option<i64>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let quality = ctx.accounts.quality_multiplier.common;

    let reward = &mut ctx.accounts.reward_config;
    reward.admin = ctx.accounts.admin.key();
    reward.quality_multiplier = ctx.accounts.quality_multiplier.key();
    reward.epoch_start = epoch_start.unwrap_or(DEFAULT_EPOCH_START);
    reward.bump = ctx.bumps.reward_config;

    let params = reward.recompute(quality, ctx.accounts.ledger_config.decimals, now)?;

    emit!(RewardParamsUpdated {
        victory: params.victory,
        top_five: params.top_five,
        top_ten: params.top_ten,
        kill: params.kill,
        days: reward.days,
        quality_multiplier: quality,
    });
    msg!(
        "Reward season opened at {}: victory {}, top five {}, top ten {}, kill {}",
        reward.epoch_start,
        params.victory,
        params.top_five,
        params.top_ten,
        params.kill
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeReward<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + RewardConfig::INIT_SPACE,
        seeds = [REWARD_CONFIG_SEED],
        bump
    )]
    pub reward_config: Account<'info, RewardConfig>,

    #[account(seeds = [QUALITY_MULTIPLIER_SEED], bump = quality_multiplier.bump)]
    pub quality_multiplier: Account<'info, QualityMultiplier>,

    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = admin @ PlasmaLedgerErrorCode::UnauthorizedCaller,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
