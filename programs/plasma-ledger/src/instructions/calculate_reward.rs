//! src/instructions/calculate_reward.rs
//!
//! @description
//! Scores one game result for one player. The payout is computed in full from the
//! current `RewardConfig` and the player's rating, then applied: the reward is
//! credited to `claimable`, the rating is updated, and the result is appended to
//! the round's `PlayersStats`.
//!
//! @accounts
//! - `ledger_config`: Supplies the administrator.
//! - `reward_config`: The current base rewards.
//! - `player`: The scored player's record.
//! - `players_stats`: The round's results account, `["players_stats", identifier]`.
//! - `admin`: Must sign. Players cannot score themselves.
//!
//! @notes
//! Results are not deduplicated. Submitting the same result twice pays twice.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::events::RewardCalculated;
use crate::logic::payout::{compute_payout, GameResult};
use crate::state::{
    LedgerConfig, Player, PlayersStats, RewardConfig, Stats, LEDGER_CONFIG_SEED, PLAYERS_STATS_SEED,
    PLAYER_SEED, REWARD_CONFIG_SEED,
};

pub fn calculate_reward(ctx: Context<CalculateReward>, placement: u8, kills: u8, identifier: u64) -> Result<()> {
    let params = ctx.accounts.reward_config.params();
    let player = &mut ctx.accounts.player;
    let outcome = compute_payout(&params, &GameResult { placement, kills }, player.rating)?;

    ctx.accounts.players_stats.append(Stats {
        reward: outcome.gross_reward,
        id: player.identity,
        placement,
        kills,
    })?;
    player.apply_payout(&outcome)?;

    emit!(RewardCalculated {
        player: player.identity,
        identifier,
        placement,
        kills,
        rating_multiplier_tenths: outcome.rating_multiplier_tenths,
        reward: outcome.gross_reward,
        rating_delta: outcome.rating_delta,
        new_rating: player.rating,
        claimable: player.claimable,
    });
    msg!(
        "Round #{}: player {} placed {} with {} kills, reward {}, rating {}",
        identifier,
        player.identity,
        placement,
        kills,
        outcome.gross_reward,
        player.rating
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(placement: u8, kills: u8, identifier: u64)]
pub struct CalculateReward<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = admin @ PlasmaLedgerErrorCode::UnauthorizedCaller,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(seeds = [REWARD_CONFIG_SEED], bump = reward_config.bump)]
    pub reward_config: Account<'info, RewardConfig>,

    #[account(
        mut,
        seeds = [PLAYER_SEED, player.identity.as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    #[account(
        mut,
        seeds = [PLAYERS_STATS_SEED, identifier.to_le_bytes().as_ref()],
        bump = players_stats.bump,
    )]
    pub players_stats: Account<'info, PlayersStats>,

    pub admin: Signer<'info>,
}
