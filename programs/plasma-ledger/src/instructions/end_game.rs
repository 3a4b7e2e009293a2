//! src/instructions/end_game.rs
//!
//! @description
//! Settles a round. The round's results and duration are published in a
//! `GameSettled` event, then the `GameSession` and `PlayersStats` accounts are
//! closed and their rent returned to the administrator.
//!
//! @logic
//! 1. `duration = now - game.started_at`.
//! 2. Emits every appended `Stats` entry in order, plus the total rewarded.
//! 3. Anchor closes both accounts on exit.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::events::GameSettled;
use crate::state::{GameSession, LedgerConfig, PlayersStats, GAME_SEED, LEDGER_CONFIG_SEED, PLAYERS_STATS_SEED};

pub fn end_game(ctx: Context<EndGame>, identifier: u64) -> Result<()> {
    let duration = ctx.accounts.game.duration(Clock::get()?.unix_timestamp)?;
    let stats = &ctx.accounts.players_stats;
    let total_rewarded = stats.total_rewarded()?;

    emit!(GameSettled {
        identifier,
        duration,
        players: stats.players.clone(),
        total_rewarded,
    });
    msg!(
        "Round #{} settled after {}s: {} players, {} tokens rewarded",
        identifier,
        duration,
        stats.players.len(),
        total_rewarded
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(identifier: u64)]
pub struct EndGame<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED, identifier.to_le_bytes().as_ref()],
        bump = game.bump,
        close = admin,
    )]
    pub game: Account<'info, GameSession>,

    #[account(
        mut,
        seeds = [PLAYERS_STATS_SEED, identifier.to_le_bytes().as_ref()],
        bump = players_stats.bump,
        close = admin,
    )]
    pub players_stats: Account<'info, PlayersStats>,

    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = admin @ PlasmaLedgerErrorCode::UnauthorizedCaller,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,
}
