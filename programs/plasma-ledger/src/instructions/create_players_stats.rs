//! src/instructions/create_players_stats.rs
//!
//! @description
//! Opens the results account for one round. `calculate_reward` appends to it and
//! `end_game` closes it.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::state::{LedgerConfig, PlayersStats, LEDGER_CONFIG_SEED, PLAYERS_STATS_SEED};

pub fn create_players_stats(ctx: Context<CreatePlayersStats>, identifier: u64) -> Result<()> {
    let stats = &mut ctx.accounts.players_stats;
    stats.identifier = identifier;
    stats.players = Vec::new();
    stats.counter = 0;
    stats.bump = ctx.bumps.players_stats;

    msg!("Players stats opened for round #{}", identifier);
    Ok(())
}

#[derive(Accounts)]
#[instruction(identifier: u64)]
pub struct CreatePlayersStats<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + PlayersStats::INIT_SPACE,
        seeds = [PLAYERS_STATS_SEED, identifier.to_le_bytes().as_ref()],
        bump
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

    pub system_program: Program<'info, System>,
}
