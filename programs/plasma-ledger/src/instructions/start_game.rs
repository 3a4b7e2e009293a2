//! src/instructions/start_game.rs
//!
//! @description
//! Records the start time of a round in a new `GameSession`.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::state::{GameSession, LedgerConfig, GAME_SEED, LEDGER_CONFIG_SEED};

pub fn start_game(ctx: Context<StartGame>, identifier: u64) -> Result<()> {
    let game = &mut ctx.accounts.game;
    game.identifier = identifier;
    game.started_at = Clock::get()?.unix_timestamp;
    game.bump = ctx.bumps.game;

    msg!("Round #{} started at {}", identifier, game.started_at);
    Ok(())
}

#[derive(Accounts)]
#[instruction(identifier: u64)]
pub struct StartGame<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + GameSession::INIT_SPACE,
        seeds = [GAME_SEED, identifier.to_le_bytes().as_ref()],
        bump
    )]
    pub game: Account<'info, GameSession>,

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
