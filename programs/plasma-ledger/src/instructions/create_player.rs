//! src/instructions/create_player.rs
//!
//! @description
//! A user creates their own `Player` record at `["player", user]`, starting at
//! rating zero with nothing to claim.

use anchor_lang::prelude::*;
use crate::state::{Player, INITIAL_RATING, PLAYER_SEED};

pub fn create_player(ctx: Context<CreatePlayer>) -> Result<()> {
    let player = &mut ctx.accounts.player;
    player.identity = ctx.accounts.user.key();
    player.rating = INITIAL_RATING;
    player.claimable = 0;
    player.nft_count = 0;
    player.bump = ctx.bumps.player;

    msg!("Player {} created", player.identity);
    Ok(())
}

#[derive(Accounts)]
pub struct CreatePlayer<'info> {
    #[account(
        init,
        payer = user,
        space = 8 + Player::INIT_SPACE,
        seeds = [PLAYER_SEED, user.key().as_ref()],
        bump
    )]
    pub player: Account<'info, Player>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}
