//! src/instructions/mint_token.rs
//!
//! @description
//! Mints new tokens into any token account of the ledger mint. The current
//! custodian must hold the mint authority: the administrator signs in
//! `AdminCustody`, the program signs for its PDA in `ProgramCustody`.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use crate::error::PlasmaLedgerErrorCode;
use crate::state::{authority_key, LedgerConfig, LEDGER_CONFIG_SEED};
use crate::utils::with_custodian_seeds;

pub fn mint_token(ctx: Context<MintToken>, amount: u64) -> Result<()> {
    require!(amount > 0, PlasmaLedgerErrorCode::InvalidAmount);

    let ledger = &ctx.accounts.ledger_config;
    ledger.authorize_mint(authority_key(ctx.accounts.mint.mint_authority))?;

    with_custodian_seeds(ledger, &ctx.accounts.custodian.to_account_info(), |signer_seeds| {
        let cpi_accounts = MintTo {
            mint: ctx.accounts.mint.to_account_info(),
            to: ctx.accounts.destination.to_account_info(),
            authority: ctx.accounts.custodian.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        token::mint_to(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds), amount)
    })?;

    msg!("Minted {} tokens to {}", amount, ctx.accounts.destination.key());
    Ok(())
}

#[derive(Accounts)]
pub struct MintToken<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = mint @ PlasmaLedgerErrorCode::InvalidMint,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = destination.mint == mint.key() @ PlasmaLedgerErrorCode::InvalidMint
    )]
    pub destination: Account<'info, TokenAccount>,

    /// CHECK: Must be the current custodian; its signature is checked in `with_custodian_seeds`.
    #[account(address = ledger_config.custodian() @ PlasmaLedgerErrorCode::UnauthorizedCaller)]
    pub custodian: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}
