//! src/instructions/initialize_ledger.rs
//!
//! @description
//! Creates the ledger: the reward token mint, the administrator's storage vault
//! and the `LedgerConfig` singleton. Called once after deployment.
//!
//! @accounts
//! - `ledger_config`: The singleton to be created.
//! - `mint`: New mint keypair. The administrator becomes mint and freeze authority.
//! - `vault`: The administrator's associated token account for the mint.
//! - `program_authority`: The custodian PDA. Only its address and bump are recorded here.
//!
//! @logic
//! 1. Anchor creates the mint and the vault.
//! 2. The ledger starts in `AdminCustody`.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::events::LedgerInitialized;
use crate::state::{CustodyState, LedgerConfig, LEDGER_CONFIG_SEED, PROGRAM_AUTHORITY_SEED};

pub fn initialize_ledger(ctx: Context<InitializeLedger>, decimals: u8) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger_config;
    ledger.admin = ctx.accounts.admin.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.vault = ctx.accounts.vault.key();
    ledger.program_authority = ctx.accounts.program_authority.key();
    ledger.program_authority_bump = ctx.bumps.program_authority;
    ledger.custody = CustodyState::AdminCustody;
    ledger.decimals = decimals;
    ledger.bump = ctx.bumps.ledger_config;

    emit!(LedgerInitialized {
        admin: ledger.admin,
        mint: ledger.mint,
        vault: ledger.vault,
        program_authority: ledger.program_authority,
        decimals,
    });
    msg!("Ledger initialized: mint {}, vault {}", ledger.mint, ledger.vault);
    Ok(())
}

#[derive(Accounts)]
#[instruction(decimals: u8)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerConfig::INIT_SPACE,
        seeds = [LEDGER_CONFIG_SEED],
        bump
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(
        init,
        payer = admin,
        mint::decimals = decimals,
        mint::authority = admin,
        mint::freeze_authority = admin,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        associated_token::mint = mint,
        associated_token::authority = admin,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: Only the derived address is used; the account is created at `transfer_authority`.
    #[account(seeds = [PROGRAM_AUTHORITY_SEED, mint.key().as_ref()], bump)]
    pub program_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
