//! src/instructions/transfer_authority.rs
//!
//! @description
//! Moves custody from the administrator to the program. The mint authority, the
//! freeze authority and ownership of the storage vault are all reassigned to the
//! `program_authority` PDA in one transaction.
//!
//! @accounts
//! - `ledger_config`: Must be in `AdminCustody`.
//! - `admin`: The administrator. Signs the three `set_authority` CPIs and pays the
//!   rent of the `ProgramAuthority` account.
//! - `program_authority`: The custodian account, created here.
//!
//! @logic
//! 1. Snapshots the current holders and plans the transition. A frozen vault
//!    is rejected here, since the token program cannot reassign its owner.
//! 2. Reassigns `MintTokens`, `FreezeAccount` and `AccountOwner`.
//! 3. Commits `ProgramCustody` to the ledger.

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, Mint, SetAuthority, Token, TokenAccount};
use crate::error::PlasmaLedgerErrorCode;
use crate::events::CustodyTransferred;
use crate::state::{
    AuthorityHoldings, LedgerConfig, ProgramAuthority, LEDGER_CONFIG_SEED, PROGRAM_AUTHORITY_SEED,
};

pub fn transfer_authority(ctx: Context<TransferAuthority>) -> Result<()> {
    let holdings = AuthorityHoldings::from_accounts(&ctx.accounts.mint, &ctx.accounts.vault);
    let transition = ctx
        .accounts
        .ledger_config
        .plan_transfer_to_program(&ctx.accounts.admin.key(), &holdings)?;

    let mint_info = ctx.accounts.mint.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    for (target, authority_type) in [
        (&mint_info, AuthorityType::MintTokens),
        (&mint_info, AuthorityType::FreezeAccount),
        (&vault_info, AuthorityType::AccountOwner),
    ] {
        let cpi_accounts = SetAuthority {
            current_authority: ctx.accounts.admin.to_account_info(),
            account_or_mint: target.clone(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        token::set_authority(CpiContext::new(cpi_program, cpi_accounts), authority_type, Some(transition.to))?;
    }

    let now = Clock::get()?.unix_timestamp;
    let program_authority = &mut ctx.accounts.program_authority;
    program_authority.mint = ctx.accounts.mint.key();
    program_authority.since = now;
    program_authority.bump = ctx.bumps.program_authority;

    ctx.accounts.ledger_config.commit(&transition);

    emit!(CustodyTransferred {
        from: transition.from,
        to: transition.to,
        custody: transition.next,
        timestamp: now,
    });
    msg!("Custody transferred from {} to {}", transition.from, transition.to);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    #[account(
        mut,
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = admin @ PlasmaLedgerErrorCode::UnauthorizedCaller,
        has_one = mint @ PlasmaLedgerErrorCode::InvalidMint,
        has_one = vault @ PlasmaLedgerErrorCode::InvalidVault,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = admin,
        space = 8 + ProgramAuthority::INIT_SPACE,
        seeds = [PROGRAM_AUTHORITY_SEED, mint.key().as_ref()],
        bump
    )]
    pub program_authority: Account<'info, ProgramAuthority>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
