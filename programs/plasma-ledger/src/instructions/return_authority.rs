//! src/instructions/return_authority.rs
//!
//! @description
//! Returns custody from the program to the administrator. The PDA signs the three
//! `set_authority` CPIs back to the admin, then the `ProgramAuthority` account is
//! closed and its rent refunded to the admin.
//!
//! The vault must be thawed first.

use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, Mint, SetAuthority, Token, TokenAccount};
use crate::error::PlasmaLedgerErrorCode;
use crate::events::CustodyTransferred;
use crate::state::{
    AuthorityHoldings, LedgerConfig, ProgramAuthority, LEDGER_CONFIG_SEED, PROGRAM_AUTHORITY_SEED,
};

pub fn return_authority(ctx: Context<ReturnAuthority>) -> Result<()> {
    let holdings = AuthorityHoldings::from_accounts(&ctx.accounts.mint, &ctx.accounts.vault);
    let transition = ctx
        .accounts
        .ledger_config
        .plan_return_to_admin(&ctx.accounts.admin.key(), &holdings)?;

    let mint_key = ctx.accounts.mint.key();
    let bump = [ctx.accounts.program_authority.bump];
    let seeds = ProgramAuthority::signer_seeds(&mint_key, &bump);
    let signer_seeds: &[&[&[u8]]] = &[&seeds[..]];

    let mint_info = ctx.accounts.mint.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    for (target, authority_type) in [
        (&mint_info, AuthorityType::MintTokens),
        (&mint_info, AuthorityType::FreezeAccount),
        (&vault_info, AuthorityType::AccountOwner),
    ] {
        let cpi_accounts = SetAuthority {
            current_authority: ctx.accounts.program_authority.to_account_info(),
            account_or_mint: target.clone(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::set_authority(cpi_ctx, authority_type, Some(transition.to))?;
    }

    ctx.accounts.ledger_config.commit(&transition);

    emit!(CustodyTransferred {
        from: transition.from,
        to: transition.to,
        custody: transition.next,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Custody returned to {}", transition.to);
    Ok(())
}

#[derive(Accounts)]
pub struct ReturnAuthority<'info> {
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
        mut,
        seeds = [PROGRAM_AUTHORITY_SEED, mint.key().as_ref()],
        bump = program_authority.bump,
        close = admin,
    )]
    pub program_authority: Account<'info, ProgramAuthority>,

    pub token_program: Program<'info, Token>,
}
