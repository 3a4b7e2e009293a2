//! src/instructions/user_claim.rs
//!
//! @description
//! Pays a player's accrued `claimable` balance out of the storage vault into the
//! player's associated token account, creating that account if needed.
//!
//! @accounts
//! - `user`: The player's owning wallet. Signs and pays for the token account.
//! - `player`: The player's record at `["player", user]`.
//! - `vault`: The storage vault the tokens come from.
//! - `custodian`: The current custodian, co-authorizing the vault debit.
//!
//! @logic
//! 1. Nothing to claim is a successful no-op.
//! 2. Rejects a frozen vault and a vault that cannot cover the claim.
//! 3. Transfers the full balance and zeroes `claimable`.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::error::PlasmaLedgerErrorCode;
use crate::events::TokensClaimed;
use crate::logic::token_flow::plan_claim;
use crate::state::{LedgerConfig, Player, LEDGER_CONFIG_SEED, PLAYER_SEED};
use crate::utils::with_custodian_seeds;

pub fn user_claim(ctx: Context<UserClaim>) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let amount = plan_claim(accounts.player.claimable, accounts.vault.amount, accounts.vault.is_frozen())?;
    if amount == 0 {
        msg!("Nothing to claim for {}", accounts.user.key());
        return Ok(());
    }

    accounts.ledger_config.authorize_vault(accounts.vault.owner)?;

    with_custodian_seeds(&accounts.ledger_config, &accounts.custodian.to_account_info(), |signer_seeds| {
        let cpi_accounts = Transfer {
            from: accounts.vault.to_account_info(),
            to: accounts.player_token.to_account_info(),
            authority: accounts.custodian.to_account_info(),
        };
        let cpi_program = accounts.token_program.to_account_info();
        token::transfer(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds), amount)
    })?;

    let claimed = accounts.player.take_claimable();

    emit!(TokensClaimed { player: accounts.player.identity, amount: claimed });
    msg!("Player {} claimed {} tokens", accounts.player.identity, claimed);
    Ok(())
}

#[derive(Accounts)]
pub struct UserClaim<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = mint @ PlasmaLedgerErrorCode::InvalidMint,
        has_one = vault @ PlasmaLedgerErrorCode::InvalidVault,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [PLAYER_SEED, user.key().as_ref()],
        bump = player.bump,
    )]
    pub player: Account<'info, Player>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Recipient's token account (auto-created if needed)
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = user,
    )]
    pub player_token: Account<'info, TokenAccount>,

    /// CHECK: Must be the current custodian; its signature is checked in `with_custodian_seeds`.
    #[account(address = ledger_config.custodian() @ PlasmaLedgerErrorCode::UnauthorizedCaller)]
    pub custodian: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
