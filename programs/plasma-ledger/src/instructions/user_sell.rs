//! src/instructions/user_sell.rs
//!
//! @description
//! Sells tokens back to the storage vault. The whole `amount` moves from the
//! player's wallet to the vault, then `amount - floor(amount / 2)` is burned from
//! the vault, so the vault nets `floor(amount / 2)`.
//!
//! @security
//! The player signs the transfer out of their wallet. The burn is signed by the
//! current custodian, so a sale needs the custodian's authorization as well.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};
use crate::error::PlasmaLedgerErrorCode;
use crate::events::TokensSold;
use crate::logic::token_flow::plan_sale;
use crate::state::{LedgerConfig, Player, LEDGER_CONFIG_SEED, PLAYER_SEED};
use crate::utils::with_custodian_seeds;

pub fn user_sell(ctx: Context<UserSell>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let split = plan_sale(amount, accounts.player_token.amount, accounts.vault.is_frozen())?;

    accounts.ledger_config.authorize_vault(accounts.vault.owner)?;

    // --- Player to vault ---
    let cpi_accounts = Transfer {
        from: accounts.player_token.to_account_info(),
        to: accounts.vault.to_account_info(),
        authority: accounts.user.to_account_info(),
    };
    let cpi_program = accounts.token_program.to_account_info();
    token::transfer(CpiContext::new(cpi_program, cpi_accounts), split.amount)?;

    // --- Burn from vault ---
    with_custodian_seeds(&accounts.ledger_config, &accounts.custodian.to_account_info(), |signer_seeds| {
        let cpi_accounts = Burn {
            mint: accounts.mint.to_account_info(),
            from: accounts.vault.to_account_info(),
            authority: accounts.custodian.to_account_info(),
        };
        let cpi_program = accounts.token_program.to_account_info();
        token::burn(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds), split.burned)
    })?;

    emit!(TokensSold {
        player: accounts.player.identity,
        amount: split.amount,
        to_vault: split.to_vault,
        burned: split.burned,
    });
    msg!(
        "Player {} sold {} tokens: {} to storage, {} burned",
        accounts.player.identity,
        split.amount,
        split.to_vault,
        split.burned
    );
    Ok(())
}

#[derive(Accounts)]
pub struct UserSell<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = mint @ PlasmaLedgerErrorCode::InvalidMint,
        has_one = vault @ PlasmaLedgerErrorCode::InvalidVault,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    pub user: Signer<'info>,

    #[account(seeds = [PLAYER_SEED, user.key().as_ref()], bump = player.bump)]
    pub player: Account<'info, Player>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = user,
    )]
    pub player_token: Account<'info, TokenAccount>,

    /// CHECK: Must be the current custodian; its signature is checked in `with_custodian_seeds`.
    #[account(address = ledger_config.custodian() @ PlasmaLedgerErrorCode::UnauthorizedCaller)]
    pub custodian: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}
