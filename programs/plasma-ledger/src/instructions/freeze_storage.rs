//! src/instructions/freeze_storage.rs
//!
//! @description
//! Freezes or thaws the storage vault. Independent of the custody transitions:
//! whichever principal currently holds the freeze authority signs. Requesting the
//! state the vault is already in succeeds without a CPI.
//!
//! A frozen vault rejects claims and sales until it is thawed.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, FreezeAccount, Mint, ThawAccount, Token, TokenAccount};
use crate::error::PlasmaLedgerErrorCode;
use crate::events::StorageFreezeChanged;
use crate::state::{AuthorityHoldings, FreezeAction, LedgerConfig, LEDGER_CONFIG_SEED};
use crate::utils::with_custodian_seeds;

pub fn freeze_storage(ctx: Context<FreezeStorage>) -> Result<()> {
    set_frozen(ctx, true)
}

pub fn thaw_storage(ctx: Context<FreezeStorage>) -> Result<()> {
    set_frozen(ctx, false)
}

fn set_frozen(ctx: Context<FreezeStorage>, frozen: bool) -> Result<()> {
    let accounts = &ctx.accounts;
    let holdings = AuthorityHoldings::from_accounts(&accounts.mint, &accounts.vault);
    let Some(action) = accounts.ledger_config.plan_freeze_change(&holdings, frozen)? else {
        msg!("Storage vault already {}", if frozen { "frozen" } else { "thawed" });
        return Ok(());
    };
    let authority = accounts.ledger_config.custodian();

    with_custodian_seeds(&accounts.ledger_config, &accounts.custodian.to_account_info(), |signer_seeds| {
        let cpi_program = accounts.token_program.to_account_info();
        let account = accounts.vault.to_account_info();
        let mint = accounts.mint.to_account_info();
        let custodian = accounts.custodian.to_account_info();
        match action {
            FreezeAction::Freeze => {
                let cpi_accounts = FreezeAccount { account, mint, authority: custodian };
                token::freeze_account(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds))
            }
            FreezeAction::Thaw => {
                let cpi_accounts = ThawAccount { account, mint, authority: custodian };
                token::thaw_account(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds))
            }
        }
    })?;

    emit!(StorageFreezeChanged { vault: accounts.vault.key(), frozen, authority });
    msg!("Storage vault {} by {}", if frozen { "frozen" } else { "thawed" }, authority);
    Ok(())
}

#[derive(Accounts)]
pub struct FreezeStorage<'info> {
    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = mint @ PlasmaLedgerErrorCode::InvalidMint,
        has_one = vault @ PlasmaLedgerErrorCode::InvalidVault,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: Must be the current custodian; its signature is checked in `with_custodian_seeds`.
    #[account(address = ledger_config.custodian() @ PlasmaLedgerErrorCode::UnauthorizedCaller)]
    pub custodian: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}
