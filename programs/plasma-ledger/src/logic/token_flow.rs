//! src/logic/token_flow.rs
//!
//! @description
//! Balance rules for moving tokens between players and the storage vault.
//!
//! - A claim drains the whole `claimable` balance. Claiming zero is a no-op,
//!   even against a frozen or empty vault.
//! - A sale moves `amount` out of the player's wallet. The vault keeps
//!   `floor(amount / 2)` and the rest is burned.
//! - Any non-empty movement against a frozen vault fails with `VaultFrozen`
//!   before a balance check.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;

/// How a sold amount is split between the vault and the burn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaleSplit {
    pub amount: u64,
    pub to_vault: u64,
    pub burned: u64,
}

pub fn split_sale(amount: u64, wallet_balance: u64) -> Result<SaleSplit> {
    require!(amount > 0, PlasmaLedgerErrorCode::InvalidAmount);
    require!(amount <= wallet_balance, PlasmaLedgerErrorCode::InsufficientBalance);

    let to_vault = amount / 2;
    Ok(SaleSplit { amount, to_vault, burned: amount - to_vault })
}

/// Validates a sale against the player's wallet and the vault state.
pub fn plan_sale(amount: u64, wallet_balance: u64, vault_frozen: bool) -> Result<SaleSplit> {
    require!(amount > 0, PlasmaLedgerErrorCode::InvalidAmount);
    require!(!vault_frozen, PlasmaLedgerErrorCode::VaultFrozen);
    split_sale(amount, wallet_balance)
}

/// The amount a claim transfers out of the vault. Zero means there is nothing
/// to do and no CPI should be issued.
pub fn plan_claim(claimable: u64, vault_balance: u64, vault_frozen: bool) -> Result<u64> {
    if claimable == 0 {
        return Ok(0);
    }
    require!(!vault_frozen, PlasmaLedgerErrorCode::VaultFrozen);
    require!(claimable <= vault_balance, PlasmaLedgerErrorCode::InsufficientBalance);
    Ok(claimable)
}
