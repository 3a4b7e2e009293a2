//! src/state/ledger_config.rs
//!
//! @description
//! Defines the `LedgerConfig` account, a singleton that binds the program to one
//! token mint and one storage vault. It records who the administrator is, where
//! the program-controlled custodian lives, and which of the two currently holds
//! the mint and freeze capabilities.
//!
//! Key features:
//! - Stores the administrative authority wallet.
//! - Pins the PLASMA mint and the storage vault token account.
//! - Tracks the explicit custody state (see `state::custody`).

use anchor_lang::prelude::*;
use crate::state::custody::CustodyState;

/// A singleton account that stores the ledger's global settings.
#[account]
#[derive(InitSpace)]
pub struct LedgerConfig {
    /// The administrator wallet. Only this key may move custody or score games.
    pub admin: Pubkey,

    /// The mint of the reward token.
    pub mint: Pubkey,

    /// The storage vault: the token account that funds claims and receives sales.
    pub vault: Pubkey,

    /// The program-derived custodian, `["program_authority", mint]`.
    pub program_authority: Pubkey,
    pub program_authority_bump: u8,

    /// Which principal currently holds mint authority, freeze authority and
    /// vault ownership.
    pub custody: CustodyState,

    /// Decimal precision of the mint, copied at initialization.
    pub decimals: u8,

    /// Bump seed for the PDA
    pub bump: u8,
}

impl LedgerConfig {
    /// The principal that currently holds every custody capability.
    pub fn custodian(&self) -> Pubkey {
        match self.custody {
            CustodyState::AdminCustody => self.admin,
            CustodyState::ProgramCustody => self.program_authority,
        }
    }
}
