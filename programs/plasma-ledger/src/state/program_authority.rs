//! src/state/program_authority.rs
//!
//! @description
//! The program-controlled custodian. Its address is the PDA
//! `["program_authority", mint]`, which the program signs for in CPIs.
//!
//! The account only exists while the ledger is in `ProgramCustody`. The
//! administrator pays its rent at `transfer_authority` and receives the lamports
//! back when `return_authority` closes it.

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct ProgramAuthority {
    /// The mint this authority custodies.
    pub mint: Pubkey,
    /// Unix timestamp at which custody was handed to the program.
    pub since: i64,
    pub bump: u8,
}

impl ProgramAuthority {
    /// Signer seeds for a CPI signed by the custodian PDA.
    pub fn signer_seeds<'a>(mint: &'a Pubkey, bump: &'a [u8; 1]) -> [&'a [u8]; 3] {
        [crate::state::constants::PROGRAM_AUTHORITY_SEED, mint.as_ref(), bump]
    }
}
