//! src/events.rs
//!
//! @description
//! Structured events emitted alongside `msg!` logs so indexers can follow the
//! ledger without parsing log lines.

use anchor_lang::prelude::*;
use crate::state::{CustodyState, Stats};

/// Event emitted when the ledger, its mint and its vault are created
#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub program_authority: Pubkey,
    pub decimals: u8,
}

/// Event emitted when mint authority, freeze authority and vault ownership move
#[event]
pub struct CustodyTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    /// The custody state after the move
    pub custody: CustodyState,
    pub timestamp: i64,
}

/// Event emitted when the storage vault is frozen or thawed
#[event]
pub struct StorageFreezeChanged {
    pub vault: Pubkey,
    pub frozen: bool,
    /// The freeze authority that signed
    pub authority: Pubkey,
}

/// Event emitted whenever the base reward amounts are (re)computed
#[event]
pub struct RewardParamsUpdated {
    pub victory: u64,
    pub top_five: u64,
    pub top_ten: u64,
    pub kill: u64,
    /// Whole days since the season started
    pub days: u64,
    /// Quality multiplier used, scaled by 10^9
    pub quality_multiplier: u64,
}

#[event]
pub struct QualityMultiplierUpdated {
    pub previous: u64,
    pub common: u64,
}

/// Event emitted for every scored game result
#[event]
pub struct RewardCalculated {
    pub player: Pubkey,
    pub identifier: u64,
    pub placement: u8,
    pub kills: u8,
    pub rating_multiplier_tenths: u64,
    pub reward: u64,
    pub rating_delta: i64,
    pub new_rating: u64,
    pub claimable: u64,
}

#[event]
pub struct TokensClaimed {
    pub player: Pubkey,
    pub amount: u64,
}

/// Event emitted when a player sells tokens back to the vault
#[event]
pub struct TokensSold {
    pub player: Pubkey,
    pub amount: u64,
    /// Part of the sale kept by the vault
    pub to_vault: u64,
    /// Part of the sale burned from the supply
    pub burned: u64,
}

/// Event emitted when a round settles. Replaces any on-chain archive of past rounds.
#[event]
pub struct GameSettled {
    pub identifier: u64,
    /// Seconds between `start_game` and `end_game`
    pub duration: u64,
    pub players: Vec<Stats>,
    pub total_rewarded: u64,
}
