//! src/state/player.rs
//!
//! @description
//! Defines the `Player` account, one per identity at `["player", identity]`.
//! The owner creates it; afterwards only payouts and claims mutate it.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::logic::payout::PayoutOutcome;

#[account]
#[derive(InitSpace)]
pub struct Player {
    /// The wallet that owns this record.
    pub identity: Pubkey,
    /// Skill rating. Never drops below zero.
    pub rating: u64,
    /// Tokens earned but not yet transferred to the player's wallet.
    pub claimable: u64,
    /// Number of NFTs registered to the player.
    pub nft_count: u64,
    pub bump: u8,
}

impl Player {
    pub fn apply_payout(&mut self, outcome: &PayoutOutcome) -> Result<()> {
        self.claimable = self
            .claimable
            .checked_add(outcome.gross_reward)
            .ok_or(PlasmaLedgerErrorCode::ArithmeticOverflow)?;
        self.rating = outcome.new_rating;
        Ok(())
    }

    /// Zeroes `claimable` and returns what it held.
    pub fn take_claimable(&mut self) -> u64 {
        std::mem::take(&mut self.claimable)
    }
}
