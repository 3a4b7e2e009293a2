//! src/state/players_stats.rs
//!
//! @description
//! Defines the `PlayersStats` account: the ordered results of one round, at
//! `["players_stats", identifier]`. Capacity is fixed at `MAX_PLAYERS_PER_GAME`
//! and a full account rejects further entries instead of overwriting them.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::state::constants::MAX_PLAYERS_PER_GAME;

/// One scored result within a round.
#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub reward: u64,
    pub id: Pubkey,
    pub placement: u8,
    pub kills: u8,
}

#[account]
#[derive(InitSpace)]
pub struct PlayersStats {
    pub identifier: u64,
    #[max_len(MAX_PLAYERS_PER_GAME)]
    pub players: Vec<Stats>,
    /// Number of results appended so far.
    pub counter: u64,
    pub bump: u8,
}

impl PlayersStats {
    pub fn append(&mut self, stat: Stats) -> Result<()> {
        require!(
            self.players.len() < MAX_PLAYERS_PER_GAME,
            PlasmaLedgerErrorCode::AccountCapacityExceeded
        );
        self.players.push(stat);
        self.counter += 1;
        Ok(())
    }

    pub fn total_rewarded(&self) -> Result<u64> {
        self.players.iter().try_fold(0u64, |total, stat| {
            total
                .checked_add(stat.reward)
                .ok_or_else(|| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
        })
    }
}
