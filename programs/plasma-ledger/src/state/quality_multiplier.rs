//! src/state/quality_multiplier.rs
//!
//! @description
//! Defines the `QualityMultiplier` account. Each NFT grade has one multiplier,
//! stored as an integer scaled by 10^9. Only the `common` grade exists today.

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct QualityMultiplier {
    pub admin: Pubkey,
    /// Multiplier for the common NFT grade (1_000_000_000 = 1.0).
    pub common: u64,
    pub bump: u8,
}
