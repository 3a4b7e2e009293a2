//! src/lib.rs
//!
//! @description
//! This is the main entry point for the Plasma Ledger on-chain program.
//! It defines the program's instructions, state accounts, and custom errors.
//! The program turns scored game results into PLASMA token rewards, keeps each
//! player's rating, and manages custody of the token's mint and freeze
//! authorities between an administrator and a program-derived address.
//!
//! The program is built using the Anchor framework for Solana. Token movements go
//! through the SPL Token program via `anchor-spl`.

use anchor_lang::prelude::*;

// Import local modules.
pub mod error;
pub mod events;
pub mod instructions;
pub mod logic;
pub mod state;
pub mod utils;

// Make their contents available for the program.
use instructions::*;
use logic::{AvgStats, NftQualities};

// Program ID
declare_id!("4NS5Vx2hAjeB6RxHA4XcY238FTCPyS6xP24K8qVcXQsz");

#[program]
pub mod plasma_ledger {
    use super::*;

    // ========================================
    // Ledger & Custody Instructions
    // ========================================

    /// Creates the token mint, the storage vault and the `LedgerConfig` singleton.
    /// This should be called once after the program is deployed.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, decimals: u8) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx, decimals)
    }

    /// Mints tokens with the current custodian's mint authority.
    pub fn mint_token(ctx: Context<MintToken>, amount: u64) -> Result<()> {
        instructions::mint_token::mint_token(ctx, amount)
    }

    /// Hands mint authority, freeze authority and vault ownership to the program.
    pub fn transfer_authority(ctx: Context<TransferAuthority>) -> Result<()> {
        instructions::transfer_authority::transfer_authority(ctx)
    }

    /// Returns every custody capability from the program to the administrator.
    pub fn return_authority(ctx: Context<ReturnAuthority>) -> Result<()> {
        instructions::return_authority::return_authority(ctx)
    }

    pub fn freeze_storage(ctx: Context<FreezeStorage>) -> Result<()> {
        instructions::freeze_storage::freeze_storage(ctx)
    }

    pub fn thaw_storage(ctx: Context<FreezeStorage>) -> Result<()> {
        instructions::freeze_storage::thaw_storage(ctx)
    }

    // ========================================
    // Reward Configuration Instructions
    // ========================================

    /// Creates the `QualityMultiplier` record with every grade at 1.0.
    pub fn initialize_quality_multiplier(ctx: Context<InitializeQualityMultiplier>) -> Result<()> {
        instructions::initialize_quality_multiplier::initialize_quality_multiplier(ctx)
    }

    /// Recomputes the common multiplier from season statistics.
    pub fn update_quality_multiplier(
        ctx: Context<UpdateQualityMultiplier>,
        stats: AvgStats,
        nfts: NftQualities,
    ) -> Result<()> {
        instructions::update_quality_multiplier::update_quality_multiplier(ctx, stats, nfts)
    }

    /// Opens a reward season and sizes the base rewards.
    pub fn initialize_reward(ctx: Context<InitializeReward>, epoch_start: Option<i64>) -> Result<()> {
        instructions::initialize_reward::initialize_reward(ctx, epoch_start)
    }

    /// Recomputes the base rewards for the current day and multiplier.
    pub fn recalculate_reward(ctx: Context<RecalculateReward>) -> Result<()> {
        instructions::recalculate_reward::recalculate_reward(ctx)
    }

    // ========================================
    // Player & Round Instructions
    // ========================================

    pub fn create_player(ctx: Context<CreatePlayer>) -> Result<()> {
        instructions::create_player::create_player(ctx)
    }

    pub fn create_players_stats(ctx: Context<CreatePlayersStats>, identifier: u64) -> Result<()> {
        instructions::create_players_stats::create_players_stats(ctx, identifier)
    }

    pub fn start_game(ctx: Context<StartGame>, identifier: u64) -> Result<()> {
        instructions::start_game::start_game(ctx, identifier)
    }

    /// Publishes a round's results and closes its accounts.
    pub fn end_game(ctx: Context<EndGame>, identifier: u64) -> Result<()> {
        instructions::end_game::end_game(ctx, identifier)
    }

    /// Scores one game result: credits the reward and updates the rating.
    pub fn calculate_reward(
        ctx: Context<CalculateReward>,
        placement: u8,
        kills: u8,
        identifier: u64,
    ) -> Result<()> {
        instructions::calculate_reward::calculate_reward(ctx, placement, kills, identifier)
    }

    /// Transfers a player's claimable balance from the vault to their wallet.
    pub fn user_claim(ctx: Context<UserClaim>) -> Result<()> {
        instructions::user_claim::user_claim(ctx)
    }

    /// Sells tokens to the vault; half of the amount (rounded up) is burned.
    pub fn user_sell(ctx: Context<UserSell>, amount: u64) -> Result<()> {
        instructions::user_sell::user_sell(ctx, amount)
    }
}
