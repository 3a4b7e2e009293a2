//! src/instructions/mod.rs
//!
//! @description
//! This module acts as the central aggregator for all instruction-specific modules
//! in the Plasma Ledger program. It follows the barrel pattern, exporting the
//! contents of each submodule so `lib.rs` only has to delegate.
//!
//! Each submodule corresponds to a single on-chain instruction (or a pair sharing
//! one `Context`) and contains the instruction logic and its accounts struct.

// Ledger and custody instructions
pub mod initialize_ledger;
pub mod mint_token;
pub mod transfer_authority;
pub mod return_authority;
pub mod freeze_storage;

// Reward configuration instructions
pub mod initialize_quality_multiplier;
pub mod update_quality_multiplier;
pub mod initialize_reward;
pub mod recalculate_reward;

// Player and round instructions
pub mod create_player;
pub mod create_players_stats;
pub mod start_game;
pub mod end_game;
pub mod calculate_reward;
pub mod user_claim;
pub mod user_sell;

// Re-export all public items from the submodules.
pub use initialize_ledger::*;
pub use mint_token::*;
pub use transfer_authority::*;
pub use return_authority::*;
pub use freeze_storage::*;
pub use initialize_quality_multiplier::*;
pub use update_quality_multiplier::*;
pub use initialize_reward::*;
pub use recalculate_reward::*;
pub use create_player::*;
pub use create_players_stats::*;
pub use start_game::*;
pub use end_game::*;
pub use calculate_reward::*;
pub use user_claim::*;
pub use user_sell::*;
