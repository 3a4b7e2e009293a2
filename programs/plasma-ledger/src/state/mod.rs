//! src/state/mod.rs
//!
//! @description
//! This module serves as the central hub for all on-chain account state definitions.
//! It aggregates and exports the structs that define the program's accounts, such
//! as `LedgerConfig`, `RewardConfig`, `Player` and `PlayersStats`.

pub mod constants;
pub mod custody;
pub mod ledger_config;
pub mod program_authority;
pub mod reward_config;
pub mod quality_multiplier;
pub mod player;
pub mod players_stats;
pub mod game_session;

pub use constants::*;
pub use custody::*;
pub use ledger_config::*;
pub use program_authority::*;
pub use reward_config::*;
pub use quality_multiplier::*;
pub use player::*;
pub use players_stats::*;
pub use game_session::*;
