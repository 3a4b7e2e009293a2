//! src/logic/mod.rs
//!
//! @description
//! This module serves as the central hub for the program's pure business logic.
//! Nothing here reads the clock or touches accounts, which keeps every rule
//! deterministic and testable off-chain. Instructions gather inputs, call into
//! these modules, and apply the results.
//!
//! @modules
//! - `fixed_point`: Deterministic 18-decimal fixed-point arithmetic.
//! - `tiers`: First-match-wins range tables.
//! - `reward_curve`: The adoption-decay curve that sizes base rewards.
//! - `quality`: The quality multiplier derived from season statistics.
//! - `payout`: Game result to reward and rating delta.
//! - `token_flow`: Claim and sell balance rules.

pub mod fixed_point;
pub mod tiers;
pub mod reward_curve;
pub mod quality;
pub mod payout;
pub mod token_flow;

pub use fixed_point::*;
pub use tiers::*;
pub use reward_curve::*;
pub use quality::*;
pub use payout::*;
pub use token_flow::*;
