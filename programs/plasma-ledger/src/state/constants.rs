//! src/state/constants.rs
//!
//! @description
//! This module defines shared constants used across the on-chain program.
//! Centralizing these constants makes the program easier to configure and maintain.
//!
//! Key Constants:
//! - PDA seeds for every program-owned account.
//! - Reward curve parameters (base price, divisors, curve shape).
//! - Capacities and scales used by the round aggregation and multiplier records.
//!
//! Decimal constants are stored as `(mantissa, decimal places)` pairs and lifted
//! into `Decimal` by the reward curve, so no floating point value is ever compiled
//! into the program.

// ========================================
// PDA Seeds
// ========================================
pub const LEDGER_CONFIG_SEED: &[u8] = b"ledger_config";
pub const PROGRAM_AUTHORITY_SEED: &[u8] = b"program_authority";
pub const REWARD_CONFIG_SEED: &[u8] = b"reward_config";
pub const QUALITY_MULTIPLIER_SEED: &[u8] = b"quality_multiplier";
pub const PLAYER_SEED: &[u8] = b"player";
pub const PLAYERS_STATS_SEED: &[u8] = b"players_stats";
pub const GAME_SEED: &[u8] = b"game";

// ========================================
// Token
// ========================================
/// Decimal precision of the PLASMA token.
pub const TOKEN_DECIMALS: u8 = 9;

// ========================================
// Time
// ========================================
pub const SEC_IN_DAY: i64 = 86_400;
/// Start of the first reward season (2022-06-09 18:00:00 UTC).
pub const DEFAULT_EPOCH_START: i64 = 1_654_797_600;

// ========================================
// Reward Curve
// ========================================
/// Reference NFT price that all base rewards are derived from.
pub const BASE_PRICE: (i128, u32) = (150, 0);
pub const VICTORY_DIVISOR: (i128, u32) = (168, 1); // 16.8
pub const TOP_FIVE_DIVISOR: (i128, u32) = (672, 1); // 67.2
pub const TOP_TEN_DIVISOR: (i128, u32) = (168, 0); // 168.0
pub const KILL_DIVISOR: (i128, u32) = (120, 0); // 120.0

pub const CURVE_A: (i128, u32) = (10, 0);
pub const CURVE_B: (i128, u32) = (5, 1); // 0.5
pub const CURVE_C: (i128, u32) = (4, 1); // 0.4
pub const CURVE_D: (i128, u32) = (10_005, 4); // 1.0005

/// Adoption placeholders until a real adoption metric is tracked on-chain.
pub const CURRENT_ADOPTERS: u64 = 1;
pub const INITIAL_ADOPTERS: u64 = 1;

// ========================================
// Quality Multiplier
// ========================================
/// Fixed-point scale of every multiplier and statistic argument (10^9 = 1.0).
pub const MULTIPLIER_DECIMALS: u32 = 9;
pub const MULTIPLIER_ONE: u64 = 1_000_000_000;

pub const TOP_FIVE_WEIGHT: (i128, u32) = (25, 2); // 0.25
pub const TOP_TEN_WEIGHT: (i128, u32) = (1, 1); // 0.1
pub const VICTORY_WEIGHT: (i128, u32) = (1, 0);
pub const KILL_WEIGHT: (i128, u32) = (467, 4); // 0.0467

// ========================================
// Players & Rounds
// ========================================
/// The maximum number of players whose results fit in one round.
pub const MAX_PLAYERS_PER_GAME: usize = 32;
pub const INITIAL_RATING: u64 = 0;
