//! src/error.rs
//!
//! @description
//! This module defines the custom error codes for the Plasma Ledger on-chain program.
//! Every failing check aborts the whole transaction, so no error leaves a partial
//! mutation behind. Configuration errors (`InvalidRange`, `InvalidCustodyState`)
//! indicate a misconfigured deployment; `UnauthorizedCaller` and `InsufficientBalance`
//! are expected rejections surfaced to users.
//!
//! @dependencies
//! - `anchor_lang`: Provides the `error_code` macro for defining custom errors.

use anchor_lang::prelude::*;

#[error_code]
pub enum PlasmaLedgerErrorCode {
    // ========================================
    // Configuration Errors
    // ========================================
    #[msg("Invalid Range: No tier matches the level and the table has no default row.")]
    InvalidRange,

    #[msg("Invalid Custody State: The transition is not allowed from the current custody state.")]
    InvalidCustodyState,

    #[msg("Invalid Quality Multiplier: The multiplier must be greater than zero.")]
    InvalidQualityMultiplier,

    #[msg("Epoch has not started yet.")]
    EpochNotStarted,

    #[msg("Invalid Token Mint: The provided mint does not belong to this ledger.")]
    InvalidMint,

    #[msg("Invalid Vault: The provided vault does not belong to this ledger.")]
    InvalidVault,

    // ========================================
    // Arithmetic Errors
    // ========================================
    #[msg("Arithmetic overflow: The amount exceeds the representable range.")]
    ArithmeticOverflow,

    // ========================================
    // Authorization & Balance Errors
    // ========================================
    #[msg("Unauthorized: The caller does not hold the required authority.")]
    UnauthorizedCaller,

    #[msg("Insufficient balance to perform this action.")]
    InsufficientBalance,

    #[msg("The storage vault is frozen.")]
    VaultFrozen,

    #[msg("Invalid Amount: The amount must be greater than zero.")]
    InvalidAmount,

    // ========================================
    // Gameplay Errors
    // ========================================
    #[msg("Invalid Placement: Placement must be at least 1.")]
    InvalidPlacement,

    #[msg("Players stats account is full.")]
    AccountCapacityExceeded,
}
