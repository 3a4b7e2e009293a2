//! src/logic/tiers.rs
//!
//! @description
//! Generic piecewise-range lookup used by every tier-based decision in the program:
//! the rating multiplier, the rating delta and the placement reward.
//!
//! A table is an ordered list of `(RangeTier, value)` rows evaluated first-match-wins.
//! `TierTable::new` rejects tables that could ever fail to resolve, so a constructed
//! table always yields a value for any `i64` level, negative ones included.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;

/// The closed set of range shapes a tier row can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeTier {
    /// Inclusive `[start, end]`.
    Bounded { start: i64, end: i64 },
    /// Matches exactly one level.
    Exact(i64),
    /// Matches every level. Must be the single, final row of a table.
    Default,
}

impl RangeTier {
    pub fn matches(&self, level: i64) -> bool {
        match *self {
            RangeTier::Bounded { start, end } => start <= level && level <= end,
            RangeTier::Exact(value) => value == level,
            RangeTier::Default => true,
        }
    }
}

/// Returns the value of the first row matching `level`, or `None` when no row matches.
pub fn resolve_first_match<T: Copy>(rows: &[(RangeTier, T)], level: i64) -> Option<T> {
    rows.iter()
        .find(|(tier, _)| tier.matches(level))
        .map(|(_, value)| *value)
}

/// A tier table that is known to resolve every level.
#[derive(Clone, Copy, Debug)]
pub struct TierTable<'a, T: Copy> {
    rows: &'a [(RangeTier, T)],
}

impl<'a, T: Copy> TierTable<'a, T> {
    pub fn new(rows: &'a [(RangeTier, T)]) -> Result<Self> {
        let (last, body) = rows
            .split_last()
            .ok_or_else(|| error!(PlasmaLedgerErrorCode::InvalidRange))?;
        require!(last.0 == RangeTier::Default, PlasmaLedgerErrorCode::InvalidRange);

        for (tier, _) in body {
            match *tier {
                RangeTier::Default => return err!(PlasmaLedgerErrorCode::InvalidRange),
                RangeTier::Bounded { start, end } => {
                    require!(start <= end, PlasmaLedgerErrorCode::InvalidRange)
                }
                RangeTier::Exact(_) => {}
            }
        }

        Ok(Self { rows })
    }

    pub fn resolve(&self, level: i64) -> Result<T> {
        resolve_first_match(self.rows, level).ok_or_else(|| error!(PlasmaLedgerErrorCode::InvalidRange))
    }
}
