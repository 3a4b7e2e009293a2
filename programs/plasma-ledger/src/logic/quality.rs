//! src/logic/quality.rs
//!
//! @description
//! Derives the "common" quality multiplier from season-wide average statistics and
//! the NFT payback profile. Every argument is an unsigned integer scaled by 10^9.
//!
//! ```text
//! stats = league · (0.25·top_five + 0.1·top_ten + victory + 0.0467·kills)
//! nft   = durability / payback
//! common = floor(stats · nft · 10^9)
//! ```

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::logic::fixed_point::Decimal;
use crate::state::constants::{
    KILL_WEIGHT, MULTIPLIER_DECIMALS, MULTIPLIER_ONE, TOP_FIVE_WEIGHT, TOP_TEN_WEIGHT, VICTORY_WEIGHT,
};

/// Average per-game statistics. `victory`, `top_five` and `top_ten` are placement
/// probabilities, `kills` is the average kill count, `league` the average rating
/// multiplier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvgStats {
    pub league: u64,
    pub victory: u64,
    pub top_five: u64,
    pub top_ten: u64,
    pub kills: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NftStats {
    /// Number of games an NFT lasts.
    pub durability: u64,
    /// How many times its price an NFT should return over its lifetime (scaled 10^9).
    pub payback: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NftQualities {
    pub common: NftStats,
}

fn scaled(value: u64) -> Result<Decimal> {
    Decimal::from_scaled(value as i128, MULTIPLIER_DECIMALS)
}

pub fn stats_coefficient(stats: &AvgStats) -> Result<Decimal> {
    let weighted = Decimal::from_pair(TOP_FIVE_WEIGHT)?
        .checked_mul(scaled(stats.top_five)?)?
        .checked_add(Decimal::from_pair(TOP_TEN_WEIGHT)?.checked_mul(scaled(stats.top_ten)?)?)?
        .checked_add(Decimal::from_pair(VICTORY_WEIGHT)?.checked_mul(scaled(stats.victory)?)?)?
        .checked_add(Decimal::from_pair(KILL_WEIGHT)?.checked_mul(scaled(stats.kills)?)?)?;
    scaled(stats.league)?.checked_mul(weighted)
}

pub fn nft_coefficient(nft: &NftStats) -> Result<Decimal> {
    require!(nft.payback > 0, PlasmaLedgerErrorCode::InvalidQualityMultiplier);
    Decimal::from_integer(nft.durability as i128)?.checked_div(scaled(nft.payback)?)
}

/// The new `common` multiplier, scaled by 10^9.
pub fn common_multiplier(stats: &AvgStats, nfts: &NftQualities) -> Result<u64> {
    let multiplier = stats_coefficient(stats)?
        .checked_mul(nft_coefficient(&nfts.common)?)?
        .mul_integer(MULTIPLIER_ONE)?
        .trunc_u64()?;
    require!(multiplier > 0, PlasmaLedgerErrorCode::InvalidQualityMultiplier);
    Ok(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u64 = MULTIPLIER_ONE;

    #[test]
    fn test_stats_coefficient() {
        let stats = AvgStats { league: ONE, victory: ONE / 32, top_five: ONE / 8, top_ten: ONE / 6, kills: ONE };
        // 0.25·0.125 + 0.1·0.166666666 + 0.03125 + 0.0467 = 0.1258666666
        let coefficient = stats_coefficient(&stats).unwrap();
        assert_eq!(coefficient.mul_integer(ONE).unwrap().trunc_u64().unwrap(), 125_866_666);
    }

    #[test]
    fn test_common_multiplier() {
        let stats = AvgStats { league: ONE, victory: ONE, top_five: 0, top_ten: 0, kills: 0 };
        let nfts = NftQualities { common: NftStats { durability: 100, payback: 2 * ONE } };
        // 1 · (100 / 2) = 50
        assert_eq!(common_multiplier(&stats, &nfts).unwrap(), 50 * ONE);

        let league = AvgStats { league: ONE / 2, ..stats };
        assert_eq!(common_multiplier(&league, &nfts).unwrap(), 25 * ONE);
    }

    #[test]
    fn test_zero_payback_is_rejected() {
        let stats = AvgStats { league: ONE, victory: ONE, ..Default::default() };
        let nfts = NftQualities { common: NftStats { durability: 10, payback: 0 } };
        let expected: anchor_lang::error::Error = PlasmaLedgerErrorCode::InvalidQualityMultiplier.into();
        assert_eq!(common_multiplier(&stats, &nfts).unwrap_err(), expected);
    }

    #[test]
    fn test_zero_multiplier_is_rejected() {
        let nfts = NftQualities { common: NftStats { durability: 10, payback: ONE } };
        let expected: anchor_lang::error::Error = PlasmaLedgerErrorCode::InvalidQualityMultiplier.into();
        assert_eq!(common_multiplier(&AvgStats::default(), &nfts).unwrap_err(), expected);
    }
}
