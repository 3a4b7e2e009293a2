//! src/instructions/update_quality_multiplier.rs
//!
//! @description
//! Recomputes the `common` multiplier from season-wide average statistics and the
//! NFT payback profile (see `logic::quality`). The reward amounts are not touched;
//! the administrator follows up with `recalculate_reward`.
//!
//! @security
//! `has_one = admin` restricts the update to the record's administrator.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::events::QualityMultiplierUpdated;
use crate::logic::quality::{common_multiplier, AvgStats, NftQualities};
use crate::state::{QualityMultiplier, QUALITY_MULTIPLIER_SEED};

pub fn update_quality_multiplier(
    ctx: Context<UpdateQualityMultiplier>,
    stats: AvgStats,
    nfts: NftQualities,
) -> Result<()> {
    let common = common_multiplier(&stats, &nfts)?;

    let multiplier = &mut ctx.accounts.quality_multiplier;
    let previous = multiplier.common;
    multiplier.common = common;

    emit!(QualityMultiplierUpdated { previous, common });
    msg!("Quality multiplier updated: common {} -> {}", previous, common);
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateQualityMultiplier<'info> {
    #[account(
        mut,
        seeds = [QUALITY_MULTIPLIER_SEED],
        bump = quality_multiplier.bump,
        has_one = admin @ PlasmaLedgerErrorCode::UnauthorizedCaller,
    )]
    pub quality_multiplier: Account<'info, QualityMultiplier>,

    pub admin: Signer<'info>,
}
