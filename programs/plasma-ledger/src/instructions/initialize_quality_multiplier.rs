//! src/instructions/initialize_quality_multiplier.rs
//!
//! @description
//! Creates the `QualityMultiplier` record with every grade at 1.0.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::events::QualityMultiplierUpdated;
use crate::state::{LedgerConfig, QualityMultiplier, LEDGER_CONFIG_SEED, MULTIPLIER_ONE, QUALITY_MULTIPLIER_SEED};

pub fn initialize_quality_multiplier(ctx: Context<InitializeQualityMultiplier>) -> Result<()> {
    let multiplier = &mut ctx.accounts.quality_multiplier;
    multiplier.admin = ctx.accounts.admin.key();
    multiplier.common = MULTIPLIER_ONE;
    multiplier.bump = ctx.bumps.quality_multiplier;

    emit!(QualityMultiplierUpdated { previous: 0, common: multiplier.common });
    msg!("Quality multiplier initialized: common = {}", multiplier.common);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeQualityMultiplier<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + QualityMultiplier::INIT_SPACE,
        seeds = [QUALITY_MULTIPLIER_SEED],
        bump
    )]
    pub quality_multiplier: Account<'info, QualityMultiplier>,

    #[account(
        seeds = [LEDGER_CONFIG_SEED],
        bump = ledger_config.bump,
        has_one = admin @ PlasmaLedgerErrorCode::UnauthorizedCaller,
    )]
    pub ledger_config: Account<'info, LedgerConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}
