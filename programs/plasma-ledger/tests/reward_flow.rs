//! End-to-end reward flow over the pure layer: a season's base rewards, a round
//! of scored results, claims and sales.

use anchor_lang::prelude::*;
use plasma_ledger::error::PlasmaLedgerErrorCode;
use plasma_ledger::logic::{
    compute_payout, compute_reward_params, plan_claim, plan_sale, Adoption, CurveInputs, GameResult,
    RewardParams,
};
use plasma_ledger::state::{
    Player, PlayersStats, Stats, CURRENT_ADOPTERS, INITIAL_ADOPTERS, MAX_PLAYERS_PER_GAME, MULTIPLIER_ONE,
    SEC_IN_DAY, TOKEN_DECIMALS,
};

fn code(code: PlasmaLedgerErrorCode) -> anchor_lang::error::Error {
    code.into()
}

fn player(rating: u64) -> Player {
    Player { identity: Pubkey::new_unique(), rating, claimable: 0, nft_count: 0, bump: 255 }
}

fn round(identifier: u64) -> PlayersStats {
    PlayersStats { identifier, players: Vec::new(), counter: 0, bump: 255 }
}

/// Scores one result the way `calculate_reward` does.
fn score(params: &RewardParams, stats: &mut PlayersStats, p: &mut Player, placement: u8, kills: u8) -> Result<u64> {
    let outcome = compute_payout(params, &GameResult { placement, kills }, p.rating)?;
    stats.append(Stats { reward: outcome.gross_reward, id: p.identity, placement, kills })?;
    p.apply_payout(&outcome)?;
    Ok(outcome.gross_reward)
}

#[test]
fn victory_at_rating_fifty_pays_eight_tenths() {
    let params = RewardParams { victory: 1000, top_five: 0, top_ten: 0, kill: 0 };
    let mut stats = round(1);
    let mut p = player(50);

    assert_eq!(score(&params, &mut stats, &mut p, 1, 0).unwrap(), 800);
    assert_eq!(p.rating, 60);
    assert_eq!(p.claimable, 800);
    assert_eq!(stats.players[0], Stats { reward: 800, id: p.identity, placement: 1, kills: 0 });
}

#[test]
fn kills_outside_the_placement_tiers_still_pay() {
    let params = RewardParams { victory: 1000, top_five: 400, top_ten: 150, kill: 100 };
    let mut stats = round(2);
    let mut p = player(0);

    assert_eq!(score(&params, &mut stats, &mut p, 15, 3).unwrap(), 240);
    assert_eq!(p.rating, 0);
    assert_eq!(p.claimable, 240);
}

#[test]
fn a_full_round_is_scored_against_day_zero_rewards() {
    let epoch = 1_700_000_000;
    let params = compute_reward_params(&CurveInputs {
        now: epoch + SEC_IN_DAY / 2,
        epoch_start: epoch,
        quality_multiplier: MULTIPLIER_ONE,
        decimals: TOKEN_DECIMALS,
        adoption: Adoption { current: CURRENT_ADOPTERS, initial: INITIAL_ADOPTERS },
    })
    .unwrap();

    let mut stats = round(3);
    let mut players: Vec<Player> = (0..MAX_PLAYERS_PER_GAME).map(|_| player(0)).collect();
    let mut paid = 0u64;
    for (i, p) in players.iter_mut().enumerate() {
        paid += score(&params, &mut stats, p, (i + 1) as u8, (i % 4) as u8).unwrap();
    }

    assert_eq!(stats.counter, MAX_PLAYERS_PER_GAME as u64);
    assert_eq!(stats.total_rewarded().unwrap(), paid);
    // At rating zero everyone earns 0.8 of the base amounts.
    assert_eq!(players[0].claimable, params.victory * 8 / 10);
    assert_eq!(players[0].rating, 10);
    assert_eq!(players[31].rating, 0);

    let mut late = player(0);
    assert_eq!(
        score(&params, &mut stats, &mut late, 33, 0).unwrap_err(),
        code(PlasmaLedgerErrorCode::AccountCapacityExceeded)
    );
    assert_eq!(late.claimable, 0);
}

#[test]
fn claim_then_sell_conserves_value_modulo_burn() {
    let mut p = player(0);
    p.claimable = 1_001;
    let mut vault = 5_000u64;
    let mut wallet = 0u64;
    let mut supply = 5_000u64;

    let amount = plan_claim(p.claimable, vault, false).unwrap();
    vault -= amount;
    wallet += p.take_claimable();
    assert_eq!((vault, wallet, p.claimable), (3_999, 1_001, 0));

    let split = plan_sale(wallet, wallet, false).unwrap();
    wallet -= split.amount;
    vault += split.amount;
    vault -= split.burned;
    supply -= split.burned;

    assert_eq!(split.to_vault, 500);
    assert_eq!(split.burned, 501);
    assert_eq!(vault + wallet, supply);
    assert_eq!(vault, 4_499);
}

#[test]
fn empty_claims_succeed_and_oversized_claims_fail() {
    let mut p = player(0);
    assert_eq!(plan_claim(p.claimable, 0, true).unwrap(), 0);
    assert_eq!(p.take_claimable(), 0);

    assert_eq!(plan_claim(10, 9, false).unwrap_err(), code(PlasmaLedgerErrorCode::InsufficientBalance));
    assert_eq!(plan_sale(0, 9, false).unwrap_err(), code(PlasmaLedgerErrorCode::InvalidAmount));
    assert_eq!(plan_sale(10, 9, false).unwrap_err(), code(PlasmaLedgerErrorCode::InsufficientBalance));
}

#[test]
fn frozen_vault_blocks_movement_but_not_empty_claims() {
    let mut p = player(0);
    p.claimable = 40;
    assert_eq!(plan_claim(p.claimable, 100, true).unwrap_err(), code(PlasmaLedgerErrorCode::VaultFrozen));
    assert_eq!(p.claimable, 40);
    assert_eq!(plan_sale(10, 10, true).unwrap_err(), code(PlasmaLedgerErrorCode::VaultFrozen));

    p.claimable = 0;
    assert_eq!(plan_claim(p.claimable, 100, true).unwrap(), 0);
}
