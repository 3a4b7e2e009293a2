//! Custody hand-off between the administrator and the program authority, with
//! the token program's authority fields modeled in memory.

use anchor_lang::prelude::*;
use plasma_ledger::error::PlasmaLedgerErrorCode;
use plasma_ledger::state::{AuthorityHoldings, CustodyState, CustodyTransition, FreezeAction, LedgerConfig};

/// The SPL authority fields the custody instructions reassign, plus the
/// vault's freeze flag.
struct TokenModel {
    holdings: AuthorityHoldings,
    authority_account_lamports: u64,
}

impl TokenModel {
    fn set_all(&mut self, transition: &CustodyTransition) {
        self.holdings = AuthorityHoldings { vault_frozen: self.holdings.vault_frozen, ..held_by(transition.to) };
    }

    fn apply(&mut self, action: Option<FreezeAction>) {
        match action {
            Some(FreezeAction::Freeze) => self.holdings.vault_frozen = true,
            Some(FreezeAction::Thaw) => self.holdings.vault_frozen = false,
            None => {}
        }
    }
}

fn held_by(holder: Pubkey) -> AuthorityHoldings {
    AuthorityHoldings {
        mint_authority: Some(holder),
        freeze_authority: Some(holder),
        vault_owner: holder,
        vault_frozen: false,
    }
}

fn ledger() -> LedgerConfig {
    LedgerConfig {
        admin: Pubkey::new_unique(),
        mint: Pubkey::new_unique(),
        vault: Pubkey::new_unique(),
        program_authority: Pubkey::new_unique(),
        program_authority_bump: 253,
        custody: CustodyState::AdminCustody,
        decimals: 9,
        bump: 255,
    }
}

const RENT: u64 = 1_113_600;

#[test]
fn transfer_then_return_restores_the_admin() {
    let mut ledger = ledger();
    let admin = ledger.admin;
    let mut admin_lamports = 10 * RENT;
    let mut token = TokenModel {
        holdings: held_by(admin),
        authority_account_lamports: 0,
    };

    // transfer_authority
    let out = ledger.plan_transfer_to_program(&admin, &token.holdings).unwrap();
    token.set_all(&out);
    admin_lamports -= RENT;
    token.authority_account_lamports += RENT;
    ledger.commit(&out);

    assert_eq!(ledger.custody, CustodyState::ProgramCustody);
    assert!(token.holdings.all_held_by(&ledger.program_authority));
    assert!(!token.holdings.all_held_by(&admin));
    assert_eq!(ledger.authorize_freeze(token.holdings.freeze_authority).unwrap(), ledger.program_authority);

    // return_authority
    let back = ledger.plan_return_to_admin(&admin, &token.holdings).unwrap();
    token.set_all(&back);
    admin_lamports += std::mem::take(&mut token.authority_account_lamports);
    ledger.commit(&back);

    assert_eq!(ledger.custody, CustodyState::AdminCustody);
    assert!(token.holdings.all_held_by(&admin));
    assert_eq!(admin_lamports, 10 * RENT);
    assert_eq!(ledger.custodian(), admin);
}

#[test]
fn a_second_transfer_is_rejected_without_side_effects() {
    let mut ledger = ledger();
    let admin = ledger.admin;
    let holdings = held_by(admin);

    let out = ledger.plan_transfer_to_program(&admin, &holdings).unwrap();
    ledger.commit(&out);

    let expected: anchor_lang::error::Error = PlasmaLedgerErrorCode::InvalidCustodyState.into();
    assert_eq!(ledger.plan_transfer_to_program(&admin, &holdings).unwrap_err(), expected);
    assert_eq!(ledger.custody, CustodyState::ProgramCustody);
}

#[test]
fn only_the_admin_can_take_custody_back() {
    let mut ledger = ledger();
    ledger.custody = CustodyState::ProgramCustody;
    let program = ledger.program_authority;
    let holdings = held_by(program);

    let expected: anchor_lang::error::Error = PlasmaLedgerErrorCode::UnauthorizedCaller.into();
    assert_eq!(ledger.plan_return_to_admin(&Pubkey::new_unique(), &holdings).unwrap_err(), expected);
    assert_eq!(ledger.plan_return_to_admin(&program, &holdings).unwrap_err(), expected);
}

#[test]
fn a_frozen_vault_must_be_thawed_before_a_hand_off() {
    let mut ledger = ledger();
    let admin = ledger.admin;
    let mut token = TokenModel { holdings: held_by(admin), authority_account_lamports: 0 };

    token.apply(ledger.plan_freeze_change(&token.holdings, true).unwrap());
    assert!(token.holdings.vault_frozen);

    let frozen: anchor_lang::error::Error = PlasmaLedgerErrorCode::VaultFrozen.into();
    assert_eq!(ledger.plan_transfer_to_program(&admin, &token.holdings).unwrap_err(), frozen);
    assert_eq!(ledger.custody, CustodyState::AdminCustody);
    assert!(token.holdings.all_held_by(&admin));

    token.apply(ledger.plan_freeze_change(&token.holdings, false).unwrap());
    let out = ledger.plan_transfer_to_program(&admin, &token.holdings).unwrap();
    token.set_all(&out);
    ledger.commit(&out);
    assert_eq!(ledger.custody, CustodyState::ProgramCustody);

    // The program authority now holds the freeze capability.
    token.apply(ledger.plan_freeze_change(&token.holdings, true).unwrap());
    assert_eq!(ledger.plan_return_to_admin(&admin, &token.holdings).unwrap_err(), frozen);
    assert_eq!(ledger.plan_freeze_change(&token.holdings, true).unwrap(), None);

    token.apply(ledger.plan_freeze_change(&token.holdings, false).unwrap());
    let back = ledger.plan_return_to_admin(&admin, &token.holdings).unwrap();
    token.set_all(&back);
    ledger.commit(&back);
    assert!(token.holdings.all_held_by(&admin));
    assert!(!token.holdings.vault_frozen);
}
