//! src/state/custody.rs
//!
//! @description
//! The authority custody state machine. Three SPL capabilities move together:
//! the mint authority, the mint's freeze authority, and ownership of the storage
//! vault. They are held either by the administrator or by the program-derived
//! custodian, never split between the two.
//!
//! ```text
//! AdminCustody --transfer_authority--> ProgramCustody
//! ProgramCustody --return_authority--> AdminCustody
//! ```
//!
//! @logic
//! A transition is planned against a snapshot of the current holders, the
//! instruction performs the `set_authority` CPIs, and only then is the plan
//! committed to `LedgerConfig`. A failed CPI aborts the transaction, so the
//! recorded state never runs ahead of the token program.
//!
//! The token program refuses to change the owner of a frozen account, so both
//! transitions require a thawed vault and fail with `VaultFrozen` before any CPI.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Mint, TokenAccount};
use crate::error::PlasmaLedgerErrorCode;
use crate::state::ledger_config::LedgerConfig;

#[derive(InitSpace, AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustodyState {
    AdminCustody,
    ProgramCustody,
}

/// Snapshot of who holds each capability, as read from the token program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorityHoldings {
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
    pub vault_owner: Pubkey,
    pub vault_frozen: bool,
}

/// Converts an SPL authority field into a plain `Option`.
pub fn authority_key(value: COption<Pubkey>) -> Option<Pubkey> {
    match value {
        COption::Some(key) => Some(key),
        COption::None => None,
    }
}

impl AuthorityHoldings {
    pub fn from_accounts(mint: &Mint, vault: &TokenAccount) -> Self {
        Self {
            mint_authority: authority_key(mint.mint_authority),
            freeze_authority: authority_key(mint.freeze_authority),
            vault_owner: vault.owner,
            vault_frozen: vault.is_frozen(),
        }
    }

    pub fn all_held_by(&self, holder: &Pubkey) -> bool {
        self.mint_authority.as_ref() == Some(holder)
            && self.freeze_authority.as_ref() == Some(holder)
            && self.vault_owner == *holder
    }
}

/// A validated, not yet applied, custody change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustodyTransition {
    pub from: Pubkey,
    pub to: Pubkey,
    pub next: CustodyState,
}

/// The token instruction a freeze or thaw request needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FreezeAction {
    Freeze,
    Thaw,
}

impl LedgerConfig {
    pub fn plan_transfer_to_program(
        &self,
        caller: &Pubkey,
        holdings: &AuthorityHoldings,
    ) -> Result<CustodyTransition> {
        require!(
            self.custody == CustodyState::AdminCustody,
            PlasmaLedgerErrorCode::InvalidCustodyState
        );
        require_keys_eq!(*caller, self.admin, PlasmaLedgerErrorCode::UnauthorizedCaller);
        require!(!holdings.vault_frozen, PlasmaLedgerErrorCode::VaultFrozen);
        require!(holdings.all_held_by(&self.admin), PlasmaLedgerErrorCode::UnauthorizedCaller);

        Ok(CustodyTransition {
            from: self.admin,
            to: self.program_authority,
            next: CustodyState::ProgramCustody,
        })
    }

    pub fn plan_return_to_admin(
        &self,
        caller: &Pubkey,
        holdings: &AuthorityHoldings,
    ) -> Result<CustodyTransition> {
        require!(
            self.custody == CustodyState::ProgramCustody,
            PlasmaLedgerErrorCode::InvalidCustodyState
        );
        require_keys_eq!(*caller, self.admin, PlasmaLedgerErrorCode::UnauthorizedCaller);
        require!(!holdings.vault_frozen, PlasmaLedgerErrorCode::VaultFrozen);
        require!(
            holdings.all_held_by(&self.program_authority),
            PlasmaLedgerErrorCode::UnauthorizedCaller
        );

        Ok(CustodyTransition {
            from: self.program_authority,
            to: self.admin,
            next: CustodyState::AdminCustody,
        })
    }

    /// Records a transition once every CPI has succeeded.
    pub fn commit(&mut self, transition: &CustodyTransition) {
        self.custody = transition.next;
    }

    /// The custodian, if it holds the mint authority.
    pub fn authorize_mint(&self, mint_authority: Option<Pubkey>) -> Result<Pubkey> {
        held_by_custodian(self.custodian(), mint_authority)
    }

    /// The custodian, if it holds the freeze authority.
    pub fn authorize_freeze(&self, freeze_authority: Option<Pubkey>) -> Result<Pubkey> {
        held_by_custodian(self.custodian(), freeze_authority)
    }

    /// Checks the freeze authority and returns the CPI needed to reach `frozen`,
    /// or `None` when the vault is already there.
    pub fn plan_freeze_change(
        &self,
        holdings: &AuthorityHoldings,
        frozen: bool,
    ) -> Result<Option<FreezeAction>> {
        self.authorize_freeze(holdings.freeze_authority)?;

        Ok(match (holdings.vault_frozen, frozen) {
            (false, true) => Some(FreezeAction::Freeze),
            (true, false) => Some(FreezeAction::Thaw),
            _ => None,
        })
    }

    /// The custodian, if it owns the storage vault.
    pub fn authorize_vault(&self, vault_owner: Pubkey) -> Result<Pubkey> {
        held_by_custodian(self.custodian(), Some(vault_owner))
    }
}

fn held_by_custodian(custodian: Pubkey, holder: Option<Pubkey>) -> Result<Pubkey> {
    match holder {
        Some(key) if key == custodian => Ok(custodian),
        _ => err!(PlasmaLedgerErrorCode::UnauthorizedCaller),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LedgerConfig {
        LedgerConfig {
            admin: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            program_authority: Pubkey::new_unique(),
            program_authority_bump: 254,
            custody: CustodyState::AdminCustody,
            decimals: 9,
            bump: 255,
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

    fn frozen(mut holdings: AuthorityHoldings) -> AuthorityHoldings {
        holdings.vault_frozen = true;
        holdings
    }

    fn error(code: PlasmaLedgerErrorCode) -> anchor_lang::error::Error {
        code.into()
    }

    #[test]
    fn test_round_trip_restores_admin_custody() {
        let mut ledger = config();
        let admin = ledger.admin;
        let program = ledger.program_authority;

        let out = ledger.plan_transfer_to_program(&admin, &held_by(admin)).unwrap();
        assert_eq!(out, CustodyTransition { from: admin, to: program, next: CustodyState::ProgramCustody });
        ledger.commit(&out);
        assert_eq!(ledger.custodian(), program);

        let back = ledger.plan_return_to_admin(&admin, &held_by(program)).unwrap();
        assert_eq!(back.to, admin);
        ledger.commit(&back);
        assert_eq!(ledger.custody, CustodyState::AdminCustody);
        assert_eq!(ledger.custodian(), admin);
    }

    #[test]
    fn test_wrong_state_transitions_are_rejected() {
        let mut ledger = config();
        let admin = ledger.admin;
        assert_eq!(
            ledger.plan_return_to_admin(&admin, &held_by(admin)).unwrap_err(),
            error(PlasmaLedgerErrorCode::InvalidCustodyState)
        );

        ledger.custody = CustodyState::ProgramCustody;
        let program = ledger.program_authority;
        assert_eq!(
            ledger.plan_transfer_to_program(&admin, &held_by(program)).unwrap_err(),
            error(PlasmaLedgerErrorCode::InvalidCustodyState)
        );
    }

    #[test]
    fn test_non_admin_caller_is_rejected() {
        let ledger = config();
        let stranger = Pubkey::new_unique();
        assert_eq!(
            ledger.plan_transfer_to_program(&stranger, &held_by(ledger.admin)).unwrap_err(),
            error(PlasmaLedgerErrorCode::UnauthorizedCaller)
        );
    }

    #[test]
    fn test_split_capabilities_block_a_transfer() {
        let ledger = config();
        let admin = ledger.admin;
        let mut holdings = held_by(admin);
        holdings.freeze_authority = Some(Pubkey::new_unique());
        assert_eq!(
            ledger.plan_transfer_to_program(&admin, &holdings).unwrap_err(),
            error(PlasmaLedgerErrorCode::UnauthorizedCaller)
        );

        holdings.freeze_authority = None;
        assert!(!holdings.all_held_by(&admin));
    }

    #[test]
    fn test_capability_checks_follow_the_custodian() {
        let mut ledger = config();
        let admin = ledger.admin;
        assert_eq!(ledger.authorize_mint(Some(admin)).unwrap(), admin);
        assert_eq!(ledger.authorize_freeze(Some(admin)).unwrap(), admin);
        assert_eq!(ledger.authorize_vault(admin).unwrap(), admin);
        assert_eq!(
            ledger.authorize_mint(None).unwrap_err(),
            error(PlasmaLedgerErrorCode::UnauthorizedCaller)
        );

        ledger.custody = CustodyState::ProgramCustody;
        assert_eq!(
            ledger.authorize_freeze(Some(admin)).unwrap_err(),
            error(PlasmaLedgerErrorCode::UnauthorizedCaller)
        );
        let program = ledger.program_authority;
        assert_eq!(ledger.authorize_mint(Some(program)).unwrap(), program);
        assert_eq!(ledger.authorize_vault(program).unwrap(), program);
    }

    #[test]
    fn test_frozen_vault_blocks_both_transitions() {
        let mut ledger = config();
        let admin = ledger.admin;
        assert_eq!(
            ledger.plan_transfer_to_program(&admin, &frozen(held_by(admin))).unwrap_err(),
            error(PlasmaLedgerErrorCode::VaultFrozen)
        );
        assert_eq!(ledger.custody, CustodyState::AdminCustody);

        ledger.custody = CustodyState::ProgramCustody;
        let program = ledger.program_authority;
        assert_eq!(
            ledger.plan_return_to_admin(&admin, &frozen(held_by(program))).unwrap_err(),
            error(PlasmaLedgerErrorCode::VaultFrozen)
        );
        assert_eq!(ledger.custody, CustodyState::ProgramCustody);
    }

    #[test]
    fn test_caller_and_state_are_checked_before_the_freeze() {
        let ledger = config();
        let stranger = Pubkey::new_unique();
        assert_eq!(
            ledger.plan_transfer_to_program(&stranger, &frozen(held_by(ledger.admin))).unwrap_err(),
            error(PlasmaLedgerErrorCode::UnauthorizedCaller)
        );
        assert_eq!(
            ledger.plan_return_to_admin(&ledger.admin, &frozen(held_by(ledger.admin))).unwrap_err(),
            error(PlasmaLedgerErrorCode::InvalidCustodyState)
        );
    }

    #[test]
    fn test_freeze_change_picks_the_needed_instruction() {
        let ledger = config();
        let thawed = held_by(ledger.admin);
        assert_eq!(ledger.plan_freeze_change(&thawed, true).unwrap(), Some(FreezeAction::Freeze));
        assert_eq!(ledger.plan_freeze_change(&frozen(thawed), false).unwrap(), Some(FreezeAction::Thaw));
    }

    #[test]
    fn test_freeze_change_to_the_current_state_is_a_no_op() {
        let ledger = config();
        let thawed = held_by(ledger.admin);
        assert_eq!(ledger.plan_freeze_change(&thawed, false).unwrap(), None);
        assert_eq!(ledger.plan_freeze_change(&frozen(thawed), true).unwrap(), None);
    }

    #[test]
    fn test_freeze_change_requires_the_freeze_authority() {
        let mut ledger = config();
        let mut holdings = held_by(ledger.admin);
        holdings.freeze_authority = Some(Pubkey::new_unique());
        assert_eq!(
            ledger.plan_freeze_change(&holdings, true).unwrap_err(),
            error(PlasmaLedgerErrorCode::UnauthorizedCaller)
        );
        // Checked even when no CPI would be issued.
        assert_eq!(
            ledger.plan_freeze_change(&holdings, false).unwrap_err(),
            error(PlasmaLedgerErrorCode::UnauthorizedCaller)
        );

        ledger.custody = CustodyState::ProgramCustody;
        let program = ledger.program_authority;
        assert_eq!(ledger.plan_freeze_change(&held_by(program), true).unwrap(), Some(FreezeAction::Freeze));
    }
}
