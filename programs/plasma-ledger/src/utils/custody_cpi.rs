//! src/utils/custody_cpi.rs
//!
//! @description
//! Signing for token CPIs whose authority is the current custodian.
//!
//! In `AdminCustody` the administrator is the authority and must have signed the
//! transaction, so no seeds are needed. In `ProgramCustody` the program signs for
//! the `["program_authority", mint]` PDA. Either way the caller builds its CPI
//! with `CpiContext::new_with_signer`; an empty seed list behaves like
//! `CpiContext::new`.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;
use crate::state::{CustodyState, LedgerConfig, ProgramAuthority};

/// How the custodian authorizes a CPI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustodianSigner {
    /// The administrator's wallet signed the transaction.
    Wallet,
    /// The program signs for its PDA.
    Program { bump: u8 },
}

/// Resolves the signer for `custodian`, rejecting the wrong key and an
/// administrator that did not sign.
pub fn custodian_signer(ledger: &LedgerConfig, custodian: &Pubkey, is_signer: bool) -> Result<CustodianSigner> {
    require_keys_eq!(*custodian, ledger.custodian(), PlasmaLedgerErrorCode::UnauthorizedCaller);

    match ledger.custody {
        CustodyState::AdminCustody => {
            require!(is_signer, PlasmaLedgerErrorCode::UnauthorizedCaller);
            Ok(CustodianSigner::Wallet)
        }
        CustodyState::ProgramCustody => Ok(CustodianSigner::Program { bump: ledger.program_authority_bump }),
    }
}

/// Runs `invoke` with the signer seeds the custodian needs.
pub fn with_custodian_seeds<'info, R>(
    ledger: &LedgerConfig,
    custodian: &AccountInfo<'info>,
    invoke: impl FnOnce(&[&[&[u8]]]) -> Result<R>,
) -> Result<R> {
    match custodian_signer(ledger, custodian.key, custodian.is_signer)? {
        CustodianSigner::Wallet => invoke(&[]),
        CustodianSigner::Program { bump } => {
            let bump = [bump];
            let seeds = ProgramAuthority::signer_seeds(&ledger.mint, &bump);
            invoke(&[&seeds[..]])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PROGRAM_AUTHORITY_SEED;

    fn ledger(custody: CustodyState) -> LedgerConfig {
        let mint = Pubkey::new_unique();
        let (program_authority, bump) =
            Pubkey::find_program_address(&[PROGRAM_AUTHORITY_SEED, mint.as_ref()], &crate::ID);
        LedgerConfig {
            admin: Pubkey::new_unique(),
            mint,
            vault: Pubkey::new_unique(),
            program_authority,
            program_authority_bump: bump,
            custody,
            decimals: 9,
            bump: 255,
        }
    }

    fn ledger_in_program_custody() -> LedgerConfig {
        ledger(CustodyState::ProgramCustody)
    }

    fn unauthorized() -> anchor_lang::error::Error {
        PlasmaLedgerErrorCode::UnauthorizedCaller.into()
    }

    #[test]
    fn test_admin_custody_requires_the_admin_signature() {
        let ledger = ledger(CustodyState::AdminCustody);
        assert_eq!(custodian_signer(&ledger, &ledger.admin, true).unwrap(), CustodianSigner::Wallet);
        assert_eq!(custodian_signer(&ledger, &ledger.admin, false).unwrap_err(), unauthorized());
    }

    #[test]
    fn test_a_key_other_than_the_custodian_is_rejected() {
        let ledger = ledger(CustodyState::AdminCustody);
        assert_eq!(custodian_signer(&ledger, &ledger.program_authority, true).unwrap_err(), unauthorized());
        assert_eq!(custodian_signer(&ledger, &Pubkey::new_unique(), true).unwrap_err(), unauthorized());

        let ledger = ledger_in_program_custody();
        assert_eq!(custodian_signer(&ledger, &ledger.admin, true).unwrap_err(), unauthorized());
    }

    #[test]
    fn test_program_custody_signs_for_the_pda() {
        let ledger = ledger_in_program_custody();
        let signer = custodian_signer(&ledger, &ledger.program_authority, false).unwrap();
        assert_eq!(signer, CustodianSigner::Program { bump: ledger.program_authority_bump });

        let bump = [ledger.program_authority_bump];
        let seeds = ProgramAuthority::signer_seeds(&ledger.mint, &bump);
        assert_eq!(seeds[0], PROGRAM_AUTHORITY_SEED);
        assert_eq!(seeds[1], ledger.mint.as_ref());
        assert_eq!(
            Pubkey::create_program_address(&seeds, &crate::ID).unwrap(),
            ledger.program_authority
        );
    }

    #[test]
    fn test_seeds_are_passed_through_to_the_cpi() {
        let ledger = ledger_in_program_custody();
        let mut lamports = 0u64;
        let mut data: [u8; 0] = [];
        let owner = crate::ID;
        let info = AccountInfo::new(
            &ledger.program_authority,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        let derived = with_custodian_seeds(&ledger, &info, |signer_seeds| {
            assert_eq!(signer_seeds.len(), 1);
            Pubkey::create_program_address(signer_seeds[0], &crate::ID)
                .map_err(|_| error!(PlasmaLedgerErrorCode::UnauthorizedCaller))
        })
        .unwrap();
        assert_eq!(derived, ledger.program_authority);
    }

    #[test]
    fn test_admin_custody_passes_no_seeds() {
        let ledger = ledger(CustodyState::AdminCustody);
        let mut lamports = 0u64;
        let mut data: [u8; 0] = [];
        let owner = Pubkey::default();
        let info = AccountInfo::new(&ledger.admin, true, true, &mut lamports, &mut data, &owner, false, 0);

        let count = with_custodian_seeds(&ledger, &info, |signer_seeds| Ok(signer_seeds.len())).unwrap();
        assert_eq!(count, 0);
    }
}
