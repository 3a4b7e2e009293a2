//! src/state/game_session.rs
//!
//! @description
//! Defines the `GameSession` account, `["game", identifier]`. It only records when
//! a round started and is closed when the round settles.

use anchor_lang::prelude::*;
use crate::error::PlasmaLedgerErrorCode;

#[account]
#[derive(InitSpace)]
pub struct GameSession {
    pub identifier: u64,
    /// Unix timestamp of `start_game`.
    pub started_at: i64,
    pub bump: u8,
}

impl GameSession {
    /// Seconds between the round start and `now`.
    pub fn duration(&self, now: i64) -> Result<u64> {
        let elapsed = now
            .checked_sub(self.started_at)
            .ok_or(PlasmaLedgerErrorCode::ArithmeticOverflow)?;
        u64::try_from(elapsed).map_err(|_| error!(PlasmaLedgerErrorCode::ArithmeticOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let session = GameSession { identifier: 1, started_at: 1_000, bump: 255 };
        assert_eq!(session.duration(1_000).unwrap(), 0);
        assert_eq!(session.duration(1_900).unwrap(), 900);
        assert!(session.duration(999).is_err());
    }
}
