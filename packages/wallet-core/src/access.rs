//! Single-owner gate for every mutating entry point.

use solana_sdk::pubkey::Pubkey;

use crate::error::{Result, WalletError};

/// Holds the owner fixed at construction. There is no transfer path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessController {
    owner: Pubkey,
}

impl AccessController {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    /// `Unauthorized` unless `caller` is the owner.
    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        if *caller != self.owner {
            return Err(WalletError::Unauthorized { caller: *caller, owner: self.owner });
        }
        Ok(())
    }
}
