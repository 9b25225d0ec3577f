//! Value types passed between the wallet and its collaborators.
//! None of these are persisted by the wallet.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Pool reserves ordered to match the pair they were requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserves {
    pub reserve_in:  u64,
    pub reserve_out: u64,
}

impl Reserves {
    pub fn new(reserve_in: u64, reserve_out: u64) -> Self {
        Self { reserve_in, reserve_out }
    }

    /// Same snapshot seen from the other side of the pair.
    pub fn flipped(self) -> Self {
        Self { reserve_in: self.reserve_out, reserve_out: self.reserve_in }
    }

    pub fn is_empty(&self) -> bool {
        self.reserve_in == 0 || self.reserve_out == 0
    }
}

/// Caller identity and block time for a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub caller:    Pubkey,
    /// Unix timestamp the call executes at.
    pub timestamp: i64,
}

impl CallContext {
    pub fn new(caller: Pubkey, timestamp: i64) -> Self {
        Self { caller, timestamp }
    }
}

/// Owner instruction to move idle balances into a pool.
///
/// `amount_a` / `amount_b` are the exact amounts to authorize; `min_a` /
/// `min_b` are the slippage floors handed to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub token_a:  Pubkey,
    pub token_b:  Pubkey,
    pub amount_a: u64,
    pub amount_b: u64,
    pub min_a:    u64,
    pub min_b:    u64,
    /// Unix timestamp after which the subscription must not execute.
    pub deadline: i64,
}

/// Arguments of the router's liquidity-supply call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddLiquidity {
    pub token_a:          Pubkey,
    pub token_b:          Pubkey,
    pub amount_a_desired: u64,
    pub amount_b_desired: u64,
    pub min_a:            u64,
    pub min_b:            u64,
    /// Address the router pulls from and credits shares to.
    pub recipient:        Pubkey,
    pub deadline:         i64,
}

/// What the router reports back after a successful supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityMinted {
    /// Amount of token A actually pulled.
    pub amount_a: u64,
    /// Amount of token B actually pulled.
    pub amount_b: u64,
    pub shares:   u64,
}

/// Result of a committed subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeReceipt {
    pub shares_minted: u64,
    pub amount_a_used: u64,
    pub amount_b_used: u64,
    /// Authorized but left in custody by the router.
    pub refund_a:      u64,
    pub refund_b:      u64,
    /// Tokens whose prior allowance could not be put back after the supply
    /// committed. Empty on the normal path.
    pub unrestored:    Vec<Pubkey>,
}
