//! Collaborator interfaces the wallet consumes but does not implement.
//!
//! Production code backs these with on-chain calls; tests back them with
//! fixed snapshots so quotes and subscriptions are fully deterministic.

use solana_sdk::pubkey::Pubkey;

use crate::error::Result;
use crate::types::{AddLiquidity, LiquidityMinted, Reserves};

/// Read-only reserve queries against the external pool.
pub trait ReserveOracle {
    /// Current reserves for the ordered pair `(token_in, token_out)`, or
    /// `None` when no pool exists for it. Implementations must flip the
    /// snapshot when the pool stores the pair the other way round.
    fn reserves(&self, token_in: &Pubkey, token_out: &Pubkey) -> Result<Option<Reserves>>;
}

/// Fungible-token operations the wallet needs on its own custody.
pub trait TokenLedger {
    fn balance_of(&self, token: &Pubkey, holder: &Pubkey) -> Result<u64>;

    fn allowance(&self, token: &Pubkey, holder: &Pubkey, spender: &Pubkey) -> Result<u64>;

    /// Set (not add to) `spender`'s allowance over `holder`'s `token`.
    fn approve(&mut self, token: &Pubkey, holder: &Pubkey, spender: &Pubkey, amount: u64)
        -> Result<()>;
}

/// The AMM router's liquidity-supply entry point.
pub trait LiquidityRouter {
    /// Address the wallet authorizes as spender.
    fn address(&self) -> Pubkey;

    /// Pull up to the desired amounts through the recipient's allowances and
    /// mint shares to it. Must be all-or-nothing: an `Err` moves no funds.
    fn add_liquidity(&mut self, call: &AddLiquidity, now: i64) -> Result<LiquidityMinted>;
}
