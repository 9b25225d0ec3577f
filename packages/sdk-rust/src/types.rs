//! Parameter and result types for [`crate::SushiWalletClient`].

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

// ─── Pool ─────────────────────────────────────────────────────────────────────

/// Router pool accounts the wallet reads and supplies into.
///
/// `vault_a` / `vault_b` are in the router's own ordering; the SDK maps the
/// caller's mint ordering onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolAccounts {
    pub pool:    Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub lp_mint: Pubkey,
}

// ─── create_wallet ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreateWalletParams {
    /// Program id of the AMM router the wallet will supply through.
    pub router: Pubkey,
    /// Custody owner; `None` keeps it with the payer.
    pub owner:  Option<Pubkey>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWalletResult {
    pub signature: String,
    pub wallet:    Pubkey,
    pub owner:     Pubkey,
    pub router:    Pubkey,
}

// ─── wallet_info ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub address: Pubkey,
    pub creator: Pubkey,
    pub owner:   Pubkey,
    pub router:  Pubkey,
    pub name:    String,
}

// ─── quote ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuoteParams {
    pub pool:      PoolAccounts,
    pub mint_in:   Pubkey,
    pub mint_out:  Pubkey,
    pub amount_in: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub amount_in:   u64,
    pub amount_out:  u64,
    /// Vault balances the quote was computed from, in the caller's direction.
    pub reserve_in:  u64,
    pub reserve_out: u64,
}

// ─── subscribe_to_pool ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SubscribeParams {
    pub wallet:           Pubkey,
    pub pool:             PoolAccounts,
    pub mint_a:           Pubkey,
    pub mint_b:           Pubkey,
    pub amount_a:         u64,
    /// `None` quotes the balanced amount from live reserves.
    pub amount_b:         Option<u64>,
    /// Floor for both legs; 0 forwards the exact amounts as minimums.
    pub max_slippage_bps: u16,
    /// Unix timestamp; `None` means now + `DEFAULT_DEADLINE_SECS`.
    pub deadline:         Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResult {
    pub signature:     String,
    pub wallet:        Pubkey,
    pub pool:          Pubkey,
    /// Amounts authorized, in the caller's mint ordering.
    pub amount_a:      u64,
    pub amount_b:      u64,
    pub min_a:         u64,
    pub min_b:         u64,
    pub deadline:      i64,
    /// LP shares returned by the program's `subscribe_to_pool`.
    pub shares_minted: u64,
}
