//! SDK error type.

use solana_sdk::pubkey::Pubkey;

/// All errors returned by the SushiWallet SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── RPC / network ────────────────────────────────────────────────────────
    /// A Solana JSON-RPC call failed.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    // ── Wallet model ─────────────────────────────────────────────────────────
    /// Quote, slippage or validation failure from the shared wallet core.
    #[error(transparent)]
    Core(#[from] sushi_wallet_core::WalletError),

    // ── Account discovery ────────────────────────────────────────────────────
    /// No wallet account exists at the derived or given address.
    #[error("Wallet account {0} not found")]
    WalletNotFound(Pubkey),

    // ── Account parsing ──────────────────────────────────────────────────────
    /// Raw account bytes could not be deserialized.
    #[error("Account parse error at offset {offset}: {reason}")]
    ParseError { offset: usize, reason: String },

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;
