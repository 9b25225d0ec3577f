//! Core error type.

use solana_sdk::pubkey::Pubkey;

/// Every way a wallet operation can fail. A failed operation leaves no
/// balance change behind, and no allowance change unless it is
/// [`WalletError::AllowanceNotRestored`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    // ── Access ───────────────────────────────────────────────────────────────
    #[error("Unauthorized: caller {caller} is not the wallet owner {owner}")]
    Unauthorized { caller: Pubkey, owner: Pubkey },

    // ── Pricing ──────────────────────────────────────────────────────────────
    /// No pool for the pair, or one side of it is empty.
    #[error("No liquidity for pair {token_in} / {token_out}")]
    NoLiquidity { token_in: Pubkey, token_out: Pubkey },

    #[error("Integer overflow in quote math")]
    Overflow,

    // ── Custody ──────────────────────────────────────────────────────────────
    #[error("Insufficient balance of {token}: available={available}, required={required}")]
    InsufficientBalance { token: Pubkey, available: u64, required: u64 },

    // ── Timing ───────────────────────────────────────────────────────────────
    #[error("Deadline {deadline} passed (now={now})")]
    Expired { deadline: i64, now: i64 },

    // ── Collaborators ────────────────────────────────────────────────────────
    /// The router or token collaborator rejected the call. The message is
    /// passed through unchanged.
    #[error("External call failed: {0}")]
    ExternalFailure(String),

    /// The subscription failed with `cause` and the allowances granted for
    /// it could not all be put back. `tokens` are still approved to the router.
    #[error("{cause}; allowance still live for {tokens:?}")]
    AllowanceNotRestored { tokens: Vec<Pubkey>, cause: Box<WalletError> },

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Token pair must name two distinct tokens")]
    IdenticalTokens,

    #[error("Pair is imbalanced: quote expects {expected}, supplied {supplied} (tolerance {tolerance_bps} bps)")]
    Imbalanced { expected: u64, supplied: u64, tolerance_bps: u16 },
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, WalletError>;
