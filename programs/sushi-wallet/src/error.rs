use anchor_lang::prelude::*;

#[error_code]
pub enum WalletError {
    #[msg("Caller is not the wallet owner")]
    Unauthorized,
    #[msg("Pool has no liquidity for this pair")]
    NoLiquidity,
    #[msg("Wallet balance is below the requested amount")]
    InsufficientBalance,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Deadline has passed")]
    Expired,
    #[msg("Router did not mint any liquidity shares")]
    ExternalFailure,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Token pair must name two distinct mints")]
    IdenticalTokens,
    #[msg("Token account mint does not match the pool")]
    MintMismatch,
    #[msg("Program does not match the wallet's router")]
    RouterMismatch,
    #[msg("Owner must be a non-default key")]
    InvalidOwner,
    #[msg("Token account is not held by the wallet")]
    CustodyMismatch,
    #[msg("Vault is not held by the pool authority")]
    VaultMismatch,
}
