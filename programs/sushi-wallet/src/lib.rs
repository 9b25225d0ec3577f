/// SushiWallet: owner-gated custodial wallet that supplies AMM liquidity.
///
/// 5 instructions:
///   initialize_wallet  create the wallet PDA, fix owner and router
///   quote              pair amount for a balanced deposit (view)
///   balance_of         custody balance of one token (view)
///   name               constant wallet name (view)
///   subscribe_to_pool  approve, add_liquidity via the router, revoke

// ─── Security contact ─────────────────────────────────────────────────────────

use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name:             "SushiWallet",
    project_url:      "https://github.com/sushi-wallet/sushi-wallet",
    contacts:         "email:security@sushi-wallet.dev",
    policy:           "Please report security vulnerabilities by email. \
                       We aim to respond within 48 hours.",
    source_code:      "https://github.com/sushi-wallet/sushi-wallet",
    preferred_languages: "en"
}

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("8eS2LMpe75LW52CaK53KYDhjk9dGqhWsHPeDd8nJ6J7s");

#[program]
pub mod sushi_wallet {
    use super::*;

    /// Create a wallet PDA for the signer. `owner` defaults to the signer.
    pub fn initialize_wallet(
        ctx: Context<InitializeWallet>,
        router: Pubkey,
        owner: Option<Pubkey>,
    ) -> Result<()> {
        initialize_wallet::handler(ctx, router, owner)
    }

    /// Amount of the output token that pairs with `amount_in` at the pool's
    /// current reserve ratio. Read-only; anyone may call.
    pub fn quote(ctx: Context<Quote>, amount_in: u64) -> Result<u64> {
        quote::handler(ctx, amount_in)
    }

    /// Wallet balance of the custody account's token.
    pub fn balance_of(ctx: Context<BalanceOf>) -> Result<u64> {
        balance_of::handler(ctx)
    }

    pub fn name(ctx: Context<Name>) -> Result<String> {
        name::handler(ctx)
    }

    /// Supply both custody balances to the router's pool and return the LP
    /// shares minted to the wallet. Owner only.
    pub fn subscribe_to_pool(
        ctx: Context<SubscribeToPool>,
        amount_a: u64,
        amount_b: u64,
        min_a: u64,
        min_b: u64,
        deadline: i64,
    ) -> Result<u64> {
        subscribe_to_pool::handler(ctx, amount_a, amount_b, min_a, min_b, deadline)
    }
}
