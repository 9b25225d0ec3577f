use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::{constants::*, error::WalletError, state::Wallet};
use super::quote_math::quote_amount;

/// Read-only: how much of `vault_out`'s mint pairs with `amount_in` of
/// `vault_in`'s mint at the pool's current reserves. Result goes out as
/// return data; nothing is written.
///
/// Vaults are passed in the caller's (in, out) order, so the pool's own
/// token ordering does not matter.
pub fn handler(ctx: Context<Quote>, amount_in: u64) -> Result<u64> {
    let reserve_in = ctx.accounts.vault_in.amount;
    let reserve_out = ctx.accounts.vault_out.amount;

    let amount_out = quote_amount(amount_in, reserve_in, reserve_out)?;

    msg!(
        "Quote: {} -> {} in={} reserves={}/{} out={}",
        ctx.accounts.vault_in.mint,
        ctx.accounts.vault_out.mint,
        amount_in,
        reserve_in,
        reserve_out,
        amount_out
    );
    Ok(amount_out)
}

#[derive(Accounts)]
pub struct Quote<'info> {
    pub wallet: Account<'info, Wallet>,

    /// CHECK: router-owned pool; only its key is used
    #[account(owner = wallet.router @ WalletError::RouterMismatch)]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: router PDA that owns the pool vaults
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool.key().as_ref()],
        bump,
        seeds::program = wallet.router,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        constraint = vault_in.owner == pool_authority.key() @ WalletError::VaultMismatch,
    )]
    pub vault_in: Box<Account<'info, TokenAccount>>,

    #[account(
        constraint = vault_out.owner == pool_authority.key() @ WalletError::VaultMismatch,
        constraint = vault_out.mint != vault_in.mint @ WalletError::IdenticalTokens,
    )]
    pub vault_out: Box<Account<'info, TokenAccount>>,
}
