use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_spl::token::{self, Approve, Mint, Revoke, Token, TokenAccount};
use crate::{constants::*, error::WalletError, state::Wallet};
use super::router_cpi::{add_liquidity_ix, AddLiquidityAccounts, AddLiquidityArgs};

/// Move idle custody balances into a router pool. Owner only.
///
/// Effective flow (one transaction, so any failure reverts every step):
///   1. approve router_authority for exactly amount_a / amount_b
///   2. router.add_liquidity → LP tokens minted to wallet_lp
///   3. revoke both delegations so no unused allowance survives
///
/// The amounts are taken as given; the owner is expected to have called
/// `quote` first. `min_a` / `min_b` and `deadline` are forwarded to the router.
pub fn handler(
    ctx: Context<SubscribeToPool>,
    amount_a: u64,
    amount_b: u64,
    min_a: u64,
    min_b: u64,
    deadline: i64,
) -> Result<u64> {
    require!(amount_a > 0 && amount_b > 0, WalletError::ZeroAmount);

    let now = Clock::get()?.unix_timestamp;
    require!(now <= deadline, WalletError::Expired);

    // ── Custody must cover both legs before anything is approved ─────────────
    for (custody, required) in [
        (&ctx.accounts.custody_a, amount_a),
        (&ctx.accounts.custody_b, amount_b),
    ] {
        if custody.amount < required {
            msg!(
                "Insufficient balance: mint={} available={} required={}",
                custody.mint,
                custody.amount,
                required
            );
            return err!(WalletError::InsufficientBalance);
        }
    }

    let before_a = ctx.accounts.custody_a.amount;
    let before_b = ctx.accounts.custody_b.amount;
    let lp_before = ctx.accounts.wallet_lp.amount;

    let creator = ctx.accounts.wallet.creator;
    let wallet_bump = ctx.accounts.wallet.bump;
    let seeds: &[&[u8]] = &[WALLET_SEED, creator.as_ref(), &[wallet_bump]];
    let signer = &[seeds];

    // ── 1. Scoped approvals ──────────────────────────────────────────────────
    token::approve(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.custody_a.to_account_info(),
                delegate: ctx.accounts.router_authority.to_account_info(),
                authority: ctx.accounts.wallet.to_account_info(),
            },
            signer,
        ),
        amount_a,
    )?;
    token::approve(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.custody_b.to_account_info(),
                delegate: ctx.accounts.router_authority.to_account_info(),
                authority: ctx.accounts.wallet.to_account_info(),
            },
            signer,
        ),
        amount_b,
    )?;

    // ── 2. Supply through the router ─────────────────────────────────────────
    let ix = add_liquidity_ix(
        &ctx.accounts.router_program.key(),
        &AddLiquidityAccounts {
            pool: ctx.accounts.pool.key(),
            pool_authority: ctx.accounts.pool_authority.key(),
            vault_a: ctx.accounts.vault_a.key(),
            vault_b: ctx.accounts.vault_b.key(),
            lp_mint: ctx.accounts.lp_mint.key(),
            source_a: ctx.accounts.custody_a.key(),
            source_b: ctx.accounts.custody_b.key(),
            recipient_lp: ctx.accounts.wallet_lp.key(),
            recipient: ctx.accounts.wallet.key(),
            router_authority: ctx.accounts.router_authority.key(),
            token_program: ctx.accounts.token_program.key(),
        },
        &AddLiquidityArgs {
            amount_a_desired: amount_a,
            amount_b_desired: amount_b,
            min_a,
            min_b,
            deadline,
        },
    );
    invoke(
        &ix,
        &[
            ctx.accounts.pool.to_account_info(),
            ctx.accounts.pool_authority.to_account_info(),
            ctx.accounts.vault_a.to_account_info(),
            ctx.accounts.vault_b.to_account_info(),
            ctx.accounts.lp_mint.to_account_info(),
            ctx.accounts.custody_a.to_account_info(),
            ctx.accounts.custody_b.to_account_info(),
            ctx.accounts.wallet_lp.to_account_info(),
            ctx.accounts.wallet.to_account_info(),
            ctx.accounts.router_authority.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            ctx.accounts.router_program.to_account_info(),
        ],
    )?;

    // ── 3. Drop any allowance the router left unused ─────────────────────────
    token::revoke(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.custody_a.to_account_info(),
            authority: ctx.accounts.wallet.to_account_info(),
        },
        signer,
    ))?;
    token::revoke(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.custody_b.to_account_info(),
            authority: ctx.accounts.wallet.to_account_info(),
        },
        signer,
    ))?;

    // ── Result ───────────────────────────────────────────────────────────────
    ctx.accounts.custody_a.reload()?;
    ctx.accounts.custody_b.reload()?;
    ctx.accounts.wallet_lp.reload()?;

    let used_a = before_a.saturating_sub(ctx.accounts.custody_a.amount);
    let used_b = before_b.saturating_sub(ctx.accounts.custody_b.amount);
    let shares = ctx
        .accounts
        .wallet_lp
        .amount
        .checked_sub(lp_before)
        .ok_or(WalletError::MathOverflow)?;
    require!(shares > 0, WalletError::ExternalFailure);

    msg!(
        "Subscribed: pool={} used_a={} used_b={} refund_a={} refund_b={} shares={}",
        ctx.accounts.pool.key(),
        used_a,
        used_b,
        amount_a.saturating_sub(used_a),
        amount_b.saturating_sub(used_b),
        shares
    );
    Ok(shares)
}

#[derive(Accounts)]
pub struct SubscribeToPool<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [WALLET_SEED, wallet.creator.as_ref()],
        bump = wallet.bump,
        has_one = owner @ WalletError::Unauthorized,
    )]
    pub wallet: Account<'info, Wallet>,

    /// CHECK: external router program; must be the wallet's router
    #[account(
        executable,
        address = wallet.router @ WalletError::RouterMismatch,
    )]
    pub router_program: UncheckedAccount<'info>,

    /// CHECK: router-owned pool; its contents are the router's concern
    #[account(
        mut,
        owner = wallet.router @ WalletError::RouterMismatch,
    )]
    pub pool: UncheckedAccount<'info>,

    /// CHECK: router PDA that owns the pool vaults
    #[account(
        seeds = [POOL_AUTHORITY_SEED, pool.key().as_ref()],
        bump,
        seeds::program = wallet.router,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// CHECK: router PDA approved as delegate over custody for this call only
    #[account(
        seeds = [ROUTER_AUTHORITY_SEED],
        bump,
        seeds::program = wallet.router,
    )]
    pub router_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = vault_a.owner == pool_authority.key() @ WalletError::VaultMismatch,
    )]
    pub vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = vault_b.owner == pool_authority.key() @ WalletError::VaultMismatch,
        constraint = vault_b.mint != vault_a.mint @ WalletError::IdenticalTokens,
    )]
    pub vault_b: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub lp_mint: Box<Account<'info, Mint>>,

    /// Wallet custody for token A; debited by the router as delegate
    #[account(
        mut,
        constraint = custody_a.owner == wallet.key() @ WalletError::CustodyMismatch,
        constraint = custody_a.mint == vault_a.mint @ WalletError::MintMismatch,
    )]
    pub custody_a: Box<Account<'info, TokenAccount>>,

    /// Wallet custody for token B
    #[account(
        mut,
        constraint = custody_b.owner == wallet.key() @ WalletError::CustodyMismatch,
        constraint = custody_b.mint == vault_b.mint @ WalletError::MintMismatch,
    )]
    pub custody_b: Box<Account<'info, TokenAccount>>,

    /// Receives the minted LP tokens
    #[account(
        mut,
        constraint = wallet_lp.owner == wallet.key() @ WalletError::CustodyMismatch,
        constraint = wallet_lp.mint == lp_mint.key() @ WalletError::MintMismatch,
    )]
    pub wallet_lp: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}
