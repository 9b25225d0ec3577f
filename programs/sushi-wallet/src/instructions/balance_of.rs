use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::{error::WalletError, state::Wallet};

/// Read-only: the wallet's balance held in `custody`.
pub fn handler(ctx: Context<BalanceOf>) -> Result<u64> {
    let amount = ctx.accounts.custody.amount;
    msg!("Balance: mint={} amount={}", ctx.accounts.custody.mint, amount);
    Ok(amount)
}

#[derive(Accounts)]
pub struct BalanceOf<'info> {
    pub wallet: Account<'info, Wallet>,

    #[account(
        constraint = custody.owner == wallet.key() @ WalletError::CustodyMismatch,
    )]
    pub custody: Box<Account<'info, TokenAccount>>,
}
