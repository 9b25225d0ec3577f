use anchor_lang::prelude::*;
use crate::{constants::*, error::WalletError, state::Wallet};

/// Create the wallet PDA for `creator`.
/// Owner defaults to the creator; pass `owner` to hand custody to another key.
/// Neither owner nor router can be changed afterwards.
pub fn handler(ctx: Context<InitializeWallet>, router: Pubkey, owner: Option<Pubkey>) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let owner = owner.unwrap_or(creator);
    require!(owner != Pubkey::default(), WalletError::InvalidOwner);
    require!(router != Pubkey::default(), WalletError::RouterMismatch);

    let wallet = &mut ctx.accounts.wallet;
    wallet.creator = creator;
    wallet.owner = owner;
    wallet.router = router;
    wallet.bump = ctx.bumps.wallet;

    msg!("Wallet created: {} owner={} router={}", wallet.key(), owner, router);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeWallet<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = Wallet::LEN,
        seeds = [WALLET_SEED, creator.key().as_ref()],
        bump,
    )]
    pub wallet: Account<'info, Wallet>,

    pub system_program: Program<'info, System>,
}
