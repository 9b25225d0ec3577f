use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use crate::constants::ADD_LIQUIDITY_DISCRIMINATOR;

// ─── External router ABI ───────────────────────────────────────────────────
// The router is not part of this program. Its `add_liquidity` pulls both
// tokens from the sources as the approved `router_authority` delegate and
// mints LP tokens to `recipient_lp`. Account order below is the router's.

/// Instruction arguments, serialized little-endian after the discriminator.
pub struct AddLiquidityArgs {
    pub amount_a_desired: u64,
    pub amount_b_desired: u64,
    pub min_a: u64,
    pub min_b: u64,
    pub deadline: i64,
}

pub struct AddLiquidityAccounts {
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
    pub lp_mint: Pubkey,
    pub source_a: Pubkey,
    pub source_b: Pubkey,
    pub recipient_lp: Pubkey,
    pub recipient: Pubkey,
    pub router_authority: Pubkey,
    pub token_program: Pubkey,
}

pub fn add_liquidity_ix(
    router: &Pubkey,
    accounts: &AddLiquidityAccounts,
    args: &AddLiquidityArgs,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8 * 5);
    data.extend_from_slice(&ADD_LIQUIDITY_DISCRIMINATOR);
    data.extend_from_slice(&args.amount_a_desired.to_le_bytes());
    data.extend_from_slice(&args.amount_b_desired.to_le_bytes());
    data.extend_from_slice(&args.min_a.to_le_bytes());
    data.extend_from_slice(&args.min_b.to_le_bytes());
    data.extend_from_slice(&args.deadline.to_le_bytes());

    Instruction {
        program_id: *router,
        accounts: vec![
            AccountMeta::new(accounts.pool, false),
            AccountMeta::new_readonly(accounts.pool_authority, false),
            AccountMeta::new(accounts.vault_a, false),
            AccountMeta::new(accounts.vault_b, false),
            AccountMeta::new(accounts.lp_mint, false),
            AccountMeta::new(accounts.source_a, false),
            AccountMeta::new(accounts.source_b, false),
            AccountMeta::new(accounts.recipient_lp, false),
            AccountMeta::new_readonly(accounts.recipient, false),
            AccountMeta::new_readonly(accounts.router_authority, false),
            AccountMeta::new_readonly(accounts.token_program, false),
        ],
        data,
    }
}
