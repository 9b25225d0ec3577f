//! Low-level Anchor instruction builders.
//!
//! Each function constructs a [`solana_sdk::instruction::Instruction`] ready
//! for signing and submission.  Account order mirrors the Anchor
//! `#[derive(Accounts)]` structs in the on-chain program exactly.
//!
//! Anchor instruction discriminators: `sha256("global:{name}")[..8]`.
//! Anchor account discriminators:    `sha256("account:{TypeName}")[..8]`.

use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey,
    pubkey::Pubkey,
};

// ─── Well-known program IDs ───────────────────────────────────────────────────

pub const SPL_TOKEN_ID:   Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const ATA_PROGRAM_ID: Pubkey = pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");
/// The system program id is the all-zero key.
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new_from_array([0; 32]);

// ─── PDA seeds (mirrors programs/sushi-wallet/src/constants.rs) ──────────────

pub const WALLET_SEED:           &[u8] = b"wallet";
pub const POOL_AUTHORITY_SEED:   &[u8] = b"pool_authority";
pub const ROUTER_AUTHORITY_SEED: &[u8] = b"router_authority";

// ─── PDA derivation helpers ───────────────────────────────────────────────────

/// Derive the wallet PDA owned by `creator`.
pub fn derive_wallet(creator: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WALLET_SEED, creator.as_ref()], program_id)
}

/// Derive the router's pool-authority PDA (owner of the pool vaults).
pub fn derive_pool_authority(pool: &Pubkey, router: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_AUTHORITY_SEED, pool.as_ref()], router)
}

/// Derive the router's delegate PDA that pulls custody funds.
pub fn derive_router_authority(router: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ROUTER_AUTHORITY_SEED], router)
}

/// Derive the Associated Token Account for an owner + mint.
///
/// Wallet custody accounts are the wallet PDA's ATAs.
pub fn derive_ata(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[owner.as_ref(), SPL_TOKEN_ID.as_ref(), mint.as_ref()],
        &ATA_PROGRAM_ID,
    )
    .0
}

// ─── Discriminators ───────────────────────────────────────────────────────────

fn prefix8(preimage: &str) -> [u8; 8] {
    let h = hash(preimage.as_bytes()).to_bytes();
    let mut out = [0u8; 8];
    out.copy_from_slice(&h[..8]);
    out
}

pub(crate) fn disc(name: &str) -> [u8; 8] {
    prefix8(&format!("global:{name}"))
}

/// Anchor account discriminator: `sha256("account:{TypeName}")[..8]`.
pub(crate) fn account_disc(type_name: &str) -> [u8; 8] {
    prefix8(&format!("account:{type_name}"))
}

// ─── initialize_wallet ────────────────────────────────────────────────────────

/// Build the `initialize_wallet` instruction.
///
/// `owner = None` leaves custody with `creator`.
pub fn initialize_wallet_ix(
    program_id: &Pubkey,
    creator:    &Pubkey,
    router:     &Pubkey,
    owner:      Option<&Pubkey>,
) -> Instruction {
    let (wallet, _) = derive_wallet(creator, program_id);

    let mut data = disc("initialize_wallet").to_vec();
    data.extend_from_slice(router.as_ref());
    // Borsh Option: 0 tag, or 1 tag + value
    match owner {
        Some(owner) => {
            data.push(1);
            data.extend_from_slice(owner.as_ref());
        }
        None => data.push(0),
    }

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*creator, true),   // mut + signer
            AccountMeta::new(wallet,   false),  // mut PDA (init)
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    }
}

// ─── quote ────────────────────────────────────────────────────────────────────

/// Build the read-only `quote` instruction (for simulation).
///
/// `vault_in` / `vault_out` are the pool vaults in the caller's direction.
pub fn quote_ix(
    program_id: &Pubkey,
    wallet:     &Pubkey,
    router:     &Pubkey,
    pool:       &Pubkey,
    vault_in:   &Pubkey,
    vault_out:  &Pubkey,
    amount_in:  u64,
) -> Instruction {
    let (pool_authority, _) = derive_pool_authority(pool, router);

    let mut data = disc("quote").to_vec();
    data.extend_from_slice(&amount_in.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*wallet,        false),
            AccountMeta::new_readonly(*pool,          false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new_readonly(*vault_in,      false),
            AccountMeta::new_readonly(*vault_out,     false),
        ],
        data,
    }
}

// ─── balance_of / name ────────────────────────────────────────────────────────

pub fn balance_of_ix(program_id: &Pubkey, wallet: &Pubkey, custody: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*wallet,  false),
            AccountMeta::new_readonly(*custody, false),
        ],
        data: disc("balance_of").to_vec(),
    }
}

pub fn name_ix(program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts:   vec![],
        data:       disc("name").to_vec(),
    }
}

// ─── subscribe_to_pool ────────────────────────────────────────────────────────

/// Accounts for `subscribe_to_pool`; PDAs are derived by the builder.
#[derive(Debug, Clone)]
pub struct SubscribeAccounts {
    pub owner:     Pubkey,
    pub wallet:    Pubkey,
    pub router:    Pubkey,
    pub pool:      Pubkey,
    /// Pool vault holding token A (pool ordering).
    pub vault_a:   Pubkey,
    pub vault_b:   Pubkey,
    pub lp_mint:   Pubkey,
    pub custody_a: Pubkey,
    pub custody_b: Pubkey,
    pub wallet_lp: Pubkey,
}

/// Build the `subscribe_to_pool` instruction.
#[allow(clippy::too_many_arguments)]
pub fn subscribe_to_pool_ix(
    program_id: &Pubkey,
    accounts:   &SubscribeAccounts,
    amount_a:   u64,
    amount_b:   u64,
    min_a:      u64,
    min_b:      u64,
    deadline:   i64,
) -> Instruction {
    let (pool_authority, _)   = derive_pool_authority(&accounts.pool, &accounts.router);
    let (router_authority, _) = derive_router_authority(&accounts.router);

    let mut data = disc("subscribe_to_pool").to_vec();
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());
    data.extend_from_slice(&min_a.to_le_bytes());
    data.extend_from_slice(&min_b.to_le_bytes());
    data.extend_from_slice(&deadline.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(accounts.owner,  true),   // signer
            AccountMeta::new_readonly(accounts.wallet, false),
            AccountMeta::new_readonly(accounts.router, false),
            AccountMeta::new(accounts.pool,            false),  // mut
            AccountMeta::new_readonly(pool_authority,   false),
            AccountMeta::new_readonly(router_authority, false),
            AccountMeta::new(accounts.vault_a,         false),  // mut
            AccountMeta::new(accounts.vault_b,         false),  // mut
            AccountMeta::new(accounts.lp_mint,         false),  // mut
            AccountMeta::new(accounts.custody_a,       false),  // mut
            AccountMeta::new(accounts.custody_b,       false),  // mut
            AccountMeta::new(accounts.wallet_lp,       false),  // mut
            AccountMeta::new_readonly(SPL_TOKEN_ID, false),
        ],
        data,
    }
}
