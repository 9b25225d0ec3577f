use anchor_lang::prelude::*;

// ─── Wallet ────────────────────────────────────────────────────────────────
// Single-owner custody. The wallet PDA is the token authority of every
// custody account; owner and router never change after initialize_wallet.
#[account]
pub struct Wallet {
    /// Signer that created the wallet; part of the PDA seeds
    pub creator: Pubkey,   // 32
    /// Only key allowed to move custody funds
    pub owner: Pubkey,     // 32
    /// Program id of the external AMM router
    pub router: Pubkey,    // 32
    pub bump: u8,          // 1
}

impl Wallet {
    // 8 discriminator + 32+32+32+1 = 105
    pub const LEN: usize = 105;
}
