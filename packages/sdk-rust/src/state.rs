//! On-chain account deserialization.
//!
//! Parses raw account bytes for `Wallet` (105 bytes) and packed SPL token
//! accounts. Byte offsets mirror the Anchor `#[account]` layout exactly.

use solana_sdk::pubkey::Pubkey;
use crate::{
    error::{Error, Result},
    instructions::account_disc,
};

// ─── Wallet ───────────────────────────────────────────────────────────────────

/// Deserialized `Wallet` account state.
///
/// Layout (after 8-byte Anchor discriminator):
/// ```text
/// creator(32)  owner(32)  router(32)  bump(1)  = 105 bytes
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletState {
    pub creator: Pubkey,
    pub owner:   Pubkey,
    pub router:  Pubkey,
    pub bump:    u8,
}

pub const WALLET_LEN: usize = 105;

/// Deserialize a `Wallet` account from raw bytes.
pub fn parse_wallet(data: &[u8]) -> Result<WalletState> {
    if data.len() < WALLET_LEN {
        return Err(Error::ParseError {
            offset: 0,
            reason: format!("Wallet account is {} bytes; expected {}", data.len(), WALLET_LEN),
        });
    }
    if data[..8] != account_disc("Wallet") {
        return Err(Error::ParseError {
            offset: 0,
            reason: "discriminator is not Wallet".into(),
        });
    }
    Ok(WalletState {
        creator: read_pubkey(data, 8)?,
        owner:   read_pubkey(data, 40)?,
        router:  read_pubkey(data, 72)?,
        bump:    data[104],
    })
}

// ─── SPL token account ────────────────────────────────────────────────────────

/// The fields of a packed SPL token account this SDK reads.
///
/// Token account layout: `mint(32) owner(32) amount(8) …`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountState {
    pub mint:   Pubkey,
    pub owner:  Pubkey,
    pub amount: u64,
}

pub fn parse_token_account(data: &[u8]) -> Result<TokenAccountState> {
    if data.len() < 72 {
        return Err(Error::ParseError {
            offset: 64,
            reason: format!("Token account is {} bytes; need at least 72", data.len()),
        });
    }
    Ok(TokenAccountState {
        mint:   read_pubkey(data, 0)?,
        owner:  read_pubkey(data, 32)?,
        amount: read_u64(data, 64)?,
    })
}

/// Read only the `amount` field from a packed SPL token account.
pub fn parse_token_amount(data: &[u8]) -> Result<u64> {
    parse_token_account(data).map(|t| t.amount)
}

// ─── Byte-slice primitives ────────────────────────────────────────────────────

fn field<const N: usize>(data: &[u8], offset: usize, what: &str) -> Result<[u8; N]> {
    data.get(offset..offset + N)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| Error::ParseError {
            offset,
            reason: format!("slice too short for {what} ({N} bytes)"),
        })
}

pub(crate) fn read_pubkey(data: &[u8], offset: usize) -> Result<Pubkey> {
    field::<32>(data, offset, "Pubkey").map(Pubkey::from)
}

pub(crate) fn read_u64(data: &[u8], offset: usize) -> Result<u64> {
    field::<8>(data, offset, "u64").map(u64::from_le_bytes)
}
