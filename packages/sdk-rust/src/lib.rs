//! SushiWallet Rust SDK
//!
//! Client for the owner-gated custodial wallet program on Solana.
//! Create a wallet, quote balanced deposits against a router pool and
//! supply custody into it, with no Anchor dependency required.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sushi_wallet_sdk::{PoolAccounts, SubscribeParams, SushiWalletClient};
//! use solana_sdk::{pubkey::Pubkey, signature::{Keypair, Signer}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SushiWalletClient::from_env()?;
//!     let owner  = Keypair::new(); // the wallet owner's funded keypair
//!     let wallet = client.wallet_address(&owner.pubkey());
//!
//!     let pool = PoolAccounts {
//!         pool:    Pubkey::new_unique(),
//!         vault_a: Pubkey::new_unique(),
//!         vault_b: Pubkey::new_unique(),
//!         lp_mint: Pubkey::new_unique(),
//!     };
//!     let dai = Pubkey::new_unique();
//!     let bat = Pubkey::new_unique();
//!
//!     // Quote BAT for 10 000 DAI, floor both legs at 0.5% and supply.
//!     let result = client.subscribe_to_pool(&owner, SubscribeParams {
//!         wallet,
//!         pool,
//!         mint_a:           dai,
//!         mint_b:           bat,
//!         amount_a:         10_000,
//!         amount_b:         None,
//!         max_slippage_bps: 50,
//!         deadline:         None,
//!     }).await?;
//!     println!("Minted {} LP shares, tx: {}", result.shares_minted, result.signature);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature Overview
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`SushiWalletClient::create_wallet`] | Create the payer's wallet PDA |
//! | [`SushiWalletClient::subscribe_to_pool`] | Approve, add liquidity, revoke |
//! | [`SushiWalletClient::quote`] | Balanced-deposit quote from live reserves |
//! | [`SushiWalletClient::balance_of`] | Custody balance of one mint |
//! | [`SushiWalletClient::wallet_info`] | Owner, router and name |

pub mod client;
pub mod error;
pub mod instructions;
pub mod state;
pub mod types;

pub use client::SushiWalletClient;
pub use error::{Error, Result};
pub use types::*;
