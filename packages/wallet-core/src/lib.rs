//! SushiWallet core
//!
//! Owner-gated custodial wallet logic for a constant-product AMM, written
//! against injected collaborators so it runs the same against a live chain
//! or fixed in-memory snapshots.
//!
//! | Piece | Role |
//! |-------|------|
//! | [`ReserveOracle`] | Reads pool reserves for an ordered pair |
//! | [`quote_amount`] | `floor(amount_in × reserve_out / reserve_in)` in u128 |
//! | [`AccessController`] | Rejects any mutating call not made by the owner |
//! | [`CustodialWallet::subscribe_to_pool`] | Approve exact amounts, supply, restore allowances |
//! | [`CustodialWallet::balance_of`] | Pass-through custody balance |

pub mod access;
pub mod constants;
pub mod error;
pub mod ports;
pub mod quote;
pub mod types;
pub mod wallet;

pub use access::AccessController;
pub use constants::*;
pub use error::{Result, WalletError};
pub use ports::{LiquidityRouter, ReserveOracle, TokenLedger};
pub use quote::{min_with_slippage, quote_amount, within_tolerance};
pub use types::*;
pub use wallet::CustodialWallet;
