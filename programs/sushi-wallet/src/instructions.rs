#![allow(ambiguous_glob_reexports)]

pub mod initialize_wallet;
pub mod quote;
pub mod balance_of;
pub mod name;
pub mod subscribe_to_pool;
pub mod quote_math;
pub mod router_cpi;

pub use initialize_wallet::*;
pub use quote::*;
pub use balance_of::*;
pub use name::*;
pub use subscribe_to_pool::*;
