/// PDA seeds
pub const WALLET_SEED: &[u8] = b"wallet";
/// Router-side seeds (derived under the router program id)
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const ROUTER_AUTHORITY_SEED: &[u8] = b"router_authority";

/// Returned by the `name` view.
pub const WALLET_NAME: &str = "SushiWallet";

/// Router `add_liquidity` discriminator: sha256("global:add_liquidity")[..8]
pub const ADD_LIQUIDITY_DISCRIMINATOR: [u8; 8] = [181, 157, 89, 67, 143, 182, 52, 72];
