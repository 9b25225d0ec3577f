/// Fixed identifier returned by the `name` query.
pub const WALLET_NAME: &str = "SushiWallet";

/// Denominator for basis-point math (u128 to avoid up-cast noise)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Default slippage floor applied when planning a subscription: 0.50 %
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Default lifetime of a planned subscription, in seconds.
pub const DEFAULT_DEADLINE_SECS: i64 = 300;
