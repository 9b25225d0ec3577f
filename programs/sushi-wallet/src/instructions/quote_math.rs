use anchor_lang::prelude::*;
use crate::error::WalletError;

/// Balanced-deposit quote: `floor(amount_in * reserve_out / reserve_in)`.
///
/// Not a swap price; no fee is applied. Shared by `quote` and mirrored by
/// the off-chain core so both sides agree on the same reserve snapshot.
pub fn quote_amount(amount_in: u64, reserve_in: u64, reserve_out: u64) -> Result<u64> {
    require!(amount_in > 0, WalletError::ZeroAmount);
    require!(reserve_in > 0 && reserve_out > 0, WalletError::NoLiquidity);

    // u64 * u64 always fits u128; only the narrowing can fail
    let out = (amount_in as u128)
        .checked_mul(reserve_out as u128)
        .ok_or(WalletError::MathOverflow)?
        / reserve_in as u128;
    u64::try_from(out).map_err(|_| error!(WalletError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_to_one() {
        assert_eq!(quote_amount(10_000, 2_000_000, 1_000_000).unwrap(), 5_000);
    }

    #[test]
    fn test_floor_division() {
        assert_eq!(quote_amount(10, 3, 2).unwrap(), 6);
    }

    #[test]
    fn test_empty_reserves() {
        assert!(quote_amount(1, 0, 10).is_err());
        assert!(quote_amount(1, 10, 0).is_err());
    }

    #[test]
    fn test_zero_amount() {
        assert!(quote_amount(0, 10, 10).is_err());
    }

    #[test]
    fn test_narrowing_overflow() {
        assert!(quote_amount(u64::MAX, 1, 2).is_err());
        assert_eq!(quote_amount(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
    }
}
