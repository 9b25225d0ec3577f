//! Proportional quotation and slippage math.
//!
//! Mirrors the on-chain `quote_math` module exactly so off-chain quotes match
//! what the program returns for the same reserve snapshot.

use crate::constants::BPS_DENOMINATOR;
use crate::error::{Result, WalletError};
use crate::types::Reserves;

// ─── Quotation ────────────────────────────────────────────────────────────────

/// Amount of the output token that pairs with `amount_in` at the current
/// reserve ratio: `floor(amount_in × reserve_out / reserve_in)`.
///
/// This is the balanced-deposit quote, not a fee-adjusted swap price. The
/// product is formed in u128 so it never wraps; a result that does not fit
/// back into u64 is `Overflow`.
///
/// Reserve emptiness is the caller's concern (it knows the pair and reports
/// `NoLiquidity`); a zero `reserve_in` here still reports `Overflow` rather
/// than dividing by zero.
pub fn quote_amount(amount_in: u64, reserves: Reserves) -> Result<u64> {
    if amount_in == 0 {
        return Err(WalletError::ZeroAmount);
    }
    let out = (amount_in as u128)
        .checked_mul(reserves.reserve_out as u128)
        .ok_or(WalletError::Overflow)?
        .checked_div(reserves.reserve_in as u128)
        .ok_or(WalletError::Overflow)?;
    u64::try_from(out).map_err(|_| WalletError::Overflow)
}

// ─── Slippage ─────────────────────────────────────────────────────────────────

/// Minimum acceptable amount after allowing `slippage_bps` of drift.
///
/// `slippage_bps = 0` returns `amount` unchanged; anything ≥ 10 000 floors at 0.
pub fn min_with_slippage(amount: u64, slippage_bps: u16) -> u64 {
    let bps = (slippage_bps as u128).min(BPS_DENOMINATOR);
    let cut = amount as u128 * bps / BPS_DENOMINATOR;
    amount - cut as u64
}

/// Whether `supplied` lies within `tolerance_bps` of `expected`.
pub fn within_tolerance(expected: u64, supplied: u64, tolerance_bps: u16) -> bool {
    let drift = expected.abs_diff(supplied) as u128;
    drift * BPS_DENOMINATOR <= expected as u128 * tolerance_bps as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quote_two_to_one() {
        // 2:1 DAI:BAT; 10 000 DAI pairs with 5 000 BAT
        let out = quote_amount(10_000, Reserves::new(2_000_000, 1_000_000)).unwrap();
        assert_eq!(out, 5_000);
    }

    #[test]
    fn test_quote_floors() {
        // 10 * 2 / 3 = 6.67 → 6
        assert_eq!(quote_amount(10, Reserves::new(3, 2)).unwrap(), 6);
    }

    #[test]
    fn test_quote_rejects_zero_amount() {
        assert_eq!(
            quote_amount(0, Reserves::new(10, 10)),
            Err(WalletError::ZeroAmount)
        );
    }

    #[test]
    fn test_quote_wide_product_does_not_wrap() {
        // u64::MAX * u64::MAX overflows u64 but fits u128; dividing by
        // u64::MAX brings it back into range.
        let out = quote_amount(u64::MAX, Reserves::new(u64::MAX, u64::MAX)).unwrap();
        assert_eq!(out, u64::MAX);
    }

    #[test]
    fn test_quote_result_too_large_is_overflow() {
        assert_eq!(
            quote_amount(u64::MAX, Reserves::new(1, 2)),
            Err(WalletError::Overflow)
        );
    }

    #[test]
    fn test_min_with_slippage() {
        assert_eq!(min_with_slippage(10_000, 50), 9_950);
        assert_eq!(min_with_slippage(10_000, 0), 10_000);
        assert_eq!(min_with_slippage(10_000, 20_000), 0);
        assert_eq!(min_with_slippage(u64::MAX, 1), u64::MAX - u64::MAX / 10_000);
    }

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(5_000, 5_000, 0));
        assert!(within_tolerance(5_000, 5_025, 50));
        assert!(!within_tolerance(5_000, 5_026, 50));
        assert!(within_tolerance(5_000, 4_975, 50));
        assert!(!within_tolerance(5_000, 4_974, 50));
    }

    proptest! {
        #[test]
        fn prop_quote_is_floor_of_ratio(
            amount_in in 1u64..=u32::MAX as u64,
            r_in in 1u64..=u64::MAX,
            r_out in 1u64..=u32::MAX as u64,
        ) {
            let out = quote_amount(amount_in, Reserves::new(r_in, r_out)).unwrap();
            let exact = amount_in as u128 * r_out as u128 / r_in as u128;
            prop_assert_eq!(out as u128, exact);
        }

        #[test]
        fn prop_quote_monotonic_in_amount(
            a in 1u64..=u32::MAX as u64,
            b in 1u64..=u32::MAX as u64,
            r_in in 1u64..=u64::MAX,
            r_out in 1u64..=u32::MAX as u64,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let reserves = Reserves::new(r_in, r_out);
            prop_assert!(quote_amount(lo, reserves).unwrap() <= quote_amount(hi, reserves).unwrap());
        }

        #[test]
        fn prop_quote_deterministic_for_snapshot(
            amount_in in 1u64..=u64::MAX,
            r_in in 1u64..=u64::MAX,
            r_out in 0u64..=u64::MAX,
        ) {
            let reserves = Reserves::new(r_in, r_out);
            prop_assert_eq!(quote_amount(amount_in, reserves), quote_amount(amount_in, reserves));
        }

        #[test]
        fn prop_slippage_floor_never_exceeds_amount(amount in any::<u64>(), bps in any::<u16>()) {
            prop_assert!(min_with_slippage(amount, bps) <= amount);
        }
    }
}
