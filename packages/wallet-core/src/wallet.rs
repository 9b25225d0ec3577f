//! [`CustodialWallet`]: quotation, custody view and pool subscription.

use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info, warn};

use crate::{
    access::AccessController,
    constants::{DEFAULT_DEADLINE_SECS, WALLET_NAME},
    error::{Result, WalletError},
    ports::{LiquidityRouter, ReserveOracle, TokenLedger},
    quote::{min_with_slippage, quote_amount, within_tolerance},
    types::{AddLiquidity, CallContext, LiquidityMinted, SubscribeReceipt, SubscribeRequest},
};

// ─── Wallet ───────────────────────────────────────────────────────────────────

/// Single-owner wallet holding token balances at `address`.
///
/// Owner and router are fixed at construction. Reserves and balances are
/// re-read from the collaborators on every call; nothing is cached.
pub struct CustodialWallet<O, T, R> {
    address: Pubkey,
    access:  AccessController,
    oracle:  O,
    tokens:  T,
    router:  R,
}

impl<O, T, R> CustodialWallet<O, T, R>
where
    O: ReserveOracle,
    T: TokenLedger,
    R: LiquidityRouter,
{
    pub fn new(address: Pubkey, owner: Pubkey, oracle: O, tokens: T, router: R) -> Self {
        Self { address, access: AccessController::new(owner), oracle, tokens, router }
    }

    // ── Read operations ───────────────────────────────────────────────────────

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn name(&self) -> &'static str {
        WALLET_NAME
    }

    pub fn owner(&self) -> Pubkey {
        self.access.owner()
    }

    pub fn router(&self) -> Pubkey {
        self.router.address()
    }

    /// The wallet's own balance of `token`, straight from the token ledger.
    pub fn balance_of(&self, token: &Pubkey) -> Result<u64> {
        self.tokens.balance_of(token, &self.address)
    }

    /// Amount of `token_out` that pairs with `amount_in` of `token_in` at the
    /// pool's current ratio.
    pub fn quote(&self, token_in: &Pubkey, token_out: &Pubkey, amount_in: u64) -> Result<u64> {
        if token_in == token_out {
            return Err(WalletError::IdenticalTokens);
        }
        if amount_in == 0 {
            return Err(WalletError::ZeroAmount);
        }
        let reserves = self
            .oracle
            .reserves(token_in, token_out)?
            .filter(|r| !r.is_empty())
            .ok_or(WalletError::NoLiquidity { token_in: *token_in, token_out: *token_out })?;

        let amount_out = quote_amount(amount_in, reserves)?;
        debug!(
            %token_in, %token_out, amount_in, amount_out,
            reserve_in = reserves.reserve_in, reserve_out = reserves.reserve_out,
            "quote"
        );
        Ok(amount_out)
    }

    /// Build a balanced request for `amount_a`: quote the matching `amount_b`,
    /// floor both at `slippage_bps` and expire `DEFAULT_DEADLINE_SECS` from `now`.
    pub fn plan_subscription(
        &self,
        token_a:      &Pubkey,
        token_b:      &Pubkey,
        amount_a:     u64,
        slippage_bps: u16,
        now:          i64,
    ) -> Result<SubscribeRequest> {
        let amount_b = self.quote(token_a, token_b, amount_a)?;
        if amount_b == 0 {
            return Err(WalletError::ZeroAmount);
        }
        Ok(SubscribeRequest {
            token_a:  *token_a,
            token_b:  *token_b,
            amount_a,
            amount_b,
            min_a:    min_with_slippage(amount_a, slippage_bps),
            min_b:    min_with_slippage(amount_b, slippage_bps),
            deadline: now.saturating_add(DEFAULT_DEADLINE_SECS),
        })
    }

    // ── Write operations ──────────────────────────────────────────────────────

    /// Authorize the router for exactly the requested amounts, supply them and
    /// return the shares minted to the wallet. Owner only.
    ///
    /// The pair is taken as given: the caller is trusted to have quoted it.
    /// Use [`Self::subscribe_balanced`] to have the ratio checked here.
    ///
    /// All validation happens before the first approval, so a rejected request
    /// never reaches the token ledger. Allowances are put back to their prior
    /// values whether the router succeeds or fails. If one cannot be put back,
    /// a failed call returns [`WalletError::AllowanceNotRestored`] and a
    /// committed one lists the token in [`SubscribeReceipt::unrestored`].
    pub fn subscribe_to_pool(
        &mut self,
        call: &CallContext,
        req:  &SubscribeRequest,
    ) -> Result<SubscribeReceipt> {
        self.access.ensure_owner(&call.caller)?;
        if req.token_a == req.token_b {
            return Err(WalletError::IdenticalTokens);
        }
        if req.amount_a == 0 || req.amount_b == 0 {
            return Err(WalletError::ZeroAmount);
        }
        if call.timestamp > req.deadline {
            return Err(WalletError::Expired { deadline: req.deadline, now: call.timestamp });
        }
        self.ensure_balance(&req.token_a, req.amount_a)?;
        self.ensure_balance(&req.token_b, req.amount_b)?;

        let mut approvals = Approvals::new(self.router.address());
        let minted = match self.supply(&mut approvals, req, call.timestamp) {
            Ok(minted) => minted,
            Err(err) => {
                warn!(token_a = %req.token_a, token_b = %req.token_b, error = %err, "subscription rolled back");
                let live = approvals.restore(&mut self.tokens, &self.address);
                if live.is_empty() {
                    return Err(err);
                }
                return Err(WalletError::AllowanceNotRestored { tokens: live, cause: Box::new(err) });
            }
        };

        // The supply has committed; a restore failure is reported on the
        // receipt, never as an error.
        let unrestored = approvals.restore(&mut self.tokens, &self.address);
        if !unrestored.is_empty() {
            warn!(tokens = ?unrestored, "subscribed with allowance still live");
        }

        let receipt = SubscribeReceipt {
            shares_minted: minted.shares,
            amount_a_used: minted.amount_a,
            amount_b_used: minted.amount_b,
            refund_a:      req.amount_a.saturating_sub(minted.amount_a),
            refund_b:      req.amount_b.saturating_sub(minted.amount_b),
            unrestored,
        };
        info!(
            token_a = %req.token_a, token_b = %req.token_b,
            used_a = receipt.amount_a_used, used_b = receipt.amount_b_used,
            shares = receipt.shares_minted,
            "subscribed to pool"
        );
        Ok(receipt)
    }

    /// [`Self::subscribe_to_pool`], but first re-quote `amount_a` and reject an
    /// `amount_b` more than `tolerance_bps` away from it.
    pub fn subscribe_balanced(
        &mut self,
        call:          &CallContext,
        req:           &SubscribeRequest,
        tolerance_bps: u16,
    ) -> Result<SubscribeReceipt> {
        self.access.ensure_owner(&call.caller)?;
        let expected = self.quote(&req.token_a, &req.token_b, req.amount_a)?;
        if !within_tolerance(expected, req.amount_b, tolerance_bps) {
            return Err(WalletError::Imbalanced {
                expected,
                supplied: req.amount_b,
                tolerance_bps,
            });
        }
        self.subscribe_to_pool(call, req)
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn ensure_balance(&self, token: &Pubkey, required: u64) -> Result<()> {
        let available = self.balance_of(token)?;
        if available < required {
            return Err(WalletError::InsufficientBalance { token: *token, available, required });
        }
        Ok(())
    }

    fn supply(
        &mut self,
        approvals: &mut Approvals,
        req:       &SubscribeRequest,
        now:       i64,
    ) -> Result<LiquidityMinted> {
        approvals.grant(&mut self.tokens, &self.address, &req.token_a, req.amount_a)?;
        approvals.grant(&mut self.tokens, &self.address, &req.token_b, req.amount_b)?;
        self.router.add_liquidity(
            &AddLiquidity {
                token_a:          req.token_a,
                token_b:          req.token_b,
                amount_a_desired: req.amount_a,
                amount_b_desired: req.amount_b,
                min_a:            req.min_a,
                min_b:            req.min_b,
                recipient:        self.address,
                deadline:         req.deadline,
            },
            now,
        )
    }
}

// ─── Approval journal ─────────────────────────────────────────────────────────

/// Allowances granted during one subscription, with the values they replaced.
struct Approvals {
    spender: Pubkey,
    granted: Vec<(Pubkey, u64)>,
}

impl Approvals {
    fn new(spender: Pubkey) -> Self {
        Self { spender, granted: Vec::with_capacity(2) }
    }

    fn grant<T: TokenLedger>(
        &mut self,
        tokens: &mut T,
        holder: &Pubkey,
        token:  &Pubkey,
        amount: u64,
    ) -> Result<()> {
        let previous = tokens.allowance(token, holder, &self.spender)?;
        tokens.approve(token, holder, &self.spender, amount)?;
        self.granted.push((*token, previous));
        Ok(())
    }

    /// Put every touched allowance back, newest first. A failed restore does
    /// not stop the rest; the tokens still approved are returned.
    fn restore<T: TokenLedger>(self, tokens: &mut T, holder: &Pubkey) -> Vec<Pubkey> {
        let mut live = Vec::new();
        for (token, previous) in self.granted.into_iter().rev() {
            if let Err(err) = tokens.approve(&token, holder, &self.spender, previous) {
                warn!(token = %token, restore_to = previous, error = %err, "allowance restore failed");
                live.push(token);
            }
        }
        live
    }
}
