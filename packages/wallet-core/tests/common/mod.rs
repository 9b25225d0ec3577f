//! In-memory collaborators shared by the integration tests.
//!
//! One `Chain` holds every token balance and allowance; the oracle reads pool
//! reserves out of it and the router moves funds through it, so a
//! subscription changes reserves the same way it would on-chain.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use solana_sdk::pubkey::Pubkey;
use sushi_wallet_core::{
    AddLiquidity, CustodialWallet, LiquidityMinted, LiquidityRouter, ReserveOracle, Reserves,
    Result, TokenLedger, WalletError,
};

// ─── Chain state ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Pool {
    pub address:   Pubkey,
    pub token_a:   Pubkey,
    pub token_b:   Pubkey,
    pub lp_mint:   Pubkey,
    pub lp_supply: u64,
}

#[derive(Debug, Default)]
pub struct Chain {
    balances:       HashMap<(Pubkey, Pubkey), u64>,
    allowances:     HashMap<(Pubkey, Pubkey, Pubkey), u64>,
    pools:          Vec<Pool>,
    /// Every `approve` that reached the ledger.
    pub approve_calls: usize,
    /// Make the router revert with this message.
    pub router_failure: Option<String>,
    /// Reject the n-th `approve` (1-based) without touching the allowance.
    pub fail_approve_at: Option<usize>,
}

impl Chain {
    pub fn balance(&self, token: &Pubkey, holder: &Pubkey) -> u64 {
        self.balances.get(&(*token, *holder)).copied().unwrap_or(0)
    }

    pub fn allowance(&self, token: &Pubkey, holder: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances.get(&(*token, *holder, *spender)).copied().unwrap_or(0)
    }

    pub fn mint(&mut self, token: &Pubkey, holder: &Pubkey, amount: u64) {
        *self.balances.entry((*token, *holder)).or_insert(0) += amount;
    }

    pub fn set_balance(&mut self, token: &Pubkey, holder: &Pubkey, amount: u64) {
        self.balances.insert((*token, *holder), amount);
    }

    pub fn set_allowance(&mut self, token: &Pubkey, holder: &Pubkey, spender: &Pubkey, amount: u64) {
        self.allowances.insert((*token, *holder, *spender), amount);
    }

    /// Create a pool seeded with `reserve_a` / `reserve_b` and `lp_supply`
    /// shares held by an unrelated provider.
    pub fn add_pool(&mut self, token_a: Pubkey, token_b: Pubkey, reserve_a: u64, reserve_b: u64, lp_supply: u64) -> Pool {
        let pool = Pool {
            address: Pubkey::new_unique(),
            token_a,
            token_b,
            lp_mint: Pubkey::new_unique(),
            lp_supply,
        };
        self.set_balance(&token_a, &pool.address, reserve_a);
        self.set_balance(&token_b, &pool.address, reserve_b);
        self.mint(&pool.lp_mint, &Pubkey::new_unique(), lp_supply);
        self.pools.push(pool.clone());
        pool
    }

    /// Pool for the pair in either ordering; `true` when stored as given.
    fn find_pool(&self, token_in: &Pubkey, token_out: &Pubkey) -> Option<(usize, bool)> {
        self.pools.iter().enumerate().find_map(|(i, p)| {
            if p.token_a == *token_in && p.token_b == *token_out {
                Some((i, true))
            } else if p.token_a == *token_out && p.token_b == *token_in {
                Some((i, false))
            } else {
                None
            }
        })
    }
}

pub type SharedChain = Rc<RefCell<Chain>>;

pub fn new_chain() -> SharedChain {
    Rc::new(RefCell::new(Chain::default()))
}

// ─── Token ledger ─────────────────────────────────────────────────────────────

pub struct MemoryTokens(pub SharedChain);

impl TokenLedger for MemoryTokens {
    fn balance_of(&self, token: &Pubkey, holder: &Pubkey) -> Result<u64> {
        Ok(self.0.borrow().balance(token, holder))
    }

    fn allowance(&self, token: &Pubkey, holder: &Pubkey, spender: &Pubkey) -> Result<u64> {
        Ok(self.0.borrow().allowance(token, holder, spender))
    }

    fn approve(&mut self, token: &Pubkey, holder: &Pubkey, spender: &Pubkey, amount: u64) -> Result<()> {
        let mut chain = self.0.borrow_mut();
        chain.approve_calls += 1;
        if chain.fail_approve_at == Some(chain.approve_calls) {
            return Err(WalletError::ExternalFailure("approve".into()));
        }
        chain.set_allowance(token, holder, spender, amount);
        Ok(())
    }
}

// ─── Reserve oracle ───────────────────────────────────────────────────────────

pub struct MemoryOracle(pub SharedChain);

impl ReserveOracle for MemoryOracle {
    fn reserves(&self, token_in: &Pubkey, token_out: &Pubkey) -> Result<Option<Reserves>> {
        let chain = self.0.borrow();
        Ok(chain.find_pool(token_in, token_out).map(|(i, _)| {
            let pool = &chain.pools[i];
            Reserves::new(chain.balance(token_in, &pool.address), chain.balance(token_out, &pool.address))
        }))
    }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Proportional router: keeps the pool ratio, pulls through allowances and
/// mints `min(a × supply / r_a, b × supply / r_b)` shares.
pub struct MemoryRouter {
    pub address: Pubkey,
    pub chain:   SharedChain,
}

fn proportional(amount: u64, reserve_from: u64, reserve_to: u64) -> u64 {
    (amount as u128 * reserve_to as u128 / reserve_from as u128) as u64
}

impl LiquidityRouter for MemoryRouter {
    fn address(&self) -> Pubkey {
        self.address
    }

    fn add_liquidity(&mut self, call: &AddLiquidity, now: i64) -> Result<LiquidityMinted> {
        let mut chain = self.chain.borrow_mut();
        if let Some(reason) = chain.router_failure.clone() {
            return Err(WalletError::ExternalFailure(reason));
        }
        if now > call.deadline {
            return Err(WalletError::Expired { deadline: call.deadline, now });
        }
        let (index, _) = chain
            .find_pool(&call.token_a, &call.token_b)
            .ok_or(WalletError::ExternalFailure("PAIR_NOT_FOUND".into()))?;
        let pool = chain.pools[index].clone();
        let reserve_a = chain.balance(&call.token_a, &pool.address);
        let reserve_b = chain.balance(&call.token_b, &pool.address);

        let (amount_a, amount_b) = if reserve_a == 0 && reserve_b == 0 {
            (call.amount_a_desired, call.amount_b_desired)
        } else {
            let b_optimal = proportional(call.amount_a_desired, reserve_a, reserve_b);
            if b_optimal <= call.amount_b_desired {
                if b_optimal < call.min_b {
                    return Err(WalletError::ExternalFailure("INSUFFICIENT_B_AMOUNT".into()));
                }
                (call.amount_a_desired, b_optimal)
            } else {
                let a_optimal = proportional(call.amount_b_desired, reserve_b, reserve_a);
                if a_optimal < call.min_a {
                    return Err(WalletError::ExternalFailure("INSUFFICIENT_A_AMOUNT".into()));
                }
                (a_optimal, call.amount_b_desired)
            }
        };

        let shares = if pool.lp_supply == 0 {
            ((amount_a as u128 * amount_b as u128) as f64).sqrt() as u64
        } else {
            proportional(amount_a, reserve_a, pool.lp_supply)
                .min(proportional(amount_b, reserve_b, pool.lp_supply))
        };
        if shares == 0 {
            return Err(WalletError::ExternalFailure("INSUFFICIENT_LIQUIDITY_MINTED".into()));
        }

        // Check everything before moving anything.
        for (token, amount) in [(call.token_a, amount_a), (call.token_b, amount_b)] {
            if chain.allowance(&token, &call.recipient, &self.address) < amount {
                return Err(WalletError::ExternalFailure("TRANSFER_FROM_FAILED: allowance".into()));
            }
            if chain.balance(&token, &call.recipient) < amount {
                return Err(WalletError::ExternalFailure("TRANSFER_FROM_FAILED: balance".into()));
            }
        }
        for (token, amount) in [(call.token_a, amount_a), (call.token_b, amount_b)] {
            let allowance = chain.allowance(&token, &call.recipient, &self.address);
            chain.set_allowance(&token, &call.recipient, &self.address, allowance - amount);
            let from = chain.balance(&token, &call.recipient);
            chain.set_balance(&token, &call.recipient, from - amount);
            chain.mint(&token, &pool.address, amount);
        }
        chain.mint(&pool.lp_mint, &call.recipient, shares);
        chain.pools[index].lp_supply += shares;

        Ok(LiquidityMinted { amount_a, amount_b, shares })
    }
}

// ─── Fixture ──────────────────────────────────────────────────────────────────

pub type TestWallet = CustodialWallet<MemoryOracle, MemoryTokens, MemoryRouter>;

pub const NOW: i64 = 1_700_000_000;

pub struct Fixture {
    pub chain:  SharedChain,
    pub wallet: TestWallet,
    pub owner:  Pubkey,
    pub router: Pubkey,
    pub dai:    Pubkey,
    pub bat:    Pubkey,
    pub pool:   Pool,
}

impl Fixture {
    pub fn balance(&self, token: &Pubkey) -> u64 {
        self.chain.borrow().balance(token, &self.wallet.address())
    }

    pub fn allowance(&self, token: &Pubkey) -> u64 {
        self.chain.borrow().allowance(token, &self.wallet.address(), &self.router)
    }

    pub fn shares(&self) -> u64 {
        self.chain.borrow().balance(&self.pool.lp_mint, &self.wallet.address())
    }
}

/// Wallet holding 20 000 DAI and 10 000 BAT; DAI/BAT pool at 2:1.
pub fn fixture() -> Fixture {
    let chain = new_chain();
    let owner = Pubkey::new_unique();
    let router = Pubkey::new_unique();
    let wallet_address = Pubkey::new_unique();
    let dai = Pubkey::new_unique();
    let bat = Pubkey::new_unique();

    let pool = {
        let mut c = chain.borrow_mut();
        c.mint(&dai, &wallet_address, 20_000);
        c.mint(&bat, &wallet_address, 10_000);
        c.add_pool(dai, bat, 2_000_000, 1_000_000, 1_000_000)
    };

    let wallet = CustodialWallet::new(
        wallet_address,
        owner,
        MemoryOracle(chain.clone()),
        MemoryTokens(chain.clone()),
        MemoryRouter { address: router, chain: chain.clone() },
    );

    Fixture { chain, wallet, owner, router, dai, bat, pool }
}
