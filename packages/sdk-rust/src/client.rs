//! [`SushiWalletClient`], the main entry point for off-chain integrations.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcTransactionConfig};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use solana_transaction_status_client_types::{UiTransactionEncoding, UiTransactionReturnData};
use sushi_wallet_core::{
    min_with_slippage, quote_amount, Reserves, WalletError, DEFAULT_DEADLINE_SECS, WALLET_NAME,
};
use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    instructions::{
        derive_ata, derive_wallet, initialize_wallet_ix, subscribe_to_pool_ix, SubscribeAccounts,
    },
    state::{parse_token_account, parse_wallet, read_u64, TokenAccountState, WalletState},
    types::{
        CreateWalletParams, CreateWalletResult, PoolAccounts, QuoteParams, QuoteResult,
        SubscribeParams, SubscribeResult, WalletInfo,
    },
};

// ─── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_PROGRAM_ID: Pubkey = pubkey!("8eS2LMpe75LW52CaK53KYDhjk9dGqhWsHPeDd8nJ6J7s");
const DEVNET_RPC:  &str = "https://api.devnet.solana.com";
const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";

pub const ENV_RPC_URL:    &str = "SUSHI_WALLET_RPC_URL";
pub const ENV_PROGRAM_ID: &str = "SUSHI_WALLET_PROGRAM_ID";

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async SushiWallet client for Solana.
///
/// ```rust,no_run
/// # use sushi_wallet_sdk::SushiWalletClient;
/// # use solana_sdk::pubkey::Pubkey;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SushiWalletClient::devnet();
/// let wallet = client.wallet_address(&Pubkey::new_unique());
/// let info   = client.wallet_info(&wallet).await?;
/// println!("{} owned by {}", info.name, info.owner);
/// # Ok(())
/// # }
/// ```
pub struct SushiWalletClient {
    rpc_url:    String,
    program_id: Pubkey,
    commitment: CommitmentConfig,
}

impl SushiWalletClient {
    /// Create a client pointing at any RPC endpoint.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url:    rpc_url.into(),
            program_id: DEFAULT_PROGRAM_ID,
            commitment: CommitmentConfig::confirmed(),
        }
    }

    /// Pre-configured client for Solana devnet.
    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC)
    }

    /// Pre-configured client for Solana mainnet-beta.
    pub fn mainnet() -> Self {
        Self::new(MAINNET_RPC)
    }

    /// Client configured from `SUSHI_WALLET_RPC_URL` (default: devnet) and
    /// `SUSHI_WALLET_PROGRAM_ID` (default: [`DEFAULT_PROGRAM_ID`]).
    pub fn from_env() -> Result<Self> {
        let rpc_url = std::env::var(ENV_RPC_URL).unwrap_or_else(|_| DEVNET_RPC.to_string());
        let mut client = Self::new(rpc_url);
        if let Ok(raw) = std::env::var(ENV_PROGRAM_ID) {
            client.program_id = Pubkey::from_str(raw.trim())
                .map_err(|e| Error::InvalidArgument(format!("{ENV_PROGRAM_ID}={raw}: {e}")))?;
        }
        Ok(client)
    }

    /// Override the program ID (useful for locally deployed programs in tests).
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Wallet PDA created by `creator`.
    pub fn wallet_address(&self, creator: &Pubkey) -> Pubkey {
        derive_wallet(creator, &self.program_id).0
    }

    // ── Write operations ──────────────────────────────────────────────────────

    /// Create the payer's wallet. Owner and router are fixed from here on.
    pub async fn create_wallet(
        &self,
        payer:  &Keypair,
        params: CreateWalletParams,
    ) -> Result<CreateWalletResult> {
        if params.router == Pubkey::default() {
            return Err(Error::InvalidArgument("router must be a program id".into()));
        }
        let rpc = self.rpc();
        let ix = initialize_wallet_ix(
            &self.program_id,
            &payer.pubkey(),
            &params.router,
            params.owner.as_ref(),
        );
        let sig = self.sign_and_send(&rpc, &[ix], payer).await?;

        let wallet = self.wallet_address(&payer.pubkey());
        let owner = params.owner.unwrap_or_else(|| payer.pubkey());
        info!(%wallet, %owner, router = %params.router, "wallet created");
        Ok(CreateWalletResult { signature: sig.to_string(), wallet, owner, router: params.router })
    }

    /// Supply wallet custody into a router pool.
    ///
    /// If `params.amount_b` is `None` the SDK quotes the balanced amount from
    /// live reserves. Balances are checked here so a short wallet fails
    /// before a transaction is sent; the program checks them again.
    pub async fn subscribe_to_pool(
        &self,
        owner:  &Keypair,
        params: SubscribeParams,
    ) -> Result<SubscribeResult> {
        let rpc = self.rpc();

        let wallet = self.fetch_wallet(&rpc, &params.wallet).await?;
        if wallet.owner != owner.pubkey() {
            return Err(WalletError::Unauthorized { caller: owner.pubkey(), owner: wallet.owner }.into());
        }
        if params.amount_a == 0 {
            return Err(WalletError::ZeroAmount.into());
        }

        let (vault_a, vault_b) = self.fetch_vaults(&rpc, &params.pool).await?;
        let (reserves, a_is_pool_a) = orient(&vault_a, &vault_b, &params.mint_a, &params.mint_b)?;

        let amount_b = match params.amount_b {
            Some(b) => b,
            None => balanced_amount(params.amount_a, reserves, &params.mint_a, &params.mint_b)?,
        };
        if amount_b == 0 {
            return Err(WalletError::ZeroAmount.into());
        }

        let min_a = min_with_slippage(params.amount_a, params.max_slippage_bps);
        let min_b = min_with_slippage(amount_b, params.max_slippage_bps);
        let deadline = match params.deadline {
            Some(d) => d,
            None => unix_now()?.saturating_add(DEFAULT_DEADLINE_SECS),
        };

        for (mint, required) in [(params.mint_a, params.amount_a), (params.mint_b, amount_b)] {
            let available = self.custody_balance(&rpc, &params.wallet, &mint).await?;
            if available < required {
                return Err(WalletError::InsufficientBalance { token: mint, available, required }.into());
            }
        }

        // Map user mint ordering → pool ordering.
        let (pool_amount_a, pool_amount_b, pool_min_a, pool_min_b) = if a_is_pool_a {
            (params.amount_a, amount_b, min_a, min_b)
        } else {
            (amount_b, params.amount_a, min_b, min_a)
        };

        let wallet_lp = derive_ata(&params.wallet, &params.pool.lp_mint);
        let accounts = SubscribeAccounts {
            owner:     owner.pubkey(),
            wallet:    params.wallet,
            router:    wallet.router,
            pool:      params.pool.pool,
            vault_a:   params.pool.vault_a,
            vault_b:   params.pool.vault_b,
            lp_mint:   params.pool.lp_mint,
            custody_a: derive_ata(&params.wallet, &vault_a.mint),
            custody_b: derive_ata(&params.wallet, &vault_b.mint),
            wallet_lp,
        };
        let ix = subscribe_to_pool_ix(
            &self.program_id,
            &accounts,
            pool_amount_a,
            pool_amount_b,
            pool_min_a,
            pool_min_b,
            deadline,
        );
        let sig = self.sign_and_send(&rpc, &[ix], owner).await?;

        let shares_minted = self.returned_u64(&rpc, &sig).await?;
        info!(
            wallet = %params.wallet, pool = %params.pool.pool,
            amount_a = params.amount_a, amount_b, shares_minted,
            "subscribed to pool"
        );

        Ok(SubscribeResult {
            signature: sig.to_string(),
            wallet:    params.wallet,
            pool:      params.pool.pool,
            amount_a:  params.amount_a,
            amount_b,
            min_a,
            min_b,
            deadline,
            shares_minted,
        })
    }

    // ── Read operations ───────────────────────────────────────────────────────

    /// Owner, router and name of a deployed wallet.
    pub async fn wallet_info(&self, wallet: &Pubkey) -> Result<WalletInfo> {
        let rpc = self.rpc();
        let state = self.fetch_wallet(&rpc, wallet).await?;
        Ok(WalletInfo {
            address: *wallet,
            creator: state.creator,
            owner:   state.owner,
            router:  state.router,
            name:    WALLET_NAME.to_string(),
        })
    }

    /// Balanced-deposit quote from the pool's live vault balances.
    ///
    /// Same floor formula the program's `quote` instruction applies.
    pub async fn quote(&self, params: QuoteParams) -> Result<QuoteResult> {
        if params.amount_in == 0 {
            return Err(WalletError::ZeroAmount.into());
        }
        let rpc = self.rpc();
        let (vault_a, vault_b) = self.fetch_vaults(&rpc, &params.pool).await?;
        let (reserves, _) = orient(&vault_a, &vault_b, &params.mint_in, &params.mint_out)?;
        let amount_out = balanced_amount(params.amount_in, reserves, &params.mint_in, &params.mint_out)?;

        debug!(
            pool = %params.pool.pool, amount_in = params.amount_in, amount_out,
            reserve_in = reserves.reserve_in, reserve_out = reserves.reserve_out,
            "quote"
        );
        Ok(QuoteResult {
            amount_in:   params.amount_in,
            amount_out,
            reserve_in:  reserves.reserve_in,
            reserve_out: reserves.reserve_out,
        })
    }

    /// Wallet custody balance of `mint`. A custody account that was never
    /// created holds zero.
    pub async fn balance_of(&self, wallet: &Pubkey, mint: &Pubkey) -> Result<u64> {
        let rpc = self.rpc();
        self.custody_balance(&rpc, wallet, mint).await
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn rpc(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), self.commitment)
    }

    async fn sign_and_send(
        &self,
        rpc:          &RpcClient,
        instructions: &[Instruction],
        payer:        &Keypair,
    ) -> Result<Signature> {
        let blockhash = rpc.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &[payer],
            blockhash,
        );
        Ok(rpc.send_and_confirm_transaction(&tx).await?)
    }

    /// The program's u64 return value, read back from the confirmed
    /// transaction's metadata.
    async fn returned_u64(&self, rpc: &RpcClient, sig: &Signature) -> Result<u64> {
        // getTransaction rejects `processed`.
        let commitment = if self.commitment.is_finalized() {
            self.commitment
        } else {
            CommitmentConfig::confirmed()
        };
        let tx = rpc
            .get_transaction_with_config(
                sig,
                RpcTransactionConfig {
                    encoding: Some(UiTransactionEncoding::Base64),
                    commitment: Some(commitment),
                    max_supported_transaction_version: Some(0),
                },
            )
            .await?;
        let return_data: Option<UiTransactionReturnData> =
            tx.transaction.meta.and_then(|meta| meta.return_data.into());
        decode_return_u64(&self.program_id, return_data)
    }

    async fn fetch_wallet(&self, rpc: &RpcClient, wallet: &Pubkey) -> Result<WalletState> {
        let account = rpc
            .get_account_with_commitment(wallet, self.commitment)
            .await?
            .value
            .ok_or(Error::WalletNotFound(*wallet))?;
        if account.owner != self.program_id {
            return Err(Error::WalletNotFound(*wallet));
        }
        parse_wallet(&account.data)
    }

    async fn fetch_vaults(
        &self,
        rpc:  &RpcClient,
        pool: &PoolAccounts,
    ) -> Result<(TokenAccountState, TokenAccountState)> {
        let vault_a = parse_token_account(&rpc.get_account_data(&pool.vault_a).await?)?;
        let vault_b = parse_token_account(&rpc.get_account_data(&pool.vault_b).await?)?;
        Ok((vault_a, vault_b))
    }

    async fn custody_balance(&self, rpc: &RpcClient, wallet: &Pubkey, mint: &Pubkey) -> Result<u64> {
        let custody = derive_ata(wallet, mint);
        let amount = self.token_amount_or_zero(rpc, &custody).await?;
        debug!(%wallet, %mint, amount, "custody balance");
        Ok(amount)
    }

    async fn token_amount_or_zero(&self, rpc: &RpcClient, account: &Pubkey) -> Result<u64> {
        match rpc.get_account_with_commitment(account, self.commitment).await?.value {
            Some(acc) => Ok(parse_token_account(&acc.data)?.amount),
            None => Ok(0),
        }
    }
}

// ─── Utilities ────────────────────────────────────────────────────────────────

/// Order the pool's vault balances as `(reserve_in, reserve_out)` for the
/// caller's pair; the flag is `true` when `mint_in` is the pool's token A.
fn orient(
    vault_a:  &TokenAccountState,
    vault_b:  &TokenAccountState,
    mint_in:  &Pubkey,
    mint_out: &Pubkey,
) -> Result<(Reserves, bool)> {
    if mint_in == mint_out {
        return Err(WalletError::IdenticalTokens.into());
    }
    let stored = Reserves::new(vault_a.amount, vault_b.amount);
    if vault_a.mint == *mint_in && vault_b.mint == *mint_out {
        Ok((stored, true))
    } else if vault_a.mint == *mint_out && vault_b.mint == *mint_in {
        Ok((stored.flipped(), false))
    } else {
        Err(Error::InvalidArgument(format!(
            "pool vaults hold {} / {}, not {} / {}",
            vault_a.mint, vault_b.mint, mint_in, mint_out
        )))
    }
}

fn balanced_amount(amount_in: u64, reserves: Reserves, mint_in: &Pubkey, mint_out: &Pubkey) -> Result<u64> {
    if reserves.is_empty() {
        return Err(WalletError::NoLiquidity { token_in: *mint_in, token_out: *mint_out }.into());
    }
    Ok(quote_amount(amount_in, reserves)?)
}

/// Decode a base64 little-endian u64 set as return data by `program_id`.
fn decode_return_u64(program_id: &Pubkey, return_data: Option<UiTransactionReturnData>) -> Result<u64> {
    let data = return_data.ok_or_else(|| Error::ParseError {
        offset: 0,
        reason: "transaction has no return data".into(),
    })?;
    if data.program_id != program_id.to_string() {
        return Err(Error::ParseError {
            offset: 0,
            reason: format!("return data set by {}, expected {program_id}", data.program_id),
        });
    }
    let bytes = STANDARD.decode(&data.data.0).map_err(|e| Error::ParseError {
        offset: 0,
        reason: format!("base64: {e}"),
    })?;
    read_u64(&bytes, 0)
}

fn unix_now() -> Result<i64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::InvalidArgument(format!("system clock before epoch: {e}")))?;
    i64::try_from(elapsed.as_secs())
        .map_err(|_| Error::InvalidArgument("system clock out of range".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_transaction_status_client_types::UiReturnDataEncoding;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn vault(mint: u8, amount: u64) -> TokenAccountState {
        TokenAccountState { mint: key(mint), owner: key(99), amount }
    }

    #[test]
    fn test_orient_both_directions() {
        let (a, b) = (vault(1, 2_000_000), vault(2, 1_000_000));

        let (r, a_first) = orient(&a, &b, &key(1), &key(2)).unwrap();
        assert_eq!(r, Reserves::new(2_000_000, 1_000_000));
        assert!(a_first);

        let (r, a_first) = orient(&a, &b, &key(2), &key(1)).unwrap();
        assert_eq!(r, Reserves::new(1_000_000, 2_000_000));
        assert!(!a_first);
    }

    #[test]
    fn test_orient_rejects_foreign_and_identical_mints() {
        let (a, b) = (vault(1, 10), vault(2, 10));
        assert!(matches!(orient(&a, &b, &key(1), &key(3)), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            orient(&a, &b, &key(1), &key(1)),
            Err(Error::Core(WalletError::IdenticalTokens))
        ));
    }

    #[test]
    fn test_balanced_amount_matches_core_quote() {
        let r = Reserves::new(2_000_000, 1_000_000);
        assert_eq!(balanced_amount(10_000, r, &key(1), &key(2)).unwrap(), 5_000);
        assert!(matches!(
            balanced_amount(10_000, Reserves::new(0, 5), &key(1), &key(2)),
            Err(Error::Core(WalletError::NoLiquidity { .. }))
        ));
    }

    #[test]
    fn test_builder_overrides() {
        let client = SushiWalletClient::new("http://localhost:8899")
            .with_program_id(key(5))
            .with_commitment(CommitmentConfig::finalized());
        assert_eq!(client.program_id(), key(5));
        assert_eq!(client.rpc_url(), "http://localhost:8899");
        assert_eq!(client.wallet_address(&key(6)), derive_wallet(&key(6), &key(5)).0);
        assert_eq!(SushiWalletClient::devnet().program_id(), DEFAULT_PROGRAM_ID);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(ENV_RPC_URL, "http://127.0.0.1:8899");
        std::env::set_var(ENV_PROGRAM_ID, key(7).to_string());
        let client = SushiWalletClient::from_env().unwrap();
        assert_eq!(client.rpc_url(), "http://127.0.0.1:8899");
        assert_eq!(client.program_id(), key(7));

        std::env::set_var(ENV_PROGRAM_ID, "not-a-key");
        assert!(matches!(SushiWalletClient::from_env(), Err(Error::InvalidArgument(_))));

        std::env::remove_var(ENV_RPC_URL);
        std::env::remove_var(ENV_PROGRAM_ID);
    }

    fn return_data(program: Pubkey, bytes: &[u8]) -> UiTransactionReturnData {
        UiTransactionReturnData {
            program_id: program.to_string(),
            data:       (STANDARD.encode(bytes), UiReturnDataEncoding::Base64),
        }
    }

    #[test]
    fn test_decode_return_u64() {
        let shares = decode_return_u64(&key(9), Some(return_data(key(9), &2_500u64.to_le_bytes())));
        assert_eq!(shares.unwrap(), 2_500);
    }

    #[test]
    fn test_decode_return_u64_rejects_missing_foreign_and_short_data() {
        assert!(matches!(decode_return_u64(&key(9), None), Err(Error::ParseError { .. })));
        // Return data left by the router, not the wallet program.
        let foreign = return_data(key(8), &7u64.to_le_bytes());
        assert!(matches!(decode_return_u64(&key(9), Some(foreign)), Err(Error::ParseError { .. })));
        let short = return_data(key(9), &[1, 2, 3]);
        assert!(matches!(decode_return_u64(&key(9), Some(short)), Err(Error::ParseError { .. })));
    }

    #[tokio::test]
    async fn test_zero_quote_fails_before_rpc() {
        // Unreachable endpoint: the request must be rejected without a call.
        let client = SushiWalletClient::new("http://127.0.0.1:1");
        let err = client
            .quote(QuoteParams {
                pool: PoolAccounts { pool: key(1), vault_a: key(2), vault_b: key(3), lp_mint: key(4) },
                mint_in:   key(5),
                mint_out:  key(6),
                amount_in: 0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Core(WalletError::ZeroAmount)));
    }

    #[tokio::test]
    async fn test_unreachable_rpc_surfaces_as_rpc_error() {
        let client = SushiWalletClient::new("http://127.0.0.1:1");
        let err = client.wallet_info(&key(1)).await.unwrap_err();
        assert!(matches!(err, Error::Rpc(_)));
    }
}
