//! Savings service.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::client::ClientInner;
use crate::models::{
    DepositInstructions, DepositInstructionsType, SavingsAccount, SavingsAccountId,
    SavingsBalance, SavingsTransactionsQuery, SavingsWithdrawal, SavingsWithdrawalReceipt, UserId,
};
use crate::Result;

/// Service for USD savings accounts.
///
/// # Example
///
/// ```no_run
/// use killb::models::DepositInstructionsType;
/// use killb::UserId;
///
/// # async fn example(client: killb::KillbClient) -> killb::Result<()> {
/// let savings = client.savings().create(&UserId::new("usr_1")).await?;
/// let balance = client.savings().balance(&savings.id).await?;
/// println!("{} {}", balance.amount, balance.currency);
///
/// let wire = client
///     .savings()
///     .deposit_instructions(&savings.id, DepositInstructionsType::Wire)
///     .await?;
/// println!("{:?}", wire.bank_name);
/// # Ok(())
/// # }
/// ```
pub struct SavingsService {
    inner: Arc<ClientInner>,
}

impl SavingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Open a savings account for a user.
    pub async fn create(&self, user_id: &UserId) -> Result<SavingsAccount> {
        self.inner
            .post("savings", &json!({ "UserId": user_id }))
            .await
    }

    /// Get a user's savings account.
    pub async fn get(&self, user_id: &UserId) -> Result<SavingsAccount> {
        self.inner.get(&format!("savings/{}", user_id)).await
    }

    /// Withdraw funds to another savings account or an external account.
    pub async fn withdraw(&self, withdrawal: &SavingsWithdrawal) -> Result<SavingsWithdrawalReceipt> {
        self.inner.post("savings/withdrawal", withdrawal).await
    }

    /// List savings transactions.
    ///
    /// Returned as raw JSON: the API wraps the entries differently
    /// depending on the filters. Entries decode as
    /// [`SavingsTransaction`](crate::models::SavingsTransaction).
    pub async fn transactions(&self, query: &SavingsTransactionsQuery) -> Result<Value> {
        self.inner
            .get_with_query("savings/transactions", query)
            .await
    }

    /// Get the balance of a savings account.
    pub async fn balance(&self, savings_account_id: &SavingsAccountId) -> Result<SavingsBalance> {
        self.inner
            .get(&format!("savings/{}/balance", savings_account_id))
            .await
    }

    /// Get bank details for funding a savings account over ACH or wire.
    pub async fn deposit_instructions(
        &self,
        savings_account_id: &SavingsAccountId,
        kind: DepositInstructionsType,
    ) -> Result<DepositInstructions> {
        self.inner
            .get(&format!(
                "savings/{}/deposit-instructions/{}",
                savings_account_id,
                kind.as_str()
            ))
            .await
    }

    /// Get the crypto deposit address of a savings account.
    pub async fn wallet_address(&self, savings_account_id: &SavingsAccountId) -> Result<Value> {
        self.inner
            .get(&format!(
                "savings/{}/crypto-deposit-instructions",
                savings_account_id
            ))
            .await
    }
}
