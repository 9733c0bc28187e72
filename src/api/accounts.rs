//! Accounts service for PSE, wallet and SPEI accounts.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Account, AccountId, AccountUpdate, AccountsPage, AccountsQuery, NewAccount, UserId};
use crate::Result;

/// Service for account-related operations.
///
/// # Example
///
/// ```no_run
/// use killb::UserId;
///
/// # async fn example(client: killb::KillbClient) -> killb::Result<()> {
/// let account = client.accounts().get_by_user(&UserId::new("usr_1")).await?;
/// println!("Account: {} ({:?})", account.id, account.account_type);
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Register a new payout or funding account.
    pub async fn create(&self, account: &NewAccount) -> Result<Account> {
        self.inner.post("accounts", account).await
    }

    /// Update an existing account.
    pub async fn update(&self, account_id: &AccountId, update: &AccountUpdate) -> Result<Account> {
        self.inner
            .patch(&format!("accounts/{}", account_id), update)
            .await
    }

    /// Get an account by its ID.
    pub async fn get(&self, account_id: &AccountId) -> Result<Account> {
        self.inner.get(&format!("accounts/{}", account_id)).await
    }

    /// Get the account registered for a user.
    pub async fn get_by_user(&self, user_id: &UserId) -> Result<Account> {
        self.inner.get(&format!("accounts/{}", user_id)).await
    }

    /// Search accounts.
    pub async fn query(&self, query: &AccountsQuery) -> Result<AccountsPage> {
        self.inner.get_with_query("accounts", query).await
    }
}
