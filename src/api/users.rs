//! Users service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{NewUser, User, UserData, UserId, UsersQuery};
use crate::Result;

/// Service for user (person and company) operations.
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a person or company user.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        self.inner.post("users", user).await
    }

    /// Replace a user's person or company record.
    pub async fn update(&self, user_id: &UserId, data: &UserData) -> Result<User> {
        self.inner.patch(&format!("users/{}", user_id), data).await
    }

    /// Search users.
    ///
    /// The result shape is not fixed by the API, so the raw JSON is
    /// returned.
    pub async fn query(&self, query: &UsersQuery) -> Result<Value> {
        self.inner.get_with_query("users", query).await
    }
}
