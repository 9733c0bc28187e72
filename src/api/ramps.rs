//! Ramps service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{NewRamp, Ramp, RampsPage, RampsQuery};
use crate::Result;

/// Service for executing quotations.
pub struct RampsService {
    inner: Arc<ClientInner>,
}

impl RampsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Execute a quotation.
    pub async fn create(&self, ramp: &NewRamp) -> Result<Ramp> {
        self.inner.post("ramps", ramp).await
    }

    /// List ramps matching the filters.
    pub async fn query(&self, query: &RampsQuery) -> Result<RampsPage> {
        self.inner.get_with_query("ramps", query).await
    }
}
