//! Quotations service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{NewQuotation, Quotation, QuotationSimulation};
use crate::Result;

/// Service for pricing conversions.
///
/// # Example
///
/// ```no_run
/// use killb::models::{CashInMethod, CashOutMethod, Currency, NewQuotation};
/// use rust_decimal::Decimal;
///
/// # async fn example(client: killb::KillbClient) -> killb::Result<()> {
/// let request = NewQuotation {
///     from_currency: Currency::Mxn,
///     to_currency: Currency::Usdc,
///     amount: Decimal::new(1000, 0),
///     amount_is_to_currency: false,
///     cash_in_method: CashInMethod::Spei,
///     cash_out_method: CashOutMethod::Polygon,
///     skip_order: None,
/// };
///
/// // Preview first, then lock the price
/// let preview = client.quotations().simulate(&request).await?;
/// println!("rate: {:?}", preview.rate);
/// let quotation = client.quotations().create(&request).await?;
/// println!("quotation {} expires at {:?}", quotation.id, quotation.expires_at);
/// # Ok(())
/// # }
/// ```
pub struct QuotationsService {
    inner: Arc<ClientInner>,
}

impl QuotationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a firm quotation that a ramp can execute.
    pub async fn create(&self, quotation: &NewQuotation) -> Result<Quotation> {
        self.inner.post("quotations", quotation).await
    }

    /// Price a conversion without committing to it.
    pub async fn simulate(&self, quotation: &NewQuotation) -> Result<QuotationSimulation> {
        self.inner.post("quotations/simulation", quotation).await
    }
}
