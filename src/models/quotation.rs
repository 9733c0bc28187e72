//! Quotation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{CashInMethod, CashOutMethod, Currency};
use super::primitives::QuotationId;

/// Request body for creating or simulating a quotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuotation {
    /// Currency paid in
    pub from_currency: Currency,
    /// Currency paid out
    pub to_currency: Currency,
    /// Amount to convert
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Whether `amount` is denominated in `to_currency`
    pub amount_is_to_currency: bool,
    /// Funding rail
    pub cash_in_method: CashInMethod,
    /// Payout rail
    pub cash_out_method: CashOutMethod,
    /// Skip order creation on the liquidity provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_order: Option<i64>,
}

/// A firm quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Quotation ID, referenced when creating a ramp
    pub id: QuotationId,
    /// Currency paid in
    pub from_currency: Currency,
    /// Currency paid out
    pub to_currency: Currency,
    /// Amount paid in
    #[serde(default)]
    pub from_amount: Option<Decimal>,
    /// Amount paid out
    #[serde(default)]
    pub to_amount: Option<Decimal>,
    /// Conversion rate
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Expiry as a Unix timestamp in milliseconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Funding rail
    #[serde(default)]
    pub cash_in_method: Option<CashInMethod>,
    /// Payout rail
    #[serde(default)]
    pub cash_out_method: Option<CashOutMethod>,
}

/// An indicative (non-binding) quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSimulation {
    /// Currency paid in
    pub from_currency: Currency,
    /// Currency paid out
    pub to_currency: Currency,
    /// Amount paid in
    #[serde(default)]
    pub from_amount: Option<Decimal>,
    /// Amount paid out
    #[serde(default)]
    pub to_amount: Option<Decimal>,
    /// Conversion rate
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Funding rail
    #[serde(default)]
    pub cash_in_method: Option<CashInMethod>,
    /// Payout rail
    #[serde(default)]
    pub cash_out_method: Option<CashOutMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_quotation_amount_is_number() {
        let quotation = NewQuotation {
            from_currency: Currency::Cop,
            to_currency: Currency::Usdc,
            amount: dec!(150000.5),
            amount_is_to_currency: false,
            cash_in_method: CashInMethod::Pse,
            cash_out_method: CashOutMethod::Polygon,
            skip_order: None,
        };

        let json = serde_json::to_value(&quotation).unwrap();
        assert_eq!(json["fromCurrency"], "COP");
        assert_eq!(json["cashOutMethod"], "POLYGON");
        assert_eq!(json["amount"], serde_json::json!(150000.5));
        assert!(json.get("skipOrder").is_none());
    }

    #[test]
    fn test_deserialize_quotation() {
        let json = r#"{
            "id": "quo_1",
            "fromCurrency": "MXN",
            "toCurrency": "USDT",
            "fromAmount": 1000,
            "toAmount": 58.12,
            "rate": 17.2,
            "expiresAt": 1717000000000,
            "cashInMethod": "SPEI",
            "cashOutMethod": "ERC20"
        }"#;

        let quotation: Quotation = serde_json::from_str(json).unwrap();
        assert_eq!(quotation.id.as_str(), "quo_1");
        assert_eq!(quotation.to_amount, Some(dec!(58.12)));
        assert_eq!(quotation.cash_out_method, Some(CashOutMethod::Erc20));
    }
}
