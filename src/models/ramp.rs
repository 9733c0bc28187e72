//! Ramp models.
//!
//! A ramp is the execution of a quotation: funds arrive through the
//! cash-in rail and leave through the cash-out rail.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{CashInMethod, CashOutMethod, Currency};
use super::primitives::{AccountId, QuotationId, RampId, UserId};

/// Where to return funds if the ramp cannot complete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundInstructions {
    /// Chain for crypto refunds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Wallet address for crypto refunds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Asset for crypto refunds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// CLABE for SPEI refunds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe: Option<String>,
    /// Beneficiary name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<String>,
}

/// Request body for creating a ramp.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRamp {
    /// Quotation being executed
    pub quotation_id: QuotationId,
    /// User executing it
    pub user_id: UserId,
    /// Destination account
    pub account_id: AccountId,
    /// Refund destination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_instructions: Option<RefundInstructions>,
}

/// Filters for listing ramps.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RampsQuery {
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Ramp ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RampId>,
    /// Caller-side reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Ramp status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Ramp as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ramp {
    /// Ramp ID
    pub id: RampId,
    /// Whether the ramp is still in progress
    #[serde(default)]
    pub active: bool,
    /// Currency paid in
    #[serde(default)]
    pub from_currency: Option<Currency>,
    /// Currency paid out
    #[serde(default)]
    pub to_currency: Option<Currency>,
    /// Amount paid in
    #[serde(default)]
    pub from_amount: Option<Decimal>,
    /// Amount paid out
    #[serde(default)]
    pub to_amount: Option<Decimal>,
    /// Executed quotation
    #[serde(default)]
    pub quotation_id: Option<QuotationId>,
    /// Executing user
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Funding rail
    #[serde(default)]
    pub cash_in_method: Option<CashInMethod>,
    /// Payout rail
    #[serde(default)]
    pub cash_out_method: Option<CashOutMethod>,
    /// Destination account
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Whether the ramp was pre-funded
    #[serde(default)]
    pub is_prefunded: Option<bool>,
    /// Rail-specific payment instructions
    #[serde(default)]
    pub payment_info: serde_json::Value,
    /// Status details
    #[serde(default)]
    pub details: Option<String>,
    /// Proof of transfer (hash or receipt URL)
    #[serde(default)]
    pub transfer_proof: Option<String>,
    /// `ON_RAMP` or `OFF_RAMP`
    #[serde(rename = "type", default)]
    pub ramp_type: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One page of ramps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RampsPage {
    /// Number of pages available
    #[serde(default)]
    pub total_page: u32,
    /// Ramps on this page
    #[serde(default)]
    pub ramps: Vec<Ramp>,
}
