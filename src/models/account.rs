//! Payout/funding account models (PSE, wallet and SPEI accounts).

use serde::{Deserialize, Serialize};

use super::enums::{Currency, DocumentType, PseAccountType, WalletNetwork};
use super::primitives::{AccountId, UserId};

/// Identity document attached to an account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDocument {
    /// Kind of document
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Document number
    pub number: String,
    /// ISO country code of the issuer
    pub issued_country_code: String,
    /// Issue date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expedition_date: Option<String>,
    /// Mexican INE CIC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cic: Option<String>,
    /// Mexican INE citizen identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identificador_ciudadano: Option<String>,
    /// Mexican INE OCR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr: Option<String>,
    /// Mexican INE emission number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_emision: Option<String>,
}

impl IdentityDocument {
    /// Create a document with the mandatory fields only.
    pub fn new(
        document_type: DocumentType,
        number: impl Into<String>,
        issued_country_code: impl Into<String>,
    ) -> Self {
        Self {
            document_type,
            number: number.into(),
            issued_country_code: issued_country_code.into(),
            expedition_date: None,
            cic: None,
            identificador_ciudadano: None,
            ocr: None,
            numero_emision: None,
        }
    }
}

/// Personal details shared by every account kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolder {
    /// First name
    pub first_name: String,
    /// Middle name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name
    pub last_name: String,
    /// Company name, for business accounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
}

/// Colombian PSE bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseAccount {
    /// Holder details
    #[serde(flatten)]
    pub holder: AccountHolder,
    /// Bank account number
    pub account_number: String,
    /// Bank code
    pub bank_code: String,
    /// Savings or checking
    #[serde(rename = "type")]
    pub account_type: PseAccountType,
    /// ISO country code
    pub country_code: String,
    /// Holder's identity document
    pub document: IdentityDocument,
}

/// Crypto wallet account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    /// Holder details
    #[serde(flatten)]
    pub holder: AccountHolder,
    /// Holder's identity document
    pub document: IdentityDocument,
    /// Stablecoin held in the wallet
    pub currency: Currency,
    /// Chain the wallet lives on
    pub network: WalletNetwork,
    /// Wallet address
    pub address: String,
}

/// Mexican SPEI account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeiAccount {
    /// Holder details
    #[serde(flatten)]
    pub holder: AccountHolder,
    /// Holder's identity document
    pub document: IdentityDocument,
    /// CLABE number
    pub clabe: String,
    /// CLABE kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe_type: Option<String>,
    /// Bank code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// ISO country code
    pub country_code: String,
}

/// Account payload, tagged by account kind on the wire as
/// `{"type": "pse" | "wallet" | "spei", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum AccountDetails {
    /// PSE bank account
    Pse(PseAccount),
    /// Crypto wallet
    Wallet(WalletAccount),
    /// SPEI account
    Spei(SpeiAccount),
}

/// Request body for creating an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    /// Owner of the account
    pub user_id: UserId,
    /// Kind-specific details
    #[serde(flatten)]
    pub details: AccountDetails,
    /// Caller-side reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Changes to a PSE account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseAccountUpdate {
    /// New account number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// New bank code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// New account kind
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<PseAccountType>,
    /// Replacement document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<IdentityDocument>,
}

/// Changes to a wallet account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccountUpdate {
    /// Replacement document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<IdentityDocument>,
    /// New currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// New network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<WalletNetwork>,
    /// New address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Changes to a SPEI account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeiAccountUpdate {
    /// Replacement document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<IdentityDocument>,
    /// New CLABE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe: Option<String>,
    /// New CLABE kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clabe_type: Option<String>,
}

/// Request body for updating an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum AccountUpdate {
    /// PSE changes
    Pse(PseAccountUpdate),
    /// Wallet changes
    Wallet(WalletAccountUpdate),
    /// SPEI changes
    Spei(SpeiAccountUpdate),
}

/// Account as returned by the API.
///
/// `data` is kept as raw JSON since its shape depends on `account_type`
/// and the server may add fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account ID
    pub id: AccountId,
    /// Owner
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// `pse`, `wallet` or `spei`
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    /// Verification status
    #[serde(default)]
    pub status: Option<String>,
    /// Kind-specific details
    #[serde(default)]
    pub data: serde_json::Value,
    /// Caller-side reference
    #[serde(default)]
    pub external_id: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Account {
    /// Decode `data` into the typed payload matching `account_type`.
    pub fn details(&self) -> Option<AccountDetails> {
        let tagged = serde_json::json!({
            "type": self.account_type.as_deref()?,
            "data": self.data,
        });
        serde_json::from_value(tagged).ok()
    }
}

/// Filters for listing accounts.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsQuery {
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// `pse`, `wallet` or `spei`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Bank account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Routing number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    /// Wallet address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// CLABE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clabe: Option<String>,
    /// CVU
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvu: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// One page of accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsPage {
    /// Number of pages available
    #[serde(default)]
    pub total_page: u32,
    /// Accounts on this page
    #[serde(default)]
    pub accounts: Vec<Account>,
}
