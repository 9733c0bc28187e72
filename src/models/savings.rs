//! Savings account models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{DepositInstructionsType, SavingsStatus, WithdrawalStatus};
use super::primitives::{SavingsAccountId, UserId};

/// Savings account as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsAccount {
    /// Savings account ID
    pub id: SavingsAccountId,
    /// Owner
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Account status
    #[serde(default)]
    pub status: Option<SavingsStatus>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Savings account funds are withdrawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalSource {
    /// Source savings account
    pub savings_account_id: SavingsAccountId,
}

/// Destination of a withdrawal: another savings account or an external one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalDestination {
    /// Destination savings account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_account_id: Option<SavingsAccountId>,
    /// Destination external account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_account_id: Option<String>,
}

/// Request body for a savings withdrawal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsWithdrawal {
    /// Where the funds come from
    pub source: WithdrawalSource,
    /// Where the funds go
    pub destination: WithdrawalDestination,
    /// Amount to withdraw
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Source leg of a withdrawal receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSource {
    /// Currency debited
    #[serde(default)]
    pub currency: Option<String>,
    /// Custodial account debited
    #[serde(default)]
    pub custodial_account_id: Option<String>,
}

/// Destination leg of a withdrawal receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDestination {
    /// Currency credited
    #[serde(default)]
    pub currency: Option<String>,
    /// External account credited
    #[serde(default)]
    pub external_account_id: Option<String>,
}

/// Withdrawal as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsWithdrawalReceipt {
    /// Withdrawal ID
    pub id: String,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<WithdrawalStatus>,
    /// Amount withdrawn
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Owner
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Withdrawal kind
    #[serde(rename = "type", default)]
    pub withdrawal_type: Option<String>,
    /// Debited side
    #[serde(default)]
    pub source: Option<ReceiptSource>,
    /// Credited side
    #[serde(default)]
    pub destination: Option<ReceiptDestination>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Filters for listing savings transactions.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTransactionsQuery {
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Transaction ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Credited account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_account_id: Option<String>,
    /// Debited account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_account_id: Option<String>,
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Transaction kind
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
}

/// A savings ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsTransaction {
    /// Transaction ID
    pub id: String,
    /// Owning customer
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Owner
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Debited account
    #[serde(default)]
    pub origin_account_id: Option<String>,
    /// Credited account
    #[serde(default)]
    pub destination_account_id: Option<String>,
    /// Amount (sent as a string by the API)
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Transaction kind
    #[serde(rename = "type", default)]
    pub transaction_type: Option<String>,
    /// Currency
    #[serde(default)]
    pub currency: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Balance of a savings account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsBalance {
    /// Currency of the balance
    pub currency: String,
    /// Available amount
    pub amount: Decimal,
}

/// Bank details for funding a savings account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositInstructions {
    /// ACH or wire
    #[serde(rename = "type")]
    pub instructions_type: DepositInstructionsType,
    /// Currency to send
    #[serde(default)]
    pub currency: Option<String>,
    /// Receiving bank
    #[serde(default)]
    pub bank_name: Option<String>,
    /// Receiving bank address (structure varies by bank)
    #[serde(default)]
    pub bank_address: serde_json::Value,
    /// Routing number
    #[serde(default)]
    pub routing_number: Option<String>,
    /// Account number
    #[serde(default)]
    pub account_number: Option<String>,
    /// Reference to include with the transfer
    #[serde(default)]
    pub deposit_message: Option<String>,
    /// Beneficiary name
    #[serde(default)]
    pub bank_beneficiary_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdrawal_wire_shape() {
        let withdrawal = SavingsWithdrawal {
            source: WithdrawalSource {
                savings_account_id: "sav_1".into(),
            },
            destination: WithdrawalDestination {
                external_account_id: Some("ext_9".into()),
                ..Default::default()
            },
            amount: dec!(250),
            comment: None,
        };

        let json = serde_json::to_value(&withdrawal).unwrap();
        assert_eq!(json["source"]["savingsAccountId"], "sav_1");
        assert_eq!(json["destination"], serde_json::json!({"externalAccountId": "ext_9"}));
        assert_eq!(json["amount"].as_f64(), Some(250.0));
        assert!(json.get("comment").is_none());
    }

    #[test]
    fn test_transaction_amount_from_string() {
        let json = r#"{"id": "tx_1", "amount": "12.34", "type": "DEPOSIT", "currency": "USD"}"#;
        let tx: SavingsTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, Some(dec!(12.34)));
        assert_eq!(tx.transaction_type.as_deref(), Some("DEPOSIT"));
    }

    #[test]
    fn test_deposit_instructions() {
        let json = r#"{
            "type": "WIRE",
            "currency": "USD",
            "bankName": "Bank",
            "bankAddress": {"city": "NYC"},
            "routingNumber": "021000021",
            "accountNumber": "000123"
        }"#;
        let instructions: DepositInstructions = serde_json::from_str(json).unwrap();
        assert_eq!(instructions.instructions_type, DepositInstructionsType::Wire);
        assert_eq!(instructions.bank_address["city"], "NYC");
        assert!(instructions.deposit_message.is_none());
    }
}
