//! Enumeration types for the KillB API.
//!
//! Every enum that comes back from the server carries an `Unknown`
//! catch-all so that newly introduced values do not break decoding.

use serde::{Deserialize, Serialize};

/// Currency supported on either side of a quotation or ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Mexican peso
    Mxn,
    /// Colombian peso
    Cop,
    /// USD Coin
    Usdc,
    /// Tether
    Usdt,
    /// Unknown currency
    #[serde(other)]
    Unknown,
}

impl Currency {
    /// Returns `true` for stablecoins.
    pub fn is_crypto(&self) -> bool {
        matches!(self, Currency::Usdc | Currency::Usdt)
    }

    /// Returns `true` for fiat currencies.
    pub fn is_fiat(&self) -> bool {
        matches!(self, Currency::Mxn | Currency::Cop)
    }
}

/// How funds enter a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashInMethod {
    /// Mexican SPEI transfer
    Spei,
    /// Polygon on-chain deposit
    Polygon,
    /// Ethereum ERC-20 deposit
    Erc20,
    /// Colombian PSE payment
    Pse,
    /// Pre-funded balance
    PreFund,
    /// Unknown method
    #[serde(other)]
    Unknown,
}

/// How funds leave a ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashOutMethod {
    /// Mexican SPEI transfer
    Spei,
    /// Polygon on-chain payout
    Polygon,
    /// Ethereum ERC-20 payout
    Erc20,
    /// Colombian PSE payout
    Pse,
    /// Unknown method
    #[serde(other)]
    Unknown,
}

/// Identity document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Passport
    Passport,
    /// Driver license
    DriverLicense,
    /// Colombian NUIP
    Nuip,
    /// Mexican RFC
    Rfc,
    /// US social security number
    Ssn,
    /// Mexican CURP
    Curp,
    /// Brazilian CPF
    Cpf,
    /// Mexican INE
    Ine,
    /// Mexican IFE
    Ife,
    /// Unknown document
    #[serde(other)]
    Unknown,
}

/// Whether a user is a natural person or a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    /// Natural person
    Person,
    /// Legal entity
    Company,
    /// Unknown user type
    #[serde(other)]
    Unknown,
}

/// Kind of a PSE bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PseAccountType {
    /// Savings account
    Savings,
    /// Checking account
    Checking,
}

/// Blockchain network of a wallet account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletNetwork {
    /// Polygon PoS
    Polygon,
    /// Unknown network
    #[serde(other)]
    Unknown,
}

/// Status of a savings account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SavingsStatus {
    /// Account is open
    Active,
    /// Account is closed or suspended
    Inactive,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

/// Rail used to fund a savings account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DepositInstructionsType {
    /// ACH transfer
    Ach,
    /// Wire transfer
    Wire,
}

impl DepositInstructionsType {
    /// Path segment used by the deposit instructions endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositInstructionsType::Ach => "ACH",
            DepositInstructionsType::Wire => "WIRE",
        }
    }
}

/// Lifecycle status of a savings withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WithdrawalStatus {
    /// Withdrawal recorded
    Created,
    /// Awaiting processing
    Pending,
    /// Being processed
    Processing,
    /// Confirmed by the rail
    Confirmed,
    /// Funds returned
    Refunded,
    /// Funds delivered
    Completed,
    /// Cancelled by the user
    Canceled,
    /// Timed out
    Expired,
    /// Failed on the rail
    Failed,
    /// Internal error
    Error,
    /// Rejected by compliance
    Rejected,
    /// Unknown status
    #[serde(other)]
    Unknown,
}

impl WithdrawalStatus {
    /// Returns `true` if the withdrawal can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WithdrawalStatus::Refunded
                | WithdrawalStatus::Completed
                | WithdrawalStatus::Canceled
                | WithdrawalStatus::Expired
                | WithdrawalStatus::Failed
                | WithdrawalStatus::Error
                | WithdrawalStatus::Rejected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&CashInMethod::PreFund).unwrap(),
            "\"PRE_FUND\""
        );
        assert_eq!(serde_json::to_string(&CashOutMethod::Erc20).unwrap(), "\"ERC20\"");
        assert_eq!(
            serde_json::to_string(&DocumentType::DriverLicense).unwrap(),
            "\"DRIVER_LICENSE\""
        );
        assert_eq!(serde_json::to_string(&PseAccountType::Checking).unwrap(), "\"checking\"");
        assert_eq!(serde_json::to_string(&Currency::Usdc).unwrap(), "\"USDC\"");
    }

    #[test]
    fn test_unknown_values_decode() {
        let currency: Currency = serde_json::from_str("\"BRL\"").unwrap();
        assert_eq!(currency, Currency::Unknown);

        let status: WithdrawalStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(status, WithdrawalStatus::Unknown);
    }

    #[test]
    fn test_withdrawal_terminal() {
        assert!(WithdrawalStatus::Completed.is_terminal());
        assert!(!WithdrawalStatus::Pending.is_terminal());
    }
}
