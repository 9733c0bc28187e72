//! User (person and company) models.

use serde::{Deserialize, Serialize};

use super::enums::{DocumentType, UserType};
use super::primitives::UserId;

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street address line 1
    pub street1: String,
    /// Street address line 2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// City
    pub city: String,
    /// State or province
    pub state: String,
    /// Postal/ZIP code
    pub zip_code: String,
    /// ISO country code
    pub country_code: String,
}

/// Identity document of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    /// Kind of document
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Document number
    pub number: String,
    /// ISO country code of the issuer
    pub issued_country_code: String,
}

/// A natural person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonData {
    /// First name
    pub first_name: String,
    /// Middle name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name
    pub last_name: String,
    /// Date of birth (`YYYY-MM-DD`)
    pub date_of_birth: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Residence
    pub address: Address,
    /// Identity document
    pub document: UserDocument,
}

/// A legal entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    /// Registered name
    pub company_name: String,
    /// Trade name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    /// Legal structure (LLC, SA de CV, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_structure: Option<String>,
    /// Business description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Incorporation date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established_on: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Registered address
    pub address: Address,
    /// User ID of the main owner
    pub main_owner_user: UserId,
    /// User IDs of other owners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_users: Option<Vec<UserId>>,
    /// NAICS code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics: Option<String>,
    /// NAICS description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naics_description: Option<String>,
    /// Registration document
    pub document: UserDocument,
}

/// User details, tagged on the wire as `{"type": "PERSON" | "COMPANY", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "UPPERCASE")]
pub enum UserProfile {
    /// Natural person
    Person(PersonData),
    /// Legal entity
    Company(CompanyData),
}

/// Request body for creating a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Person or company details
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Caller-side reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Request body for updating a user: the bare person or company record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserData {
    /// Natural person
    Person(PersonData),
    /// Legal entity
    Company(CompanyData),
}

/// User as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: UserId,
    /// Owning customer
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Person or company
    #[serde(rename = "type", default)]
    pub user_type: Option<UserType>,
    /// Person or company details, as sent by the server
    #[serde(default)]
    pub data: serde_json::Value,
    /// Caller-side reference
    #[serde(default)]
    pub external_id: Option<String>,
    /// KYC access level
    #[serde(default)]
    pub access_level: Option<String>,
    /// Whether the user is enabled
    #[serde(default)]
    pub active: bool,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Filters for searching users.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersQuery {
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// User ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Middle name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Caller-side reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Registered company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Trade name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_name: Option<String>,
    /// Legal structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_structure: Option<String>,
    /// Business description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Incorporation date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_on: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Main owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_owner_user: Option<UserId>,
    /// Other owners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_users: Option<Vec<UserId>>,
    /// NAICS code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naics: Option<String>,
    /// NAICS description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naics_description: Option<String>,
}
