//! Financial transactions

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde::flexible_datetime;

/// Approval state of a transaction; numeric on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransactionStatus {
    #[default]
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl TransactionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl TryFrom<u8> for TransactionStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            other => Err(format!("Invalid TransactionStatus: {other}")),
        }
    }
}

impl From<TransactionStatus> for u8 {
    fn from(status: TransactionStatus) -> Self {
        status as Self
    }
}

/// Transaction row as listed by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub invoice_id: Option<String>,
    #[serde(default)]
    pub created_by_id: Option<String>,
    #[serde(default)]
    pub creator_full_name: Option<String>,
    #[serde(default)]
    pub approved_by_id: Option<String>,
    #[serde(default)]
    pub approver_full_name: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub received_amount: f64,
    #[serde(default)]
    pub promised_amount: Option<f64>,
    #[serde(default)]
    pub currency_name: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub donor_full_name: Option<String>,
    #[serde(default)]
    pub donor_id: Option<String>,
    #[serde(default, with = "flexible_datetime::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime::option")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime::option")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Body of `POST /transactions`
///
/// Optional text fields are `null` rather than empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub amount: Option<f64>,
    pub promised_amount: Option<f64>,
    pub project_id: Option<String>,
    pub currency_name: String,
    pub currency_code: String,
    pub due_date: Option<NaiveDate>,
    pub donor_id: Option<String>,
    pub donor_name: Option<String>,
    pub donor_last_name: Option<String>,
    pub donor_phone_number: Option<String>,
    pub donor_email: Option<String>,
    pub donor_description: Option<String>,
    pub transaction_creators_note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_numeric_on_the_wire() {
        let row: Transaction =
            serde_json::from_str(r#"{"id":"t1","status":1,"receivedAmount":150.5}"#)
                .expect("valid row");
        assert_eq!(row.status, TransactionStatus::Approved);
        assert_eq!(serde_json::to_value(TransactionStatus::Rejected).expect("ser"), 2);
        assert!(serde_json::from_str::<TransactionStatus>("7").is_err());
    }

    #[test]
    fn create_request_serializes_nulls_and_iso_date() {
        let body = CreateTransactionRequest {
            amount: Some(0.0),
            promised_amount: Some(50.0),
            currency_name: "Dinar".into(),
            currency_code: "RSD".into(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            donor_email: Some("donor@example.org".into()),
            ..CreateTransactionRequest::default()
        };
        let json = serde_json::to_value(&body).expect("serializable");
        assert_eq!(json["dueDate"], "2025-01-31");
        assert!(json["projectId"].is_null());
        assert!(json["donorName"].is_null());
        assert_eq!(json["promisedAmount"], 50.0);
    }
}
