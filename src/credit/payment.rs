use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single ledger entry against a loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "comprobante")]
    pub receipt: String,
}

impl Payment {
    /// Ids derive from the creation timestamp in milliseconds, matching the
    /// ids found in existing blobs.
    pub fn new(date: NaiveDate, amount: f64, receipt: impl Into<String>) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            date,
            amount,
            receipt: receipt.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
