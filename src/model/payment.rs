use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Details submitted to the (mocked) payment processor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub email: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub success: bool,
    pub payment_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub receipt: String,
    pub payment_method: String,
    pub card: CardDetails,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub last4: String,
    pub brand: String,
    pub funding: String,
}
