use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ngo::NgoDto;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PledgeType {
    #[default]
    OneTime,
    Monthly,
    Quarterly,
    Yearly,
}

impl PledgeType {
    pub const ALL: [PledgeType; 4] = [
        PledgeType::OneTime,
        PledgeType::Monthly,
        PledgeType::Quarterly,
        PledgeType::Yearly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PledgeType::OneTime => "One-time",
            PledgeType::Monthly => "Monthly",
            PledgeType::Quarterly => "Quarterly",
            PledgeType::Yearly => "Yearly",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationDto {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub pledge_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub donor_message: Option<String>,
    #[serde(default)]
    pub donation_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub ngo_id: Option<i64>,
    #[serde(default)]
    pub ngo: Option<NgoDto>,
    #[serde(default)]
    pub donor_name: Option<String>,
}

/// Body of `POST /donations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDonationRequest {
    pub amount: f64,
    pub payment_method: String,
    pub payment_id: String,
    pub pledge_type: PledgeType,
    pub message: String,
    pub user_id: Option<i64>,
    pub ngo_id: i64,
    pub status: String,
}

/// Preset amounts offered on the donation form, in rupees.
pub const QUICK_AMOUNTS: [f64; 4] = [800.0, 1200.0, 1600.0, 2400.0];

/// Payment methods offered on the donation form as `(label, backend value)`.
pub const PAYMENT_METHODS: [(&str, &str); 3] = [
    ("Net Banking", "BANK_TRANSFER"),
    ("Card", "CREDIT_CARD"),
    ("UPI", "UPI"),
];

/// Donation form state before payment.
#[derive(Clone, Debug, PartialEq)]
pub struct DonationDraft {
    pub selected_amount: f64,
    /// Free-form amount; takes precedence over the preset when not blank.
    pub custom_amount: String,
    pub pledge_type: PledgeType,
    pub payment_method: String,
    pub message: String,
}

impl Default for DonationDraft {
    fn default() -> Self {
        Self {
            selected_amount: QUICK_AMOUNTS[0],
            custom_amount: String::new(),
            pledge_type: PledgeType::OneTime,
            payment_method: PAYMENT_METHODS[0].1.to_string(),
            message: String::new(),
        }
    }
}

impl DonationDraft {
    /// Amount to charge, `None` unless it is a positive number.
    pub fn amount(&self) -> Option<f64> {
        let amount = match self.custom_amount.trim() {
            "" => self.selected_amount,
            custom => custom.parse().ok()?,
        };

        (amount.is_finite() && amount > 0.0).then_some(amount)
    }

    /// Request recording the paid donation; `None` when the amount is invalid.
    pub fn to_request(
        &self,
        ngo_id: i64,
        user_id: Option<i64>,
        payment_id: &str,
    ) -> Option<CreateDonationRequest> {
        Some(CreateDonationRequest {
            amount: self.amount()?,
            payment_method: self.payment_method.clone(),
            payment_id: payment_id.to_string(),
            pledge_type: self.pledge_type,
            message: self.message.trim().to_string(),
            user_id,
            ngo_id,
            status: String::new(),
        })
    }
}
