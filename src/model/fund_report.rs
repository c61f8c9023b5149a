use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::auth::FieldErrors;

/// Fund utilization report published by an NGO.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundReportDto {
    pub id: i64,
    #[serde(default)]
    pub ngo_id: Option<i64>,
    pub report_date: NaiveDate,
    #[serde(default)]
    pub total_funds_received: f64,
    #[serde(default)]
    pub total_funds_spent: f64,
    #[serde(default)]
    pub breakdown: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl FundReportDto {
    pub fn balance(&self) -> f64 {
        self.total_funds_received - self.total_funds_spent
    }
}

/// Body of `POST /transparency/reports/ngo/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundReportRequest {
    pub report_date: NaiveDate,
    pub total_funds_received: f64,
    pub total_funds_spent: f64,
    pub breakdown: String,
}

/// Raw input of the fund report form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FundReportDraft {
    pub report_date: String,
    pub total_funds_received: String,
    pub total_funds_spent: String,
    pub breakdown: String,
}

impl FundReportDraft {
    pub fn validate(&self) -> Result<FundReportRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let report_date = NaiveDate::parse_from_str(self.report_date.trim(), "%Y-%m-%d").ok();
        if report_date.is_none() {
            errors.push("reportDate", "Report date is required");
        }

        let received = parse_funds(&self.total_funds_received);
        if received.is_none() {
            errors.push("totalFundsReceived", "Enter an amount of zero or more");
        }
        let spent = parse_funds(&self.total_funds_spent);
        if spent.is_none() {
            errors.push("totalFundsSpent", "Enter an amount of zero or more");
        }

        if self.breakdown.trim().is_empty() {
            errors.push("breakdown", "Breakdown of spending is required");
        }

        match (report_date, received, spent) {
            (Some(report_date), Some(received), Some(spent)) if errors.is_empty() => {
                Ok(FundReportRequest {
                    report_date,
                    total_funds_received: received,
                    total_funds_spent: spent,
                    breakdown: self.breakdown.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_funds(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}

/// Running totals over a set of reports, as shown on the ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LedgerTotals {
    pub received: f64,
    pub spent: f64,
}

impl LedgerTotals {
    pub fn of(reports: &[FundReportDto]) -> Self {
        reports.iter().fold(Self::default(), |totals, report| Self {
            received: totals.received + report.total_funds_received,
            spent: totals.spent + report.total_funds_spent,
        })
    }

    pub fn balance(&self) -> f64 {
        self.received - self.spent
    }
}
