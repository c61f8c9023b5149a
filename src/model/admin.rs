use serde::{Deserialize, Serialize};

/// Response of `GET /admin/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardDto {
    #[serde(default)]
    pub overview: DashboardOverview,
    #[serde(default)]
    pub alerts: Vec<AlertDto>,
    #[serde(default)]
    pub pending_verifications: Vec<PendingVerificationDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardOverview {
    pub total_ngos_registered: Option<i64>,
    pub total_ngos_verified: Option<i64>,
    pub total_ngos_pending: Option<i64>,
    pub total_users_registered: Option<i64>,
    pub total_donations_amount: Option<f64>,
    pub total_donations_count: Option<i64>,
    pub active_volunteer_opportunities: Option<i64>,
    pub pending_verifications: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub id: i64,
    #[serde(default)]
    pub alert_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingVerificationDto {
    pub id: i64,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
