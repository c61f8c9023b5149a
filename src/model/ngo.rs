use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoDto {
    pub id: i64,
    pub organization_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub total_donations: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// NGO profile created alongside an NGO account during registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NgoProfileRequest {
    pub organization_name: String,
    pub registration_number: String,
    pub registration_id: String,
    pub description: String,
    pub location: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub point_of_contact_name: String,
    pub point_of_contact_phone: String,
    pub causes: Vec<String>,
    pub user_id: Option<i64>,
}

/// Filters accepted by `GET /ngos/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NgoSearch {
    pub query: Option<String>,
    pub cause: Option<String>,
    pub location: Option<String>,
}

impl NgoSearch {
    /// Non-empty filters as query parameters.
    pub fn to_query(&self) -> Vec<(String, String)> {
        [
            ("query", &self.query),
            ("cause", &self.cause),
            ("location", &self.location),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), v.to_string()))
        })
        .collect()
    }
}

/// Causes offered on the NGO registration form.
pub const ALL_CAUSES: [&str; 9] = [
    "Education",
    "Healthcare",
    "Environment",
    "Women Empowerment",
    "Child Welfare",
    "Disaster Relief",
    "Animals",
    "Elderly",
    "Arts & Culture",
];

#[cfg(test)]
mod tests {
    use super::NgoSearch;

    #[test]
    fn search_skips_blank_filters() {
        let search = NgoSearch {
            query: Some("  ".to_string()),
            cause: Some("Education".to_string()),
            location: None,
        };

        assert_eq!(
            search.to_query(),
            vec![("cause".to_string(), "Education".to_string())]
        );
    }
}
