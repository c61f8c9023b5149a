use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::auth::FieldErrors;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time_commitment: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub volunteers_needed: Option<i32>,
    #[serde(default)]
    pub volunteers_applied: Option<i32>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub duration_type: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub ngo: Option<String>,
}

/// Body of `POST /opportunities/{id}/apply`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub opportunity_id: i64,
    pub volunteer_id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub motivation: String,
    pub availability: String,
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: i64,
    #[serde(default)]
    pub opportunity_id: Option<i64>,
    #[serde(default)]
    pub opportunity_title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

pub const WORK_TYPES: [(&str, &str); 3] = [
    ("ON_SITE", "On-site"),
    ("REMOTE", "Remote"),
    ("HYBRID", "Hybrid"),
];

pub const DURATION_TYPES: [(&str, &str); 3] = [
    ("ONE_TIME", "One-time"),
    ("SHORT_TERM", "Short-term"),
    ("LONG_TERM", "Long-term"),
];

pub const TIME_COMMITMENTS: [&str; 8] = [
    "FLEXIBLE",
    "PART_TIME",
    "FULL_TIME",
    "WEEKENDS",
    "WEEKDAYS",
    "MORNINGS",
    "AFTERNOONS",
    "EVENINGS",
];

pub const OPPORTUNITY_CAUSES: [&str; 12] = [
    "EDUCATION",
    "HEALTH",
    "ENVIRONMENT",
    "ANIMAL_WELFARE",
    "HUMAN_RIGHTS",
    "WOMEN_EMPOWERMENT",
    "CHILD_WELFARE",
    "ELDERLY_CARE",
    "DISABILITY",
    "COMMUNITY_DEVELOPMENT",
    "DISASTER_RELIEF",
    "OTHER",
];

const ONE_TIME: &str = "ONE_TIME";

/// Body of `POST /ngos/{id}/opportunities` and `PUT /ngos/{id}/opportunities/{opportunity}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityRequest {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub volunteers_needed: i32,
    pub work_type: String,
    pub location: String,
    pub cause: String,
    pub time_commitment: String,
    pub duration_type: String,
    pub is_active: bool,
    /// Midnight UTC of the start day, e.g. `2025-02-01T00:00:00Z`.
    pub start_date: String,
    pub end_date: String,
}

/// Editable state of the opportunity form on the NGO dashboard.
///
/// Dates hold the `YYYY-MM-DD` value of a date input; `id` is set when editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpportunityDraft {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub skills: String,
    pub volunteers_needed: String,
    pub work_type: String,
    pub location: String,
    pub cause: String,
    pub time_commitment: String,
    pub duration_type: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl Default for OpportunityDraft {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            skills: String::new(),
            volunteers_needed: "1".to_string(),
            work_type: WORK_TYPES[0].0.to_string(),
            location: String::new(),
            cause: OPPORTUNITY_CAUSES[0].to_string(),
            time_commitment: TIME_COMMITMENTS[0].to_string(),
            duration_type: ONE_TIME.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            is_active: true,
        }
    }
}

impl OpportunityDraft {
    /// Prefills the form from a published opportunity.
    pub fn from_existing(opportunity: &OpportunityDto) -> Self {
        let defaults = Self::default();
        let or_default = |value: &Option<String>, default: String| {
            value
                .clone()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(default)
        };

        Self {
            id: Some(opportunity.id),
            title: opportunity.title.clone(),
            description: opportunity.description.clone().unwrap_or_default(),
            skills: opportunity.requirements.join(", "),
            volunteers_needed: opportunity
                .volunteers_needed
                .map(|n| n.to_string())
                .unwrap_or(defaults.volunteers_needed),
            work_type: or_default(&opportunity.work_type, defaults.work_type),
            location: opportunity.location.clone().unwrap_or_default(),
            cause: or_default(&opportunity.cause, defaults.cause),
            time_commitment: or_default(&opportunity.time_commitment, defaults.time_commitment),
            duration_type: or_default(&opportunity.duration_type, defaults.duration_type),
            start_date: date_input(opportunity.start_date.as_deref()),
            end_date: date_input(opportunity.end_date.as_deref()),
            is_active: opportunity.is_active.unwrap_or(true),
        }
    }

    /// Checks every field and builds the request body.
    ///
    /// One-time opportunities end on their start day, whatever end date was entered.
    pub fn validate(&self) -> Result<OpportunityRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.push("title", "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.push("description", "Description is required");
        }

        let requirements: Vec<String> = self
            .skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();
        if requirements.is_empty() {
            errors.push("skillsRequired", "Skills required is required");
        }

        let volunteers_needed = self.volunteers_needed.trim().parse::<i32>().unwrap_or(0);
        if volunteers_needed < 1 {
            errors.push("volunteersNeeded", "Number of volunteers must be at least 1");
        }

        if self.location.trim().is_empty() {
            errors.push("location", "Location is required");
        }

        let start = parse_date(&self.start_date);
        if start.is_none() {
            errors.push("startDate", "Start date is required");
        }

        let one_time = self.duration_type == ONE_TIME;
        let end = if one_time {
            start
        } else {
            let end = parse_date(&self.end_date);
            match (start, end) {
                (_, None) => errors.push("endDate", "End date is required"),
                (Some(start), Some(end)) if start > end => {
                    errors.push("endDate", "End date must be after start date")
                }
                _ => {}
            }
            end
        };

        match (start, end) {
            (Some(start), Some(end)) if errors.is_empty() => Ok(OpportunityRequest {
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                requirements,
                volunteers_needed,
                work_type: self.work_type.clone(),
                location: self.location.trim().to_string(),
                cause: self.cause.clone(),
                time_commitment: self.time_commitment.clone(),
                duration_type: self.duration_type.clone(),
                is_active: self.is_active,
                start_date: api_date(start),
                end_date: api_date(end),
            }),
            _ => Err(errors),
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Date part of a backend timestamp, in the format a date input expects.
fn date_input(value: Option<&str>) -> String {
    value
        .and_then(|v| v.get(..10))
        .and_then(parse_date)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn api_date(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}
