use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Role of an authenticated account, deciding which dashboards and guards it may pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Donor,
    Volunteer,
    Ngo,
    Admin,
}

/// Returned by [`Role::from_str`] for names outside the five known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role {:?}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::User,
        Role::Donor,
        Role::Volunteer,
        Role::Ngo,
        Role::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Donor => "DONOR",
            Role::Volunteer => "VOLUNTEER",
            Role::Ngo => "NGO",
            Role::Admin => "ADMIN",
        }
    }

    /// Maps any role name received from the backend onto a known role.
    ///
    /// Matching is case-insensitive; unrecognized or empty values become [`Role::User`].
    pub fn normalize(value: &str) -> Role {
        value.parse().unwrap_or(Role::User)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "DONOR" => Ok(Role::Donor),
            "VOLUNTEER" => Ok(Role::Volunteer),
            "NGO" => Ok(Role::Ngo),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role named by an arbitrary JSON value; anything but a string is USER.
fn role_from_value(value: Option<&Value>) -> Role {
    value
        .and_then(Value::as_str)
        .map(Role::normalize)
        .unwrap_or_default()
}

/// Deserializes a role leniently through [`Role::normalize`], accepting any JSON value.
pub fn deserialize_normalized_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(role_from_value(value.as_ref()))
}

/// User record persisted alongside the authentication token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredUser")]
pub struct SessionUser {
    pub id: Option<i64>,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngo_id: Option<i64>,
}

/// User record as found in storage or refresh responses, where the role may arrive as `role`
/// or `userType` and in any JSON type.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredUser {
    #[serde(default)]
    id: Option<i64>,
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: Option<Value>,
    #[serde(default)]
    user_type: Option<Value>,
    #[serde(default)]
    organization_name: Option<String>,
    #[serde(default)]
    ngo_id: Option<i64>,
}

impl From<StoredUser> for SessionUser {
    fn from(stored: StoredUser) -> Self {
        let named = |value: &Option<Value>| {
            value
                .as_ref()
                .and_then(Value::as_str)
                .is_some_and(|name| !name.trim().is_empty())
        };
        let role = if named(&stored.role) {
            role_from_value(stored.role.as_ref())
        } else {
            role_from_value(stored.user_type.as_ref())
        };

        Self {
            id: stored.id,
            email: stored.email,
            name: stored.name,
            role,
            organization_name: stored.organization_name,
            ngo_id: stored.ngo_id,
        }
    }
}

impl SessionUser {
    /// Drops the NGO linkage from records whose role is not `NGO`.
    pub fn sanitized(mut self) -> Self {
        if self.role != Role::Ngo {
            self.organization_name = None;
            self.ngo_id = None;
        } else if self
            .organization_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            self.organization_name = None;
        }
        self
    }

    /// Name shown in greetings, falling back to the local part of the email.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return &self.name;
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// Client-held authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Account details returned by `GET /auth/user-profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized_role")]
    pub user_type: Role,
}
