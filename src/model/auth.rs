use serde::{Deserialize, Serialize};

use crate::{
    error::AuthError,
    model::user::{Role, Session, SessionUser},
};

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: Role,
}

/// Response of `POST /auth/login`.
///
/// The backend has shipped several shapes of this payload over time, so most fields are
/// optional and resolved with fallbacks in [`LoginResponse::into_session`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub user_type: Option<String>,
    pub organization_name: Option<String>,
    pub org_name: Option<String>,
    pub ngo_id: Option<i64>,
    pub ngo_profile: Option<serde_json::Value>,
}

impl LoginResponse {
    /// Builds the client session from a login response.
    ///
    /// # Arguments
    /// - `submitted_email` - Email typed into the login form, used when the response omits
    ///   the email or the display name
    ///
    /// # Returns
    /// - `Ok(Session)` - Token present, user record resolved and sanitized
    /// - `Err(AuthError::MissingToken)` - Response carried no token
    pub fn into_session(self, submitted_email: &str) -> Result<Session, AuthError> {
        let token = match self.token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(AuthError::MissingToken),
        };

        let email = self
            .email
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| submitted_email.to_string());
        let name = self
            .full_name
            .or(self.name)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| {
                submitted_email
                    .split('@')
                    .next()
                    .unwrap_or(submitted_email)
                    .to_string()
            });
        let role = self
            .role
            .or(self.user_type)
            .map(|r| Role::normalize(&r))
            .unwrap_or_default();
        let id = self.id.or(self.user_id);

        // NGO accounts are keyed by their own id when the backend omits a separate NGO id
        let ngo_id = match role {
            Role::Ngo => self.ngo_id.or(id),
            _ => None,
        };

        let user = SessionUser {
            id,
            email,
            name,
            role,
            organization_name: self.organization_name.or(self.org_name),
            ngo_id,
        }
        .sanitized();

        Ok(Session {
            token,
            refresh_token: self.refresh_token.filter(|t| !t.is_empty()),
            user,
        })
    }
}

/// Body of `POST /auth/refresh-token`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response of `POST /auth/refresh-token`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub user_type: Role,
}

/// Response of `POST /auth/register`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: Option<i64>,
    pub id: Option<i64>,
    pub message: Option<String>,
}

impl RegisterResponse {
    pub fn user_id(&self) -> Option<i64> {
        self.user_id.or(self.id)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::AuthError,
        model::{auth::LoginResponse, user::Role},
    };

    /// Expect a missing token to be a fatal login error
    #[test]
    fn fails_without_token() {
        let response = LoginResponse {
            email: Some("a@b.org".to_string()),
            ..Default::default()
        };

        let result = response.into_session("a@b.org");

        assert!(matches!(result, Err(AuthError::MissingToken)));
    }

    /// Expect fallbacks for id, name and role when the preferred fields are absent
    #[test]
    fn resolves_fallback_fields() {
        let response = LoginResponse {
            token: Some("jwt".to_string()),
            user_id: Some(12),
            user_type: Some("volunteer".to_string()),
            ..Default::default()
        };

        let session = response.into_session("maya@example.org").unwrap();

        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.id, Some(12));
        assert_eq!(session.user.email, "maya@example.org");
        assert_eq!(session.user.name, "maya");
        assert_eq!(session.user.role, Role::Volunteer);
        assert_eq!(session.refresh_token, None);
    }

    /// Expect an unknown backend role to be normalized to USER
    #[test]
    fn normalizes_unknown_role() {
        let response = LoginResponse {
            token: Some("jwt".to_string()),
            role: Some("MODERATOR".to_string()),
            ..Default::default()
        };

        let session = response.into_session("m@example.org").unwrap();

        assert_eq!(session.user.role, Role::User);
    }

    /// Expect NGO accounts without an explicit NGO id to use their account id
    #[test]
    fn ngo_id_defaults_to_account_id() {
        let response = LoginResponse {
            token: Some("jwt".to_string()),
            id: Some(31),
            role: Some("NGO".to_string()),
            organization_name: Some("Green Earth".to_string()),
            ..Default::default()
        };

        let session = response.into_session("green@example.org").unwrap();

        assert_eq!(session.user.ngo_id, Some(31));
        assert_eq!(session.user.organization_name.as_deref(), Some("Green Earth"));
    }

    /// Expect organization data to be dropped for non-NGO accounts
    #[test]
    fn drops_organization_for_donor() {
        let response = LoginResponse {
            token: Some("jwt".to_string()),
            id: Some(2),
            role: Some("DONOR".to_string()),
            organization_name: Some(String::new()),
            ngo_id: Some(5),
            ..Default::default()
        };

        let session = response.into_session("d@example.org").unwrap();

        assert_eq!(session.user.ngo_id, None);
        assert_eq!(session.user.organization_name, None);
    }
}
