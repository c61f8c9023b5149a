use std::sync::LazyLock;

use dioxus_logger::tracing;
use regex::Regex;

use crate::{
    error::{auth::FieldErrors, AuthError, Error},
    http::{ApiClient, Method, Transport},
    model::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        ngo::NgoProfileRequest,
        user::{Role, Session, UserProfileDto},
    },
    nav::Redirect,
    session::KeyValueStore,
};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap());

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Account type selected on the login page.
    pub role: Role,
}

/// Registration form shared by every account type.
///
/// NGO accounts additionally fill in the organization fields; they are ignored for other roles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub registration_id: String,
    pub registration_number: String,
    pub description: String,
    pub location: String,
    pub point_of_contact_name: String,
    pub point_of_contact_phone: String,
    pub causes: Vec<String>,
}

impl RegistrationForm {
    /// Checks every field, collecting all failures instead of stopping at the first.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.push("name", "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        } else if !EMAIL.is_match(self.email.trim()) {
            errors.push("email", "Please enter a valid email");
        }

        let phone: String = self.phone.split_whitespace().collect();
        if phone.is_empty() {
            errors.push("phone", "Phone number is required");
        } else if !PHONE.is_match(&phone) {
            errors.push("phone", "Invalid phone number");
        }

        if self.password.is_empty() {
            errors.push("password", "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("password", "Must be at least 8 characters");
        }

        if self.password != self.confirm_password {
            errors.push("confirmPassword", "Passwords do not match");
        }

        if self.role == Role::Ngo {
            if self.registration_id.trim().is_empty() {
                errors.push("registrationId", "Registration ID is required");
            }
            if self.registration_number.trim().is_empty() {
                errors.push("registrationNumber", "Registration number is required");
            }
            if self.causes.is_empty() {
                errors.push("causes", "Please select at least one cause");
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Account payload for `POST /auth/register`.
    pub fn to_register_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password.clone(),
            phone: digits(&self.phone),
            address: self.address.trim().to_string(),
            user_type: self.role,
        }
    }

    /// Organization payload for `POST /ngos`, linked to the newly registered account.
    pub fn to_ngo_profile(&self, user_id: Option<i64>) -> NgoProfileRequest {
        NgoProfileRequest {
            organization_name: self.name.trim().to_string(),
            registration_number: self.registration_number.trim().to_string(),
            registration_id: self.registration_id.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            address: self.address.trim().to_string(),
            email: normalize_email(&self.email),
            phone: digits(&self.phone),
            website: String::new(),
            point_of_contact_name: self.point_of_contact_name.trim().to_string(),
            point_of_contact_phone: digits(&self.point_of_contact_phone),
            causes: self.causes.clone(),
            user_id,
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub struct AuthService<'a, T, S, R> {
    client: &'a ApiClient<T, S, R>,
}

impl<'a, T, S, R> AuthService<'a, T, S, R>
where
    T: Transport,
    S: KeyValueStore,
    R: Redirect,
{
    /// Creates a new instance of [`AuthService`]
    pub fn new(client: &'a ApiClient<T, S, R>) -> Self {
        Self { client }
    }

    /// Logs in and persists the resulting session.
    ///
    /// # Arguments
    /// - `credentials` - Email, password and the account type chosen on the login page
    ///
    /// # Returns
    /// - `Ok(Session)` - The session now held in the session store
    /// - `Err(Error::HttpError)` - The backend rejected the credentials or could not be reached
    /// - `Err(Error::AuthError)` - The response carried no token
    /// - `Err(Error::StorageError)` - The session could not be persisted
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
        let request = LoginRequest {
            email: credentials.email.trim().to_string(),
            password: credentials.password.clone(),
            user_type: credentials.role,
        };

        let mut response: LoginResponse = self.client.post("/auth/login", &request).await?;
        let ngo_profile = response.ngo_profile.take();
        let session = response.into_session(&request.email)?;

        self.client.sessions().establish(&session)?;

        if session.role() == Role::Ngo {
            if let Some(profile) = ngo_profile {
                if let Err(e) = self.client.sessions().cache_ngo_profile(&profile) {
                    tracing::warn!("Failed to cache NGO profile: {}", e);
                }
            }
        }

        tracing::info!(role = %session.role(), "Logged in as {}", session.user.email);

        Ok(session)
    }

    /// Registers a new account; NGO accounts also get their organization profile created.
    ///
    /// The form is validated locally first, nothing is sent when it is invalid.
    pub async fn register(&self, form: &RegistrationForm) -> Result<RegisterResponse, Error> {
        form.validate().map_err(AuthError::InvalidForm)?;

        let response: RegisterResponse = self
            .client
            .post("/auth/register", &form.to_register_request())
            .await?;

        if form.role == Role::Ngo {
            let profile = form.to_ngo_profile(response.user_id());
            let _: serde_json::Value = self.client.post("/ngos", &profile).await?;
        }

        tracing::info!(role = %form.role, "Registered new account");

        Ok(response)
    }

    pub async fn verify_email(&self, email: &str) -> Result<(), Error> {
        let query = [("email".to_string(), email.trim().to_string())];
        self.client
            .execute(Method::Post, "/auth/verify-email", &query, None)
            .await?;

        Ok(())
    }

    pub async fn user_profile(&self) -> Result<UserProfileDto, Error> {
        Ok(self.client.get("/auth/user-profile").await?)
    }

    /// Ends the session locally; the backend keeps no session state to revoke.
    pub fn logout(&self) -> Result<(), Error> {
        self.client.sessions().clear()?;
        tracing::info!("Logged out");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{model::user::Role, service::auth::RegistrationForm};

    fn valid_form(role: Role) -> RegistrationForm {
        RegistrationForm {
            role,
            name: "Asha Trust".to_string(),
            email: " Contact@AshaTrust.org ".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            phone: "98765 43210".to_string(),
            address: "12 MG Road".to_string(),
            registration_id: "REG-1".to_string(),
            registration_number: "MH/2020/001".to_string(),
            causes: vec!["Education".to_string()],
            ..Default::default()
        }
    }

    /// Expect a complete form to pass validation
    #[test]
    fn accepts_valid_form() {
        assert!(valid_form(Role::Donor).validate().is_ok());
        assert!(valid_form(Role::Ngo).validate().is_ok());
    }

    /// Expect every failing field to be reported at once
    #[test]
    fn collects_all_field_errors() {
        let form = RegistrationForm {
            role: Role::Volunteer,
            name: " ".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            confirm_password: "different".to_string(),
            phone: "0123".to_string(),
            ..Default::default()
        };

        let errors = form.validate().unwrap_err();

        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("password"), Some("Must be at least 8 characters"));
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
        assert_eq!(errors.get("phone"), Some("Invalid phone number"));
    }

    /// Expect NGO accounts to require registration details and a cause
    #[test]
    fn ngo_requires_organization_fields() {
        let form = RegistrationForm {
            registration_id: String::new(),
            registration_number: String::new(),
            causes: Vec::new(),
            ..valid_form(Role::Ngo)
        };

        let errors = form.validate().unwrap_err();

        assert!(errors.get("registrationId").is_some());
        assert!(errors.get("registrationNumber").is_some());
        assert_eq!(errors.get("causes"), Some("Please select at least one cause"));
    }

    /// Expect organization fields to be ignored for other roles
    #[test]
    fn donor_ignores_organization_fields() {
        let form = RegistrationForm {
            causes: Vec::new(),
            registration_id: String::new(),
            ..valid_form(Role::Donor)
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn register_request_normalizes_fields() {
        let request = valid_form(Role::Donor).to_register_request();

        assert_eq!(request.email, "contact@ashatrust.org");
        assert_eq!(request.phone, "9876543210");
        assert_eq!(request.user_type, Role::Donor);
    }

    #[test]
    fn ngo_profile_links_user_id() {
        let profile = valid_form(Role::Ngo).to_ngo_profile(Some(55));

        assert_eq!(profile.user_id, Some(55));
        assert_eq!(profile.organization_name, "Asha Trust");
        assert_eq!(profile.causes, vec!["Education".to_string()]);
    }
}
