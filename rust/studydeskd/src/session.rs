//! Mock session provider: a fixed credential list, the signed-in user and a
//! per-login token. Not a real authentication boundary.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::entities::profile::Profile;
use crate::records::validate::{is_blank, require_email};
use crate::records::FieldErrors;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("validation failed: {}", .0.field_list())]
    Validation(FieldErrors),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("sign in first")]
    NotAuthenticated,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotAuthenticated => "not_authenticated",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// Surrounding whitespace is not part of an address.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.email.trim();
        if trimmed.len() != self.email.len() {
            self.email = trimmed.to_string();
        }
        self
    }
}

pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_email(&mut errors, "email", &form.email);
    if is_blank(&form.password) {
        errors.insert("password", "Password is required");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
    errors
}

struct Credential {
    email: &'static str,
    password: &'static str,
    profile: Profile,
}

fn mock_credentials() -> Vec<Credential> {
    vec![
        Credential {
            email: "student@edu.np",
            password: "123456",
            profile: Profile {
                name: "Raj Sharma".into(),
                email: "student@edu.np".into(),
                course: "Computer Science".into(),
                year: 3,
                student_id: "STU-2023001".into(),
                profile_picture: None,
            },
        },
        Credential {
            email: "john@edu.np",
            password: "123456",
            profile: Profile {
                name: "John Doe".into(),
                email: "john@edu.np".into(),
                course: "Business Administration".into(),
                year: 2,
                student_id: "STU-2023002".into(),
                profile_picture: None,
            },
        },
    ]
}

pub struct Session {
    credentials: Vec<Credential>,
    user: Option<Profile>,
    token: Option<Uuid>,
    login_delay: Duration,
}

impl Session {
    pub fn with_mock_users(login_delay: Duration) -> Self {
        Self {
            credentials: mock_credentials(),
            user: None,
            token: None,
            login_delay,
        }
    }

    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn token(&self) -> Option<Uuid> {
        self.token
    }

    /// Field checks first, then the artificial delay, then the credential
    /// lookup. The password never leaves the credential list.
    pub fn login(&mut self, form: &LoginForm) -> Result<&Profile, AuthError> {
        let errors = validate_login(form);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        if !self.login_delay.is_zero() {
            std::thread::sleep(self.login_delay);
        }

        let Some(found) = self
            .credentials
            .iter()
            .find(|c| c.email == form.email.trim() && c.password == form.password)
        else {
            tracing::info!(email = %form.email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let token = Uuid::new_v4();
        tracing::info!(email = found.email, %token, "login accepted");
        self.token = Some(token);
        Ok(self.user.insert(found.profile.clone()))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "logout");
        }
        self.token = None;
    }

    pub fn update_profile(&mut self, profile: Profile) -> Result<(), AuthError> {
        if self.user.is_none() {
            return Err(AuthError::NotAuthenticated);
        }
        tracing::info!(student_id = %profile.student_id, "profile replaced");
        self.user = Some(profile);
        Ok(())
    }
}
