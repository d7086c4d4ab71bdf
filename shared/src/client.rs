//! Auth DTOs shared by the API client

use crate::error::{AppError, AppResult};
use crate::validation::{MAX_NAME_LEN, validate_required_text};
use serde::{Deserialize, Serialize};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_credentials(&self.email, &self.password)
    }
}

/// Sign-up request; the server creates the user and their company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
}

impl RegisterRequest {
    pub fn new(
        name: impl Into<String>,
        company_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            company_name: company_name.into(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.company_name, "company_name", MAX_NAME_LEN)?;
        validate_credentials(&self.email, &self.password)
    }

    /// The repeated password typed on the sign-up form must match.
    pub fn confirm_password(&self, confirmation: &str) -> AppResult<()> {
        if self.password != confirmation {
            return Err(AppError::validation("Passwords do not match")
                .with_detail("field", "confirm_password"));
        }
        Ok(())
    }
}

fn validate_credentials(email: &str, password: &str) -> AppResult<()> {
    validate_required_text(email, "email", MAX_NAME_LEN)?;
    if !looks_like_email(email.trim()) {
        return Err(AppError::validation("Enter a valid email").with_detail("field", "email"));
    }
    if password.is_empty() {
        return Err(AppError::required("password"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ))
        .with_detail("field", "password"));
    }
    Ok(())
}

/// `something@domain.tld`, no whitespace
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token; absent when the server refuses the login
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl LoginResponse {
    /// Display name, falling back to "User"
    pub fn user_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or("User")
    }
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
