use serde::Serialize;
use techtrackr_core::{AppError, AppResult};

/// Minimum accepted length for both the login and the password.
pub const CREDENTIAL_MIN_LENGTH: usize = 4;

/// Maximum accepted password length. The login has no upper bound.
pub const CREDENTIAL_MAX_PASSWORD_LENGTH: usize = 12;

/// Login form input checked before it is sent to the auth endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    user: String,
    #[serde(rename = "pwd")]
    password: String,
}

impl LoginCredentials {
    /// Validates login and password lengths.
    ///
    /// Both need at least [`CREDENTIAL_MIN_LENGTH`] characters and the
    /// password at most [`CREDENTIAL_MAX_PASSWORD_LENGTH`].
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> AppResult<Self> {
        let user = user.into();
        let password = password.into();

        validate_field("login", &user)?;
        validate_field("password", &password)?;
        if password.chars().count() > CREDENTIAL_MAX_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "password must not exceed {CREDENTIAL_MAX_PASSWORD_LENGTH} characters"
            )));
        }

        Ok(Self { user, password })
    }

    /// Returns the login name.
    #[must_use]
    pub fn user(&self) -> &str {
        self.user.as_str()
    }
}

impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LoginCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn validate_field(field: &str, value: &str) -> AppResult<()> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }

    if value.chars().count() < CREDENTIAL_MIN_LENGTH {
        return Err(AppError::Validation(format!(
            "{field} must be at least {CREDENTIAL_MIN_LENGTH} characters long"
        )));
    }

    Ok(())
}
