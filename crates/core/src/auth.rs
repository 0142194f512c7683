use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{AppError, RecordId};

/// Role tier granted to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Sees own department and own assignments only.
    User,
    /// Sees everything attached to the managed department.
    Manager,
    /// Sees and changes everything.
    Admin,
}

impl Role {
    /// Returns the stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::User, Role::Manager, Role::Admin];

        ALL
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "USER" => Ok(Self::User),
            "MANAGER" => Ok(Self::Manager),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

/// The authenticated user record that drives authorization decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    id: RecordId,
    first_name: String,
    last_name: String,
    #[serde(default)]
    email: String,
    department_id: RecordId,
    role: Role,
    #[serde(default)]
    position: String,
}

impl Identity {
    /// Creates an identity from the fields returned by the identity endpoint.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department_id: impl Into<RecordId>,
        role: Role,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department_id: department_id.into(),
            role,
            position: position.into(),
        }
    }

    /// Returns the identifier assigned by the identity service.
    #[must_use]
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Returns `"{first} {last}"`, the form used by asset assignments.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the department the identity belongs to.
    #[must_use]
    pub fn department_id(&self) -> &RecordId {
        &self.department_id
    }

    /// Returns the role tier.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the job position.
    #[must_use]
    pub fn position(&self) -> &str {
        self.position.as_str()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Identity, Role};

    #[test]
    fn role_roundtrip_transport_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(matches!(restored, Ok(value) if value == *role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(Role::from_str("admin").is_err());
    }

    #[test]
    fn identity_decodes_from_camel_case_payload() {
        let payload = r#"{
            "id": "7",
            "firstName": "Jane",
            "lastName": "Smith",
            "email": "jane.smith@company.com",
            "departmentId": "2",
            "role": "MANAGER",
            "position": "HR Manager"
        }"#;

        let identity = serde_json::from_str::<Identity>(payload);
        assert!(identity.is_ok());
        let identity = identity.unwrap_or_else(|_| {
            Identity::new("0", "", "", "", "0", Role::User, "")
        });
        assert_eq!(identity.full_name(), "Jane Smith");
        assert_eq!(identity.role(), Role::Manager);
        assert_eq!(identity.department_id().as_str(), "2");
    }
}
