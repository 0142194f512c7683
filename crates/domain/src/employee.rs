use serde::{Deserialize, Serialize};
use techtrackr_core::{AppError, AppResult, NonEmptyString, RecordId};

use crate::Department;

/// Staff member on a department roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Service-assigned identifier.
    pub id: RecordId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Department the employee belongs to.
    pub department_id: RecordId,
    /// Hire date as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Creation timestamp as reported by the service.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as reported by the service.
    #[serde(default)]
    pub updated_at: String,
}

impl Employee {
    /// Returns `"{first} {last}"`, the form used by asset assignments.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated input for creating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    first_name: NonEmptyString,
    last_name: NonEmptyString,
    department_id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hire_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

impl EmployeeDraft {
    /// Creates a draft with the required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department_id: impl Into<RecordId>,
    ) -> AppResult<Self> {
        let first_name = NonEmptyString::new(first_name.into().trim())
            .map_err(|_| AppError::Validation("employee first name is required".to_owned()))?;
        let last_name = NonEmptyString::new(last_name.into().trim())
            .map_err(|_| AppError::Validation("employee last name is required".to_owned()))?;
        let department_id = department_id.into();
        if department_id.as_str().trim().is_empty() {
            return Err(AppError::Validation(
                "employee department is required".to_owned(),
            ));
        }

        Ok(Self {
            first_name,
            last_name,
            department_id,
            email: None,
            position: None,
            hire_date: None,
            phone: None,
        })
    }

    /// Sets the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the job title.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Sets the hire date.
    #[must_use]
    pub fn with_hire_date(mut self, hire_date: impl Into<String>) -> Self {
        self.hire_date = Some(hire_date.into());
        self
    }

    /// Sets the contact phone.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Returns the department the employee will join.
    #[must_use]
    pub fn department_id(&self) -> &RecordId {
        &self.department_id
    }

    /// Returns `"{first} {last}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.as_str(), self.last_name.as_str())
    }
}

/// Partial update for an existing employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    /// Replacement given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Replacement family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Replacement email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Move to another department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<RecordId>,
    /// Replacement hire date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    /// Replacement phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl EmployeePatch {
    /// Rejects a patch that would blank out a required field.
    pub fn validate(&self) -> AppResult<()> {
        let blanked = [
            ("first name", self.first_name.as_deref()),
            ("last name", self.last_name.as_deref()),
            (
                "department",
                self.department_id.as_ref().map(RecordId::as_str),
            ),
        ]
        .into_iter()
        .find(|(_, value)| value.is_some_and(|value| value.trim().is_empty()));

        if let Some((field, _)) = blanked {
            return Err(AppError::Validation(format!("employee {field} is required")));
        }

        Ok(())
    }
}

/// Rejects a department reference that does not resolve.
pub fn ensure_department_exists(
    departments: &[Department],
    department_id: &RecordId,
) -> AppResult<()> {
    if departments
        .iter()
        .any(|department| &department.id == department_id)
    {
        return Ok(());
    }

    Err(AppError::Validation(format!(
        "department '{department_id}' does not exist"
    )))
}
