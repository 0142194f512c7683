use serde::{Deserialize, Serialize};
use techtrackr_core::{AppError, AppResult, NonEmptyString, RecordId};

/// Organizational unit that employees and assets belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Service-assigned identifier.
    pub id: RecordId,
    /// Display name, unique across departments ignoring case.
    #[serde(alias = "depName")]
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp as reported by the service.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as reported by the service.
    #[serde(default)]
    pub updated_at: String,
}

/// Validated input for creating a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentDraft {
    name: NonEmptyString,
    description: Option<String>,
}

impl DepartmentDraft {
    /// Creates a draft, rejecting a blank name.
    pub fn new(name: impl Into<String>, description: Option<String>) -> AppResult<Self> {
        let name = NonEmptyString::new(name.into().trim())
            .map_err(|_| AppError::Validation("department name is required".to_owned()))?;

        Ok(Self {
            name,
            description: description.filter(|value| !value.trim().is_empty()),
        })
    }

    /// Returns the trimmed department name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Partial update for an existing department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
}

impl DepartmentPatch {
    /// Rejects a patch that would blank out the department name.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(AppError::Validation(
                "department name is required".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Rejects `candidate` when another department already uses the same name.
///
/// Comparison ignores case. `editing` names the department being renamed so
/// that keeping its own name is not reported as a duplicate.
pub fn ensure_unique_department_name(
    departments: &[Department],
    candidate: &str,
    editing: Option<&RecordId>,
) -> AppResult<()> {
    let candidate = candidate.trim().to_lowercase();
    let duplicate = departments.iter().any(|department| {
        department.name.trim().to_lowercase() == candidate
            && editing.is_none_or(|id| id != &department.id)
    });

    if duplicate {
        return Err(AppError::Conflict(format!(
            "a department named '{candidate}' already exists"
        )));
    }

    Ok(())
}

/// Resolves the display name of an optional department reference.
///
/// Returns `"N/A"` when nothing is referenced and `"Unknown"` when the
/// reference does not resolve.
#[must_use]
pub fn department_display_name<'a>(
    departments: &'a [Department],
    department_id: Option<&RecordId>,
) -> &'a str {
    let Some(department_id) = department_id else {
        return "N/A";
    };

    departments
        .iter()
        .find(|department| &department.id == department_id)
        .map_or("Unknown", |department| department.name.as_str())
}

#[cfg(test)]
mod tests {
    use techtrackr_core::{AppError, RecordId};

    use super::{
        Department, DepartmentDraft, DepartmentPatch, department_display_name,
        ensure_unique_department_name,
    };

    fn department(id: &str, name: &str) -> Department {
        Department {
            id: RecordId::new(id),
            name: name.to_owned(),
            description: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn draft_rejects_blank_name() {
        assert!(DepartmentDraft::new("  ", None).is_err());
    }

    #[test]
    fn draft_drops_blank_description() {
        let draft = DepartmentDraft::new(" Finance ", Some(" ".to_owned()));
        assert!(matches!(
            draft,
            Ok(ref value) if value.name() == "Finance" && value.description().is_none()
        ));
    }

    #[test]
    fn patch_rejects_blank_name() {
        let patch = DepartmentPatch {
            name: Some(String::new()),
            description: None,
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn duplicate_name_is_detected_case_insensitively() {
        let departments = vec![department("1", "IT"), department("2", "HR")];

        let result = ensure_unique_department_name(&departments, "it", None);
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn renaming_to_own_name_is_not_a_duplicate() {
        let departments = vec![department("1", "IT"), department("2", "HR")];

        let own = ensure_unique_department_name(&departments, "It", Some(&RecordId::new("1")));
        assert!(own.is_ok());

        let other = ensure_unique_department_name(&departments, "hr", Some(&RecordId::new("1")));
        assert!(other.is_err());
    }

    #[test]
    fn decodes_service_dep_name_field() {
        let payload = r#"{"id":"3","depName":"Finance","createdAt":"2024-01-01"}"#;
        let decoded = serde_json::from_str::<Department>(payload);
        assert!(matches!(decoded, Ok(ref value) if value.name == "Finance"));
    }

    #[test]
    fn display_name_covers_missing_and_dangling_references() {
        let departments = vec![department("1", "IT")];

        assert_eq!(department_display_name(&departments, None), "N/A");
        assert_eq!(
            department_display_name(&departments, Some(&RecordId::new("1"))),
            "IT"
        );
        assert_eq!(
            department_display_name(&departments, Some(&RecordId::new("9"))),
            "Unknown"
        );
    }
}
