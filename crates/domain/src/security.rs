use std::str::FromStr;

use serde::{Deserialize, Serialize};
use techtrackr_core::{AppError, Role};

/// Operation a caller wants to perform on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Read a record.
    View,
    /// Create a record.
    Add,
    /// Change a record.
    Edit,
    /// Remove a record.
    Delete,
}

impl Action {
    /// Returns a stable transport value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }

    /// Returns all known actions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Action] = &[Action::View, Action::Add, Action::Edit, Action::Delete];

        ALL
    }

    /// Returns whether the action mutates state.
    #[must_use]
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::View)
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Self::View),
            "add" => Ok(Self::Add),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!(
                "unknown action value '{value}'"
            ))),
        }
    }
}

/// Kind of record an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Department records.
    Department,
    /// Employee records.
    Employee,
    /// Asset records.
    Asset,
}

impl EntityKind {
    /// Returns a stable transport value for this entity kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Employee => "employee",
            Self::Asset => "asset",
        }
    }

    /// Returns all known entity kinds.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[EntityKind] = &[
            EntityKind::Department,
            EntityKind::Employee,
            EntityKind::Asset,
        ];

        ALL
    }
}

impl FromStr for EntityKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "department" => Ok(Self::Department),
            "employee" => Ok(Self::Employee),
            "asset" => Ok(Self::Asset),
            _ => Err(AppError::Validation(format!(
                "unknown entity kind value '{value}'"
            ))),
        }
    }
}

/// How a permission is decided once role, action and entity kind are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessRule {
    /// Always granted.
    Allow,
    /// Never granted.
    Deny,
    /// Granted when the department is the caller's own.
    OwnDepartment,
    /// Granted when the employee sits in the caller's department.
    DepartmentMembers,
    /// Granted when the employee's full name equals the caller's.
    SelfByName,
    /// Granted when the asset belongs to the caller's department or is
    /// assigned by name to someone on that department's roster.
    DepartmentOrRoster,
    /// Granted when the asset is assigned by name to the caller.
    AssignedToSelf,
}

impl AccessRule {
    /// Returns whether deciding the rule requires the target record itself.
    #[must_use]
    pub fn needs_record(&self) -> bool {
        !matches!(self, Self::Allow | Self::Deny | Self::OwnDepartment)
    }

    /// Returns whether deciding the rule requires the department roster.
    #[must_use]
    pub fn needs_roster(&self) -> bool {
        matches!(self, Self::DepartmentOrRoster)
    }
}

/// The access policy: one rule per role, action and entity kind.
///
/// Every write collapses to "admin only"; no record is writable by its owner.
#[must_use]
pub fn access_rule(role: Role, action: Action, kind: EntityKind) -> AccessRule {
    match (role, action, kind) {
        (Role::Admin, _, _) => AccessRule::Allow,
        (Role::Manager | Role::User, Action::Add | Action::Edit | Action::Delete, _) => {
            AccessRule::Deny
        }
        (Role::Manager | Role::User, Action::View, EntityKind::Department) => {
            AccessRule::OwnDepartment
        }
        (Role::Manager, Action::View, EntityKind::Employee) => AccessRule::DepartmentMembers,
        (Role::User, Action::View, EntityKind::Employee) => AccessRule::SelfByName,
        (Role::Manager, Action::View, EntityKind::Asset) => AccessRule::DepartmentOrRoster,
        (Role::User, Action::View, EntityKind::Asset) => AccessRule::AssignedToSelf,
    }
}

/// Short description of what a role can see, shown after sign-in.
#[must_use]
pub fn role_message(role: Role) -> &'static str {
    match role {
        Role::Admin => {
            "You have administrator access: you can view and manage all departments, employees and assets."
        }
        Role::Manager => {
            "You have manager access: you can view your department, its employees and their assets."
        }
        Role::User => {
            "You have user access: you can view your department, your own record and the assets assigned to you."
        }
    }
}
