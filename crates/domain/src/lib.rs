//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod asset;
mod credentials;
mod department;
mod employee;
mod naming;
mod security;

pub use asset::{
    Asset, AssetDraft, AssetPatch, AssetQuery, AssetSortField, AssetStatus, AssetType,
    SortDirection,
};
pub use credentials::{CREDENTIAL_MAX_PASSWORD_LENGTH, CREDENTIAL_MIN_LENGTH, LoginCredentials};
pub use department::{
    Department, DepartmentDraft, DepartmentPatch, department_display_name,
    ensure_unique_department_name,
};
pub use employee::{Employee, EmployeeDraft, EmployeePatch, ensure_department_exists};
pub use naming::assignment_matches;
pub use security::{AccessRule, Action, EntityKind, access_rule, role_message};
