use techtrackr_core::{AppError, AppResult, Identity, RecordId};
use techtrackr_domain::{
    AccessRule, Action, Asset, Employee, EntityKind, access_rule, assignment_matches,
};
use tracing::debug;

use crate::EntityAccessors;

mod visibility;

/// Decides what the current identity may see and change.
///
/// Decisions never fail: a missing identity, an unknown record or a failed
/// lookup all deny. Records needed for a decision are fetched fresh through
/// [`EntityAccessors`] on every call.
#[derive(Clone)]
pub struct AccessControlService {
    accessors: EntityAccessors,
}

impl AccessControlService {
    /// Creates a new access control service.
    #[must_use]
    pub fn new(accessors: EntityAccessors) -> Self {
        Self { accessors }
    }

    /// Returns the accessors decisions are made against.
    #[must_use]
    pub fn accessors(&self) -> &EntityAccessors {
        &self.accessors
    }

    /// Returns whether `identity` may perform `action` on a record of `kind`.
    ///
    /// `target` is ignored for [`Action::Add`] and required by every other
    /// non-admin decision.
    pub async fn is_allowed(
        &self,
        identity: Option<&Identity>,
        action: Action,
        kind: EntityKind,
        target: Option<&RecordId>,
    ) -> bool {
        let Some(identity) = identity else {
            return false;
        };

        let rule = access_rule(identity.role(), action, kind);
        let allowed = match rule {
            AccessRule::Allow => true,
            AccessRule::Deny => false,
            AccessRule::OwnDepartment => {
                target.is_some_and(|department_id| department_id == identity.department_id())
            }
            AccessRule::DepartmentMembers | AccessRule::SelfByName => match target {
                Some(employee_id) => self
                    .accessors
                    .list_employees()
                    .await
                    .iter()
                    .find(|employee| &employee.id == employee_id)
                    .is_some_and(|employee| employee_visible(identity, rule, employee)),
                None => false,
            },
            AccessRule::DepartmentOrRoster | AccessRule::AssignedToSelf => match target {
                Some(asset_id) => self.asset_allowed(identity, rule, asset_id).await,
                None => false,
            },
        };

        debug!(
            identity_id = %identity.id(),
            role = %identity.role(),
            action = action.as_str(),
            entity = kind.as_str(),
            target = target.map(RecordId::as_str),
            allowed,
            "access decision"
        );

        allowed
    }

    /// Ensures `identity` may perform `action`, for gating writes.
    pub async fn require(
        &self,
        identity: Option<&Identity>,
        action: Action,
        kind: EntityKind,
        target: Option<&RecordId>,
    ) -> AppResult<()> {
        let Some(signed_in) = identity else {
            return Err(AppError::Unauthorized(
                "sign in before accessing records".to_owned(),
            ));
        };

        if self.is_allowed(identity, action, kind, target).await {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "role '{}' may not {} {} records",
            signed_in.role(),
            action.as_str(),
            kind.as_str()
        )))
    }

    /// Returns whether `identity` may view the department.
    pub async fn can_view_department(
        &self,
        identity: Option<&Identity>,
        department_id: &RecordId,
    ) -> bool {
        self.is_allowed(
            identity,
            Action::View,
            EntityKind::Department,
            Some(department_id),
        )
        .await
    }

    /// Returns whether `identity` may view the employee.
    pub async fn can_view_employee(
        &self,
        identity: Option<&Identity>,
        employee_id: &RecordId,
    ) -> bool {
        self.is_allowed(identity, Action::View, EntityKind::Employee, Some(employee_id))
            .await
    }

    /// Returns whether `identity` may view the asset.
    pub async fn can_view_asset(&self, identity: Option<&Identity>, asset_id: &RecordId) -> bool {
        self.is_allowed(identity, Action::View, EntityKind::Asset, Some(asset_id))
            .await
    }

    /// Returns whether `identity` may create records of `kind`.
    pub async fn can_add(&self, identity: Option<&Identity>, kind: EntityKind) -> bool {
        self.is_allowed(identity, Action::Add, kind, None).await
    }

    /// Returns whether `identity` may change the record.
    pub async fn can_edit(
        &self,
        identity: Option<&Identity>,
        kind: EntityKind,
        id: &RecordId,
    ) -> bool {
        self.is_allowed(identity, Action::Edit, kind, Some(id)).await
    }

    /// Returns whether `identity` may remove the record.
    pub async fn can_delete(
        &self,
        identity: Option<&Identity>,
        kind: EntityKind,
        id: &RecordId,
    ) -> bool {
        self.is_allowed(identity, Action::Delete, kind, Some(id))
            .await
    }

    async fn asset_allowed(
        &self,
        identity: &Identity,
        rule: AccessRule,
        asset_id: &RecordId,
    ) -> bool {
        let assets = self.accessors.list_assets().await;
        let Some(asset) = assets.iter().find(|asset| &asset.id == asset_id) else {
            return false;
        };

        let roster = if rule.needs_roster() && !owned_by_department(identity, asset) {
            department_roster(identity, self.accessors.list_employees().await)
        } else {
            Vec::new()
        };

        asset_visible(identity, rule, asset, &roster)
    }
}

fn employee_visible(identity: &Identity, rule: AccessRule, employee: &Employee) -> bool {
    match rule {
        AccessRule::Allow => true,
        AccessRule::DepartmentMembers => &employee.department_id == identity.department_id(),
        AccessRule::SelfByName => employee.full_name() == identity.full_name(),
        _ => false,
    }
}

fn asset_visible(
    identity: &Identity,
    rule: AccessRule,
    asset: &Asset,
    roster: &[Employee],
) -> bool {
    match rule {
        AccessRule::Allow => true,
        AccessRule::DepartmentOrRoster => {
            owned_by_department(identity, asset)
                || asset.employee.as_deref().is_some_and(|assignment| {
                    roster
                        .iter()
                        .any(|member| assignment_matches(assignment, &member.full_name()))
                })
        }
        AccessRule::AssignedToSelf => asset
            .employee
            .as_deref()
            .is_some_and(|assignment| assignment_matches(assignment, &identity.full_name())),
        _ => false,
    }
}

fn owned_by_department(identity: &Identity, asset: &Asset) -> bool {
    asset.department_id.as_ref() == Some(identity.department_id())
}

fn department_roster(identity: &Identity, employees: Vec<Employee>) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| &employee.department_id == identity.department_id())
        .collect()
}
