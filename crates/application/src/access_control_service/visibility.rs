use techtrackr_domain::Department;

use super::*;

impl AccessControlService {
    /// Lists the departments `identity` may view.
    pub async fn visible_departments(&self, identity: Option<&Identity>) -> Vec<Department> {
        let Some(identity) = identity else {
            return Vec::new();
        };

        let departments = self.accessors.list_departments().await;
        match access_rule(identity.role(), Action::View, EntityKind::Department) {
            AccessRule::Allow => departments,
            AccessRule::OwnDepartment => departments
                .into_iter()
                .filter(|department| &department.id == identity.department_id())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Lists the employees `identity` may view, optionally narrowed to one
    /// department.
    pub async fn visible_employees(
        &self,
        identity: Option<&Identity>,
        department_id: Option<&RecordId>,
    ) -> Vec<Employee> {
        let Some(identity) = identity else {
            return Vec::new();
        };

        let rule = access_rule(identity.role(), Action::View, EntityKind::Employee);
        self.accessors
            .list_employees()
            .await
            .into_iter()
            .filter(|employee| department_id.is_none_or(|id| &employee.department_id == id))
            .filter(|employee| employee_visible(identity, rule, employee))
            .collect()
    }

    /// Lists the assets `identity` may view.
    ///
    /// The department roster is fetched at most once for the whole batch.
    pub async fn visible_assets(&self, identity: Option<&Identity>) -> Vec<Asset> {
        let Some(identity) = identity else {
            return Vec::new();
        };

        let rule = access_rule(identity.role(), Action::View, EntityKind::Asset);
        let assets = self.accessors.list_assets().await;
        let roster = if rule.needs_roster()
            && assets
                .iter()
                .any(|asset| !owned_by_department(identity, asset))
        {
            department_roster(identity, self.accessors.list_employees().await)
        } else {
            Vec::new()
        };

        assets
            .into_iter()
            .filter(|asset| asset_visible(identity, rule, asset, &roster))
            .collect()
    }
}
