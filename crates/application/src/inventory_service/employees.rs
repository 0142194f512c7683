use techtrackr_domain::{Employee, EmployeeDraft, EmployeePatch, ensure_department_exists};

use super::*;

impl InventoryService {
    /// Lists the employees `actor` may view, optionally in one department.
    pub async fn list_employees(
        &self,
        actor: Option<&Identity>,
        department_id: Option<&RecordId>,
    ) -> Vec<Employee> {
        self.access.visible_employees(actor, department_id).await
    }

    /// Loads one employee, or `None` when it is missing or not visible.
    pub async fn employee_detail(
        &self,
        actor: Option<&Identity>,
        id: &RecordId,
    ) -> AppResult<Option<Employee>> {
        if !self.access.can_view_employee(actor, id).await {
            return Ok(None);
        }

        self.repository().find_employee(id).await
    }

    /// Creates an employee in an existing department.
    pub async fn create_employee(
        &self,
        actor: Option<&Identity>,
        draft: &EmployeeDraft,
    ) -> AppResult<()> {
        self.require_write(actor, Action::Add, EntityKind::Employee, None)
            .await?;

        let departments = self.repository().list_departments().await?;
        ensure_department_exists(&departments, draft.department_id())?;

        self.repository().create_employee(draft).await?;
        info!(
            name = %draft.full_name(),
            department_id = %draft.department_id(),
            "employee created"
        );

        Ok(())
    }

    /// Applies a partial update to an employee.
    pub async fn update_employee(
        &self,
        actor: Option<&Identity>,
        id: &RecordId,
        patch: &EmployeePatch,
    ) -> AppResult<()> {
        self.require_write(actor, Action::Edit, EntityKind::Employee, Some(id))
            .await?;
        patch.validate()?;

        if let Some(department_id) = &patch.department_id {
            let departments = self.repository().list_departments().await?;
            ensure_department_exists(&departments, department_id)?;
        }

        self.repository().update_employee(id, patch).await?;
        info!(id = %id, "employee updated");

        Ok(())
    }

    /// Deletes an employee, returning `false` when it did not exist.
    pub async fn delete_employee(
        &self,
        actor: Option<&Identity>,
        id: &RecordId,
    ) -> AppResult<bool> {
        self.require_write(actor, Action::Delete, EntityKind::Employee, Some(id))
            .await?;

        deleted(
            self.repository().delete_employee(id).await,
            EntityKind::Employee,
            id,
        )
    }
}
