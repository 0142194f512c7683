use techtrackr_domain::{
    Department, DepartmentDraft, DepartmentPatch, ensure_unique_department_name,
};

use super::*;

impl InventoryService {
    /// Lists the departments `actor` may view.
    pub async fn list_departments(&self, actor: Option<&Identity>) -> Vec<Department> {
        self.access.visible_departments(actor).await
    }

    /// Creates a department with a name no other department uses.
    pub async fn create_department(
        &self,
        actor: Option<&Identity>,
        draft: &DepartmentDraft,
    ) -> AppResult<()> {
        self.require_write(actor, Action::Add, EntityKind::Department, None)
            .await?;

        let departments = self.repository().list_departments().await?;
        ensure_unique_department_name(&departments, draft.name(), None)?;

        self.repository().create_department(draft).await?;
        info!(name = draft.name(), "department created");

        Ok(())
    }

    /// Applies a partial update to a department.
    pub async fn update_department(
        &self,
        actor: Option<&Identity>,
        id: &RecordId,
        patch: &DepartmentPatch,
    ) -> AppResult<()> {
        self.require_write(actor, Action::Edit, EntityKind::Department, Some(id))
            .await?;
        patch.validate()?;

        if let Some(name) = &patch.name {
            let departments = self.repository().list_departments().await?;
            ensure_unique_department_name(&departments, name, Some(id))?;
        }

        self.repository().update_department(id, patch).await?;
        info!(id = %id, "department updated");

        Ok(())
    }

    /// Deletes a department, returning `false` when it did not exist.
    pub async fn delete_department(
        &self,
        actor: Option<&Identity>,
        id: &RecordId,
    ) -> AppResult<bool> {
        self.require_write(actor, Action::Delete, EntityKind::Department, Some(id))
            .await?;

        deleted(
            self.repository().delete_department(id).await,
            EntityKind::Department,
            id,
        )
    }
}
