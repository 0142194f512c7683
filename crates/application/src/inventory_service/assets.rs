use techtrackr_domain::{Asset, AssetDraft, AssetPatch, AssetQuery, ensure_department_exists};

use super::*;

impl InventoryService {
    /// Lists the assets `actor` may view, filtered and ordered by `query`.
    pub async fn list_assets(&self, actor: Option<&Identity>, query: &AssetQuery) -> Vec<Asset> {
        query.apply(self.access.visible_assets(actor).await)
    }

    /// Creates an asset.
    pub async fn create_asset(
        &self,
        actor: Option<&Identity>,
        draft: &AssetDraft,
    ) -> AppResult<()> {
        self.require_write(actor, Action::Add, EntityKind::Asset, None)
            .await?;
        self.ensure_known_department(draft.department_id()).await?;

        self.repository().create_asset(draft).await?;
        info!("asset created");

        Ok(())
    }

    /// Applies a partial update to an asset.
    pub async fn update_asset(
        &self,
        actor: Option<&Identity>,
        id: &RecordId,
        patch: &AssetPatch,
    ) -> AppResult<()> {
        self.require_write(actor, Action::Edit, EntityKind::Asset, Some(id))
            .await?;
        patch.validate()?;
        self.ensure_known_department(patch.department_id.as_ref())
            .await?;

        self.repository().update_asset(id, patch).await?;
        info!(id = %id, "asset updated");

        Ok(())
    }

    /// Deletes an asset, returning `false` when it did not exist.
    pub async fn delete_asset(&self, actor: Option<&Identity>, id: &RecordId) -> AppResult<bool> {
        self.require_write(actor, Action::Delete, EntityKind::Asset, Some(id))
            .await?;

        deleted(
            self.repository().delete_asset(id).await,
            EntityKind::Asset,
            id,
        )
    }

    async fn ensure_known_department(&self, department_id: Option<&RecordId>) -> AppResult<()> {
        let Some(department_id) = department_id else {
            return Ok(());
        };

        let departments = self.repository().list_departments().await?;
        ensure_department_exists(&departments, department_id)
    }
}
