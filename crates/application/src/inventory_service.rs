use std::sync::Arc;

use techtrackr_core::{AppError, AppResult, Identity, RecordId};
use techtrackr_domain::{Action, EntityKind};
use tracing::info;

use crate::{AccessControlService, AssetTrackerRepository};

mod assets;
mod departments;
mod employees;

/// Application service for reading and changing departments, employees and
/// assets on behalf of the current identity.
///
/// Reads are filtered through [`AccessControlService`]; writes are refused
/// with `Forbidden` before any request is sent unless the identity may make
/// them.
#[derive(Clone)]
pub struct InventoryService {
    access: AccessControlService,
}

impl InventoryService {
    /// Creates a new inventory service.
    #[must_use]
    pub fn new(access: AccessControlService) -> Self {
        Self { access }
    }

    /// Returns the access control service guarding this inventory.
    #[must_use]
    pub fn access(&self) -> &AccessControlService {
        &self.access
    }

    fn repository(&self) -> &Arc<dyn AssetTrackerRepository> {
        self.access.accessors().repository()
    }

    async fn require_write(
        &self,
        actor: Option<&Identity>,
        action: Action,
        kind: EntityKind,
        target: Option<&RecordId>,
    ) -> AppResult<()> {
        self.access.require(actor, action, kind, target).await
    }
}

/// Maps a delete outcome to whether a record was removed.
fn deleted(result: AppResult<()>, kind: EntityKind, id: &RecordId) -> AppResult<bool> {
    match result {
        Ok(()) => {
            info!(entity = kind.as_str(), id = %id, "record deleted");
            Ok(true)
        }
        Err(AppError::NotFound(_)) => {
            info!(entity = kind.as_str(), id = %id, "nothing to delete");
            Ok(false)
        }
        Err(error) => Err(error),
    }
}
