use std::sync::Arc;

use techtrackr_domain::{Asset, Department, Employee};
use tracing::warn;

use crate::AssetTrackerRepository;

/// Read side of the remote service with failures degraded to empty lists.
///
/// Every call goes to the repository; the most recent response is the only
/// truth and nothing is cached between calls.
#[derive(Clone)]
pub struct EntityAccessors {
    repository: Arc<dyn AssetTrackerRepository>,
}

impl EntityAccessors {
    /// Creates accessors over a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn AssetTrackerRepository>) -> Self {
        Self { repository }
    }

    /// Lists departments, or nothing when the service call fails.
    pub async fn list_departments(&self) -> Vec<Department> {
        match self.repository.list_departments().await {
            Ok(departments) => departments,
            Err(error) => {
                warn!(error = %error, "failed to list departments, treating as empty");
                Vec::new()
            }
        }
    }

    /// Lists employees, or nothing when the service call fails.
    pub async fn list_employees(&self) -> Vec<Employee> {
        match self.repository.list_employees().await {
            Ok(employees) => employees,
            Err(error) => {
                warn!(error = %error, "failed to list employees, treating as empty");
                Vec::new()
            }
        }
    }

    /// Lists assets, or nothing when the service call fails.
    pub async fn list_assets(&self) -> Vec<Asset> {
        match self.repository.list_assets().await {
            Ok(assets) => assets,
            Err(error) => {
                warn!(error = %error, "failed to list assets, treating as empty");
                Vec::new()
            }
        }
    }

    /// Returns the underlying repository for write paths.
    #[must_use]
    pub fn repository(&self) -> &Arc<dyn AssetTrackerRepository> {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use crate::test_support::seeded_repository;

    use super::EntityAccessors;

    #[tokio::test]
    async fn reads_return_latest_records() {
        let accessors = EntityAccessors::new(Arc::new(seeded_repository()));

        assert_eq!(accessors.list_departments().await.len(), 2);
        assert_eq!(accessors.list_employees().await.len(), 2);
        assert_eq!(accessors.list_assets().await.len(), 5);
    }

    #[tokio::test]
    async fn failed_reads_degrade_to_empty_lists() {
        let repository = Arc::new(seeded_repository());
        repository.fail_reads.store(true, Ordering::SeqCst);
        let accessors = EntityAccessors::new(repository);

        assert!(accessors.list_departments().await.is_empty());
        assert!(accessors.list_employees().await.is_empty());
        assert!(accessors.list_assets().await.is_empty());
    }
}
