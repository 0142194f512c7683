use async_trait::async_trait;
use techtrackr_core::{AppResult, Identity, RecordId};
use techtrackr_domain::{
    Asset, AssetDraft, AssetPatch, Department, DepartmentDraft, DepartmentPatch, Employee,
    EmployeeDraft, EmployeePatch, LoginCredentials,
};

/// Repository port for the remote asset-tracking service.
///
/// Updates and deletes of a record the service does not know report
/// `AppError::NotFound`.
#[async_trait]
pub trait AssetTrackerRepository: Send + Sync {
    /// Lists all departments.
    async fn list_departments(&self) -> AppResult<Vec<Department>>;

    /// Creates a department.
    async fn create_department(&self, draft: &DepartmentDraft) -> AppResult<()>;

    /// Applies a partial update to a department.
    async fn update_department(&self, id: &RecordId, patch: &DepartmentPatch) -> AppResult<()>;

    /// Deletes a department.
    async fn delete_department(&self, id: &RecordId) -> AppResult<()>;

    /// Lists all employees.
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Returns one employee by id.
    async fn find_employee(&self, id: &RecordId) -> AppResult<Option<Employee>>;

    /// Creates an employee.
    async fn create_employee(&self, draft: &EmployeeDraft) -> AppResult<()>;

    /// Applies a partial update to an employee.
    async fn update_employee(&self, id: &RecordId, patch: &EmployeePatch) -> AppResult<()>;

    /// Deletes an employee.
    async fn delete_employee(&self, id: &RecordId) -> AppResult<()>;

    /// Lists all assets.
    async fn list_assets(&self) -> AppResult<Vec<Asset>>;

    /// Creates an asset.
    async fn create_asset(&self, draft: &AssetDraft) -> AppResult<()>;

    /// Applies a partial update to an asset.
    async fn update_asset(&self, id: &RecordId, patch: &AssetPatch) -> AppResult<()>;

    /// Deletes an asset.
    async fn delete_asset(&self, id: &RecordId) -> AppResult<()>;
}

/// Port for the external authentication service.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a session on the remote service.
    async fn authenticate(&self, credentials: &LoginCredentials) -> AppResult<()>;

    /// Returns the identity bound to the current remote session.
    async fn fetch_current_identity(&self) -> AppResult<Identity>;

    /// Invalidates the current remote session.
    async fn end_session(&self) -> AppResult<()>;
}

/// Port for remembering which identity was signed in between runs.
///
/// Only the identity id is kept; it is always re-validated before use.
#[async_trait]
pub trait IdentityReferenceStore: Send + Sync {
    /// Returns the stored identity id, if any.
    async fn load(&self) -> AppResult<Option<RecordId>>;

    /// Stores the identity id.
    async fn save(&self, id: &RecordId) -> AppResult<()>;

    /// Removes any stored identity id.
    async fn clear(&self) -> AppResult<()>;
}
