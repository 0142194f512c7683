use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use techtrackr_core::{AppError, AppResult, Identity, RecordId, Role};
use techtrackr_domain::{
    Asset, AssetDraft, AssetPatch, AssetStatus, AssetType, Department, DepartmentDraft,
    DepartmentPatch, Employee, EmployeeDraft, EmployeePatch, LoginCredentials,
};

use crate::{AssetTrackerRepository, AuthGateway, IdentityReferenceStore};

pub(crate) fn identity(
    id: &str,
    first: &str,
    last: &str,
    department: &str,
    role: Role,
) -> Identity {
    Identity::new(
        id,
        first,
        last,
        format!("{}.{}@company.com", first.to_lowercase(), last.to_lowercase()),
        department,
        role,
        "Staff",
    )
}

pub(crate) fn department(id: &str, name: &str) -> Department {
    Department {
        id: RecordId::new(id),
        name: name.to_owned(),
        description: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

pub(crate) fn employee(id: &str, first: &str, last: &str, department: &str) -> Employee {
    Employee {
        id: RecordId::new(id),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: String::new(),
        position: String::new(),
        department_id: RecordId::new(department),
        hire_date: None,
        phone: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

pub(crate) fn asset(id: &str, department: Option<&str>, employee: Option<&str>) -> Asset {
    Asset {
        id: RecordId::new(id),
        asset_model: format!("Model {id}"),
        asset_type: AssetType::Laptop,
        asset_sn: format!("SN-{id}"),
        asset_status: AssetStatus::InOperation,
        asset_inventory_number: format!("INV-{id}"),
        employee: employee.map(str::to_owned),
        department_id: department.map(RecordId::new),
        purchase_date: None,
        purchase_price: None,
        notes: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

/// Seed data shared by the service tests: two departments, two employees,
/// and assets spread across them.
pub(crate) fn seeded_repository() -> FakeAssetTrackerRepository {
    FakeAssetTrackerRepository::with_records(
        vec![department("1", "IT"), department("2", "HR")],
        vec![
            employee("1", "John", "Doe", "1"),
            employee("2", "Jane", "Smith", "2"),
        ],
        vec![
            asset("1", Some("1"), Some("John Doe")),
            asset("2", Some("2"), Some("Jane Smith")),
            asset("3", Some("1"), None),
            asset("4", Some("1"), Some("Jane Smith")),
            asset("5", None, Some("Jane Smith2")),
        ],
    )
}

#[derive(Default)]
pub(crate) struct FakeAssetTrackerRepository {
    pub(crate) departments: Mutex<Vec<Department>>,
    pub(crate) employees: Mutex<Vec<Employee>>,
    pub(crate) assets: Mutex<Vec<Asset>>,
    pub(crate) created_departments: Mutex<Vec<DepartmentDraft>>,
    pub(crate) created_employees: Mutex<Vec<EmployeeDraft>>,
    pub(crate) created_assets: Mutex<Vec<AssetDraft>>,
    pub(crate) fail_reads: AtomicBool,
    pub(crate) employee_list_calls: AtomicUsize,
}

impl FakeAssetTrackerRepository {
    pub(crate) fn with_records(
        departments: Vec<Department>,
        employees: Vec<Employee>,
        assets: Vec<Asset>,
    ) -> Self {
        Self {
            departments: Mutex::new(departments),
            employees: Mutex::new(employees),
            assets: Mutex::new(assets),
            ..Self::default()
        }
    }

    fn check_reads(&self) -> AppResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Internal("service unavailable".to_owned()));
        }

        Ok(())
    }
}

fn not_found(kind: &str, id: &RecordId) -> AppError {
    AppError::NotFound(format!("{kind} '{id}' does not exist"))
}

#[async_trait]
impl AssetTrackerRepository for FakeAssetTrackerRepository {
    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.check_reads()?;
        Ok(self.departments.lock().await.clone())
    }

    async fn create_department(&self, draft: &DepartmentDraft) -> AppResult<()> {
        self.created_departments.lock().await.push(draft.clone());
        Ok(())
    }

    async fn update_department(&self, id: &RecordId, patch: &DepartmentPatch) -> AppResult<()> {
        let mut departments = self.departments.lock().await;
        let department = departments
            .iter_mut()
            .find(|department| &department.id == id)
            .ok_or_else(|| not_found("department", id))?;
        if let Some(name) = &patch.name {
            department.name = name.clone();
        }
        if let Some(description) = &patch.description {
            department.description = Some(description.clone());
        }
        Ok(())
    }

    async fn delete_department(&self, id: &RecordId) -> AppResult<()> {
        let mut departments = self.departments.lock().await;
        let before = departments.len();
        departments.retain(|department| &department.id != id);
        if departments.len() == before {
            return Err(not_found("department", id));
        }
        Ok(())
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.employee_list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_reads()?;
        Ok(self.employees.lock().await.clone())
    }

    async fn find_employee(&self, id: &RecordId) -> AppResult<Option<Employee>> {
        self.check_reads()?;
        Ok(self
            .employees
            .lock()
            .await
            .iter()
            .find(|employee| &employee.id == id)
            .cloned())
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> AppResult<()> {
        self.created_employees.lock().await.push(draft.clone());
        Ok(())
    }

    async fn update_employee(&self, id: &RecordId, patch: &EmployeePatch) -> AppResult<()> {
        let mut employees = self.employees.lock().await;
        let employee = employees
            .iter_mut()
            .find(|employee| &employee.id == id)
            .ok_or_else(|| not_found("employee", id))?;
        if let Some(department_id) = &patch.department_id {
            employee.department_id = department_id.clone();
        }
        Ok(())
    }

    async fn delete_employee(&self, id: &RecordId) -> AppResult<()> {
        let mut employees = self.employees.lock().await;
        let before = employees.len();
        employees.retain(|employee| &employee.id != id);
        if employees.len() == before {
            return Err(not_found("employee", id));
        }
        Ok(())
    }

    async fn list_assets(&self) -> AppResult<Vec<Asset>> {
        self.check_reads()?;
        Ok(self.assets.lock().await.clone())
    }

    async fn create_asset(&self, draft: &AssetDraft) -> AppResult<()> {
        self.created_assets.lock().await.push(draft.clone());
        Ok(())
    }

    async fn update_asset(&self, id: &RecordId, patch: &AssetPatch) -> AppResult<()> {
        let mut assets = self.assets.lock().await;
        let asset = assets
            .iter_mut()
            .find(|asset| &asset.id == id)
            .ok_or_else(|| not_found("asset", id))?;
        if let Some(status) = patch.asset_status {
            asset.asset_status = status;
        }
        Ok(())
    }

    async fn delete_asset(&self, id: &RecordId) -> AppResult<()> {
        let mut assets = self.assets.lock().await;
        let before = assets.len();
        assets.retain(|asset| &asset.id != id);
        if assets.len() == before {
            return Err(not_found("asset", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeAuthGateway {
    pub(crate) identity: Mutex<Option<Identity>>,
    pub(crate) reject_credentials: AtomicBool,
    pub(crate) fail_logout: AtomicBool,
    pub(crate) logout_calls: AtomicUsize,
}

impl FakeAuthGateway {
    pub(crate) fn signed_in_as(identity: Identity) -> Self {
        Self {
            identity: Mutex::new(Some(identity)),
            ..Self::default()
        }
    }
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn authenticate(&self, _credentials: &LoginCredentials) -> AppResult<()> {
        if self.reject_credentials.load(Ordering::SeqCst) {
            return Err(AppError::Unauthorized("invalid credentials".to_owned()));
        }
        Ok(())
    }

    async fn fetch_current_identity(&self) -> AppResult<Identity> {
        self.identity
            .lock()
            .await
            .clone()
            .ok_or_else(|| AppError::Unauthorized("no active session".to_owned()))
    }

    async fn end_session(&self) -> AppResult<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(AppError::Internal("logout endpoint unreachable".to_owned()));
        }
        *self.identity.lock().await = None;
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeIdentityReferenceStore {
    pub(crate) stored: Mutex<Option<RecordId>>,
}

impl FakeIdentityReferenceStore {
    pub(crate) fn holding(id: &str) -> Self {
        Self {
            stored: Mutex::new(Some(RecordId::new(id))),
        }
    }
}

#[async_trait]
impl IdentityReferenceStore for FakeIdentityReferenceStore {
    async fn load(&self) -> AppResult<Option<RecordId>> {
        Ok(self.stored.lock().await.clone())
    }

    async fn save(&self, id: &RecordId) -> AppResult<()> {
        *self.stored.lock().await = Some(id.clone());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.stored.lock().await = None;
        Ok(())
    }
}
