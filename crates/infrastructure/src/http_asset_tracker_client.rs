use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use techtrackr_application::{AssetTrackerRepository, AuthGateway};
use techtrackr_core::{AppError, AppResult, Identity, RecordId};
use techtrackr_domain::{
    Asset, AssetDraft, AssetPatch, Department, DepartmentDraft, DepartmentPatch, Employee,
    EmployeeDraft, EmployeePatch, LoginCredentials,
};
use tracing::debug;
use url::Url;

/// HTTP client for the remote asset-tracking service.
///
/// One cookie jar is shared by every call, so the session cookie set by
/// `POST /auth` authenticates all later requests made through this client.
pub struct HttpAssetTrackerClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpAssetTrackerClient {
    /// Creates a client for the service rooted at `base_url`.
    pub fn new(base_url: &Url, timeout: Duration) -> AppResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "service url '{base_url}' cannot carry a path"
            )));
        }

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

        Ok(Self {
            http_client,
            base_url: base_url.clone(),
        })
    }

    /// Appends percent-encoded `segments` to the base url.
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Internal(format!("service url '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        operation: &str,
    ) -> AppResult<reqwest::Response> {
        let response = request.send().await.map_err(|error| {
            AppError::Internal(format!("{operation} request failed: {error}"))
        })?;

        let status = response.status();
        debug!(operation, status = status.as_u16(), "remote call completed");
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<response body unavailable>".to_owned());
        let message = format!("{operation} failed with status {status}: {body}");

        Err(match status {
            StatusCode::NOT_FOUND => AppError::NotFound(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(message),
            StatusCode::CONFLICT => AppError::Conflict(message),
            status if status.is_client_error() => AppError::Validation(message),
            _ => AppError::Internal(message),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &[&str],
        operation: &str,
    ) -> AppResult<T> {
        let response = self
            .send(self.http_client.get(self.endpoint(path)?), operation)
            .await?;

        response.json::<T>().await.map_err(|error| {
            AppError::Internal(format!("{operation} returned an unreadable body: {error}"))
        })
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &[&str],
        body: &B,
        operation: &str,
    ) -> AppResult<()> {
        self.send(
            self.http_client.post(self.endpoint(path)?).json(body),
            operation,
        )
        .await
        .map(drop)
    }

    async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &[&str],
        body: &B,
        operation: &str,
    ) -> AppResult<()> {
        self.send(
            self.http_client.patch(self.endpoint(path)?).json(body),
            operation,
        )
        .await
        .map(drop)
    }

    async fn delete(&self, path: &[&str], operation: &str) -> AppResult<()> {
        self.send(self.http_client.delete(self.endpoint(path)?), operation)
            .await
            .map(drop)
    }
}

#[derive(Serialize)]
struct DepartmentEnvelope<'a> {
    department: DepartmentBody<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DepartmentBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    dep_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct EmployeeEnvelope<'a, T> {
    employee: &'a T,
}

#[derive(Serialize)]
struct AssetEnvelope<'a, T> {
    asset: &'a T,
}

#[async_trait]
impl AssetTrackerRepository for HttpAssetTrackerClient {
    async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.get_json(&["department"], "list departments").await
    }

    async fn create_department(&self, draft: &DepartmentDraft) -> AppResult<()> {
        let body = DepartmentEnvelope {
            department: DepartmentBody {
                dep_name: Some(draft.name()),
                description: draft.description(),
            },
        };

        self.post_json(&["department"], &body, "create department")
            .await
    }

    async fn update_department(&self, id: &RecordId, patch: &DepartmentPatch) -> AppResult<()> {
        let body = DepartmentEnvelope {
            department: DepartmentBody {
                dep_name: patch.name.as_deref(),
                description: patch.description.as_deref(),
            },
        };

        self.patch_json(&["department", id.as_str()], &body, "update department")
            .await
    }

    async fn delete_department(&self, id: &RecordId) -> AppResult<()> {
        self.delete(&["department", id.as_str()], "delete department")
            .await
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.get_json(&["employee"], "list employees").await
    }

    async fn find_employee(&self, id: &RecordId) -> AppResult<Option<Employee>> {
        match self
            .get_json::<Employee>(&["employee", id.as_str()], "find employee")
            .await
        {
            Ok(employee) => Ok(Some(employee)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> AppResult<()> {
        self.post_json(
            &["employee"],
            &EmployeeEnvelope { employee: draft },
            "create employee",
        )
        .await
    }

    async fn update_employee(&self, id: &RecordId, patch: &EmployeePatch) -> AppResult<()> {
        self.patch_json(
            &["employee", id.as_str()],
            &EmployeeEnvelope { employee: patch },
            "update employee",
        )
        .await
    }

    async fn delete_employee(&self, id: &RecordId) -> AppResult<()> {
        self.delete(&["employee", id.as_str()], "delete employee")
            .await
    }

    async fn list_assets(&self) -> AppResult<Vec<Asset>> {
        self.get_json(&["asset"], "list assets").await
    }

    async fn create_asset(&self, draft: &AssetDraft) -> AppResult<()> {
        self.post_json(&["asset"], &AssetEnvelope { asset: draft }, "create asset")
            .await
    }

    async fn update_asset(&self, id: &RecordId, patch: &AssetPatch) -> AppResult<()> {
        self.patch_json(
            &["asset", id.as_str()],
            &AssetEnvelope { asset: patch },
            "update asset",
        )
        .await
    }

    async fn delete_asset(&self, id: &RecordId) -> AppResult<()> {
        self.delete(&["asset", id.as_str()], "delete asset").await
    }
}

#[async_trait]
impl AuthGateway for HttpAssetTrackerClient {
    async fn authenticate(&self, credentials: &LoginCredentials) -> AppResult<()> {
        self.post_json(&["auth"], credentials, "sign in").await
    }

    async fn fetch_current_identity(&self) -> AppResult<Identity> {
        self.get_json(&["user", "detailes"], "fetch current identity")
            .await
    }

    async fn end_session(&self) -> AppResult<()> {
        self.send(self.http_client.get(self.endpoint(&["logout"])?), "sign out")
            .await
            .map(drop)
    }
}
