//! Hardware asset records, drafts and list queries.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use techtrackr_core::{AppError, AppResult, NonEmptyString, RecordId};

/// Hardware category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetType {
    /// Desktop computer.
    Computer,
    /// Mobile phone.
    Smartphone,
    /// Docking station.
    Dockstation,
    /// Laptop computer.
    Laptop,
    /// Display.
    Monitor,
}

impl AssetType {
    /// Returns the stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Computer => "computer",
            Self::Smartphone => "smartphone",
            Self::Dockstation => "dockstation",
            Self::Laptop => "laptop",
            Self::Monitor => "monitor",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Computer => "Computer",
            Self::Smartphone => "Smartphone",
            Self::Dockstation => "Dock Station",
            Self::Laptop => "Laptop",
            Self::Monitor => "Monitor",
        }
    }
}

impl FromStr for AssetType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "computer" => Ok(Self::Computer),
            "smartphone" => Ok(Self::Smartphone),
            "dockstation" => Ok(Self::Dockstation),
            "laptop" => Ok(Self::Laptop),
            "monitor" => Ok(Self::Monitor),
            _ => Err(AppError::Validation(format!(
                "unknown asset type value '{value}'"
            ))),
        }
    }
}

/// Lifecycle status of an asset.
///
/// `inRepaire` is the service's spelling and is kept on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetStatus {
    /// Deployed and in use.
    #[serde(rename = "inOperation")]
    InOperation,
    /// Out for repair.
    #[serde(rename = "inRepaire")]
    InRepair,
    /// Stored, unassigned.
    #[serde(rename = "inStock")]
    InStock,
    /// Retired.
    #[serde(rename = "writeOff")]
    WriteOff,
}

impl AssetStatus {
    /// Returns the stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InOperation => "inOperation",
            Self::InRepair => "inRepaire",
            Self::InStock => "inStock",
            Self::WriteOff => "writeOff",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InOperation => "In Operation",
            Self::InRepair => "In Repair",
            Self::InStock => "In Stock",
            Self::WriteOff => "Write Off",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "inOperation" => Ok(Self::InOperation),
            "inRepaire" => Ok(Self::InRepair),
            "inStock" => Ok(Self::InStock),
            "writeOff" => Ok(Self::WriteOff),
            _ => Err(AppError::Validation(format!(
                "unknown asset status value '{value}'"
            ))),
        }
    }
}

/// Tracked piece of hardware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Service-assigned identifier.
    pub id: RecordId,
    /// Make and model.
    pub asset_model: String,
    /// Hardware category.
    pub asset_type: AssetType,
    /// Manufacturer serial number.
    #[serde(rename = "assetSN")]
    pub asset_sn: String,
    /// Lifecycle status.
    pub asset_status: AssetStatus,
    /// Internal inventory tag.
    pub asset_inventory_number: String,
    /// Free-text `"First Last"` assignment. Not a reference to an employee id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    /// Owning department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<RecordId>,
    /// Purchase date as reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    /// Purchase price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp as reported by the service.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp as reported by the service.
    #[serde(default)]
    pub updated_at: String,
}

/// Validated input for creating an asset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    asset_model: NonEmptyString,
    asset_type: AssetType,
    #[serde(rename = "assetSN")]
    asset_sn: NonEmptyString,
    asset_status: AssetStatus,
    asset_inventory_number: NonEmptyString,
    #[serde(skip_serializing_if = "Option::is_none")]
    employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    employee_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    department_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl AssetDraft {
    /// Creates a draft with the required fields.
    pub fn new(
        asset_model: impl Into<String>,
        asset_type: AssetType,
        asset_sn: impl Into<String>,
        asset_status: AssetStatus,
        asset_inventory_number: impl Into<String>,
    ) -> AppResult<Self> {
        Ok(Self {
            asset_model: required("asset model", asset_model.into())?,
            asset_type,
            asset_sn: required("asset serial number", asset_sn.into())?,
            asset_status,
            asset_inventory_number: required(
                "asset inventory number",
                asset_inventory_number.into(),
            )?,
            employee: None,
            employee_id: None,
            department_id: None,
            purchase_date: None,
            purchase_price: None,
            notes: None,
        })
    }

    /// Assigns the asset to an employee by display name and, when known, id.
    #[must_use]
    pub fn assigned_to(
        mut self,
        employee: impl Into<String>,
        employee_id: Option<RecordId>,
    ) -> Self {
        self.employee = Some(employee.into());
        self.employee_id = employee_id;
        self
    }

    /// Attaches the asset to a department.
    #[must_use]
    pub fn in_department(mut self, department_id: impl Into<RecordId>) -> Self {
        self.department_id = Some(department_id.into());
        self
    }

    /// Records the purchase date and price.
    pub fn purchased(
        mut self,
        purchase_date: Option<String>,
        purchase_price: Option<f64>,
    ) -> AppResult<Self> {
        validate_price(purchase_price)?;
        self.purchase_date = purchase_date;
        self.purchase_price = purchase_price;
        Ok(self)
    }

    /// Sets free-text notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns the department the asset will belong to.
    #[must_use]
    pub fn department_id(&self) -> Option<&RecordId> {
        self.department_id.as_ref()
    }
}

/// Partial update for an existing asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPatch {
    /// Replacement make and model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_model: Option<String>,
    /// Replacement category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    /// Replacement serial number.
    #[serde(rename = "assetSN", skip_serializing_if = "Option::is_none")]
    pub asset_sn: Option<String>,
    /// Replacement status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_status: Option<AssetStatus>,
    /// Replacement inventory tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_inventory_number: Option<String>,
    /// Replacement assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    /// Replacement department.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<RecordId>,
    /// Replacement purchase date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    /// Replacement purchase price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    /// Replacement notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AssetPatch {
    /// Rejects a patch that would blank out a required field.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("asset model", self.asset_model.as_deref()),
            ("asset serial number", self.asset_sn.as_deref()),
            (
                "asset inventory number",
                self.asset_inventory_number.as_deref(),
            ),
        ] {
            if value.is_some_and(|value| value.trim().is_empty()) {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }

        validate_price(self.purchase_price)
    }
}

fn required(field: &str, value: String) -> AppResult<NonEmptyString> {
    NonEmptyString::new(value.trim())
        .map_err(|_| AppError::Validation(format!("{field} is required")))
}

fn validate_price(purchase_price: Option<f64>) -> AppResult<()> {
    match purchase_price {
        Some(price) if !price.is_finite() || price < 0.0 => Err(AppError::Validation(format!(
            "purchase price must be a non-negative amount, got {price}"
        ))),
        _ => Ok(()),
    }
}

/// Column an asset listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetSortField {
    /// Service identifier.
    #[default]
    Id,
    /// Make and model.
    Model,
    /// Hardware category.
    Type,
    /// Serial number.
    SerialNumber,
    /// Lifecycle status.
    Status,
    /// Inventory tag.
    InventoryNumber,
    /// Assignment display name.
    Employee,
    /// Owning department id.
    Department,
    /// Purchase date.
    PurchaseDate,
    /// Purchase price.
    PurchasePrice,
}

impl FromStr for AssetSortField {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "model" => Ok(Self::Model),
            "type" => Ok(Self::Type),
            "serial" => Ok(Self::SerialNumber),
            "status" => Ok(Self::Status),
            "inventory" => Ok(Self::InventoryNumber),
            "employee" => Ok(Self::Employee),
            "department" => Ok(Self::Department),
            "purchase-date" => Ok(Self::PurchaseDate),
            "price" => Ok(Self::PurchasePrice),
            _ => Err(AppError::Validation(format!(
                "unknown asset sort field '{value}'"
            ))),
        }
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Type/status filters plus ordering applied to an asset listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetQuery {
    /// Keep only this category.
    pub asset_type: Option<AssetType>,
    /// Keep only this status.
    pub asset_status: Option<AssetStatus>,
    /// Sort column.
    pub sort_field: AssetSortField,
    /// Sort direction.
    pub direction: SortDirection,
}

impl AssetQuery {
    /// Returns whether the asset passes the type and status filters.
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        self.asset_type.is_none_or(|value| value == asset.asset_type)
            && self
                .asset_status
                .is_none_or(|value| value == asset.asset_status)
    }

    /// Filters and orders the assets.
    #[must_use]
    pub fn apply(&self, assets: Vec<Asset>) -> Vec<Asset> {
        let mut assets: Vec<Asset> = assets
            .into_iter()
            .filter(|asset| self.matches(asset))
            .collect();

        assets.sort_by(|left, right| {
            let ordering = compare_by(self.sort_field, left, right);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        assets
    }
}

fn compare_by(field: AssetSortField, left: &Asset, right: &Asset) -> Ordering {
    match field {
        AssetSortField::Id => left.id.cmp(&right.id),
        AssetSortField::Model => left.asset_model.cmp(&right.asset_model),
        AssetSortField::Type => left.asset_type.as_str().cmp(right.asset_type.as_str()),
        AssetSortField::SerialNumber => left.asset_sn.cmp(&right.asset_sn),
        AssetSortField::Status => left.asset_status.as_str().cmp(right.asset_status.as_str()),
        AssetSortField::InventoryNumber => left
            .asset_inventory_number
            .cmp(&right.asset_inventory_number),
        AssetSortField::Employee => left.employee.cmp(&right.employee),
        AssetSortField::Department => left.department_id.cmp(&right.department_id),
        AssetSortField::PurchaseDate => left.purchase_date.cmp(&right.purchase_date),
        AssetSortField::PurchasePrice => match (left.purchase_price, right.purchase_price) {
            (Some(left), Some(right)) => left.total_cmp(&right),
            (left, right) => left.is_some().cmp(&right.is_some()),
        },
    }
}
