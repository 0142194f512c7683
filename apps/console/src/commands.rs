use techtrackr_application::InventoryService;
use techtrackr_core::{Identity, RecordId};
use techtrackr_domain::{
    Action, AssetQuery, AssetSortField, AssetStatus, AssetType, EntityKind, SortDirection,
    department_display_name, role_message,
};

const NOT_SIGNED_IN: &str = "Not signed in. Set TECHTRACKR_USER and TECHTRACKR_PASSWORD.";

pub fn print_signed_out() {
    println!("Signed out.");
}

pub fn whoami(identity: Option<&Identity>) {
    let Some(identity) = identity else {
        println!("{NOT_SIGNED_IN}");
        return;
    };

    println!(
        "{} <{}> ({}, {})",
        identity.full_name(),
        identity.email(),
        identity.position(),
        identity.role()
    );
    println!("{}", role_message(identity.role()));
}

pub async fn departments(inventory: &InventoryService, identity: Option<&Identity>) {
    if identity.is_none() {
        println!("{NOT_SIGNED_IN}");
        return;
    }

    for department in inventory.list_departments(identity).await {
        println!(
            "{:<8} {:<24} {}",
            department.id,
            department.name,
            department.description.as_deref().unwrap_or("")
        );
    }
}

pub async fn employees(
    inventory: &InventoryService,
    identity: Option<&Identity>,
    department_id: Option<&RecordId>,
) {
    if identity.is_none() {
        println!("{NOT_SIGNED_IN}");
        return;
    }

    let departments = inventory.access().accessors().list_departments().await;
    for employee in inventory.list_employees(identity, department_id).await {
        println!(
            "{:<8} {:<24} {:<16} {}",
            employee.id,
            employee.full_name(),
            department_display_name(&departments, Some(&employee.department_id)),
            employee.position
        );
    }
}

pub async fn assets(
    inventory: &InventoryService,
    identity: Option<&Identity>,
    asset_type: Option<AssetType>,
    asset_status: Option<AssetStatus>,
    sort_field: AssetSortField,
    descending: bool,
) {
    if identity.is_none() {
        println!("{NOT_SIGNED_IN}");
        return;
    }

    let query = AssetQuery {
        asset_type,
        asset_status,
        sort_field,
        direction: if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    };

    let departments = inventory.access().accessors().list_departments().await;
    for asset in inventory.list_assets(identity, &query).await {
        println!(
            "{:<8} {:<24} {:<14} {:<13} {:<10} {:<20} {}",
            asset.id,
            asset.asset_model,
            asset.asset_type.label(),
            asset.asset_status.label(),
            asset.asset_inventory_number,
            asset.employee.as_deref().unwrap_or("-"),
            department_display_name(&departments, asset.department_id.as_ref())
        );
    }
}

pub async fn can(
    inventory: &InventoryService,
    identity: Option<&Identity>,
    action: Action,
    entity: EntityKind,
    id: Option<&RecordId>,
) {
    let allowed = inventory
        .access()
        .is_allowed(identity, action, entity, id)
        .await;

    println!(
        "{} {} {}: {}",
        action.as_str(),
        entity.as_str(),
        id.map_or("-", RecordId::as_str),
        if allowed { "allowed" } else { "denied" }
    );
}
