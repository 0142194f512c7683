use clap::Subcommand;
use techtrackr_application::InventoryService;
use techtrackr_core::{AppError, AppResult, Identity, RecordId};
use techtrackr_domain::{
    AssetDraft, AssetPatch, AssetStatus, AssetType, DepartmentDraft, DepartmentPatch,
    EmployeeDraft, EmployeePatch, EntityKind,
};

#[derive(Debug, Subcommand)]
pub enum DepartmentAction {
    /// Create a department
    Add {
        /// Department name, unique ignoring case
        name: String,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Change a department
    Edit {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a department
    Rm { id: String },
}

#[derive(Debug, Subcommand)]
pub enum EmployeeAction {
    /// Create an employee
    Add {
        first_name: String,
        last_name: String,

        /// Department id the employee joins
        #[arg(short, long)]
        department: String,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        position: Option<String>,

        #[arg(long)]
        hire_date: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },
    /// Change an employee
    Edit {
        id: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(short, long)]
        department: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        position: Option<String>,

        #[arg(long)]
        hire_date: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete an employee
    Rm { id: String },
}

#[derive(Debug, Subcommand)]
pub enum AssetAction {
    /// Register an asset
    Add {
        model: String,

        #[arg(short = 't', long = "type")]
        asset_type: AssetType,

        #[arg(long)]
        serial: String,

        #[arg(long)]
        inventory: String,

        #[arg(short, long, default_value = "inStock")]
        status: AssetStatus,

        /// Assignee full name
        #[arg(short, long)]
        employee: Option<String>,

        /// Assignee employee id, sent alongside the name
        #[arg(long, requires = "employee")]
        employee_id: Option<String>,

        #[arg(short, long)]
        department: Option<String>,

        #[arg(long)]
        purchase_date: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Change an asset
    Edit {
        id: String,

        #[arg(long)]
        model: Option<String>,

        #[arg(short = 't', long = "type")]
        asset_type: Option<AssetType>,

        #[arg(long)]
        serial: Option<String>,

        #[arg(long)]
        inventory: Option<String>,

        #[arg(short, long)]
        status: Option<AssetStatus>,

        #[arg(short, long)]
        employee: Option<String>,

        #[arg(short, long)]
        department: Option<String>,

        #[arg(long)]
        purchase_date: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an asset
    Rm { id: String },
}

pub async fn department(
    inventory: &InventoryService,
    identity: Option<&Identity>,
    action: DepartmentAction,
) -> AppResult<()> {
    match action {
        DepartmentAction::Add { name, description } => {
            let draft = DepartmentDraft::new(name, description)?;
            inventory.create_department(identity, &draft).await?;
            println!("Department '{}' created.", draft.name());
        }
        DepartmentAction::Edit {
            id,
            name,
            description,
        } => {
            let id = RecordId::new(id);
            let patch = non_empty_patch(DepartmentPatch { name, description })?;
            inventory.update_department(identity, &id, &patch).await?;
            println!("Department {id} updated.");
        }
        DepartmentAction::Rm { id } => {
            let id = RecordId::new(id);
            let removed = inventory.delete_department(identity, &id).await?;
            print_removed(EntityKind::Department, &id, removed);
        }
    }

    Ok(())
}

pub async fn employee(
    inventory: &InventoryService,
    identity: Option<&Identity>,
    action: EmployeeAction,
) -> AppResult<()> {
    match action {
        EmployeeAction::Add {
            first_name,
            last_name,
            department,
            email,
            position,
            hire_date,
            phone,
        } => {
            let mut draft = EmployeeDraft::new(first_name, last_name, department)?;
            if let Some(email) = email {
                draft = draft.with_email(email);
            }
            if let Some(position) = position {
                draft = draft.with_position(position);
            }
            if let Some(hire_date) = hire_date {
                draft = draft.with_hire_date(hire_date);
            }
            if let Some(phone) = phone {
                draft = draft.with_phone(phone);
            }

            inventory.create_employee(identity, &draft).await?;
            println!("Employee '{}' created.", draft.full_name());
        }
        EmployeeAction::Edit {
            id,
            first_name,
            last_name,
            department,
            email,
            position,
            hire_date,
            phone,
        } => {
            let id = RecordId::new(id);
            let patch = non_empty_patch(EmployeePatch {
                first_name,
                last_name,
                email,
                position,
                department_id: department.map(RecordId::new),
                hire_date,
                phone,
            })?;
            inventory.update_employee(identity, &id, &patch).await?;
            println!("Employee {id} updated.");
        }
        EmployeeAction::Rm { id } => {
            let id = RecordId::new(id);
            let removed = inventory.delete_employee(identity, &id).await?;
            print_removed(EntityKind::Employee, &id, removed);
        }
    }

    Ok(())
}

pub async fn asset(
    inventory: &InventoryService,
    identity: Option<&Identity>,
    action: AssetAction,
) -> AppResult<()> {
    match action {
        AssetAction::Add {
            model,
            asset_type,
            serial,
            inventory: inventory_number,
            status,
            employee,
            employee_id,
            department,
            purchase_date,
            price,
            notes,
        } => {
            let mut draft = AssetDraft::new(model, asset_type, serial, status, inventory_number)?
                .purchased(purchase_date, price)?;
            if let Some(employee) = employee {
                draft = draft.assigned_to(employee, employee_id.map(RecordId::new));
            }
            if let Some(department) = department {
                draft = draft.in_department(department);
            }
            if let Some(notes) = notes {
                draft = draft.with_notes(notes);
            }

            inventory.create_asset(identity, &draft).await?;
            println!("Asset created.");
        }
        AssetAction::Edit {
            id,
            model,
            asset_type,
            serial,
            inventory: inventory_number,
            status,
            employee,
            department,
            purchase_date,
            price,
            notes,
        } => {
            let id = RecordId::new(id);
            let patch = non_empty_patch(AssetPatch {
                asset_model: model,
                asset_type,
                asset_sn: serial,
                asset_status: status,
                asset_inventory_number: inventory_number,
                employee,
                department_id: department.map(RecordId::new),
                purchase_date,
                purchase_price: price,
                notes,
            })?;
            inventory.update_asset(identity, &id, &patch).await?;
            println!("Asset {id} updated.");
        }
        AssetAction::Rm { id } => {
            let id = RecordId::new(id);
            let removed = inventory.delete_asset(identity, &id).await?;
            print_removed(EntityKind::Asset, &id, removed);
        }
    }

    Ok(())
}

/// Rejects an edit that names no field to change.
fn non_empty_patch<T: Default + PartialEq>(patch: T) -> AppResult<T> {
    if patch == T::default() {
        return Err(AppError::Validation(
            "edit needs at least one field to change".to_owned(),
        ));
    }

    Ok(patch)
}

fn print_removed(kind: EntityKind, id: &RecordId, removed: bool) {
    if removed {
        println!("Deleted {} {id}.", kind.as_str());
    } else {
        println!("No {} {id} to delete.", kind.as_str());
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use techtrackr_core::AppError;
    use techtrackr_domain::{AssetStatus, AssetType, DepartmentPatch};

    use super::{AssetAction, DepartmentAction, EmployeeAction, non_empty_patch};

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        action: Action,
    }

    #[derive(clap::Subcommand)]
    enum Action {
        Department {
            #[command(subcommand)]
            action: DepartmentAction,
        },
        Employee {
            #[command(subcommand)]
            action: EmployeeAction,
        },
        Asset {
            #[command(subcommand)]
            action: AssetAction,
        },
    }

    fn parse(args: &[&str]) -> Option<Action> {
        Harness::try_parse_from(std::iter::once("techtrackr").chain(args.iter().copied()))
            .ok()
            .map(|harness| harness.action)
    }

    #[test]
    fn empty_edit_is_rejected() {
        let result = non_empty_patch(DepartmentPatch::default());

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn edit_with_one_field_passes() {
        let patch = DepartmentPatch {
            name: Some("Ops".to_owned()),
            description: None,
        };

        assert!(non_empty_patch(patch).is_ok());
    }

    #[test]
    fn department_add_takes_name_and_description() {
        let action = parse(&["department", "add", "Finance", "-d", "Money"]);

        assert!(matches!(
            action,
            Some(Action::Department {
                action: DepartmentAction::Add { ref name, description: Some(ref description) }
            }) if name == "Finance" && description == "Money"
        ));
    }

    #[test]
    fn employee_add_requires_department() {
        assert!(parse(&["employee", "add", "Jane", "Smith"]).is_none());
        assert!(matches!(
            parse(&["employee", "add", "Jane", "Smith", "--department", "2"]),
            Some(Action::Employee {
                action: EmployeeAction::Add { ref department, .. }
            }) if department == "2"
        ));
    }

    #[test]
    fn asset_add_parses_wire_values_and_defaults_status() {
        let action = parse(&[
            "asset",
            "add",
            "Dell XPS 15",
            "--type",
            "laptop",
            "--serial",
            "DL-1",
            "--inventory",
            "INV-001",
        ]);

        assert!(matches!(
            action,
            Some(Action::Asset {
                action: AssetAction::Add {
                    asset_type: AssetType::Laptop,
                    status: AssetStatus::InStock,
                    ..
                }
            })
        ));
    }

    #[test]
    fn asset_employee_id_needs_a_name() {
        let action = parse(&[
            "asset",
            "add",
            "iPhone 13",
            "-t",
            "smartphone",
            "--serial",
            "IP-1",
            "--inventory",
            "INV-002",
            "--employee-id",
            "2",
        ]);

        assert!(action.is_none());
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(parse(&["asset", "edit", "1", "--status", "broken"]).is_none());
    }

    #[test]
    fn rm_takes_an_id() {
        assert!(matches!(
            parse(&["asset", "rm", "4"]),
            Some(Action::Asset { action: AssetAction::Rm { ref id } }) if id == "4"
        ));
    }
}
