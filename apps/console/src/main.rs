//! TechTrackr console: inspect and change departments, employees and assets
//! as the signed-in identity is allowed to.

#![forbid(unsafe_code)]

mod commands;
mod console_config;
mod records;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use techtrackr_application::{
    AccessControlService, EntityAccessors, InventoryService, SessionService,
};
use techtrackr_core::{AppError, RecordId};
use techtrackr_domain::{Action, AssetSortField, AssetStatus, AssetType, EntityKind};
use techtrackr_infrastructure::{FileIdentityReferenceStore, HttpAssetTrackerClient};
use tracing::{info, warn};

use crate::console_config::{ConsoleConfig, init_tracing};
use crate::records::{AssetAction, DepartmentAction, EmployeeAction};

#[derive(Parser)]
#[command(name = "techtrackr")]
#[command(author, version, about = "IT asset tracking console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the signed-in identity and what it can see
    Whoami,
    /// Sign out and forget the stored session
    Logout,
    /// List visible departments
    Departments,
    /// List visible employees
    Employees {
        /// Only employees of this department id
        #[arg(short, long)]
        department: Option<String>,
    },
    /// List visible assets
    Assets {
        /// Only assets of this type (laptop, computer, monitor, smartphone, dockstation)
        #[arg(short = 't', long = "type")]
        asset_type: Option<AssetType>,

        /// Only assets in this status (inOperation, inRepaire, inStock, writeOff)
        #[arg(short, long)]
        status: Option<AssetStatus>,

        /// Column to order by
        #[arg(long, default_value = "id")]
        sort: AssetSortField,

        /// Order largest first
        #[arg(long)]
        desc: bool,
    },
    /// Create, change or delete a department
    Department {
        #[command(subcommand)]
        action: DepartmentAction,
    },
    /// Create, change or delete an employee
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },
    /// Create, change or delete an asset
    Asset {
        #[command(subcommand)]
        action: AssetAction,
    },
    /// Check a single permission
    Can {
        /// view, add, edit or delete
        action: Action,
        /// department, employee or asset
        entity: EntityKind,
        /// Target record id
        id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = ConsoleConfig::load()?;

    let client = Arc::new(HttpAssetTrackerClient::new(
        &config.api_base_url,
        config.http_timeout,
    )?);
    let reference_store = Arc::new(FileIdentityReferenceStore::new(
        config.session_file.clone(),
    ));
    let session = SessionService::new(client.clone(), reference_store);
    let inventory = InventoryService::new(AccessControlService::new(EntityAccessors::new(client)));

    info!(
        api_base_url = %config.api_base_url,
        session_file = %config.session_file.display(),
        "techtrackr-console started"
    );

    if matches!(cli.command, Command::Logout) {
        session.logout().await;
        commands::print_signed_out();
        return Ok(());
    }

    if session.restore().await.is_none()
        && let Some(credentials) = &config.credentials
        && let Err(error) = session.login(credentials).await
    {
        warn!(user = %credentials.user(), error = %error, "sign-in failed");
    }

    let context = session.context();
    let identity = context.current();
    let identity = identity.as_ref();

    match cli.command {
        Command::Whoami => commands::whoami(identity),
        Command::Logout => {}
        Command::Departments => commands::departments(&inventory, identity).await,
        Command::Employees { department } => {
            let department = department.map(RecordId::new);
            commands::employees(&inventory, identity, department.as_ref()).await;
        }
        Command::Assets {
            asset_type,
            status,
            sort,
            desc,
        } => {
            commands::assets(&inventory, identity, asset_type, status, sort, desc).await;
        }
        Command::Can { action, entity, id } => {
            let id = id.map(RecordId::new);
            commands::can(&inventory, identity, action, entity, id.as_ref()).await;
        }
        Command::Department { action } => records::department(&inventory, identity, action).await?,
        Command::Employee { action } => records::employee(&inventory, identity, action).await?,
        Command::Asset { action } => records::asset(&inventory, identity, action).await?,
    }

    Ok(())
}
