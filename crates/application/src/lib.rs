//! Application services and ports.

#![forbid(unsafe_code)]

mod access_control_service;
mod entity_accessors;
mod inventory_service;
mod session_service;
mod tracker_ports;

#[cfg(test)]
mod test_support;

pub use access_control_service::AccessControlService;
pub use entity_accessors::EntityAccessors;
pub use inventory_service::InventoryService;
pub use session_service::{SessionContext, SessionService};
pub use tracker_ports::{AssetTrackerRepository, AuthGateway, IdentityReferenceStore};
