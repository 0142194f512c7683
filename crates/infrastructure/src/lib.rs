//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod file_identity_reference_store;
mod http_asset_tracker_client;

pub use file_identity_reference_store::FileIdentityReferenceStore;
pub use http_asset_tracker_client::HttpAssetTrackerClient;
