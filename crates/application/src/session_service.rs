//! Session lifecycle: sign-in, sign-out and restoring a previous session.
//!
//! [`SessionService`] is the only writer of the current identity. Readers
//! hold a [`SessionContext`], which observes the same value through a watch
//! channel and never blocks the writer.

use std::sync::Arc;

use techtrackr_core::{AppResult, Identity};
use techtrackr_domain::LoginCredentials;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{AuthGateway, IdentityReferenceStore};

/// Read-only view of the current identity.
#[derive(Debug, Clone)]
pub struct SessionContext {
    receiver: watch::Receiver<Option<Identity>>,
}

impl SessionContext {
    /// Returns a snapshot of the current identity.
    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.receiver.borrow().clone()
    }

    /// Returns whether someone is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.receiver.borrow().is_some()
    }

    /// Waits until the identity changes.
    ///
    /// Returns `false` once the owning [`SessionService`] is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}

/// Owner of the current identity and its lifecycle.
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    reference_store: Arc<dyn IdentityReferenceStore>,
    sender: watch::Sender<Option<Identity>>,
}

impl SessionService {
    /// Creates a signed-out session service.
    #[must_use]
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        reference_store: Arc<dyn IdentityReferenceStore>,
    ) -> Self {
        let (sender, _) = watch::channel(None);

        Self {
            gateway,
            reference_store,
            sender,
        }
    }

    /// Returns a reader handle for the current identity.
    #[must_use]
    pub fn context(&self) -> SessionContext {
        SessionContext {
            receiver: self.sender.subscribe(),
        }
    }

    /// Returns a snapshot of the current identity.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    /// Replaces the current identity without validating it.
    ///
    /// A new identity's id is remembered for the next start.
    pub async fn set_current_identity(&self, identity: Option<Identity>) {
        if let Some(identity) = &identity
            && let Err(error) = self.reference_store.save(identity.id()).await
        {
            warn!(
                identity_id = %identity.id(),
                error = %error,
                "failed to remember identity reference"
            );
        }

        self.sender.send_replace(identity);
    }

    /// Signs in against the remote service and loads the resulting identity.
    ///
    /// Any failure leaves the session signed out.
    pub async fn login(&self, credentials: &LoginCredentials) -> AppResult<Identity> {
        if let Err(error) = self.gateway.authenticate(credentials).await {
            warn!(user = %credentials.user(), error = %error, "sign-in rejected");
            self.sender.send_replace(None);
            return Err(error);
        }

        let identity = match self.gateway.fetch_current_identity().await {
            Ok(identity) => identity,
            Err(error) => {
                warn!(
                    user = %credentials.user(),
                    error = %error,
                    "signed in but identity lookup failed"
                );
                self.sender.send_replace(None);
                return Err(error);
            }
        };

        info!(
            identity_id = %identity.id(),
            role = %identity.role(),
            "signed in"
        );
        self.set_current_identity(Some(identity.clone())).await;

        Ok(identity)
    }

    /// Signs out locally and on the remote service.
    ///
    /// The local identity is cleared even when the remote call fails.
    pub async fn logout(&self) {
        if let Err(error) = self.gateway.end_session().await {
            warn!(error = %error, "remote sign-out failed, clearing local session anyway");
        }

        if let Err(error) = self.reference_store.clear().await {
            warn!(error = %error, "failed to forget identity reference");
        }

        self.sender.send_replace(None);
        info!("signed out");
    }

    /// Re-validates a remembered identity against the remote service.
    ///
    /// The session stays signed out when nothing was remembered, the remote
    /// lookup fails, or the remote identity is a different one.
    pub async fn restore(&self) -> Option<Identity> {
        let stored_id = match self.reference_store.load().await {
            Ok(Some(stored_id)) => stored_id,
            Ok(None) => {
                debug!("no remembered identity to restore");
                return None;
            }
            Err(error) => {
                warn!(error = %error, "failed to read identity reference");
                return None;
            }
        };

        let identity = match self.gateway.fetch_current_identity().await {
            Ok(identity) => identity,
            Err(error) => {
                info!(
                    identity_id = %stored_id,
                    error = %error,
                    "remembered session is no longer valid"
                );
                self.sender.send_replace(None);
                return None;
            }
        };

        if identity.id() != &stored_id {
            warn!(
                identity_id = %stored_id,
                remote_identity_id = %identity.id(),
                "remembered identity does not match the remote session"
            );
            self.sender.send_replace(None);
            return None;
        }

        info!(identity_id = %identity.id(), role = %identity.role(), "session restored");
        self.sender.send_replace(Some(identity.clone()));

        Some(identity)
    }
}
