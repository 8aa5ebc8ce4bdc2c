use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, error, info, warn};

use classroom_core::model::{CredentialPair, GuardPhase, SessionState};
use storage::CredentialStore;

use crate::api::AuthApi;
use crate::error::LoginError;

/// Decides once per load whether the stored credentials still grant access.
///
/// The guard is the only writer of the credential pair. `validate` runs the probe and, when
/// the probe fails, at most one refresh; concurrent callers wait for the cycle already in
/// flight and read its result instead of issuing their own requests.
pub struct SessionGuard {
    auth: Arc<dyn AuthApi>,
    credentials: CredentialStore,
    phase: Mutex<GuardPhase>,
    cycle: tokio::sync::Mutex<bool>,
}

impl SessionGuard {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, credentials: CredentialStore) -> Self {
        Self {
            auth,
            credentials,
            phase: Mutex::new(GuardPhase::Validating),
            cycle: tokio::sync::Mutex::new(false),
        }
    }

    #[must_use]
    pub fn phase(&self) -> GuardPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.phase().session_state()
    }

    fn set_phase(&self, phase: GuardPhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = phase;
        debug!(%phase, "session guard phase");
    }

    /// Run the validation cycle for this load and return the resulting signal.
    ///
    /// Calling it again after the cycle settled returns the settled state without contacting
    /// the backend.
    pub async fn validate(&self) -> SessionState {
        let mut ran = self.cycle.lock().await;
        if *ran {
            return self.state();
        }
        *ran = true;

        self.set_phase(GuardPhase::Validating);
        match self.auth.probe().await {
            Ok(()) => {
                self.set_phase(GuardPhase::Valid);
                return self.state();
            }
            Err(err) => debug!(%err, "session probe failed, attempting refresh"),
        }

        self.set_phase(GuardPhase::Refreshing);
        let phase = self.refresh().await;
        self.set_phase(phase);
        self.state()
    }

    async fn refresh(&self) -> GuardPhase {
        let stored = match self.credentials.load().await {
            Ok(Some(pair)) => pair,
            Ok(None) => {
                info!("no stored credentials to refresh");
                return GuardPhase::Invalid;
            }
            Err(err) => {
                error!(%err, "failed to read stored credentials");
                return GuardPhase::Invalid;
            }
        };

        let fresh = match self.auth.refresh(&stored).await {
            Ok(pair) => pair,
            Err(err) => {
                warn!(%err, "credential refresh failed");
                return GuardPhase::Invalid;
            }
        };

        match self.credentials.store(&fresh).await {
            Ok(()) => GuardPhase::Valid,
            Err(err) => {
                error!(%err, "failed to persist refreshed credentials");
                GuardPhase::Invalid
            }
        }
    }

    /// Clear both credentials and mark the session invalid. Does not contact the backend.
    pub async fn logout(&self) -> SessionState {
        let mut ran = self.cycle.lock().await;
        *ran = true;
        if let Err(err) = self.credentials.clear().await {
            error!(%err, "failed to clear stored credentials");
        }
        self.set_phase(GuardPhase::Invalid);
        info!("logged out");
        self.state()
    }

    /// Exchange username and password for a credential pair and store it.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` if either field is blank, the backend rejects the login, or the
    /// new pair cannot be stored. Nothing is stored on failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionState, LoginError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let mut ran = self.cycle.lock().await;
        let pair: CredentialPair = self.auth.login(username, password).await.map_err(|err| {
            warn!(%err, "login failed");
            err
        })?;
        self.credentials.store(&pair).await?;
        *ran = true;
        self.set_phase(GuardPhase::Valid);
        info!("logged in");
        Ok(self.state())
    }
}
