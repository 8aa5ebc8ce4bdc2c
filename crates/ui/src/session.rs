//! Session signal shared with every view.
//!
//! The root component owns the signal; only the guard's results are written to it, through
//! the methods below. Views read it through [`SessionContext::state`].

use std::sync::Arc;

use dioxus::prelude::*;

use classroom_core::model::SessionState;
use services::{LoginError, SessionGuard};

#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

impl SessionContext {
    #[must_use]
    pub fn new(state: Signal<SessionState>) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    /// Run the load-time validation cycle and publish its result.
    pub async fn validate(mut self, guard: Arc<SessionGuard>) {
        let state = guard.validate().await;
        self.state.set(state);
    }

    pub async fn logout(mut self, guard: Arc<SessionGuard>) {
        let state = guard.logout().await;
        self.state.set(state);
    }

    /// # Errors
    ///
    /// Returns the guard's `LoginError`; the signal is left unchanged in that case.
    pub async fn login(
        mut self,
        guard: Arc<SessionGuard>,
        username: String,
        password: String,
    ) -> Result<(), LoginError> {
        let state = guard.login(&username, &password).await?;
        self.state.set(state);
        Ok(())
    }
}

/// Read the session provided by the root component.
#[must_use]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
