use std::fmt;

/// Externally observable session signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Validation is still in flight.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, SessionState::Authenticated)
    }

    #[must_use]
    pub fn is_settled(self) -> bool {
        !matches!(self, SessionState::Unknown)
    }
}

/// Internal phases of the session guard.
///
/// `Validating -> Valid`, `Validating -> Refreshing -> Valid | Invalid`. `Valid` and `Invalid`
/// are terminal for a load cycle; logout moves `Valid -> Invalid` and login `Invalid -> Valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPhase {
    #[default]
    Validating,
    Refreshing,
    Valid,
    Invalid,
}

impl GuardPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GuardPhase::Valid | GuardPhase::Invalid)
    }

    #[must_use]
    pub fn session_state(self) -> SessionState {
        match self {
            GuardPhase::Validating | GuardPhase::Refreshing => SessionState::Unknown,
            GuardPhase::Valid => SessionState::Authenticated,
            GuardPhase::Invalid => SessionState::Unauthenticated,
        }
    }
}

impl fmt::Display for GuardPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GuardPhase::Validating => "validating",
            GuardPhase::Refreshing => "refreshing",
            GuardPhase::Valid => "valid",
            GuardPhase::Invalid => "invalid",
        };
        f.write_str(label)
    }
}
