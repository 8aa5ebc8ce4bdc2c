use std::env;
use std::time::Duration;

use tracing::warn;
use url::Url;

use classroom_core::editor::{EditorPolicy, LeaveWordPolicy};

use crate::error::AppServicesError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

const API_URL_VAR: &str = "DASHBOARD_API_URL";
const API_TIMEOUT_VAR: &str = "DASHBOARD_API_TIMEOUT_SECS";
const ENFORCE_CORRECT_VAR: &str = "DASHBOARD_ENFORCE_CORRECT_OPTIONS";
const LEAVE_WORD_VAR: &str = "DASHBOARD_LEAVE_WORD_POLICY";

/// Where the backend lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidBaseUrl` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, AppServicesError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|_| AppServicesError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `DASHBOARD_API_URL` and `DASHBOARD_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidBaseUrl` if the configured URL does not parse.
    pub fn from_env() -> Result<Self, AppServicesError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with a custom variable source.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidBaseUrl` if the configured URL does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppServicesError> {
        let base_url = lookup(API_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = lookup(API_TIMEOUT_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                warn!(value = %raw, "ignoring invalid {API_TIMEOUT_VAR}");
                None
            }
        });
        Ok(Self::new(&base_url)?.with_timeout(timeout))
    }

    /// Absolute URL for an endpoint path such as `/Teacher/GetTeacher`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Editor policy from `DASHBOARD_ENFORCE_CORRECT_OPTIONS` and `DASHBOARD_LEAVE_WORD_POLICY`.
#[must_use]
pub fn editor_policy_from_env() -> EditorPolicy {
    editor_policy_from_lookup(|key| env::var(key).ok())
}

#[must_use]
pub fn editor_policy_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EditorPolicy {
    let enforce_correct_options = lookup(ENFORCE_CORRECT_VAR).is_some_and(|raw| {
        matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    });
    let leave_word = lookup(LEAVE_WORD_VAR)
        .and_then(|raw| match raw.parse::<LeaveWordPolicy>() {
            Ok(policy) => Some(policy),
            Err(err) => {
                warn!(%err, "falling back to the default leave-word policy");
                None
            }
        })
        .unwrap_or_default();

    EditorPolicy {
        enforce_correct_options,
        leave_word,
    }
}
