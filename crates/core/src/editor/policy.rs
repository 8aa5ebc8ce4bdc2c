use std::fmt;
use std::str::FromStr;

/// What happens to the options when the category changes away from `Word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaveWordPolicy {
    /// Keep the single word answer as the first option.
    #[default]
    KeepAnswer,
    /// Start over with one blank, incorrect option.
    ResetBlank,
    /// Bring back the options that were on screen before switching to `Word`, if any.
    RestorePrevious,
}

impl FromStr for LeaveWordPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(Self::KeepAnswer),
            "reset" => Ok(Self::ResetBlank),
            "restore" => Ok(Self::RestorePrevious),
            _ => Err(ParsePolicyError {
                raw: s.to_string(),
            }),
        }
    }
}

/// Client-side rules that the backend may or may not enforce on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorPolicy {
    /// Require exactly one correct option for `One` and at least one for `Multiple`.
    pub enforce_correct_options: bool,
    pub leave_word: LeaveWordPolicy,
}

impl EditorPolicy {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enforce_correct_options: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_leave_word(mut self, leave_word: LeaveWordPolicy) -> Self {
        self.leave_word = leave_word;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePolicyError {
    raw: String,
}

impl fmt::Display for ParsePolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown policy `{}` (expected keep, reset or restore)",
            self.raw
        )
    }
}

impl std::error::Error for ParsePolicyError {}
