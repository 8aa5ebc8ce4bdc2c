use dioxus::prelude::*;

use services::{ApiError, FailureKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unauthorized,
    Offline,
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unauthorized => "Your session has expired. Please sign in again.",
            ViewError::Offline => "The server could not be reached. Check your connection.",
            ViewError::NotFound => "This item no longer exists.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&ApiError> for ViewError {
    fn from(err: &ApiError) -> Self {
        if matches!(err, ApiError::NotFound) {
            return ViewError::NotFound;
        }
        match err.kind() {
            FailureKind::Authorization => ViewError::Unauthorized,
            FailureKind::Transport => ViewError::Offline,
            FailureKind::UnexpectedShape | FailureKind::Storage => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
