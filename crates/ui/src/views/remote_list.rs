//! Locally cached remote lists.
//!
//! A [`RemoteList`] keeps a [`Collection`] in a signal and refetches it whenever the collection
//! is stale: on first mount, after a create, and after a delete that cascades elsewhere.

use dioxus::prelude::*;

use classroom_core::model::Quiz;
use classroom_core::reconcile::{Collection, Identified, Patch, Reconciliation};
use services::{ListReconciler, RemoteCollection};
use tracing::debug;

use crate::context::AppContext;
use crate::session::SessionContext;
use crate::views::{ViewError, ViewState};

pub struct RemoteList<T: 'static> {
    items: Signal<Collection<T>>,
    error: Signal<Option<ViewError>>,
    loader: Resource<()>,
}

impl<T: 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteList<T> {}

impl<T: Identified + Clone + 'static> RemoteList<T> {
    #[must_use]
    pub fn state(&self) -> ViewState<Vec<T>> {
        if let Some(err) = (self.error)() {
            return ViewState::Error(err);
        }
        let items = self.items.read();
        if items.is_stale() {
            ViewState::Loading
        } else {
            ViewState::Ready(items.items().to_vec())
        }
    }

    /// Current entries, stale or not.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().items().to_vec()
    }

    /// Apply a patch; a stale result schedules a refetch.
    pub fn apply(&self, patch: Patch<T>) -> Reconciliation {
        let mut items = self.items;
        let outcome = items.write().apply(patch);
        debug!(?outcome, "list patched");
        outcome
    }

    pub fn retry(&self) {
        let mut error = self.error;
        let mut loader = self.loader;
        error.set(None);
        loader.restart();
    }
}

/// A list owned by the calling component.
pub fn use_remote_list<C>(reconciler: ListReconciler<C>) -> RemoteList<C::Item>
where
    C: RemoteCollection + Clone + 'static,
{
    let items = use_signal(Collection::default);
    let error = use_signal(|| None);
    use_loader(items, error, reconciler, || true)
}

/// Refetch `items` whenever it is stale and `ready` holds.
fn use_loader<C>(
    items: Signal<Collection<C::Item>>,
    error: Signal<Option<ViewError>>,
    reconciler: ListReconciler<C>,
    ready: impl Fn() -> bool + 'static,
) -> RemoteList<C::Item>
where
    C: RemoteCollection + Clone + 'static,
{
    let loader = use_resource(move || {
        let reconciler = reconciler.clone();
        let enabled = ready();
        let stale = items.read().is_stale();
        let mut items = items;
        let mut error = error;
        async move {
            if !enabled || !stale {
                return;
            }
            match reconciler.fetch().await {
                Ok(patch) => {
                    error.set(None);
                    items.write().apply(patch);
                }
                Err(err) => error.set(Some(ViewError::from(&err))),
            }
        }
    });

    RemoteList {
        items,
        error,
        loader,
    }
}

/// Teacher quizzes, shared by the quiz pages and the class assignment form.
///
/// One loader serves every view; it waits for an authenticated session.
#[derive(Clone, Copy)]
pub struct SharedQuizzes {
    list: RemoteList<Quiz>,
}

impl SharedQuizzes {
    #[must_use]
    pub fn list(&self) -> RemoteList<Quiz> {
        self.list
    }

    /// Apply a quiz patch from a page that does not display the list itself.
    pub fn apply(&self, patch: Patch<Quiz>) -> Reconciliation {
        self.list.apply(patch)
    }
}

/// Provide the shared quiz list. Called once, by the component that owns the session.
pub fn use_shared_quizzes_provider(ctx: &AppContext, session: SessionContext) -> SharedQuizzes {
    let items = use_signal(Collection::default);
    let error = use_signal(|| None);
    let list = use_loader(items, error, ctx.quizzes().quizzes(), move || {
        session.is_authenticated()
    });
    use_context_provider(|| SharedQuizzes { list })
}

pub fn use_shared_quizzes() -> RemoteList<Quiz> {
    use_context::<SharedQuizzes>().list()
}
