use dioxus::prelude::*;
use dioxus_router::Router;

use classroom_core::model::SessionState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::SessionContext;
use crate::views::use_shared_quizzes_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_signal(|| SessionState::Unknown);
    let session = use_context_provider(|| SessionContext::new(state));
    use_shared_quizzes_provider(&ctx, session);

    let guard = ctx.session();
    use_future(move || session.validate(guard.clone()));

    rsx! {
        document::Title { "Teacher Dashboard" }

        div { class: "app-root",
            if session.state().is_settled() {
                ErrorBoundary {
                    handle_error: |errors: ErrorContext| rsx! {
                        div { class: "fatal",
                            h1 { "Something went wrong" }
                            pre { "{errors:?}" }
                        }
                    },
                    Router::<Route> {}
                }
            }
        }
    }
}
