use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use classroom_core::model::{ClassroomId, QuizId};
use classroom_core::reconcile::Patch;

use crate::context::AppContext;
use crate::session::use_session;
use crate::views::{
    ClassView, ClassesView, CreateClassView, CreateQuizView, HomeView, LoginView, QuizView,
    QuizzesView, SharedQuizzes,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/classes", ClassesView)] Classes {},
        #[route("/create-class", CreateClassView)] CreateClass {},
        #[route("/class/:class_id", ClassView)] Class { class_id: ClassroomId },
        #[route("/quizzes", QuizzesView)] Quizzes {},
        #[route("/create-quiz", CreateQuizView)] CreateQuiz {},
        #[route("/quiz/:quiz_id", QuizView)] Quiz { quiz_id: QuizId },
}

impl Route {
    /// Pages that only make sense for a signed-in teacher.
    #[must_use]
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Home {} | Route::Login {})
    }
}

#[component]
fn Layout() -> Element {
    let session = use_session();
    let route = use_route::<Route>();
    let blocked = route.requires_session() && !session.is_authenticated();

    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                if blocked {
                    SignInPrompt {}
                } else {
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let navigator = use_navigator();

    let shared_quizzes = use_context::<SharedQuizzes>();

    let on_logout = move |_| {
        let guard = ctx.session();
        spawn(async move {
            session.logout(guard).await;
            shared_quizzes.apply(Patch::Invalidate);
            navigator.push(Route::Home {});
        });
    };

    rsx! {
        nav { class: "navbar",
            h1 { "Teacher Dashboard" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                if session.is_authenticated() {
                    li { Link { to: Route::Classes {}, "Classes" } }
                    li { Link { to: Route::Quizzes {}, "Quizzes" } }
                    li {
                        button { class: "link-button", r#type: "button", onclick: on_logout, "Log out" }
                    }
                } else {
                    li { Link { to: Route::Login {}, "Log in" } }
                }
            }
        }
    }
}

#[component]
fn SignInPrompt() -> Element {
    rsx! {
        div { class: "page",
            p { "Sign in to manage your classes and quizzes." }
            Link { to: Route::Login {}, "Go to login" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    #[test]
    fn only_landing_pages_are_public() {
        assert!(!Route::Home {}.requires_session());
        assert!(!Route::Login {}.requires_session());
        assert!(Route::Classes {}.requires_session());
        assert!(
            Route::Quiz {
                quiz_id: QuizId::new(Uuid::nil())
            }
            .requires_session()
        );
    }

    #[test]
    fn entity_routes_use_guid_segments() {
        let class_id = ClassroomId::new(Uuid::from_u128(7));
        let path = Route::Class { class_id }.to_string();
        assert_eq!(path, format!("/class/{class_id}"));
        let parsed = Route::from_str(&path).ok();
        assert!(parsed == Some(Route::Class { class_id }));
    }
}
