use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn HomeView() -> Element {
    let session = use_session();

    rsx! {
        div { class: "page home",
            h2 { "Welcome" }
            p { "Build quizzes, enrol students and follow their results." }
            if session.is_authenticated() {
                div { class: "home-actions",
                    Link { class: "btn", to: Route::Classes {}, "Your classes" }
                    Link { class: "btn", to: Route::Quizzes {}, "Your quizzes" }
                }
            } else {
                Link { class: "btn", to: Route::Login {}, "Log in to get started" }
            }
        }
    }
}
