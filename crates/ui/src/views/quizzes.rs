use dioxus::prelude::*;
use dioxus_router::Link;

use classroom_core::model::{Quiz, QuizId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, use_shared_quizzes};

#[component]
pub fn QuizzesView() -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = use_shared_quizzes();

    let on_delete = use_callback(move |quiz_id: QuizId| {
        let reconciler = ctx.quizzes().quizzes();
        spawn(async move {
            let patch = reconciler.delete(&quiz_id).await;
            quizzes.apply(patch);
        });
    });

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Quizzes" }
                Link { class: "btn", to: Route::CreateQuiz {}, "New quiz" }
            }

            match quizzes.state() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(items) => rsx! {
                    if items.is_empty() {
                        p { "No quizzes yet." }
                    } else {
                        ul { class: "card-list",
                            for quiz in items {
                                QuizRow { key: "{quiz.id}", quiz: quiz.clone(), on_delete }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| quizzes.retry(), "Retry" }
                },
            }
        }
    }
}

#[component]
fn QuizRow(quiz: Quiz, on_delete: Callback<QuizId>) -> Element {
    let quiz_id = quiz.id;
    rsx! {
        li { class: "card quiz-row",
            Link { to: Route::Quiz { quiz_id }, "{quiz.name}" }
            button {
                class: "danger",
                r#type: "button",
                onclick: move |_| on_delete.call(quiz_id),
                "Delete"
            }
        }
    }
}
