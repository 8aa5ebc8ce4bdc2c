use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::SharedQuizzes;

#[component]
pub fn CreateQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let shared = use_context::<SharedQuizzes>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let quizzes = ctx.quizzes();
        let quiz_name = name();
        spawn(async move {
            pending.set(true);
            match quizzes.create_quiz(&quiz_name).await {
                Ok(patch) => {
                    shared.apply(patch);
                    navigator.push(Route::Quizzes {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h2 { "New quiz" }
            form { onsubmit: on_submit,
                label { "Quiz name"
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { r#type: "submit", disabled: pending(), "Create quiz" }
            }
        }
    }
}
