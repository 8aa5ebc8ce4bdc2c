use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn CreateClassView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let classrooms = ctx.classrooms();
        let classname = name();
        spawn(async move {
            pending.set(true);
            match classrooms.create_classroom(&classname).await {
                Ok(_) => {
                    navigator.push(Route::Classes {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "page",
            h2 { "New class" }
            form { onsubmit: on_submit,
                label { "Class name"
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { r#type: "submit", disabled: pending(), "Create class" }
            }
        }
    }
}
