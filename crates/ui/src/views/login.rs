use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_session;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let guard = ctx.session();
        let (user, pass) = (username(), password());
        spawn(async move {
            pending.set(true);
            match session.login(guard, user, pass).await {
                Ok(()) => {
                    error.set(None);
                    password.set(String::new());
                    navigator.push(Route::Classes {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    rsx! {
        div { class: "page login",
            h2 { "Log in" }
            form { onsubmit: on_submit,
                label { "Username"
                    input {
                        r#type: "text",
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button { r#type: "submit", disabled: pending(),
                    if pending() { "Signing in..." } else { "Log in" }
                }
            }
        }
    }
}
