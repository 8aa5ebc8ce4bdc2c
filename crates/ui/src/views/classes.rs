use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewState, use_remote_list};
use crate::vm::{ClassroomCardVm, map_classroom_cards};

#[component]
pub fn ClassesView() -> Element {
    let ctx = use_context::<AppContext>();
    let classrooms = use_remote_list(ctx.classrooms().classrooms());

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "Classes" }
                Link { class: "btn", to: Route::CreateClass {}, "New class" }
            }

            match classrooms.state() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(items) => rsx! {
                    if items.is_empty() {
                        p { "No classes yet." }
                    } else {
                        ul { class: "card-list",
                            for card in map_classroom_cards(&items) {
                                ClassroomCard { key: "{card.id}", card: card.clone() }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| classrooms.retry(), "Retry" }
                },
            }
        }
    }
}

#[component]
fn ClassroomCard(card: ClassroomCardVm) -> Element {
    rsx! {
        li { class: "card",
            Link { to: Route::Class { class_id: card.id },
                h3 { "{card.title}" }
            }
            p { class: "muted", "{card.code_label}" }
        }
    }
}
