use dioxus::prelude::*;

use classroom_core::model::ClassQuizId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LeaderboardRowVm, map_leaderboard_rows};

#[component]
pub fn LeaderboardDialog(
    class_quiz_id: ClassQuizId,
    title: String,
    on_close: EventHandler<()>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let classrooms = ctx.classrooms();

    let resource = use_resource(move || {
        let classrooms = classrooms.clone();
        async move {
            let rows = classrooms
                .leaderboard(class_quiz_id)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(map_leaderboard_rows(&rows))
        }
    });

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal leaderboard",
                div { class: "modal-header",
                    h3 { "Leaderboard: {title}" }
                    button { r#type: "button", onclick: move |_| on_close.call(()), "Close" }
                }
                match view_state_from_resource(resource) {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(rows) => rsx! {
                        LeaderboardTable { rows }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                }
            }
        }
    }
}

#[component]
pub fn LeaderboardTable(rows: Vec<LeaderboardRowVm>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { "No answers yet." }
        };
    }
    rsx! {
        table { class: "leaderboard-table",
            thead {
                tr {
                    th { "#" }
                    th { "Student" }
                    th { "Score" }
                    th { "Answers" }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.rank}-{row.name}",
                        td { "{row.rank}" }
                        td { "{row.name}" }
                        td { "{row.score_label}" }
                        td { "{row.answered_label}" }
                    }
                }
            }
        }
    }
}
