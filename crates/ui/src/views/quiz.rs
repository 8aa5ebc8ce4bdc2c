use dioxus::prelude::*;
use dioxus_router::Link;

use classroom_core::editor::{EditorPolicy, QuestionDraft};
use classroom_core::model::{Question, QuestionId, QuizId};
use classroom_core::reconcile::Patch;
use services::SubmitOutcome;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{QuestionEditor, ViewState, use_remote_list, use_shared_quizzes};
use crate::vm::{QuestionCardVm, map_question_cards};

#[component]
pub fn QuizView(quiz_id: QuizId) -> Element {
    rsx! {
        QuizPage { key: "{quiz_id}", quiz_id }
    }
}

#[component]
fn QuizPage(quiz_id: QuizId) -> Element {
    let ctx = use_context::<AppContext>();
    let policy = ctx.editor_policy();
    let reconciler = ctx.quizzes().questions(quiz_id);
    let questions = use_remote_list(reconciler.clone());
    let quizzes = use_shared_quizzes();
    let mut editing = use_signal(|| None::<QuestionId>);

    let title = quizzes
        .snapshot()
        .into_iter()
        .find(|quiz| quiz.id == quiz_id)
        .map_or_else(|| "Quiz".to_string(), |quiz| quiz.name);

    let on_submitted = {
        let reconciler = reconciler.clone();
        use_callback(move |outcome: SubmitOutcome| match outcome {
            SubmitOutcome::Created { .. } => {
                questions.apply(reconciler.created());
            }
            SubmitOutcome::Updated { question_id } => {
                editing.set(None);
                let reconciler = reconciler.clone();
                spawn(async move {
                    let patch = reconciler
                        .updated(&question_id)
                        .await
                        .unwrap_or(Patch::Invalidate);
                    questions.apply(patch);
                });
            }
        })
    };

    let on_delete = use_callback(move |question_id: QuestionId| {
        let reconciler = reconciler.clone();
        spawn(async move {
            let patch = reconciler.delete(&question_id).await;
            questions.apply(patch);
        });
    });

    let edit_seed = use_edit_seed(
        editing,
        move |question_id| {
            questions
                .snapshot()
                .into_iter()
                .find(|question| question.id == question_id)
        },
        policy,
    );
    let edit_key = editing().map(|question_id| question_id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h2 { "{title}" }
                Link { to: Route::Quizzes {}, "Back to quizzes" }
            }

            QuestionEditor { seed: QuestionDraft::create(quiz_id, policy), on_submitted }

            h3 { "Questions" }
            match questions.state() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(items) => rsx! {
                    if items.is_empty() {
                        p { "No questions yet." }
                    } else {
                        ul { class: "card-list",
                            for card in map_question_cards(&items) {
                                QuestionCard {
                                    key: "{card.id}",
                                    card: card.clone(),
                                    on_edit: move |question_id: QuestionId| editing.set(Some(question_id)),
                                    on_delete,
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| questions.retry(), "Retry" }
                },
            }

            if let Some(seed) = edit_seed() {
                div { class: "modal-backdrop",
                    div { class: "modal",
                        QuestionEditor {
                            key: "{edit_key}",
                            seed,
                            on_submitted,
                            on_cancel: move |()| editing.set(None),
                        }
                    }
                }
            }
        }
    }
}

/// Draft for the question selected for editing. Rebuilt only when the selection or the
/// looked-up question changes, not on every render of the page.
pub(crate) fn use_edit_seed(
    editing: Signal<Option<QuestionId>>,
    lookup: impl Fn(QuestionId) -> Option<Question> + 'static,
    policy: EditorPolicy,
) -> Memo<Option<QuestionDraft>> {
    use_memo(move || {
        let question = editing().and_then(&lookup)?;
        Some(QuestionDraft::from_question(&question, policy))
    })
}

#[component]
pub fn QuestionCard(
    card: QuestionCardVm,
    on_edit: EventHandler<QuestionId>,
    on_delete: EventHandler<QuestionId>,
) -> Element {
    let question_id = card.id;
    rsx! {
        li { class: "card question-card",
            div { class: "question-meta",
                span { class: "badge", "{card.category_label}" }
                span { "{card.points_label}" }
            }
            p { class: "question-text", "{card.text}" }
            if let Some(url) = card.image_url.clone() {
                img { src: "{url}", alt: "Question image" }
            }
            ul { class: "options",
                for (index, option) in card.options.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: if option.is_correct { "option correct" } else { "option" },
                        "{option.text}"
                    }
                }
            }
            if let Some(explanation) = card.explanation.clone() {
                p { class: "muted", "{explanation}" }
            }
            div { class: "card-actions",
                button { r#type: "button", onclick: move |_| on_edit.call(question_id), "Edit" }
                button {
                    class: "danger",
                    r#type: "button",
                    onclick: move |_| on_delete.call(question_id),
                    "Delete"
                }
            }
        }
    }
}
