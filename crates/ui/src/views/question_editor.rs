use std::path::Path;

use dioxus::prelude::*;
use tracing::warn;

use classroom_core::editor::{Attachment, QuestionDraft};
use services::SubmitOutcome;

use crate::context::AppContext;
use crate::vm::{
    EditorVm, OptionRowVm, category_choices, map_option_rows, parse_category, parse_correct,
};

/// Create or edit form for one question.
///
/// The draft lives in this component; a successful create resets it to `seed` so the form is
/// ready for the next question.
#[component]
pub fn QuestionEditor(
    seed: QuestionDraft,
    on_submitted: EventHandler<SubmitOutcome>,
    on_cancel: Option<EventHandler<()>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let initial = seed.clone();
    let mut draft = use_signal(move || initial);
    let mut error = use_signal(|| None::<String>);
    let mut image_path = use_signal(String::new);

    let (vm, rows, category, text, explanation, points, submitting) = {
        let current = draft.read();
        (
            EditorVm::from_draft(&current),
            map_option_rows(&current),
            current.category(),
            current.text().to_owned(),
            current.explanation().to_owned(),
            current.points_input().to_owned(),
            current.is_submitting(),
        )
    };

    let on_attach = move |_| {
        let path = image_path().trim().to_string();
        if path.is_empty() {
            return;
        }
        spawn(async move {
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    let file_name = Path::new(&path)
                        .file_name()
                        .map_or_else(|| path.clone(), |name| name.to_string_lossy().into_owned());
                    draft.write().attach_image(Attachment::new(file_name, bytes));
                    image_path.set(String::new());
                    error.set(None);
                }
                Err(err) => {
                    warn!(%err, %path, "image could not be read");
                    error.set(Some(format!("Could not read {path}: {err}")));
                }
            }
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let prepared = draft.write().begin_submit();
        let prepared = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        error.set(None);
        let questions = ctx.questions();
        let reset_to = seed.clone();
        spawn(async move {
            let result = questions.submit(prepared).await;
            draft.write().finish_submit();
            match result {
                Ok(outcome) => {
                    if matches!(outcome, SubmitOutcome::Created { .. }) {
                        draft.set(reset_to);
                    }
                    on_submitted.call(outcome);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        form { class: "question-editor", onsubmit: on_submit,
            h3 { "{vm.title}" }

            label { "Question"
                textarea {
                    value: "{text}",
                    oninput: move |evt| draft.write().set_text(evt.value()),
                }
            }
            label { "Explanation"
                textarea {
                    value: "{explanation}",
                    oninput: move |evt| draft.write().set_explanation(evt.value()),
                }
            }
            label { "Points"
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    value: "{points}",
                    oninput: move |evt| draft.write().set_points(evt.value()),
                }
            }
            label { "Category"
                select {
                    onchange: move |evt| {
                        if let Some(category) = parse_category(&evt.value()) {
                            draft.write().set_category(category);
                        }
                    },
                    for choice in category_choices(category) {
                        option {
                            key: "{choice.value}",
                            value: choice.value,
                            selected: choice.selected,
                            "{choice.label}"
                        }
                    }
                }
            }

            fieldset { class: "options",
                legend { "Options" }
                ul {
                    for row in rows {
                        OptionRowEditor {
                            key: "{row.index}",
                            row: row.clone(),
                            on_text: move |(index, text): (usize, String)| {
                                if let Err(err) = draft.write().set_option_text(index, text) {
                                    warn!(%err, "option text change ignored");
                                }
                            },
                            on_correct: move |(index, is_correct): (usize, bool)| {
                                if let Err(err) = draft.write().set_option_correct(index, is_correct) {
                                    warn!(%err, "option correctness change ignored");
                                }
                            },
                        }
                    }
                }
                div { class: "option-actions",
                    button {
                        r#type: "button",
                        disabled: !vm.can_add_option,
                        onclick: move |_| {
                            if let Err(err) = draft.write().add_option() {
                                error.set(Some(err.to_string()));
                            }
                        },
                        "Add option"
                    }
                    button {
                        r#type: "button",
                        disabled: !vm.can_remove_option,
                        onclick: move |_| {
                            draft.write().remove_option();
                        },
                        "Remove option"
                    }
                }
            }

            fieldset { class: "image",
                legend { "Image" }
                if let Some(url) = vm.image_label.clone() {
                    div { class: "image-current",
                        img { src: "{url}", alt: "Question image" }
                        button {
                            r#type: "button",
                            onclick: move |_| draft.write().clear_image(),
                            "Remove image"
                        }
                    }
                }
                if let Some(label) = vm.attachment_label.clone() {
                    div { class: "image-pending",
                        span { "{label}" }
                        button {
                            r#type: "button",
                            onclick: move |_| draft.write().discard_attachment(),
                            "Discard"
                        }
                    }
                }
                input {
                    r#type: "text",
                    placeholder: "Path to an image file",
                    value: "{image_path}",
                    oninput: move |evt| image_path.set(evt.value()),
                }
                button { r#type: "button", onclick: on_attach, "Attach image" }
            }

            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }

            div { class: "form-actions",
                if let Some(on_cancel) = on_cancel {
                    button { r#type: "button", onclick: move |_| on_cancel.call(()), "Cancel" }
                }
                button { r#type: "submit", disabled: submitting, "{vm.submit_label}" }
            }
        }
    }
}

#[component]
pub fn OptionRowEditor(
    row: OptionRowVm,
    on_text: EventHandler<(usize, String)>,
    on_correct: EventHandler<(usize, bool)>,
) -> Element {
    let index = row.index;
    let position = index + 1;
    rsx! {
        li { class: "option-row",
            input {
                r#type: "text",
                placeholder: "Option {position}",
                value: "{row.text}",
                oninput: move |evt| on_text.call((index, evt.value())),
            }
            select {
                disabled: row.correct_locked,
                onchange: move |evt| on_correct.call((index, parse_correct(&evt.value()))),
                option { value: "true", selected: row.is_correct, "Correct" }
                option { value: "false", selected: !row.is_correct, "Incorrect" }
            }
        }
    }
}
