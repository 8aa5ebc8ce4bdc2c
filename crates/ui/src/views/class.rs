use dioxus::prelude::*;
use dioxus_router::Link;

use classroom_core::model::{ClassQuiz, ClassroomId, QuizId, Student, StudentId};
use classroom_core::reconcile::Patch;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{LeaderboardDialog, ViewState, use_remote_list, use_shared_quizzes};
use crate::vm::{ClassQuizRowVm, map_class_quiz_rows, map_quiz_choices};

#[component]
pub fn ClassView(class_id: ClassroomId) -> Element {
    rsx! {
        ClassPage { key: "{class_id}", class_id }
    }
}

/// Students and assigned quizzes load independently; either may fail on its own.
#[component]
fn ClassPage(class_id: ClassroomId) -> Element {
    let ctx = use_context::<AppContext>();
    let classrooms = ctx.classrooms();
    let students_source = classrooms.students(class_id);
    let students = use_remote_list(students_source.clone());
    let class_quizzes = use_remote_list(classrooms.class_quizzes(class_id));
    let mut leaderboard = use_signal(|| None::<ClassQuizRowVm>);

    let on_delete_student = use_callback(move |student_id: StudentId| {
        let reconciler = students_source.clone();
        spawn(async move {
            let patch = reconciler.delete(&student_id).await;
            students.apply(patch);
        });
    });

    rsx! {
        div { class: "page class-page",
            div { class: "page-header",
                h2 { "Class" }
                Link { to: Route::Classes {}, "Back to classes" }
            }

            section { class: "class-students",
                h3 { "Students" }
                match students.state() {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading students..." }
                    },
                    ViewState::Ready(items) => rsx! {
                        StudentList { students: items, on_delete: on_delete_student }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                        button { onclick: move |_| students.retry(), "Retry" }
                    },
                }
                RegisterStudentForm {
                    class_id,
                    on_registered: move |patch: Patch<Student>| {
                        students.apply(patch);
                    },
                }
            }

            section { class: "class-quizzes",
                h3 { "Assigned quizzes" }
                match class_quizzes.state() {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading quizzes..." }
                    },
                    ViewState::Ready(items) => rsx! {
                        if items.is_empty() {
                            p { "No quizzes assigned yet." }
                        } else {
                            ul { class: "card-list",
                                for row in map_class_quiz_rows(&items) {
                                    li { key: "{row.id}", class: "card",
                                        span { "{row.name}" }
                                        span { class: "muted", "{row.expires_label}" }
                                        button {
                                            r#type: "button",
                                            onclick: {
                                                let row = row.clone();
                                                move |_| leaderboard.set(Some(row.clone()))
                                            },
                                            "Leaderboard"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                        button { onclick: move |_| class_quizzes.retry(), "Retry" }
                    },
                }
                AssignQuizForm {
                    class_id,
                    on_assigned: move |patch: Patch<ClassQuiz>| {
                        class_quizzes.apply(patch);
                    },
                }
            }

            if let Some(row) = leaderboard() {
                LeaderboardDialog {
                    class_quiz_id: row.id,
                    title: row.name,
                    on_close: move |()| leaderboard.set(None),
                }
            }
        }
    }
}

#[component]
fn StudentList(students: Vec<Student>, on_delete: EventHandler<StudentId>) -> Element {
    if students.is_empty() {
        return rsx! {
            p { "No students enrolled yet." }
        };
    }
    rsx! {
        ul { class: "card-list",
            for student in students {
                li { key: "{student.id}", class: "card",
                    span { "{student.username}" }
                    button {
                        class: "danger",
                        r#type: "button",
                        onclick: move |_| on_delete.call(student.id),
                        "Remove"
                    }
                }
            }
        }
    }
}

#[component]
fn RegisterStudentForm(
    class_id: ClassroomId,
    on_registered: EventHandler<Patch<Student>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let classrooms = ctx.classrooms();
        let (user, pass) = (username(), password());
        spawn(async move {
            match classrooms.register_student(class_id, &user, &pass).await {
                Ok(patch) => {
                    username.set(String::new());
                    password.set(String::new());
                    error.set(None);
                    on_registered.call(patch);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        form { class: "inline-form", onsubmit: on_submit,
            input {
                r#type: "text",
                placeholder: "Username",
                value: "{username}",
                oninput: move |evt| username.set(evt.value()),
            }
            input {
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt| password.set(evt.value()),
            }
            button { r#type: "submit", "Register student" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

#[component]
fn AssignQuizForm(
    class_id: ClassroomId,
    on_assigned: EventHandler<Patch<ClassQuiz>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let quizzes = use_shared_quizzes();
    let mut selected = use_signal(|| None::<QuizId>);
    let mut expires = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let choices = map_quiz_choices(&quizzes.snapshot());

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let classrooms = ctx.classrooms();
        let (quiz_id, expiration) = (selected(), expires());
        spawn(async move {
            match classrooms.assign_quiz(class_id, quiz_id, &expiration).await {
                Ok(patch) => {
                    error.set(None);
                    on_assigned.call(patch);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    rsx! {
        form { class: "inline-form", onsubmit: on_submit,
            select {
                onchange: move |evt| selected.set(evt.value().parse().ok()),
                option { value: "", "Select a quiz" }
                for choice in choices {
                    option { key: "{choice.id}", value: "{choice.id}", "{choice.label}" }
                }
            }
            input {
                r#type: "datetime-local",
                value: "{expires}",
                oninput: move |evt| expires.set(evt.value()),
            }
            button { r#type: "submit", "Assign quiz" }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
