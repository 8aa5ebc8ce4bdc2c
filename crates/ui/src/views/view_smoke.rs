use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dioxus::prelude::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use uuid::Uuid;

use classroom_core::editor::{EditorPolicy, QuestionDraft};
use classroom_core::model::{
    Category, ClassQuiz, ClassQuizId, Classroom, ClassroomId, LeaderboardEntry, QuestionId,
    QuizId, Student, StudentId, rank_leaderboard,
};

use super::leaderboard::{LeaderboardTable, LeaderboardTableProps};
use super::question_editor::OptionRowEditor;
use super::quiz::use_edit_seed;
use super::test_harness::{
    StaticApi, ViewHarness, ViewKind, drive_dom, question, quiz, setup_view_harness,
};

fn class_id() -> ClassroomId {
    ClassroomId::new(Uuid::from_u128(5))
}

fn class_api() -> StaticApi {
    StaticApi {
        quizzes: vec![quiz(1, "Capitals")],
        students: vec![Student {
            id: StudentId::new(Uuid::from_u128(6)),
            username: "ona".to_string(),
        }],
        class_quizzes: vec![ClassQuiz {
            id: ClassQuizId::new(Uuid::from_u128(7)),
            quiz_id: QuizId::new(Uuid::from_u128(1)),
            name: "Capitals week".to_string(),
            teacher_id: None,
            expiration_date: None,
        }],
        ..StaticApi::default()
    }
}
use crate::vm::{map_leaderboard_rows, map_option_rows};

#[tokio::test(flavor = "current_thread")]
async fn quizzes_view_smoke_renders_loaded_quizzes() {
    let api = StaticApi {
        quizzes: vec![quiz(1, "Capitals"), quiz(2, "Rivers")],
        ..StaticApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::Quizzes, api);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Capitals"), "missing quiz in {html}");
    assert!(html.contains("Rivers"), "missing quiz in {html}");
    assert!(html.contains("New quiz"), "missing create link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_question_cards_and_editor() {
    let quiz_id = QuizId::new(Uuid::from_u128(1));
    let api = StaticApi {
        quizzes: vec![quiz(1, "Capitals")],
        questions: vec![question(10, quiz_id, "Capital of Lithuania?", Category::One)],
        ..StaticApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::Quiz(quiz_id), api);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Capital of Lithuania?"), "missing question in {html}");
    assert!(html.contains("Single correct"), "missing category label in {html}");
    assert!(html.contains("Points: 2"), "missing points in {html}");
    assert!(html.contains("Vilnius"), "missing option in {html}");
    assert!(html.contains("New question"), "missing editor in {html}");
    assert!(html.contains("Add question"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn class_view_smoke_renders_students_and_assignments() {
    let mut harness = setup_view_harness(ViewKind::Class(class_id()), class_api());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("ona"), "missing student in {html}");
    assert!(html.contains("Capitals week"), "missing class quiz in {html}");
    assert!(html.contains("No expiry"), "missing expiry label in {html}");
    assert!(html.contains("Leaderboard"), "missing leaderboard button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn class_view_renders_both_lists_whichever_fetch_finishes_first() {
    for (students_ms, quizzes_ms) in [(40, 1), (1, 40)] {
        let api = StaticApi {
            students_delay: Duration::from_millis(students_ms),
            class_quizzes_delay: Duration::from_millis(quizzes_ms),
            ..class_api()
        };
        let mut harness = setup_view_harness(ViewKind::Class(class_id()), api);
        harness.settle().await;
        let html = harness.render();
        assert!(html.contains("ona"), "missing student in {html}");
        assert!(html.contains("Capitals week"), "missing class quiz in {html}");
        assert!(!html.contains("Loading"), "a list is still pending in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn shared_quizzes_load_once_for_list_and_assignment_form() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let api = StaticApi {
        quiz_fetches: Arc::clone(&fetches),
        ..class_api()
    };
    let mut harness = setup_view_harness(ViewKind::QuizzesAndClass(class_id()), api);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("New quiz"), "missing quiz list in {html}");
    assert!(html.contains("Capitals week"), "missing class page in {html}");
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn classes_view_smoke_renders_error_state() {
    let api = StaticApi {
        classrooms: vec![Classroom {
            id: ClassroomId::new(Uuid::from_u128(1)),
            code: 1234,
            name: None,
        }],
        fail_reads: true,
        ..StaticApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::Classes, api);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[test]
fn leaderboard_table_renders_shared_ranks() {
    let entry = |name: &str, score: f64| LeaderboardEntry {
        name: name.to_string(),
        score,
        correct_answers: 2,
        answered_questions: 3,
    };
    let rows = map_leaderboard_rows(&rank_leaderboard(vec![
        entry("ona", 9.0),
        entry("jonas", 9.0),
        entry("ieva", 4.0),
    ]));
    let mut dom = VirtualDom::new_with_props(LeaderboardTable, LeaderboardTableProps { rows });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("jonas"), "missing row in {html}");
    assert!(html.contains("2/3 correct"), "missing answers in {html}");
    assert!(html.contains("ieva"), "missing last row in {html}");
}

#[component]
fn WordRowHarness() -> Element {
    let mut draft = QuestionDraft::create(QuizId::new(Uuid::nil()), EditorPolicy::default());
    draft.set_category(Category::Word);
    let row = map_option_rows(&draft).remove(0);
    rsx! {
        OptionRowEditor {
            row,
            on_text: move |_: (usize, String)| {},
            on_correct: move |_: (usize, bool)| {},
        }
    }
}

#[test]
fn word_option_row_renders_locked_select() {
    let mut dom = VirtualDom::new(WordRowHarness);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("disabled"), "word answer should be locked in {html}");
    assert!(html.contains("Option 1"), "missing placeholder in {html}");
}

/// Counts warnings emitted by the core crate.
#[derive(Clone, Default)]
struct CoreWarnings(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for CoreWarnings {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::WARN && meta.target().starts_with("classroom_core") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[component]
fn EditSeedHarness() -> Element {
    let questions = use_signal(|| {
        let mut unlisted = question(10, QuizId::new(Uuid::from_u128(1)), "Open", Category::Word);
        unlisted.options = None;
        vec![unlisted]
    });
    let editing = use_signal(|| Some(QuestionId::new(Uuid::from_u128(10))));
    let mut renders = use_signal(|| 0_u32);
    use_future(move || async move {
        for _ in 0..3 {
            tokio::task::yield_now().await;
            *renders.write() += 1;
        }
    });
    let seed = use_edit_seed(
        editing,
        move |question_id| {
            questions
                .read()
                .iter()
                .find(|question| question.id == question_id)
                .cloned()
        },
        EditorPolicy::default(),
    );
    let category = seed().map_or("none", |draft| draft.category().label());
    rsx! {
        p { "renders {renders} seed {category}" }
    }
}

#[tokio::test(flavor = "current_thread")]
async fn edit_seed_is_built_once_across_rerenders() {
    let warnings = CoreWarnings::default();
    let _guard =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(warnings.clone()));

    let mut harness = ViewHarness {
        dom: VirtualDom::new(EditSeedHarness),
    };
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("renders 3"), "harness did not rerender in {html}");
    assert!(html.contains("seed Open answer"), "missing seed in {html}");
    assert_eq!(warnings.0.load(Ordering::SeqCst), 1);
}
