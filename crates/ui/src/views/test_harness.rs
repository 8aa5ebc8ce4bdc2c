use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use uuid::Uuid;

use classroom_core::editor::{EditorPolicy, NewQuestionRequest, UpdateQuestionRequest};
use classroom_core::model::{
    AnswerOption, Category, ClassQuiz, ClassQuizId, Classroom, ClassroomId, CredentialPair,
    LeaderboardEntry, NewClassroom, NewQuiz, NewStudent, OptionId, Question, QuestionId, Quiz,
    QuizAssignment, QuizId, SessionState, Student, StudentId,
};
use services::{
    ApiError, ApiHandles, AppServices, AuthApi, ClassroomApi, QuestionApi, QuizApi, StudentApi,
};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::session::SessionContext;
use crate::views::{ClassView, ClassesView, QuizView, QuizzesView, use_shared_quizzes_provider};

/// Backend answering every read from fixed data.
#[derive(Default)]
pub struct StaticApi {
    pub quizzes: Vec<Quiz>,
    pub questions: Vec<Question>,
    pub classrooms: Vec<Classroom>,
    pub students: Vec<Student>,
    pub class_quizzes: Vec<ClassQuiz>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub fail_reads: bool,
    pub students_delay: Duration,
    pub class_quizzes_delay: Duration,
    pub quiz_fetches: Arc<AtomicUsize>,
}

impl StaticApi {
    fn read<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, ApiError> {
        if self.fail_reads {
            Err(ApiError::Decode("scripted failure".to_string()))
        } else {
            Ok(items.to_vec())
        }
    }
}

async fn delay(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[async_trait]
impl AuthApi for StaticApi {
    async fn probe(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn refresh(&self, _pair: &CredentialPair) -> Result<CredentialPair, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<CredentialPair, ApiError> {
        Err(ApiError::NotFound)
    }
}

#[async_trait]
impl QuestionApi for StaticApi {
    async fn add_question(&self, _body: &NewQuestionRequest) -> Result<(), ApiError> {
        Ok(())
    }

    async fn update_question(&self, _body: &UpdateQuestionRequest) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_question(&self, _id: QuestionId) -> Result<(), ApiError> {
        Ok(())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, ApiError> {
        self.questions
            .iter()
            .find(|question| question.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn list_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, ApiError> {
        let questions = self.read(&self.questions)?;
        Ok(questions
            .into_iter()
            .filter(|question| question.quiz_id == quiz_id)
            .collect())
    }
}

#[async_trait]
impl QuizApi for StaticApi {
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.quiz_fetches.fetch_add(1, Ordering::SeqCst);
        self.read(&self.quizzes)
    }

    async fn create_quiz(&self, _quiz: &NewQuiz) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_quiz(&self, _id: QuizId) -> Result<(), ApiError> {
        Ok(())
    }

    async fn list_class_quizzes(
        &self,
        _classroom_id: ClassroomId,
    ) -> Result<Vec<ClassQuiz>, ApiError> {
        delay(self.class_quizzes_delay).await;
        self.read(&self.class_quizzes)
    }

    async fn assign_quiz(&self, _assignment: &QuizAssignment) -> Result<(), ApiError> {
        Ok(())
    }
}

#[async_trait]
impl ClassroomApi for StaticApi {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.read(&self.classrooms)
    }

    async fn create_classroom(&self, _classroom: &NewClassroom) -> Result<(), ApiError> {
        Ok(())
    }
}

#[async_trait]
impl StudentApi for StaticApi {
    async fn list_students(&self, _classroom_id: ClassroomId) -> Result<Vec<Student>, ApiError> {
        delay(self.students_delay).await;
        self.read(&self.students)
    }

    async fn register_student(&self, _student: &NewStudent) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_student(&self, _id: StudentId) -> Result<(), ApiError> {
        Ok(())
    }

    async fn leaderboard(
        &self,
        _class_quiz_id: ClassQuizId,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.read(&self.leaderboard)
    }
}

pub fn quiz(seed: u128, name: &str) -> Quiz {
    Quiz {
        id: QuizId::new(Uuid::from_u128(seed)),
        name: name.to_string(),
        teacher_id: None,
    }
}

pub fn question(seed: u128, quiz_id: QuizId, text: &str, category: Category) -> Question {
    let id = QuestionId::new(Uuid::from_u128(seed));
    Question {
        id,
        quiz_id,
        text: text.to_string(),
        explanation: String::new(),
        category,
        points: 2,
        image_url: None,
        options: Some(vec![AnswerOption {
            id: OptionId::new(Uuid::from_u128(seed + 1000)),
            option_text: "Vilnius".to_string(),
            is_correct: true,
            question_id: id,
        }]),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Classes,
    Class(ClassroomId),
    Quizzes,
    Quiz(QuizId),
    /// Quiz list and class page mounted side by side.
    QuizzesAndClass(ClassroomId),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let ctx = use_context_provider(|| build_app_context(&props.app));
    use_context_provider(|| props.view);
    let state = use_signal(|| SessionState::Authenticated);
    let session = use_context_provider(|| SessionContext::new(state));
    use_shared_quizzes_provider(&ctx, session);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Classes => rsx! { ClassesView {} },
        ViewKind::Class(class_id) => rsx! { ClassView { class_id } },
        ViewKind::Quizzes => rsx! { QuizzesView {} },
        ViewKind::Quiz(quiz_id) => rsx! { QuizView { quiz_id } },
        ViewKind::QuizzesAndClass(class_id) => rsx! {
            QuizzesView {}
            ClassView { class_id }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let spawned fetches resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: StaticApi) -> ViewHarness {
    let services = AppServices::from_parts(
        &Storage::in_memory(),
        ApiHandles::shared(Arc::new(api)),
        EditorPolicy::default(),
    );
    let app: Arc<dyn UiApp> = Arc::new(services);
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
