use std::sync::Arc;

use classroom_core::editor::EditorPolicy;
use services::{AppServices, ClassroomService, QuestionService, QuizService, SessionGuard};

pub trait UiApp: Send + Sync {
    fn session(&self) -> Arc<SessionGuard>;
    fn questions(&self) -> Arc<QuestionService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn classrooms(&self) -> Arc<ClassroomService>;
    fn editor_policy(&self) -> EditorPolicy;
}

impl UiApp for AppServices {
    fn session(&self) -> Arc<SessionGuard> {
        AppServices::session(self)
    }

    fn questions(&self) -> Arc<QuestionService> {
        AppServices::questions(self)
    }

    fn quizzes(&self) -> Arc<QuizService> {
        AppServices::quizzes(self)
    }

    fn classrooms(&self) -> Arc<ClassroomService> {
        AppServices::classrooms(self)
    }

    fn editor_policy(&self) -> EditorPolicy {
        AppServices::editor_policy(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    session: Arc<SessionGuard>,
    questions: Arc<QuestionService>,
    quizzes: Arc<QuizService>,
    classrooms: Arc<ClassroomService>,
    editor_policy: EditorPolicy,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            questions: app.questions(),
            quizzes: app.quizzes(),
            classrooms: app.classrooms(),
            editor_policy: app.editor_policy(),
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionGuard> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn classrooms(&self) -> Arc<ClassroomService> {
        Arc::clone(&self.classrooms)
    }

    #[must_use]
    pub fn editor_policy(&self) -> EditorPolicy {
        self.editor_policy
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
