use std::sync::Arc;

use classroom_core::editor::EditorPolicy;
use storage::repository::Storage;

use crate::api::{AuthApi, ClassroomApi, HttpApi, QuestionApi, QuizApi, StudentApi};
use crate::classroom_service::ClassroomService;
use crate::config::{ApiConfig, editor_policy_from_env};
use crate::error::AppServicesError;
use crate::question_service::QuestionService;
use crate::quiz_service::QuizService;
use crate::session_guard::SessionGuard;

/// Assembles app-facing services over one storage backend and one API client.
#[derive(Clone)]
pub struct AppServices {
    editor_policy: EditorPolicy,
    session: Arc<SessionGuard>,
    questions: Arc<QuestionService>,
    quizzes: Arc<QuizService>,
    classrooms: Arc<ClassroomService>,
}

impl AppServices {
    /// Build services backed by `SQLite` credential storage and the HTTP API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or HTTP client setup fails.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::new_http(&storage, config, editor_policy_from_env())
    }

    /// Build services over an existing storage backend and the HTTP API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Api` if the HTTP client cannot be built.
    pub fn new_http(
        storage: &Storage,
        config: ApiConfig,
        editor_policy: EditorPolicy,
    ) -> Result<Self, AppServicesError> {
        let api = Arc::new(HttpApi::new(config, storage.credentials())?);
        Ok(Self::from_parts(
            storage,
            ApiHandles::shared(api),
            editor_policy,
        ))
    }

    /// Wire services from explicit API implementations.
    #[must_use]
    pub fn from_parts(storage: &Storage, apis: ApiHandles, editor_policy: EditorPolicy) -> Self {
        let session = Arc::new(SessionGuard::new(apis.auth, storage.credentials()));
        let questions = Arc::new(QuestionService::new(Arc::clone(&apis.questions)));
        let quizzes = Arc::new(QuizService::new(
            Arc::clone(&apis.quizzes),
            Arc::clone(&apis.questions),
        ));
        let classrooms = Arc::new(ClassroomService::new(
            apis.classrooms,
            apis.students,
            apis.quizzes,
        ));

        Self {
            editor_policy,
            session,
            questions,
            quizzes,
            classrooms,
        }
    }

    #[must_use]
    pub fn editor_policy(&self) -> EditorPolicy {
        self.editor_policy
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
}

/// One implementation per API contract. [`HttpApi`] fills every slot in production.
#[derive(Clone)]
pub struct ApiHandles {
    pub auth: Arc<dyn AuthApi>,
    pub questions: Arc<dyn QuestionApi>,
    pub quizzes: Arc<dyn QuizApi>,
    pub classrooms: Arc<dyn ClassroomApi>,
    pub students: Arc<dyn StudentApi>,
}

impl ApiHandles {
    /// Use one value for every contract.
    #[must_use]
    pub fn shared<A>(api: Arc<A>) -> Self
    where
        A: AuthApi + QuestionApi + QuizApi + ClassroomApi + StudentApi + 'static,
    {
        Self {
            auth: api.clone(),
            questions: api.clone(),
            quizzes: api.clone(),
            classrooms: api.clone(),
            students: api,
        }
    }
}
