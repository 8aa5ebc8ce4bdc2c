#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod classroom_service;
pub mod collections;
pub mod config;
pub mod error;
pub mod question_service;
pub mod quiz_service;
pub mod session_guard;

pub use api::{AuthApi, ClassroomApi, HttpApi, QuestionApi, QuizApi, StudentApi};
pub use app_services::{ApiHandles, AppServices};
pub use classroom_service::ClassroomService;
pub use collections::{
    ClassQuizzes, ClassStudents, DeletableCollection, ListReconciler, QuizQuestions,
    RemoteCollection, TeacherClassrooms, TeacherQuizzes,
};
pub use config::ApiConfig;
pub use error::{
    ApiError, AppServicesError, FailureKind, LoginError, QuestionServiceError, WriteError,
};
pub use question_service::{QuestionService, SubmitOutcome};
pub use quiz_service::QuizService;
pub use session_guard::SessionGuard;
