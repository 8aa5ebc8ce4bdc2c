//! Remote API contracts.
//!
//! Each trait groups the endpoints one part of the dashboard talks to. [`HttpApi`] implements
//! all of them over HTTP; tests substitute fakes.

use async_trait::async_trait;

use classroom_core::editor::{NewQuestionRequest, UpdateQuestionRequest};
use classroom_core::model::{
    ClassQuiz, ClassQuizId, Classroom, ClassroomId, CredentialPair, LeaderboardEntry,
    NewClassroom, NewQuiz, NewStudent, Question, QuestionId, Quiz, QuizAssignment, QuizId,
    Student, StudentId,
};

use crate::error::ApiError;

mod http;

pub use http::HttpApi;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Lightweight authenticated request used to check the stored access credential.
    ///
    /// # Errors
    ///
    /// Any failure, including transport errors and non-2xx responses.
    async fn probe(&self) -> Result<(), ApiError>;

    /// Exchange the stored pair for a new one.
    ///
    /// # Errors
    ///
    /// Any failure, including transport errors and non-2xx responses.
    async fn refresh(&self, pair: &CredentialPair) -> Result<CredentialPair, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for rejected credentials.
    async fn login(&self, username: &str, password: &str) -> Result<CredentialPair, ApiError>;
}

#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn add_question(&self, body: &NewQuestionRequest) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn update_question(&self, body: &UpdateQuestionRequest) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn get_question(&self, id: QuestionId) -> Result<Question, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn list_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, ApiError>;
}

#[async_trait]
pub trait QuizApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn create_quiz(&self, quiz: &NewQuiz) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn delete_quiz(&self, id: QuizId) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn list_class_quizzes(&self, classroom_id: ClassroomId)
    -> Result<Vec<ClassQuiz>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn assign_quiz(&self, assignment: &QuizAssignment) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ClassroomApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn create_classroom(&self, classroom: &NewClassroom) -> Result<(), ApiError>;
}

#[async_trait]
pub trait StudentApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn list_students(&self, classroom_id: ClassroomId) -> Result<Vec<Student>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn register_student(&self, student: &NewStudent) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn delete_student(&self, id: StudentId) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body does not decode.
    async fn leaderboard(&self, class_quiz_id: ClassQuizId)
    -> Result<Vec<LeaderboardEntry>, ApiError>;
}
