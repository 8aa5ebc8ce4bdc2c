use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use classroom_core::editor::{NewQuestionRequest, UpdateQuestionRequest};
use classroom_core::model::{
    ClassQuiz, ClassQuizId, Classroom, ClassroomId, CredentialPair, LeaderboardEntry,
    NewClassroom, NewQuiz, NewStudent, Question, QuestionId, Quiz, QuizAssignment, QuizId,
    Student, StudentId,
};
use storage::CredentialStore;

use super::{AuthApi, ClassroomApi, QuestionApi, QuizApi, StudentApi};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// `reqwest` client for the dashboard backend.
///
/// Every authenticated call reads the access credential from the store at send time, so a
/// refresh or logout is visible to the next request without rebuilding the client.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
    credentials: CredentialStore,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl HttpApi {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig, credentials: CredentialStore) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
            credentials,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.config.endpoint(path))
    }

    async fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let builder = self.request(method, path);
        Ok(match self.credentials.access_token().await? {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(url = %response.url(), %status, "api response");
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_status(status))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = self.authorized(Method::GET, path).await?.query(query);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    async fn write_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let builder = self.authorized(method, path).await?.json(body);
        self.send(builder).await?;
        Ok(())
    }

    async fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<(), ApiError> {
        let builder = self.authorized(Method::DELETE, path).await?.query(query);
        self.send(builder).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn probe(&self) -> Result<(), ApiError> {
        let builder = self.authorized(Method::GET, "/Teacher/GetTeacher").await?;
        self.send(builder).await?;
        Ok(())
    }

    async fn refresh(&self, pair: &CredentialPair) -> Result<CredentialPair, ApiError> {
        let builder = self.request(Method::POST, "/Teacher/Refresh").json(pair);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<CredentialPair, ApiError> {
        let builder = self
            .request(Method::POST, "/Teacher/Login")
            .json(&LoginRequest { username, password });
        let response = self.send(builder).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl QuestionApi for HttpApi {
    async fn add_question(&self, body: &NewQuestionRequest) -> Result<(), ApiError> {
        self.write_json(Method::POST, "/Question/AddNewQuestion", body)
            .await
    }

    async fn update_question(&self, body: &UpdateQuestionRequest) -> Result<(), ApiError> {
        self.write_json(Method::PUT, "/Question/UpdateQuestion", body)
            .await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        self.delete(
            "/Question/DeleteQuestion",
            &[("questionId", id.to_string())],
        )
        .await
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, ApiError> {
        self.get_json(
            "/Question/GetQuestionById",
            &[("questionId", id.to_string())],
        )
        .await
    }

    async fn list_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, ApiError> {
        self.get_json(
            "/Question/GetAllQuizzesQuestions",
            &[("quizId", quiz_id.to_string())],
        )
        .await
    }
}

#[async_trait]
impl QuizApi for HttpApi {
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.get_json("/Quiz/GetAllTeacherQuizzes", &[]).await
    }

    async fn create_quiz(&self, quiz: &NewQuiz) -> Result<(), ApiError> {
        self.write_json(Method::POST, "/Quiz/AddNewQuiz", quiz).await
    }

    async fn delete_quiz(&self, id: QuizId) -> Result<(), ApiError> {
        self.delete("/Quiz/DeleteQuiz", &[("quizId", id.to_string())])
            .await
    }

    async fn list_class_quizzes(
        &self,
        classroom_id: ClassroomId,
    ) -> Result<Vec<ClassQuiz>, ApiError> {
        self.get_json(
            "/Quiz/GetAllClassesQuiz",
            &[("classId", classroom_id.to_string())],
        )
        .await
    }

    async fn assign_quiz(&self, assignment: &QuizAssignment) -> Result<(), ApiError> {
        self.write_json(Method::POST, "/Quiz/AddNewQuizForClass", assignment)
            .await
    }
}

#[async_trait]
impl ClassroomApi for HttpApi {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.get_json("/Classroom/GetAllTeacherClasses", &[]).await
    }

    async fn create_classroom(&self, classroom: &NewClassroom) -> Result<(), ApiError> {
        self.write_json(Method::POST, "/Classroom/AddNewClass", classroom)
            .await
    }
}

#[async_trait]
impl StudentApi for HttpApi {
    async fn list_students(&self, classroom_id: ClassroomId) -> Result<Vec<Student>, ApiError> {
        self.get_json(
            "/Student/GetAllStudentsByClass",
            &[("classId", classroom_id.to_string())],
        )
        .await
    }

    async fn register_student(&self, student: &NewStudent) -> Result<(), ApiError> {
        self.write_json(Method::POST, "/Student/Register", student)
            .await
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), ApiError> {
        self.delete(
            "/Student/DeleteStudent",
            &[("studentId", id.to_string())],
        )
        .await
    }

    async fn leaderboard(
        &self,
        class_quiz_id: ClassQuizId,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get_json(
            "/Student/GetLeaderboardOfQuiz",
            &[("classQuizId", class_quiz_id.to_string())],
        )
        .await
    }
}
