use std::sync::Arc;

use tracing::{info, warn};

use classroom_core::model::{NewQuiz, Quiz, QuizId};
use classroom_core::reconcile::Patch;

use crate::api::{QuestionApi, QuizApi};
use crate::collections::{ListReconciler, QuizQuestions, TeacherQuizzes};
use crate::error::WriteError;

/// Quiz listing and creation, plus access to each quiz's question list.
#[derive(Clone)]
pub struct QuizService {
    quizzes: Arc<dyn QuizApi>,
    questions: Arc<dyn QuestionApi>,
}

impl QuizService {
    #[must_use]
    pub fn new(quizzes: Arc<dyn QuizApi>, questions: Arc<dyn QuestionApi>) -> Self {
        Self { quizzes, questions }
    }

    #[must_use]
    pub fn quizzes(&self) -> ListReconciler<TeacherQuizzes> {
        ListReconciler::new(TeacherQuizzes::new(Arc::clone(&self.quizzes)))
    }

    #[must_use]
    pub fn questions(&self, quiz_id: QuizId) -> ListReconciler<QuizQuestions> {
        ListReconciler::new(QuizQuestions::new(Arc::clone(&self.questions), quiz_id))
    }

    /// # Errors
    ///
    /// Returns `WriteError::EmptyField` for a blank name or `WriteError::Api` if the backend
    /// rejects the quiz.
    pub async fn create_quiz(&self, name: &str) -> Result<Patch<Quiz>, WriteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WriteError::EmptyField("quiz name"));
        }
        self.quizzes
            .create_quiz(&NewQuiz {
                name: name.to_string(),
            })
            .await
            .inspect_err(|err| warn!(%err, "quiz creation failed"))?;
        info!(name, "quiz created");
        Ok(self.quizzes().created())
    }
}
