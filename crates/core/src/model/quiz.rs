use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{ClassQuizId, ClassroomId, QuizId, TeacherId};
use crate::reconcile::Identified;
use crate::time::{lenient_timestamp, wire_timestamp};

/// A quiz owned by the signed-in teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: QuizId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
}

impl Identified for Quiz {
    type Id = QuizId;

    fn id(&self) -> &QuizId {
        &self.id
    }
}

/// A quiz as assigned to a classroom. `id` identifies the assignment, `quiz_id` the quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassQuiz {
    pub id: ClassQuizId,
    pub quiz_id: QuizId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<TeacherId>,
    #[serde(default, with = "lenient_timestamp")]
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Identified for ClassQuiz {
    type Id = ClassQuizId;

    fn id(&self) -> &ClassQuizId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuiz {
    pub name: String,
}

/// Join entity created once per quiz-to-classroom assignment. There is no update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAssignment {
    #[serde(with = "wire_timestamp")]
    pub expiration_date: DateTime<Utc>,
    pub classroom_id: ClassroomId,
    pub quiz_id: QuizId,
}
