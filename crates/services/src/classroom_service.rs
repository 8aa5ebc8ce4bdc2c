use std::sync::Arc;

use tracing::{info, warn};

use classroom_core::model::{
    ClassQuiz, ClassQuizId, Classroom, ClassroomId, LeaderboardRow, NewClassroom, NewStudent,
    QuizAssignment, QuizId, Student, rank_leaderboard,
};
use classroom_core::reconcile::Patch;
use classroom_core::time::parse_local_input;

use crate::api::{ClassroomApi, QuizApi, StudentApi};
use crate::collections::{ClassQuizzes, ClassStudents, ListReconciler, TeacherClassrooms};
use crate::error::{ApiError, WriteError};

/// Classrooms, enrolment, quiz assignment and leaderboards.
#[derive(Clone)]
pub struct ClassroomService {
    classrooms: Arc<dyn ClassroomApi>,
    students: Arc<dyn StudentApi>,
    quizzes: Arc<dyn QuizApi>,
}

impl ClassroomService {
    #[must_use]
    pub fn new(
        classrooms: Arc<dyn ClassroomApi>,
        students: Arc<dyn StudentApi>,
        quizzes: Arc<dyn QuizApi>,
    ) -> Self {
        Self {
            classrooms,
            students,
            quizzes,
        }
    }

    #[must_use]
    pub fn classrooms(&self) -> ListReconciler<TeacherClassrooms> {
        ListReconciler::new(TeacherClassrooms::new(Arc::clone(&self.classrooms)))
    }

    #[must_use]
    pub fn students(&self, classroom_id: ClassroomId) -> ListReconciler<ClassStudents> {
        ListReconciler::new(ClassStudents::new(Arc::clone(&self.students), classroom_id))
    }

    #[must_use]
    pub fn class_quizzes(&self, classroom_id: ClassroomId) -> ListReconciler<ClassQuizzes> {
        ListReconciler::new(ClassQuizzes::new(Arc::clone(&self.quizzes), classroom_id))
    }

    /// # Errors
    ///
    /// Returns `WriteError::EmptyField` for a blank name or `WriteError::Api` on failure.
    pub async fn create_classroom(&self, name: &str) -> Result<Patch<Classroom>, WriteError> {
        let classname = name.trim();
        if classname.is_empty() {
            return Err(WriteError::EmptyField("class name"));
        }
        self.classrooms
            .create_classroom(&NewClassroom {
                classname: classname.to_string(),
            })
            .await
            .inspect_err(|err| warn!(%err, "class creation failed"))?;
        info!(classname, "class created");
        Ok(self.classrooms().created())
    }

    /// # Errors
    ///
    /// Returns `WriteError::EmptyField` for a blank username or password, or
    /// `WriteError::Api` on failure.
    pub async fn register_student(
        &self,
        classroom_id: ClassroomId,
        username: &str,
        password: &str,
    ) -> Result<Patch<Student>, WriteError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(WriteError::EmptyField("username"));
        }
        if password.is_empty() {
            return Err(WriteError::EmptyField("password"));
        }
        self.students
            .register_student(&NewStudent {
                username: username.to_string(),
                password: password.to_string(),
                classroom_id,
            })
            .await
            .inspect_err(|err| warn!(%err, "student registration failed"))?;
        info!(username, %classroom_id, "student registered");
        Ok(self.students(classroom_id).created())
    }

    /// Assign a quiz to the classroom until the given local date and time.
    ///
    /// # Errors
    ///
    /// Returns `WriteError::MissingQuiz` or `WriteError::InvalidExpiration` before any request
    /// is made, or `WriteError::Api` if the backend rejects the assignment.
    pub async fn assign_quiz(
        &self,
        classroom_id: ClassroomId,
        quiz_id: Option<QuizId>,
        expiration_input: &str,
    ) -> Result<Patch<ClassQuiz>, WriteError> {
        let quiz_id = quiz_id.ok_or(WriteError::MissingQuiz)?;
        let expiration_date = parse_local_input(expiration_input)
            .ok_or_else(|| WriteError::InvalidExpiration(expiration_input.to_string()))?;

        self.quizzes
            .assign_quiz(&QuizAssignment {
                expiration_date,
                classroom_id,
                quiz_id,
            })
            .await
            .inspect_err(|err| warn!(%err, "quiz assignment failed"))?;
        info!(%quiz_id, %classroom_id, "quiz assigned");
        Ok(self.class_quizzes(classroom_id).created())
    }

    /// Ranked leaderboard of one assigned quiz.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the leaderboard cannot be fetched.
    pub async fn leaderboard(
        &self,
        class_quiz_id: ClassQuizId,
    ) -> Result<Vec<LeaderboardRow>, ApiError> {
        let entries = self
            .students
            .leaderboard(class_quiz_id)
            .await
            .inspect_err(|err| warn!(%err, %class_quiz_id, "leaderboard fetch failed"))?;
        Ok(rank_leaderboard(entries))
    }
}
