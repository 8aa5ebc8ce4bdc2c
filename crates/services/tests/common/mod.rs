#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

use classroom_core::editor::{NewQuestionRequest, UpdateQuestionRequest};
use classroom_core::model::{
    AnswerOption, Category, ClassQuiz, ClassQuizId, Classroom, ClassroomId, CredentialPair,
    LeaderboardEntry, NewClassroom, NewQuiz, NewStudent, OptionId, Question, QuestionId, Quiz,
    QuizAssignment, QuizId, Student, StudentId,
};
use services::{ApiError, AuthApi, ClassroomApi, QuestionApi, QuizApi, StudentApi};

/// In-process backend with scripted responses and call counters.
#[derive(Default)]
pub struct FakeApi {
    pub probe_ok: Mutex<bool>,
    pub refresh_response: Mutex<Option<CredentialPair>>,
    pub login_response: Mutex<Option<CredentialPair>>,
    pub writes_fail: Mutex<bool>,
    pub questions: Mutex<Vec<Question>>,
    pub quizzes: Mutex<Vec<Quiz>>,
    pub students: Mutex<Vec<Student>>,
    pub class_quizzes: Mutex<Vec<ClassQuiz>>,
    pub leaderboard: Mutex<Vec<LeaderboardEntry>>,
    pub added: Mutex<Vec<NewQuestionRequest>>,
    pub updated: Mutex<Vec<UpdateQuestionRequest>>,
    pub assignments: Mutex<Vec<QuizAssignment>>,
    pub refresh_seen: Mutex<Vec<CredentialPair>>,
    pub probe_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub write_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
}

impl FakeApi {
    pub fn set<T>(slot: &Mutex<T>, value: T) {
        *slot.lock().unwrap() = value;
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn write(&self) -> Result<(), ApiError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if *self.writes_fail.lock().unwrap() {
            Err(ApiError::from_status(StatusCode::BAD_REQUEST))
        } else {
            Ok(())
        }
    }

    fn remove<T>(&self, list: &Mutex<Vec<T>>, matches: impl Fn(&T) -> bool) -> Result<(), ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if *self.writes_fail.lock().unwrap() {
            return Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }
        let mut list = list.lock().unwrap();
        let before = list.len();
        list.retain(|item| !matches(item));
        if list.len() == before {
            Err(ApiError::from_status(StatusCode::NOT_FOUND))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn probe(&self) -> Result<(), ApiError> {
        self.probe_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        if *self.probe_ok.lock().unwrap() {
            Ok(())
        } else {
            Err(ApiError::Unauthorized(StatusCode::UNAUTHORIZED))
        }
    }

    async fn refresh(&self, pair: &CredentialPair) -> Result<CredentialPair, ApiError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        self.refresh_seen.lock().unwrap().push(pair.clone());
        self.refresh_response
            .lock()
            .unwrap()
            .clone()
            .ok_or(ApiError::from_status(StatusCode::BAD_REQUEST))
    }

    async fn login(&self, _username: &str, _password: &str) -> Result<CredentialPair, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_response
            .lock()
            .unwrap()
            .clone()
            .ok_or(ApiError::Unauthorized(StatusCode::UNAUTHORIZED))
    }
}

#[async_trait]
impl QuestionApi for FakeApi {
    async fn add_question(&self, body: &NewQuestionRequest) -> Result<(), ApiError> {
        self.write()?;
        self.added.lock().unwrap().push(body.clone());
        Ok(())
    }

    /// Applies the update to the stored question so a refetch sees it.
    async fn update_question(&self, body: &UpdateQuestionRequest) -> Result<(), ApiError> {
        self.write()?;
        self.updated.lock().unwrap().push(body.clone());
        let mut questions = self.questions.lock().unwrap();
        let question = questions
            .iter_mut()
            .find(|q| q.id == body.id)
            .ok_or(ApiError::from_status(StatusCode::NOT_FOUND))?;
        question.text = body.text.clone();
        question.explanation = body.explanation.clone();
        question.points = body.points;
        question.category = body.category;
        question.image_url = body.image_url.clone();
        question.options = Some(
            body.option_requests
                .iter()
                .map(|option| AnswerOption {
                    id: OptionId::new(Uuid::new_v4()),
                    option_text: option.option_text.clone(),
                    is_correct: option.is_correct,
                    question_id: body.id,
                })
                .collect(),
        );
        Ok(())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), ApiError> {
        self.remove(&self.questions, |q| q.id == id)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, ApiError> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(ApiError::from_status(StatusCode::NOT_FOUND))
    }

    async fn list_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, ApiError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuizApi for FakeApi {
    async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        Ok(self.quizzes.lock().unwrap().clone())
    }

    async fn create_quiz(&self, quiz: &NewQuiz) -> Result<(), ApiError> {
        self.write()?;
        self.quizzes.lock().unwrap().push(Quiz {
            id: QuizId::new(Uuid::new_v4()),
            name: quiz.name.clone(),
            teacher_id: None,
        });
        Ok(())
    }

    async fn delete_quiz(&self, id: QuizId) -> Result<(), ApiError> {
        self.remove(&self.quizzes, |q| q.id == id)
    }

    async fn list_class_quizzes(
        &self,
        _classroom_id: ClassroomId,
    ) -> Result<Vec<ClassQuiz>, ApiError> {
        Ok(self.class_quizzes.lock().unwrap().clone())
    }

    async fn assign_quiz(&self, assignment: &QuizAssignment) -> Result<(), ApiError> {
        self.write()?;
        self.assignments.lock().unwrap().push(assignment.clone());
        Ok(())
    }
}

#[async_trait]
impl ClassroomApi for FakeApi {
    async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_classroom(&self, _classroom: &NewClassroom) -> Result<(), ApiError> {
        self.write()
    }
}

#[async_trait]
impl StudentApi for FakeApi {
    async fn list_students(&self, _classroom_id: ClassroomId) -> Result<Vec<Student>, ApiError> {
        Ok(self.students.lock().unwrap().clone())
    }

    async fn register_student(&self, _student: &NewStudent) -> Result<(), ApiError> {
        self.write()
    }

    async fn delete_student(&self, id: StudentId) -> Result<(), ApiError> {
        self.remove(&self.students, |s| s.id == id)
    }

    async fn leaderboard(
        &self,
        _class_quiz_id: ClassQuizId,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        Ok(self.leaderboard.lock().unwrap().clone())
    }
}

pub fn quiz_id() -> QuizId {
    QuizId::new(Uuid::from_u128(0xA))
}

pub fn question(seed: u128, category: Category, options: &[(&str, bool)]) -> Question {
    let id = QuestionId::new(Uuid::from_u128(seed));
    Question {
        id,
        quiz_id: quiz_id(),
        text: format!("Question {seed}"),
        explanation: String::new(),
        category,
        points: 1,
        image_url: None,
        options: Some(
            options
                .iter()
                .map(|(text, is_correct)| AnswerOption {
                    id: OptionId::new(Uuid::new_v4()),
                    option_text: (*text).to_string(),
                    is_correct: *is_correct,
                    question_id: id,
                })
                .collect(),
        ),
    }
}

pub fn quiz(seed: u128, name: &str) -> Quiz {
    Quiz {
        id: QuizId::new(Uuid::from_u128(seed)),
        name: name.to_string(),
        teacher_id: None,
    }
}

pub fn student(seed: u128, username: &str) -> Student {
    Student {
        id: StudentId::new(Uuid::from_u128(seed)),
        username: username.to_string(),
    }
}

pub fn class_quiz(seed: u128, name: &str) -> ClassQuiz {
    ClassQuiz {
        id: ClassQuizId::new(Uuid::from_u128(seed)),
        quiz_id: QuizId::new(Uuid::from_u128(seed + 1000)),
        name: name.to_string(),
        teacher_id: None,
        expiration_date: None,
    }
}
