//! Remote collections and the reconciler that turns mutations into list patches.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use classroom_core::model::{
    ClassQuiz, Classroom, ClassroomId, Question, QuestionId, Quiz, QuizId, Student, StudentId,
};
use classroom_core::reconcile::{DeletePolicy, Identified, Patch};

use crate::api::{ClassroomApi, QuestionApi, QuizApi, StudentApi};
use crate::error::ApiError;

pub type ItemId<C> = <<C as RemoteCollection>::Item as Identified>::Id;

/// A list endpoint whose response replaces the local copy wholesale.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    type Item: Identified + Clone + Send + Sync + 'static;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns `ApiError` if the list cannot be fetched.
    async fn fetch_all(&self) -> Result<Vec<Self::Item>, ApiError>;

    /// Fetch one entity. The default scans the full list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the entity is absent, or the fetch error.
    async fn fetch_one(&self, id: &ItemId<Self>) -> Result<Self::Item, ApiError> {
        self.fetch_all()
            .await?
            .into_iter()
            .find(|item| item.id() == id)
            .ok_or(ApiError::NotFound)
    }
}

/// A collection whose entities can be deleted one at a time.
#[async_trait]
pub trait DeletableCollection: RemoteCollection {
    /// # Errors
    ///
    /// Returns `ApiError` if the backend refuses the delete.
    async fn delete(&self, id: &ItemId<Self>) -> Result<(), ApiError>;

    fn delete_policy(&self) -> DeletePolicy {
        DeletePolicy::RemoveLocal
    }
}

/// Translates the outcome of remote calls into [`Patch`]es for a local collection.
///
/// Fetches replace the list, deletes remove by id (or also invalidate, per the collection's
/// policy), creates invalidate, and updates refetch the single entity for an in-place splice.
#[derive(Clone)]
pub struct ListReconciler<C> {
    source: C,
}

impl<C: RemoteCollection> ListReconciler<C> {
    #[must_use]
    pub fn new(source: C) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &C {
        &self.source
    }

    /// Fetch the full list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the list cannot be fetched. Read failures are meant to be shown.
    pub async fn fetch_items(&self) -> Result<Vec<C::Item>, ApiError> {
        match self.source.fetch_all().await {
            Ok(items) => {
                debug!(collection = self.source.name(), count = items.len(), "fetched");
                Ok(items)
            }
            Err(err) => {
                warn!(collection = self.source.name(), %err, "fetch failed");
                Err(err)
            }
        }
    }

    /// Fetch the full list as a patch that replaces the local copy.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the list cannot be fetched.
    pub async fn fetch(&self) -> Result<Patch<C::Item>, ApiError> {
        self.fetch_items().await.map(Patch::ReplaceAll)
    }

    /// Patch to apply after a successful create: the list is refetched, never merged.
    #[must_use]
    pub fn created(&self) -> Patch<C::Item> {
        Patch::Invalidate
    }

    /// Refetch an updated entity so it can replace the cached copy in place.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the entity cannot be fetched.
    pub async fn updated(&self, id: &ItemId<C>) -> Result<Patch<C::Item>, ApiError> {
        match self.source.fetch_one(id).await {
            Ok(item) => Ok(Patch::Replace(item)),
            Err(err) => {
                warn!(collection = self.source.name(), ?id, %err, "refetch after update failed");
                Err(err)
            }
        }
    }
}

impl<C: DeletableCollection> ListReconciler<C> {
    /// Delete remotely and return the local patch. Failures are logged and leave the list as is.
    pub async fn delete(&self, id: &ItemId<C>) -> Patch<C::Item> {
        match self.source.delete(id).await {
            Ok(()) => match self.source.delete_policy() {
                DeletePolicy::RemoveLocal => Patch::Remove(id.clone()),
                DeletePolicy::RemoveAndInvalidate => Patch::RemoveAndInvalidate(id.clone()),
            },
            Err(err) => {
                warn!(collection = self.source.name(), ?id, %err, "delete failed");
                Patch::Keep
            }
        }
    }
}

/// Questions of one quiz.
#[derive(Clone)]
pub struct QuizQuestions {
    api: Arc<dyn QuestionApi>,
    quiz_id: QuizId,
}

impl QuizQuestions {
    #[must_use]
    pub fn new(api: Arc<dyn QuestionApi>, quiz_id: QuizId) -> Self {
        Self { api, quiz_id }
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }
}

#[async_trait]
impl RemoteCollection for QuizQuestions {
    type Item = Question;

    fn name(&self) -> &'static str {
        "questions"
    }

    async fn fetch_all(&self) -> Result<Vec<Question>, ApiError> {
        self.api.list_questions(self.quiz_id).await
    }

    async fn fetch_one(&self, id: &QuestionId) -> Result<Question, ApiError> {
        self.api.get_question(*id).await
    }
}

#[async_trait]
impl DeletableCollection for QuizQuestions {
    async fn delete(&self, id: &QuestionId) -> Result<(), ApiError> {
        self.api.delete_question(*id).await
    }
}

/// All quizzes of the signed-in teacher.
#[derive(Clone)]
pub struct TeacherQuizzes {
    api: Arc<dyn QuizApi>,
}

impl TeacherQuizzes {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RemoteCollection for TeacherQuizzes {
    type Item = Quiz;

    fn name(&self) -> &'static str {
        "quizzes"
    }

    async fn fetch_all(&self) -> Result<Vec<Quiz>, ApiError> {
        self.api.list_quizzes().await
    }
}

#[async_trait]
impl DeletableCollection for TeacherQuizzes {
    async fn delete(&self, id: &QuizId) -> Result<(), ApiError> {
        self.api.delete_quiz(*id).await
    }

    /// Quiz deletion cascades into class assignments, so the list is refetched as well.
    fn delete_policy(&self) -> DeletePolicy {
        DeletePolicy::RemoveAndInvalidate
    }
}

/// Quizzes assigned to one classroom.
#[derive(Clone)]
pub struct ClassQuizzes {
    api: Arc<dyn QuizApi>,
    classroom_id: ClassroomId,
}

impl ClassQuizzes {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, classroom_id: ClassroomId) -> Self {
        Self { api, classroom_id }
    }
}

#[async_trait]
impl RemoteCollection for ClassQuizzes {
    type Item = ClassQuiz;

    fn name(&self) -> &'static str {
        "class quizzes"
    }

    async fn fetch_all(&self) -> Result<Vec<ClassQuiz>, ApiError> {
        self.api.list_class_quizzes(self.classroom_id).await
    }
}

/// Students enrolled in one classroom.
#[derive(Clone)]
pub struct ClassStudents {
    api: Arc<dyn StudentApi>,
    classroom_id: ClassroomId,
}

impl ClassStudents {
    #[must_use]
    pub fn new(api: Arc<dyn StudentApi>, classroom_id: ClassroomId) -> Self {
        Self { api, classroom_id }
    }
}

#[async_trait]
impl RemoteCollection for ClassStudents {
    type Item = Student;

    fn name(&self) -> &'static str {
        "students"
    }

    async fn fetch_all(&self) -> Result<Vec<Student>, ApiError> {
        self.api.list_students(self.classroom_id).await
    }
}

#[async_trait]
impl DeletableCollection for ClassStudents {
    async fn delete(&self, id: &StudentId) -> Result<(), ApiError> {
        self.api.delete_student(*id).await
    }
}

/// Classrooms of the signed-in teacher.
#[derive(Clone)]
pub struct TeacherClassrooms {
    api: Arc<dyn ClassroomApi>,
}

impl TeacherClassrooms {
    #[must_use]
    pub fn new(api: Arc<dyn ClassroomApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl RemoteCollection for TeacherClassrooms {
    type Item = Classroom;

    fn name(&self) -> &'static str {
        "classrooms"
    }

    async fn fetch_all(&self) -> Result<Vec<Classroom>, ApiError> {
        self.api.list_classrooms().await
    }
}
