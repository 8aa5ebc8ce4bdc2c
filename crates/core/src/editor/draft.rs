use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::model::{Category, OptionDraft, Question, QuestionId, QuizId};

use super::points::parse_points;
use super::policy::{EditorPolicy, LeaveWordPolicy};
use super::request::{
    NewQuestionRequest, PreparedSubmission, QuestionSubmission, UpdateQuestionRequest,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditorError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("a question needs at least one option")]
    NoOptions,
    #[error("an open answer question needs exactly one correct answer")]
    WordShape,
    #[error("a single correct question needs exactly one correct option, found {found}")]
    SingleCorrect { found: usize },
    #[error("a multiple correct question needs at least one correct option")]
    NoCorrectOption,
    #[error("option {index} does not exist (draft has {len})")]
    OptionOutOfRange { index: usize, len: usize },
}

/// Whether the draft becomes a new question or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create {
        quiz_id: QuizId,
    },
    Edit {
        question_id: QuestionId,
        quiz_id: QuizId,
    },
}

impl EditorMode {
    #[must_use]
    pub fn quiz_id(self) -> QuizId {
        match self {
            EditorMode::Create { quiz_id } | EditorMode::Edit { quiz_id, .. } => quiz_id,
        }
    }

    #[must_use]
    pub fn question_id(self) -> Option<QuestionId> {
        match self {
            EditorMode::Create { .. } => None,
            EditorMode::Edit { question_id, .. } => Some(question_id),
        }
    }
}

/// Raw image bytes picked by the user, not yet encoded for transport.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Working copy of a question and its options.
///
/// The option list always matches the category: a `Word` draft holds exactly one option and
/// that option is correct. Other categories hold at least one option once the user has touched
/// the list; an edit target that arrived without options starts empty and fails validation
/// until an option is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    mode: EditorMode,
    text: String,
    explanation: String,
    points: String,
    category: Category,
    options: Vec<OptionDraft>,
    stashed_options: Option<Vec<OptionDraft>>,
    pending_attachment: Option<Attachment>,
    existing_image: Option<String>,
    policy: EditorPolicy,
    submitting: bool,
}

impl QuestionDraft {
    /// Fresh draft for a new question in `quiz_id`: category `Multiple`, one blank option.
    #[must_use]
    pub fn create(quiz_id: QuizId, policy: EditorPolicy) -> Self {
        Self {
            mode: EditorMode::Create { quiz_id },
            text: String::new(),
            explanation: String::new(),
            points: String::new(),
            category: Category::default(),
            options: vec![OptionDraft::blank()],
            stashed_options: None,
            pending_attachment: None,
            existing_image: None,
            policy,
            submitting: false,
        }
    }

    /// Draft seeded from an existing question.
    #[must_use]
    pub fn from_question(question: &Question, policy: EditorPolicy) -> Self {
        let mut options: Vec<OptionDraft> = match &question.options {
            Some(options) => options.iter().map(OptionDraft::from).collect(),
            None => {
                warn!(
                    question_id = %question.id,
                    "question arrived without an option list, editing with none"
                );
                Vec::new()
            }
        };

        if question.category.is_word() {
            options = vec![collapse_to_word_answer(options)];
        }

        Self {
            mode: EditorMode::Edit {
                question_id: question.id,
                quiz_id: question.quiz_id,
            },
            text: question.text.clone(),
            explanation: question.explanation.clone(),
            points: question.points.to_string(),
            category: question.category,
            options,
            stashed_options: None,
            pending_attachment: None,
            existing_image: question.image_url.clone().filter(|url| !url.is_empty()),
            policy,
            submitting: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// The points field as typed.
    #[must_use]
    pub fn points_input(&self) -> &str {
        &self.points
    }

    /// The points value that will be submitted.
    #[must_use]
    pub fn points(&self) -> u32 {
        parse_points(&self.points)
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn options(&self) -> &[OptionDraft] {
        &self.options
    }

    #[must_use]
    pub fn pending_attachment(&self) -> Option<&Attachment> {
        self.pending_attachment.as_ref()
    }

    #[must_use]
    pub fn existing_image(&self) -> Option<&str> {
        self.existing_image.as_deref()
    }

    #[must_use]
    pub fn policy(&self) -> EditorPolicy {
        self.policy
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_explanation(&mut self, explanation: impl Into<String>) {
        self.explanation = explanation.into();
    }

    pub fn set_points(&mut self, points: impl Into<String>) {
        self.points = points.into();
    }

    /// Switch category, reshaping the options to match.
    pub fn set_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        let previous = self.category;
        self.category = category;

        if category.is_word() {
            let discarded = std::mem::take(&mut self.options);
            if self.policy.leave_word == LeaveWordPolicy::RestorePrevious {
                self.stashed_options = Some(discarded);
            }
            self.options = vec![OptionDraft::word_answer()];
            return;
        }

        if previous.is_word() {
            match self.policy.leave_word {
                LeaveWordPolicy::KeepAnswer => {}
                LeaveWordPolicy::ResetBlank => self.options = vec![OptionDraft::blank()],
                LeaveWordPolicy::RestorePrevious => {
                    if let Some(stashed) = self.stashed_options.take().filter(|s| !s.is_empty()) {
                        self.options = stashed;
                    }
                }
            }
        }
    }

    /// Append a blank, incorrect option.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::WordShape`] for `Word` drafts, which carry exactly one answer.
    pub fn add_option(&mut self) -> Result<(), EditorError> {
        if self.category.is_word() {
            return Err(EditorError::WordShape);
        }
        self.options.push(OptionDraft::blank());
        Ok(())
    }

    /// Remove the last option. Returns `false` (and changes nothing) when at most one remains.
    pub fn remove_option(&mut self) -> bool {
        if self.options.len() <= 1 {
            return false;
        }
        self.options.pop();
        true
    }

    /// # Errors
    ///
    /// Returns [`EditorError::OptionOutOfRange`] when `index` is not in the list.
    pub fn set_option_text(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), EditorError> {
        let option = self.option_mut(index)?;
        option.option_text = text.into();
        Ok(())
    }

    /// Mark an option correct or incorrect. The `Word` answer stays correct.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OptionOutOfRange`] when `index` is not in the list.
    pub fn set_option_correct(&mut self, index: usize, is_correct: bool) -> Result<(), EditorError> {
        let is_word = self.category.is_word();
        let option = self.option_mut(index)?;
        option.is_correct = is_correct || is_word;
        Ok(())
    }

    /// Replace the pending attachment. The existing image reference is kept until submit.
    pub fn attach_image(&mut self, attachment: Attachment) {
        self.pending_attachment = Some(attachment);
    }

    pub fn discard_attachment(&mut self) {
        self.pending_attachment = None;
    }

    /// Drop the existing image reference. A pending attachment is unaffected.
    pub fn clear_image(&mut self) {
        self.existing_image = None;
    }

    /// Check the option shape against the category and the configured policy.
    ///
    /// # Errors
    ///
    /// Returns the first rule the draft violates.
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.options.is_empty() {
            return Err(EditorError::NoOptions);
        }
        let correct = self.options.iter().filter(|o| o.is_correct).count();

        match self.category {
            Category::Word => {
                if self.options.len() != 1 || correct != 1 {
                    return Err(EditorError::WordShape);
                }
            }
            Category::One if self.policy.enforce_correct_options => {
                if correct != 1 {
                    return Err(EditorError::SingleCorrect { found: correct });
                }
            }
            Category::Multiple if self.policy.enforce_correct_options => {
                if correct == 0 {
                    return Err(EditorError::NoCorrectOption);
                }
            }
            Category::One | Category::Multiple => {}
        }
        Ok(())
    }

    /// Validate and build the request body, marking the draft as submitting.
    ///
    /// The attachment is returned unencoded so the caller can encode it off the UI path before
    /// issuing the single network call. Call [`QuestionDraft::finish_submit`] once the call
    /// settles.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::AlreadySubmitting`] while a previous submission is in flight, or
    /// the validation error.
    pub fn begin_submit(&mut self) -> Result<PreparedSubmission, EditorError> {
        if self.submitting {
            return Err(EditorError::AlreadySubmitting);
        }
        self.validate()?;

        let submission = match self.mode {
            EditorMode::Create { quiz_id } => QuestionSubmission::Create(NewQuestionRequest {
                text: self.text.clone(),
                explanation: self.explanation.clone(),
                points: self.points(),
                category: self.category,
                quiz_id,
                option_requests: self.options.clone(),
                photo_base64: None,
            }),
            EditorMode::Edit {
                question_id,
                quiz_id,
            } => QuestionSubmission::Update(UpdateQuestionRequest {
                id: question_id,
                text: self.text.clone(),
                explanation: self.explanation.clone(),
                points: self.points(),
                category: self.category,
                image_url: self.existing_image.clone(),
                quiz_id,
                option_requests: self.options.clone(),
            }),
        };

        self.submitting = true;
        Ok(PreparedSubmission {
            submission,
            attachment: self.pending_attachment.clone(),
        })
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    fn option_mut(&mut self, index: usize) -> Result<&mut OptionDraft, EditorError> {
        let len = self.options.len();
        self.options
            .get_mut(index)
            .ok_or(EditorError::OptionOutOfRange { index, len })
    }
}

fn collapse_to_word_answer(options: Vec<OptionDraft>) -> OptionDraft {
    let mut answer = options
        .into_iter()
        .next()
        .unwrap_or_else(OptionDraft::word_answer);
    answer.is_correct = true;
    answer
}
