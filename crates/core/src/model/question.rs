use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::{OptionId, QuestionId, QuizId};
use crate::reconcile::Identified;

/// Answer-shape discriminator for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Several options may be correct.
    #[default]
    Multiple,
    /// Exactly one option is correct.
    One,
    /// Free-text answer carried by a single synthetic option.
    Word,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Multiple, Category::One, Category::Word];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Multiple => "Multiple",
            Category::One => "One",
            Category::Word => "Word",
        }
    }

    /// Human-readable label used in question lists and the category picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Multiple => "Multiple correct",
            Category::One => "Single correct",
            Category::Word => "Open answer",
        }
    }

    #[must_use]
    pub fn is_word(self) -> bool {
        matches!(self, Category::Word)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An option as returned by the backend, with its assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: OptionId,
    pub option_text: String,
    pub is_correct: bool,
    pub question_id: QuestionId,
}

/// An option under authoring. Identity is assigned by the backend on commit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDraft {
    pub option_text: String,
    pub is_correct: bool,
}

impl OptionDraft {
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// The single always-correct option of a `Word` question.
    #[must_use]
    pub fn word_answer() -> Self {
        Self {
            option_text: String::new(),
            is_correct: true,
        }
    }
}

impl From<&AnswerOption> for OptionDraft {
    fn from(option: &AnswerOption) -> Self {
        Self {
            option_text: option.option_text.clone(),
            is_correct: option.is_correct,
        }
    }
}

/// Canonical question as cached from the backend.
///
/// `options` is `None` when the response omitted the option list; consumers treat that as an
/// anomaly and fall back to an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub quiz_id: QuizId,
    pub text: String,
    #[serde(default)]
    pub explanation: String,
    pub category: Category,
    #[serde(default)]
    pub points: u32,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "optionResponses", default)]
    pub options: Option<Vec<AnswerOption>>,
}

impl Question {
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.as_ref().map_or(0, Vec::len)
    }
}

impl Identified for Question {
    type Id = QuestionId;

    fn id(&self) -> &QuestionId {
        &self.id
    }
}
