use serde::Serialize;

use crate::model::{Category, OptionDraft, QuestionId, QuizId};

use super::draft::Attachment;

/// Body of `POST /Question/AddNewQuestion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestionRequest {
    pub text: String,
    pub explanation: String,
    pub points: u32,
    pub category: Category,
    pub quiz_id: QuizId,
    pub option_requests: Vec<OptionDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_base64: Option<String>,
}

/// Body of `PUT /Question/UpdateQuestion`.
///
/// `image_url` carries either the existing image reference, a freshly encoded attachment, or
/// `null` when the image was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    pub id: QuestionId,
    pub text: String,
    pub explanation: String,
    pub points: u32,
    pub category: Category,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
    pub quiz_id: QuizId,
    pub option_requests: Vec<OptionDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSubmission {
    Create(NewQuestionRequest),
    Update(UpdateQuestionRequest),
}

impl QuestionSubmission {
    /// Put an encoded attachment where the target endpoint expects it.
    pub fn set_encoded_image(&mut self, encoded: String) {
        match self {
            QuestionSubmission::Create(body) => body.photo_base64 = Some(encoded),
            QuestionSubmission::Update(body) => body.image_url = Some(encoded),
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        match self {
            QuestionSubmission::Create(body) => body.quiz_id,
            QuestionSubmission::Update(body) => body.quiz_id,
        }
    }
}

/// A request body whose attachment (if any) has not been encoded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSubmission {
    pub submission: QuestionSubmission,
    pub attachment: Option<Attachment>,
}
