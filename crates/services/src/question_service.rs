use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, warn};

use classroom_core::editor::{Attachment, PreparedSubmission, QuestionDraft, QuestionSubmission};
use classroom_core::model::{QuestionId, QuizId};

use crate::api::QuestionApi;
use crate::error::QuestionServiceError;

/// Result of a committed draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new question exists; the question list should be refetched.
    Created { quiz_id: QuizId },
    /// The question was replaced; refetch it by id and splice it into the list.
    Updated { question_id: QuestionId },
}

/// Commits question drafts to the backend.
#[derive(Clone)]
pub struct QuestionService {
    api: Arc<dyn QuestionApi>,
}

impl QuestionService {
    #[must_use]
    pub fn new(api: Arc<dyn QuestionApi>) -> Self {
        Self { api }
    }

    /// Encode the attachment (if any) and issue exactly one create or update call.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Encode` if encoding fails, in which case no request is
    /// sent, or `QuestionServiceError::Api` if the request fails. Failures are logged; there
    /// is no retry.
    pub async fn submit(
        &self,
        prepared: PreparedSubmission,
    ) -> Result<SubmitOutcome, QuestionServiceError> {
        let PreparedSubmission {
            mut submission,
            attachment,
        } = prepared;

        if let Some(attachment) = attachment {
            let encoded = encode_attachment(attachment).await.inspect_err(|err| {
                warn!(%err, "question image could not be encoded");
            })?;
            submission.set_encoded_image(encoded);
        }

        let outcome = match &submission {
            QuestionSubmission::Create(body) => self
                .api
                .add_question(body)
                .await
                .map(|()| SubmitOutcome::Created {
                    quiz_id: body.quiz_id,
                }),
            QuestionSubmission::Update(body) => self
                .api
                .update_question(body)
                .await
                .map(|()| SubmitOutcome::Updated {
                    question_id: body.id,
                }),
        };

        match outcome {
            Ok(outcome) => {
                debug!(?outcome, "question submitted");
                Ok(outcome)
            }
            Err(err) => {
                warn!(%err, quiz_id = %submission.quiz_id(), "question submission failed");
                Err(err.into())
            }
        }
    }

    /// Run a full submit cycle on `draft`: prepare, send, and release the submitting flag.
    ///
    /// # Errors
    ///
    /// Returns the draft's validation error or the submission error.
    pub async fn submit_draft(
        &self,
        draft: &mut QuestionDraft,
    ) -> Result<SubmitOutcome, QuestionServiceError> {
        let prepared = draft.begin_submit()?;
        let result = self.submit(prepared).await;
        draft.finish_submit();
        result
    }
}

/// Base64-encode attachment bytes on the blocking pool.
async fn encode_attachment(attachment: Attachment) -> Result<String, QuestionServiceError> {
    let file_name = attachment.file_name.clone();
    let encoded = tokio::task::spawn_blocking(move || STANDARD.encode(&attachment.bytes))
        .await
        .map_err(|err| QuestionServiceError::Encode(err.to_string()))?;
    debug!(%file_name, encoded_len = encoded.len(), "attachment encoded");
    Ok(encoded)
}
