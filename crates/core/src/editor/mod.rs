//! Question/option authoring.
//!
//! [`QuestionDraft`] owns the working copy of a question while it is created or edited. Every
//! transition keeps the category-dependent option shape valid; [`QuestionDraft::begin_submit`]
//! turns the draft into a request body plus an optional attachment that still has to be encoded.

mod draft;
mod points;
mod policy;
mod request;

pub use draft::{Attachment, EditorError, EditorMode, QuestionDraft};
pub use points::parse_points;
pub use policy::{EditorPolicy, LeaveWordPolicy, ParsePolicyError};
pub use request::{NewQuestionRequest, PreparedSubmission, QuestionSubmission, UpdateQuestionRequest};
