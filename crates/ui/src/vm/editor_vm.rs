use classroom_core::editor::{EditorMode, QuestionDraft};
use classroom_core::model::Category;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryChoiceVm {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[must_use]
pub fn category_choices(current: Category) -> Vec<CategoryChoiceVm> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryChoiceVm {
            value: category.as_str(),
            label: category.label(),
            selected: category == current,
        })
        .collect()
}

#[must_use]
pub fn parse_category(value: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|category| category.as_str() == value)
}

/// Select values for an option's correctness are the literal strings `"true"` and `"false"`.
#[must_use]
pub fn parse_correct(value: &str) -> bool {
    value == "true"
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub index: usize,
    pub text: String,
    pub is_correct: bool,
    /// The single answer of an open question cannot be marked incorrect.
    pub correct_locked: bool,
}

#[must_use]
pub fn map_option_rows(draft: &QuestionDraft) -> Vec<OptionRowVm> {
    let locked = draft.category().is_word();
    draft
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| OptionRowVm {
            index,
            text: option.option_text.clone(),
            is_correct: option.is_correct,
            correct_locked: locked,
        })
        .collect()
}

/// Controls and labels derived from the current draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorVm {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub can_add_option: bool,
    pub can_remove_option: bool,
    pub image_label: Option<String>,
    pub attachment_label: Option<String>,
}

impl EditorVm {
    #[must_use]
    pub fn from_draft(draft: &QuestionDraft) -> Self {
        let (title, idle_label) = match draft.mode() {
            EditorMode::Create { .. } => ("New question", "Add question"),
            EditorMode::Edit { .. } => ("Edit question", "Save question"),
        };
        let submit_label = if draft.is_submitting() {
            "Saving..."
        } else {
            idle_label
        };
        Self {
            title,
            submit_label,
            can_add_option: !draft.category().is_word() && !draft.is_submitting(),
            can_remove_option: draft.options().len() > 1 && !draft.is_submitting(),
            image_label: draft.existing_image().map(str::to_owned),
            attachment_label: draft
                .pending_attachment()
                .map(|attachment| format!("{} ({} bytes)", attachment.file_name, attachment.bytes.len())),
        }
    }
}
