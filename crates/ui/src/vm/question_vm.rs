use classroom_core::model::{Question, QuestionId};

/// One option line of a question card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionLineVm {
    pub text: String,
    pub is_correct: bool,
}

/// UI-ready representation of a question in a quiz's question list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: QuestionId,
    pub text: String,
    pub explanation: Option<String>,
    pub category_label: &'static str,
    pub points_label: String,
    pub image_url: Option<String>,
    pub options: Vec<OptionLineVm>,
}

impl QuestionCardVm {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        let explanation = Some(question.explanation.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        let options = question
            .options
            .iter()
            .flatten()
            .map(|option| OptionLineVm {
                text: option.option_text.clone(),
                is_correct: option.is_correct,
            })
            .collect();
        Self {
            id: question.id,
            text: question.text.clone(),
            explanation,
            category_label: question.category.label(),
            points_label: format!("Points: {}", question.points),
            image_url: question.image_url.clone(),
            options,
        }
    }
}

#[must_use]
pub fn map_question_cards(questions: &[Question]) -> Vec<QuestionCardVm> {
    questions.iter().map(QuestionCardVm::from_question).collect()
}
