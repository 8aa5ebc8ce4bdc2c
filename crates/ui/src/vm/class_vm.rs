use classroom_core::model::{ClassQuiz, ClassQuizId, Classroom, ClassroomId, Quiz, QuizId};

use super::time_fmt::format_expiry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassroomCardVm {
    pub id: ClassroomId,
    pub title: String,
    pub code_label: String,
}

#[must_use]
pub fn map_classroom_cards(classrooms: &[Classroom]) -> Vec<ClassroomCardVm> {
    classrooms
        .iter()
        .map(|classroom| ClassroomCardVm {
            id: classroom.id,
            title: classroom
                .name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| format!("Class {}", classroom.code)),
            code_label: format!("Join code: {}", classroom.code),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassQuizRowVm {
    pub id: ClassQuizId,
    pub name: String,
    pub expires_label: String,
}

#[must_use]
pub fn map_class_quiz_rows(quizzes: &[ClassQuiz]) -> Vec<ClassQuizRowVm> {
    quizzes
        .iter()
        .map(|quiz| ClassQuizRowVm {
            id: quiz.id,
            name: quiz.name.clone(),
            expires_label: format_expiry(quiz.expiration_date),
        })
        .collect()
}

/// Choice in the quiz assignment picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizChoiceVm {
    pub id: QuizId,
    pub label: String,
}

#[must_use]
pub fn map_quiz_choices(quizzes: &[Quiz]) -> Vec<QuizChoiceVm> {
    quizzes
        .iter()
        .map(|quiz| QuizChoiceVm {
            id: quiz.id,
            label: quiz.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn unnamed_classroom_falls_back_to_code() {
        let classrooms = vec![
            Classroom {
                id: ClassroomId::new(Uuid::from_u128(1)),
                code: 4821,
                name: None,
            },
            Classroom {
                id: ClassroomId::new(Uuid::from_u128(2)),
                code: 77,
                name: Some("7B".to_string()),
            },
        ];
        let cards = map_classroom_cards(&classrooms);
        assert_eq!(cards[0].title, "Class 4821");
        assert_eq!(cards[0].code_label, "Join code: 4821");
        assert_eq!(cards[1].title, "7B");
    }

    #[test]
    fn class_quiz_without_expiry() {
        let rows = map_class_quiz_rows(&[ClassQuiz {
            id: ClassQuizId::new(Uuid::from_u128(1)),
            quiz_id: QuizId::new(Uuid::from_u128(2)),
            name: "Fractions".to_string(),
            teacher_id: None,
            expiration_date: None,
        }]);
        assert_eq!(rows[0].expires_label, "No expiry");
    }
}
