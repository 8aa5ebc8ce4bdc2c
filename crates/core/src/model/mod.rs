mod classroom;
mod credentials;
mod ids;
mod question;
mod quiz;
mod session;
mod student;

pub use classroom::{Classroom, NewClassroom};
pub use credentials::CredentialPair;
pub use ids::{
    ClassQuizId, ClassroomId, OptionId, ParseIdError, QuestionId, QuizId, StudentId, TeacherId,
};
pub use question::{AnswerOption, Category, OptionDraft, Question};
pub use quiz::{ClassQuiz, NewQuiz, Quiz, QuizAssignment};
pub use session::{GuardPhase, SessionState};
pub use student::{LeaderboardEntry, LeaderboardRow, NewStudent, Student, rank_leaderboard};
