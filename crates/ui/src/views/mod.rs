mod class;
mod classes;
mod create_class;
mod create_quiz;
mod home;
mod leaderboard;
mod login;
mod question_editor;
mod quiz;
mod quizzes;
mod remote_list;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use class::ClassView;
pub use classes::ClassesView;
pub use create_class::CreateClassView;
pub use create_quiz::CreateQuizView;
pub use home::HomeView;
pub use leaderboard::{LeaderboardDialog, LeaderboardTable};
pub use login::LoginView;
pub use question_editor::{OptionRowEditor, QuestionEditor};
pub use quiz::{QuestionCard, QuizView};
pub use quizzes::QuizzesView;
pub use remote_list::{
    RemoteList, SharedQuizzes, use_remote_list, use_shared_quizzes, use_shared_quizzes_provider,
};
pub use state::{ViewError, ViewState, view_state_from_resource};
