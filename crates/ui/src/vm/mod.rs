mod class_vm;
mod editor_vm;
mod leaderboard_vm;
mod question_vm;
mod time_fmt;

pub use class_vm::{
    ClassQuizRowVm, ClassroomCardVm, QuizChoiceVm, map_class_quiz_rows, map_classroom_cards,
    map_quiz_choices,
};
pub use editor_vm::{
    CategoryChoiceVm, EditorVm, OptionRowVm, category_choices, map_option_rows, parse_category,
    parse_correct,
};
pub use leaderboard_vm::{LeaderboardRowVm, map_leaderboard_rows};
pub use question_vm::{OptionLineVm, QuestionCardVm, map_question_cards};
pub use time_fmt::format_expiry;
