use classroom_core::model::LeaderboardRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: usize,
    pub name: String,
    pub score_label: String,
    pub answered_label: String,
}

#[must_use]
pub fn map_leaderboard_rows(rows: &[LeaderboardRow]) -> Vec<LeaderboardRowVm> {
    rows.iter()
        .map(|row| LeaderboardRowVm {
            rank: row.rank,
            name: row.entry.name.clone(),
            score_label: format!("{:.1}", row.entry.score),
            answered_label: format!(
                "{}/{} correct",
                row.entry.correct_answers, row.entry.answered_questions
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use classroom_core::model::{LeaderboardEntry, rank_leaderboard};

    #[test]
    fn formats_score_and_answers() {
        let rows = rank_leaderboard(vec![LeaderboardEntry {
            name: "ona".to_string(),
            score: 8.5,
            correct_answers: 3,
            answered_questions: 4,
        }]);
        let vm = map_leaderboard_rows(&rows);
        assert_eq!(vm[0].rank, 1);
        assert_eq!(vm[0].score_label, "8.5");
        assert_eq!(vm[0].answered_label, "3/4 correct");
    }
}
