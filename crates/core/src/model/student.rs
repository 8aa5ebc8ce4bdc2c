use serde::{Deserialize, Serialize};

use crate::model::ids::{ClassroomId, StudentId};
use crate::reconcile::Identified;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub username: String,
}

impl Identified for Student {
    type Id = StudentId;

    fn id(&self) -> &StudentId {
        &self.id
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub username: String,
    pub password: String,
    pub classroom_id: ClassroomId,
}

impl std::fmt::Debug for NewStudent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewStudent")
            .field("username", &self.username)
            .field("classroom_id", &self.classroom_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: f64,
    pub correct_answers: u32,
    pub answered_questions: u32,
}

/// A leaderboard entry with its display rank.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

/// Assign 1-based ranks in server order; consecutive equal scores share a rank.
#[must_use]
pub fn rank_leaderboard(entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let rank = match rows.last() {
            Some(prev) if (prev.entry.score - entry.score).abs() < f64::EPSILON => prev.rank,
            _ => index + 1,
        };
        rows.push(LeaderboardRow { rank, entry });
    }
    rows
}
