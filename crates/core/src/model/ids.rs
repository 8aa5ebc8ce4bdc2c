use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Backend identifiers are GUIDs; each entity gets its own newtype so they cannot be mixed up.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing UUID.
            #[must_use]
            pub fn new(id: Uuid) -> Self {
                Self(id)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub fn value(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map($name)
                    .map_err(|_| ParseIdError {
                        kind: stringify!($name),
                    })
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a Question
    QuestionId
);
entity_id!(
    /// Unique identifier for a persisted answer option
    OptionId
);
entity_id!(
    /// Unique identifier for a Quiz owned by a teacher
    QuizId
);
entity_id!(
    /// Unique identifier for a quiz assigned to a classroom
    ClassQuizId
);
entity_id!(
    /// Unique identifier for a Classroom
    ClassroomId
);
entity_id!(
    /// Unique identifier for a Student
    StudentId
);
entity_id!(
    /// Unique identifier for a Teacher
    TeacherId
);

// ─── Parse Errors ──────────────────────────────────────────────────────────────

/// Error type for parsing an ID from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = "3f2504e0-4f89-11d3-9a0c-0305e82c3301";

    #[test]
    fn question_id_display_and_parse() {
        let id: QuestionId = RAW.parse().unwrap();
        assert_eq!(id.to_string(), RAW);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-a-guid".parse::<QuizId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse QuizId from string");
    }

    #[test]
    fn debug_names_the_entity() {
        let id = StudentId::new(Uuid::nil());
        assert_eq!(
            format!("{id:?}"),
            "StudentId(00000000-0000-0000-0000-000000000000)"
        );
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id: ClassroomId = RAW.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{RAW}\""));
    }
}
