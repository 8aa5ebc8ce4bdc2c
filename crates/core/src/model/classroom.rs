use serde::{Deserialize, Serialize};

use crate::model::ids::ClassroomId;
use crate::reconcile::Identified;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: ClassroomId,
    /// Join code students use to enter the classroom.
    pub code: i64,
    #[serde(default, alias = "classname", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Identified for Classroom {
    type Id = ClassroomId;

    fn id(&self) -> &ClassroomId {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClassroom {
    pub classname: String,
}
