use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::store::entities::Stored;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineFields {
    pub course_code: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type Discipline = Stored<DisciplineFields>;
