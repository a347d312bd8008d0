use serde::{Deserialize, Serialize};

/// A course, scoped to exactly one term.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    pub id: u32,
    pub name: String,
    pub term_id: u32,
}
