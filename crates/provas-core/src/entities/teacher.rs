use serde::{Deserialize, Serialize};

/// An instructor associated with disciplines and archived tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Teacher {
    pub id: u32,
    pub name: String,
}
