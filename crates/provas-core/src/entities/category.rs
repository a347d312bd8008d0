use serde::{Deserialize, Serialize};

/// Exam classification (midterm, final, ...), independent of term and discipline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Category {
    pub id: u32,
    pub name: String,
}
