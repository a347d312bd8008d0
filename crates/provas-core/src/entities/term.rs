use serde::{Deserialize, Serialize};

/// An academic period. `number` orders terms chronologically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Term {
    pub id: u32,
    pub number: u32,
}
