use serde::{Deserialize, Serialize};

use super::{Category, Teacher};

/// A discipline offered by the creation form, with the teachers eligible for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisciplineOption {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
}

/// Reference lists used to populate the new-test form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionsToCreate {
    #[serde(default)]
    pub disciplines: Vec<DisciplineOption>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl OptionsToCreate {
    /// Look up a discipline option by id.
    #[must_use]
    pub fn discipline(&self, id: u32) -> Option<&DisciplineOption> {
        self.disciplines.iter().find(|discipline| discipline.id == id)
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}
