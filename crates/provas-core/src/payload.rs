//! Wire shapes of the aggregate catalog endpoints.
//!
//! The backend already groups the records; these structs only describe the
//! nesting it sends. Every level is required: an absent key is a malformed
//! payload, an empty array is a valid empty group.

use serde::Deserialize;

/// `{name}` reference with an optional id.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NameRef {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
}

/// `{category: {...}}` wrapper used by both views.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CategoryEntry<T> {
    pub category: CategoryGroup<T>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CategoryGroup<T> {
    pub id: u32,
    pub name: String,
    pub tests: Vec<T>,
}

// ── By term ────────────────────────────────────────────────────────

/// One element of `testsByTerms`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TermGroup {
    pub id: u32,
    pub number: u32,
    pub disciplines: Vec<DisciplineGroup>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DisciplineGroup {
    pub id: u32,
    pub name: String,
    pub categories: Vec<CategoryEntry<TermTestRecord>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TermTestRecord {
    pub id: u32,
    pub name: String,
    pub pdf_url: String,
    pub teacher: NameRef,
}

// ── By teacher ─────────────────────────────────────────────────────

/// One element of `testsByTeachers`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TeacherGroup {
    pub id: u32,
    pub name: String,
    pub categories: Vec<CategoryEntry<TeacherTestRecord>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherTestRecord {
    pub id: u32,
    pub name: String,
    pub pdf_url: String,
    pub discipline: NameRef,
}
