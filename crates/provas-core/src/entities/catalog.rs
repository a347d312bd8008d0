//! Derived catalog views built by [`crate::aggregation`].

use serde::{Deserialize, Serialize};

use super::{Category, Discipline, Teacher, Term};

/// A reference to a related entity as the aggregate payloads carry it: always a
/// name, sometimes an id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
}

/// Tests of one category inside a discipline or teacher group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTests<T> {
    pub category: Category,
    pub tests: Vec<T>,
}

/// Term -> disciplines -> categories -> tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogByTerm {
    pub terms: Vec<TermCatalog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TermCatalog {
    pub term: Term,
    pub disciplines: Vec<DisciplineCatalog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisciplineCatalog {
    pub discipline: Discipline,
    pub categories: Vec<CategoryTests<TermListedTest>>,
}

/// A test as listed under a discipline, annotated with its teacher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TermListedTest {
    pub id: u32,
    pub name: String,
    pub pdf_url: String,
    pub category_id: u32,
    pub discipline_id: u32,
    pub teacher: EntityRef,
}

/// Teacher -> categories -> tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogByTeacher {
    pub teachers: Vec<TeacherCatalog>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeacherCatalog {
    pub teacher: Teacher,
    pub categories: Vec<CategoryTests<TeacherListedTest>>,
}

/// A test as listed under a teacher, annotated with its discipline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherListedTest {
    pub id: u32,
    pub name: String,
    pub pdf_url: String,
    pub category_id: u32,
    pub teacher_id: u32,
    pub discipline: EntityRef,
}

impl CatalogByTerm {
    /// Total number of tests across every term.
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.terms
            .iter()
            .flat_map(|term| &term.disciplines)
            .flat_map(|discipline| &discipline.categories)
            .map(|category| category.tests.len())
            .sum()
    }
}

impl CatalogByTeacher {
    /// Total number of tests across every teacher.
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.teachers
            .iter()
            .flat_map(|teacher| &teacher.categories)
            .map(|category| category.tests.len())
            .sum()
    }
}
