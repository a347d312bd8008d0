//! Entity structs for the exam archive domain.
//!
//! Every struct serializes with camelCase keys to match the backend wire format.
//! Ids are positive integers; `0` is reserved for "not chosen yet" in drafts.

mod catalog;
mod category;
mod discipline;
mod options;
mod teacher;
mod term;

pub use catalog::{
    CatalogByTeacher, CatalogByTerm, CategoryTests, DisciplineCatalog, EntityRef, TeacherCatalog,
    TeacherListedTest, TermCatalog, TermListedTest,
};
pub use category::Category;
pub use discipline::Discipline;
pub use options::{DisciplineOption, OptionsToCreate};
pub use teacher::Teacher;
pub use term::Term;
pub use test::{NewTest, Test};
