//! Dependent selection controller for the new-test form.
//!
//! The controller owns the draft only. The option snapshot it filters against
//! is borrowed on every call, so the eligible teacher list is always computed
//! from the current snapshot and the current discipline and never stored.

use serde::Serialize;

use crate::UNSET_ID;
use crate::entities::{Category, DisciplineOption, NewTest, OptionsToCreate, Teacher};
use crate::errors::DraftError;

/// In-progress new-test record. Unset fields hold `""` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestDraft {
    pub name: String,
    pub pdf_url: String,
    pub category_id: u32,
    pub discipline_id: u32,
    pub teacher_id: u32,
}

/// Draft field names, used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    PdfUrl,
    Category,
    Discipline,
    Teacher,
}

impl NewTestDraft {
    /// Fields that are still unset, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(DraftField::Name);
        }
        if self.pdf_url.is_empty() {
            missing.push(DraftField::PdfUrl);
        }
        if self.discipline_id == UNSET_ID {
            missing.push(DraftField::Discipline);
        }
        if self.teacher_id == UNSET_ID {
            missing.push(DraftField::Teacher);
        }
        if self.category_id == UNSET_ID {
            missing.push(DraftField::Category);
        }
        missing
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Teachers attached to `discipline_id` in `options`. Empty when the
/// discipline is unset or unknown.
#[must_use]
pub fn eligible_teachers(options: &OptionsToCreate, discipline_id: u32) -> &[Teacher] {
    options
        .discipline(discipline_id)
        .map(|discipline| discipline.teachers.as_slice())
        .unwrap_or_default()
}

/// Owner of the draft for the lifetime of the form.
#[derive(Debug, Default)]
pub struct DraftController {
    draft: NewTestDraft,
}

impl DraftController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &NewTestDraft {
        &self.draft
    }

    /// Select a discipline. The stored teacher id is left alone; the eligible
    /// list and [`selected_teacher`](Self::selected_teacher) follow the new
    /// discipline.
    pub fn set_discipline(&mut self, discipline_id: u32) {
        tracing::debug!(
            from = self.draft.discipline_id,
            to = discipline_id,
            "discipline selected"
        );
        self.draft.discipline_id = discipline_id;
    }

    pub fn set_teacher(&mut self, teacher_id: u32) {
        self.draft.teacher_id = teacher_id;
    }

    pub fn set_category(&mut self, category_id: u32) {
        self.draft.category_id = category_id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_pdf_url(&mut self, pdf_url: impl Into<String>) {
        self.draft.pdf_url = pdf_url.into();
    }

    /// Teachers the teacher selector may offer right now.
    #[must_use]
    pub fn eligible_teachers<'a>(&self, options: &'a OptionsToCreate) -> &'a [Teacher] {
        eligible_teachers(options, self.draft.discipline_id)
    }

    /// The selected discipline, if it exists in the snapshot.
    #[must_use]
    pub fn selected_discipline<'a>(
        &self,
        options: &'a OptionsToCreate,
    ) -> Option<&'a DisciplineOption> {
        options.discipline(self.draft.discipline_id)
    }

    /// The selected teacher as a selector would render it: `None` when the
    /// stored id is unset or no longer eligible under the current discipline.
    #[must_use]
    pub fn selected_teacher<'a>(&self, options: &'a OptionsToCreate) -> Option<&'a Teacher> {
        self.eligible_teachers(options)
            .iter()
            .find(|teacher| teacher.id == self.draft.teacher_id)
    }

    /// The selected category, if it exists in the snapshot.
    #[must_use]
    pub fn selected_category<'a>(&self, options: &'a OptionsToCreate) -> Option<&'a Category> {
        options.category(self.draft.category_id)
    }

    /// Submit-time check: every field must be set.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::Incomplete`] when any field is empty or zero.
    pub fn validate(&self) -> Result<NewTest, DraftError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "draft incomplete");
            return Err(DraftError::Incomplete);
        }

        Ok(NewTest {
            name: self.draft.name.clone(),
            pdf_url: self.draft.pdf_url.clone(),
            category_id: self.draft.category_id,
            discipline_id: self.draft.discipline_id,
            teacher_id: self.draft.teacher_id,
        })
    }

    /// Back to the all-unset draft.
    pub fn reset(&mut self) {
        self.draft = NewTestDraft::default();
    }
}
