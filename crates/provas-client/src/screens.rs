//! Catalog listing screens.
//!
//! A screen performs one read of its aggregate endpoint, runs the matching
//! aggregation builder and keeps the resulting tree until the next refresh or
//! until it is unmounted. Expand/collapse state is the renderer's business.

use provas_core::aggregation::{build_by_teacher, build_by_term, teacher_tree, term_tree};
use provas_core::snapshot::{LoadTicket, SnapshotSlot};
use provas_core::tree::CatalogTree;
use serde_json::Value;

use crate::api::ArchiveApi;
use crate::credential::Credential;
use crate::error::ClientError;
use crate::loader::{LoadOutcome, settle};

/// Which listing a screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogView {
    /// Term -> discipline -> category -> test.
    ByTerm,
    /// Teacher -> category -> test.
    ByTeacher,
}

impl CatalogView {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ByTerm => "Disciplines",
            Self::ByTeacher => "Instructors",
        }
    }

    /// Run this view's builder over a raw aggregate payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Aggregation`] if the payload is malformed.
    pub fn build(self, payload: &Value) -> Result<CatalogTree, ClientError> {
        let tree = match self {
            Self::ByTerm => term_tree(&build_by_term(payload)?),
            Self::ByTeacher => teacher_tree(&build_by_teacher(payload)?),
        };
        Ok(tree)
    }

    async fn fetch<A: ArchiveApi>(
        self,
        api: &A,
        credential: &Credential,
    ) -> Result<Value, ClientError> {
        match self {
            Self::ByTerm => api.tests_by_terms(credential).await,
            Self::ByTeacher => api.tests_by_teachers(credential).await,
        }
    }
}

/// State of one listing screen.
#[derive(Debug)]
pub struct CatalogScreen {
    view: CatalogView,
    slot: SnapshotSlot<CatalogTree>,
}

impl CatalogScreen {
    #[must_use]
    pub const fn new(view: CatalogView) -> Self {
        Self {
            view,
            slot: SnapshotSlot::new(),
        }
    }

    #[must_use]
    pub const fn view(&self) -> CatalogView {
        self.view
    }

    /// The tree of the last applied load.
    #[must_use]
    pub const fn tree(&self) -> Option<&CatalogTree> {
        self.slot.get()
    }

    /// Start a refresh. `None` when there is no credential.
    pub fn begin(&mut self, credential: Option<&Credential>) -> Option<LoadTicket> {
        credential.map(|_| self.slot.begin())
    }

    /// Deliver the raw payload of the refresh started with `ticket`.
    ///
    /// # Errors
    ///
    /// Returns the fetch or aggregation error when it belongs to the current
    /// refresh; the previous tree stays in place.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        payload: Result<Value, ClientError>,
    ) -> Result<LoadOutcome, ClientError> {
        let view = self.view;
        let tree = payload.and_then(|payload| view.build(&payload));
        settle(&mut self.slot, ticket, tree, view.title())
    }

    /// Fetch, aggregate and apply.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request fails or the payload is
    /// malformed.
    pub async fn refresh<A: ArchiveApi>(
        &mut self,
        api: &A,
        credential: Option<&Credential>,
    ) -> Result<LoadOutcome, ClientError> {
        let Some(credential) = credential else {
            tracing::debug!(view = self.view.title(), "no credential; refresh suppressed");
            return Ok(LoadOutcome::NotReady);
        };

        let ticket = self.slot.begin();
        let payload = self.view.fetch(api, credential).await;
        self.finish(ticket, payload)
    }

    /// Drop the tree; later completions become no-ops.
    pub fn unmount(&mut self) {
        self.slot.unmount();
    }
}
