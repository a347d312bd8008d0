//! Option catalog loader.
//!
//! Holds the reference lists of the new-test form as one immutable snapshot.
//! A successful load replaces it wholesale; a failed load leaves it alone.
//! Nothing is retried.

use provas_core::entities::OptionsToCreate;
use provas_core::snapshot::{Completion, LoadTicket, SnapshotSlot};

use crate::api::ArchiveApi;
use crate::credential::Credential;
use crate::error::ClientError;

static EMPTY_OPTIONS: OptionsToCreate = OptionsToCreate {
    disciplines: Vec::new(),
    categories: Vec::new(),
};

/// What a load attempt did to the owner's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No credential yet; nothing was requested.
    NotReady,
    /// The result replaced the snapshot.
    Applied,
    /// A newer load superseded this one; its result was dropped.
    Stale,
    /// The owner went away before completion; its result was dropped.
    Unmounted,
}

impl From<Completion> for LoadOutcome {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Applied => Self::Applied,
            Completion::Stale => Self::Stale,
            Completion::Unmounted => Self::Unmounted,
        }
    }
}

/// Deliver a load result to `slot`.
///
/// A failure is returned only when it belongs to the latest load of a
/// mounted owner; late failures are logged and swallowed like late successes.
pub(crate) fn settle<T>(
    slot: &mut SnapshotSlot<T>,
    ticket: LoadTicket,
    result: Result<T, ClientError>,
    what: &'static str,
) -> Result<LoadOutcome, ClientError> {
    match result {
        Ok(value) => Ok(slot.complete(ticket, value).into()),
        Err(error) => match slot.fail(ticket) {
            Completion::Applied => {
                tracing::warn!(%error, what, "load failed; keeping previous snapshot");
                Err(error)
            }
            late => {
                tracing::debug!(%error, what, ?late, "ignoring failure of superseded load");
                Ok(late.into())
            }
        },
    }
}

/// Owner of the [`OptionsToCreate`] snapshot.
#[derive(Debug, Default)]
pub struct OptionLoader {
    slot: SnapshotSlot<OptionsToCreate>,
}

impl OptionLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied snapshot, if any.
    #[must_use]
    pub const fn options(&self) -> Option<&OptionsToCreate> {
        self.slot.get()
    }

    /// The last applied snapshot, or empty lists before the first load.
    #[must_use]
    pub fn options_or_empty(&self) -> &OptionsToCreate {
        self.slot.get().unwrap_or(&EMPTY_OPTIONS)
    }

    /// Start a load. `None` when there is no credential.
    pub fn begin(&mut self, credential: Option<&Credential>) -> Option<LoadTicket> {
        credential.map(|_| self.slot.begin())
    }

    /// Deliver the result of the load started with `ticket`.
    ///
    /// # Errors
    ///
    /// Returns the load error when it belongs to the current load.
    pub fn finish(
        &mut self,
        ticket: LoadTicket,
        result: Result<OptionsToCreate, ClientError>,
    ) -> Result<LoadOutcome, ClientError> {
        settle(&mut self.slot, ticket, result, "options")
    }

    /// Fetch the options and apply them.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request fails; the previous snapshot
    /// stays in place.
    pub async fn load<A: ArchiveApi>(
        &mut self,
        api: &A,
        credential: Option<&Credential>,
    ) -> Result<LoadOutcome, ClientError> {
        let Some(credential) = credential else {
            tracing::debug!("no credential; options load suppressed");
            return Ok(LoadOutcome::NotReady);
        };

        let ticket = self.slot.begin();
        let result = api.options_to_create(credential).await;
        self.finish(ticket, result)
    }

    /// Drop the snapshot; later completions become no-ops.
    pub fn unmount(&mut self) {
        self.slot.unmount();
    }
}
