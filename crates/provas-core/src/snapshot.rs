//! Generation-tagged holder for asynchronously loaded snapshots.
//!
//! Each load takes a [`LoadTicket`] carrying the generation at the time it
//! started. A completion is applied only when its ticket is still the latest
//! one and the owner is still mounted; anything else is discarded. The slot
//! never merges: an applied value replaces the previous snapshot wholesale.

/// Token returned by [`SnapshotSlot::begin`] and handed back on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a load ticket must be passed back to complete or fail"]
pub struct LoadTicket {
    generation: u64,
}

/// What happened to a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The value replaced the current snapshot.
    Applied,
    /// A newer load was started after this one; the value was dropped.
    Stale,
    /// The owner was unmounted; the value was dropped.
    Unmounted,
}

/// Owned snapshot plus the bookkeeping that protects it from late completions.
#[derive(Debug)]
pub struct SnapshotSlot<T> {
    value: Option<T>,
    generation: u64,
    mounted: bool,
}

impl<T> Default for SnapshotSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SnapshotSlot<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            generation: 0,
            mounted: true,
        }
    }

    /// Current snapshot, if one has been applied.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start a load. Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Deliver a successful load.
    pub fn complete(&mut self, ticket: LoadTicket, value: T) -> Completion {
        let completion = self.accepts(ticket);
        if completion == Completion::Applied {
            self.value = Some(value);
        } else {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                ?completion,
                "discarding load completion"
            );
        }
        completion
    }

    /// Deliver a failed load. The previous snapshot is kept either way;
    /// `Applied` here means the failure belongs to the latest load and is
    /// worth reporting.
    pub fn fail(&mut self, ticket: LoadTicket) -> Completion {
        self.accepts(ticket)
    }

    /// Drop the snapshot and ignore every completion from now on.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.value = None;
    }

    fn accepts(&self, ticket: LoadTicket) -> Completion {
        if !self.mounted {
            Completion::Unmounted
        } else if ticket.generation != self.generation {
            Completion::Stale
        } else {
            Completion::Applied
        }
    }
}
