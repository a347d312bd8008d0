pub mod add;
pub mod catalog;
pub mod categories;
pub mod dispatch;
pub mod options;

use std::fmt;

use anyhow::bail;
use provas_client::{ClientError, LoadOutcome, Notice};

use crate::cli::GlobalFlags;
use crate::context::NOT_SIGNED_IN;
use crate::output::notify;

/// Marker error for a failure whose notice is already on stderr. `main`
/// exits non-zero without printing it again.
#[derive(Debug)]
pub struct Reported;

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failure already reported")
    }
}

impl std::error::Error for Reported {}

/// A one-shot CLI load either applies or explains why not.
fn require_applied(outcome: LoadOutcome) -> anyhow::Result<()> {
    match outcome {
        LoadOutcome::Applied => Ok(()),
        LoadOutcome::NotReady => bail!(NOT_SIGNED_IN),
        LoadOutcome::Stale | LoadOutcome::Unmounted => bail!("load was superseded"),
    }
}

/// What the user sees for a failed backend call: the backend's own message
/// when it sent one, the generic retry text otherwise.
fn failure_notice(error: &ClientError) -> Notice {
    Notice::error(error.user_message())
}

/// Print `notice` and keep the full error chain for `--verbose`.
fn reported(notice: &Notice, error: impl Into<anyhow::Error>, flags: &GlobalFlags) -> anyhow::Error {
    let error = error.into();
    tracing::debug!(error = format!("{error:#}"), "failure details");
    notify(notice, flags);
    anyhow::Error::new(Reported)
}

fn load_failed(error: ClientError, flags: &GlobalFlags) -> anyhow::Error {
    let notice = failure_notice(&error);
    reported(&notice, error, flags)
}
