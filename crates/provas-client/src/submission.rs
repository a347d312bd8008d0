//! Submission gateway: validate the draft, create the test, reset on success.

use provas_core::DraftError;
use provas_core::selection::DraftController;
use thiserror::Error;

use crate::api::ArchiveApi;
use crate::credential::Credential;
use crate::error::{ClientError, GENERIC_FAILURE};
use crate::notice::Notice;

/// Text shown after a successful create.
pub const SUCCESS_MESSAGE: &str = "Test saved ;)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No credential yet; nothing was sent and the draft is untouched.
    NotReady,
    /// The backend accepted the test; the draft was reset.
    Created,
}

/// Why a submission did not go through. The draft is untouched in every case.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The draft still has unset fields; nothing was sent.
    #[error(transparent)]
    Validation(#[from] DraftError),

    /// The backend refused the test with its own message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request failed without an explanation from the backend.
    #[error("{}", GENERIC_FAILURE)]
    Transient {
        #[source]
        source: ClientError,
    },
}

impl From<ClientError> for SubmissionError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Rejected { status, message } => Self::Rejected { status, message },
            source => Self::Transient { source },
        }
    }
}

impl SubmissionError {
    /// The notification to show for this failure.
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

/// One-shot create against a backend with the process credential.
#[derive(Debug)]
pub struct SubmissionGateway<'a, A> {
    api: &'a A,
    credential: Option<&'a Credential>,
}

impl<'a, A: ArchiveApi> SubmissionGateway<'a, A> {
    #[must_use]
    pub const fn new(api: &'a A, credential: Option<&'a Credential>) -> Self {
        Self { api, credential }
    }

    /// Submit the controller's draft.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Validation`] for an incomplete draft,
    /// [`SubmissionError::Rejected`] when the backend explains its refusal,
    /// and [`SubmissionError::Transient`] for everything else.
    pub async fn submit(
        &self,
        controller: &mut DraftController,
    ) -> Result<SubmitOutcome, SubmissionError> {
        let Some(credential) = self.credential else {
            tracing::debug!("no credential; submission suppressed");
            return Ok(SubmitOutcome::NotReady);
        };

        let record = controller.validate()?;
        match self.api.create_test(credential, &record).await {
            Ok(()) => {
                tracing::info!(name = %record.name, "test created");
                controller.reset();
                Ok(SubmitOutcome::Created)
            }
            Err(error) => {
                tracing::warn!(%error, "test creation failed; draft kept");
                Err(error.into())
            }
        }
    }
}

/// Notification for a finished submission attempt. `None` when nothing was
/// attempted.
#[must_use]
pub fn notice_for(result: &Result<SubmitOutcome, SubmissionError>) -> Option<Notice> {
    match result {
        Ok(SubmitOutcome::Created) => Some(Notice::success(SUCCESS_MESSAGE)),
        Ok(SubmitOutcome::NotReady) => None,
        Err(error) => Some(error.notice()),
    }
}
