//! # provas-client
//!
//! Everything in the Provas client that talks to the backend.
//!
//! - [`ArchiveApi`]: the four-operation backend contract (plus categories)
//! - [`ArchiveClient`]: its `reqwest` implementation
//! - [`OptionLoader`]: reference lists for the new-test form
//! - [`SubmissionGateway`]: one-shot create with draft reset on success
//! - [`CatalogScreen`]: load-and-aggregate for the two listing views
//!
//! A missing credential suppresses every request; callers see a `NotReady`
//! outcome, never an error.

pub mod api;
pub mod credential;
pub mod error;
pub mod loader;
pub mod notice;
pub mod screens;
pub mod submission;

mod client;
mod http;

pub use api::ArchiveApi;
pub use client::ArchiveClient;
pub use credential::Credential;
pub use error::ClientError;
pub use loader::{LoadOutcome, OptionLoader};
pub use notice::{Notice, NoticeLevel};
pub use screens::{CatalogScreen, CatalogView};
pub use submission::{SubmissionError, SubmissionGateway, SubmitOutcome};
