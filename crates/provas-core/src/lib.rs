//! # provas-core
//!
//! Core types and pure logic for the Provas exam archive client.
//!
//! This crate has no I/O. It provides:
//! - Entity structs for terms, disciplines, teachers, categories and tests
//! - Wire shapes of the two aggregate catalog payloads
//! - The aggregation builder that validates those payloads and projects them
//!   into presentation trees with empty-state placeholders
//! - The dependent selection controller backing the new-test form
//! - A generation-tagged snapshot slot for asynchronous loads
//! - Cross-cutting error types

pub mod aggregation;
pub mod entities;
pub mod errors;
pub mod payload;
pub mod selection;
pub mod snapshot;
pub mod tree;

pub use errors::{AggregationError, DraftError};

/// Sentinel for an id that has not been chosen yet. Never a valid entity id.
pub const UNSET_ID: u32 = 0;
