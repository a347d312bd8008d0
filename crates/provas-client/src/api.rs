//! The backend contract.

use std::future::Future;

use provas_core::entities::{Category, NewTest, OptionsToCreate};
use serde_json::Value;

use crate::credential::Credential;
use crate::error::ClientError;

/// Operations the client needs from the archive backend.
///
/// The two catalog reads return the aggregate payload untouched; shaping it
/// is the aggregation builder's job.
pub trait ArchiveApi {
    /// `testsByTerms`: terms with nested disciplines, categories and tests.
    fn tests_by_terms(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;

    /// `testsByTeachers`: teachers with nested categories and tests.
    fn tests_by_teachers(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;

    /// `dataToCreate`: reference lists for the new-test form.
    fn options_to_create(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<OptionsToCreate, ClientError>> + Send;

    /// Every category.
    fn categories(
        &self,
        credential: &Credential,
    ) -> impl Future<Output = Result<Vec<Category>, ClientError>> + Send;

    /// Create a test. The acknowledgement carries no body.
    fn create_test(
        &self,
        credential: &Credential,
        test: &NewTest,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}
