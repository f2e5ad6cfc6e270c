/// Public API for the remote record store.
pub mod client;
pub mod errors;

pub use client::ApiClient;
pub use errors::ApiError;

use crate::types::RecordedEntry;

/// Read-only query operations against the record store.
///
/// Implemented by [`ApiClient`] for the real server and by in-memory mocks
/// in tests. Each operation returns entries in the order the store yields
/// them; callers impose no reordering.
pub trait RecordStore {
    /// Fetch all records.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport, status, or decode failure.
    fn records_all(&self) -> Result<Vec<RecordedEntry>, ApiError>;

    /// Fetch records produced by invocations of the named function.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport, status, or decode failure.
    fn records_by_function(&self, function: &str) -> Result<Vec<RecordedEntry>, ApiError>;

    /// Fetch records produced by the named trigger.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport, status, or decode failure.
    fn records_by_trigger(&self, trigger: &str) -> Result<Vec<RecordedEntry>, ApiError>;

    /// Fetch records within the given time range.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport, status, or decode failure.
    fn records_by_time(&self, from: &str, to: &str) -> Result<Vec<RecordedEntry>, ApiError>;
}
