/// Errors from the records domain layer.
use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur while viewing records.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// Both verbosity switches were set at once.
    #[error("conflicting verbosity levels, use either -v or --vv")]
    ConflictingVerbosity,

    /// More than one filter category was specified.
    #[error(
        "maximum of one filter is currently supported, either --function, --trigger, or --from,--to"
    )]
    MultipleFilters,

    /// The remote query failed; wraps the client error verbatim.
    #[error("error viewing records: {0}")]
    Query(#[from] ApiError),
}

/// Exit code mapping for `RecordsError` variants.
impl RecordsError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConflictingVerbosity | Self::MultipleFilters => 2,
            Self::Query(_) => 1,
        }
    }
}
