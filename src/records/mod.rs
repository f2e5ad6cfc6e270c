/// Records domain layer: flag validation and filter selection.
pub mod errors;
pub mod filter;

pub use errors::RecordsError;
pub use filter::{RecordFilter, Verbosity};
