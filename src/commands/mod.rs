/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod view;

use crate::api::RecordStore;
use crate::cli::args::Command;
use crate::records::RecordsError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `RecordsError` on any command failure.
pub fn dispatch(command: &Command, store: &dyn RecordStore) -> Result<(), RecordsError> {
    match command {
        Command::View(args) => view::run(args, store),
    }
}
