/// `view` command: query recorded traces and print them.
use crate::api::RecordStore;
use crate::cli::args::ViewArgs;
use crate::cli::output::write_records;
use crate::records::{RecordFilter, RecordsError, Verbosity};
use crate::types::RecordedEntry;

/// Run `recordsctl view`.
///
/// Validates verbosity and filter flags, performs exactly one query against
/// the store, and renders the result. Validation failures never reach the
/// store; query failures never reach the renderer.
///
/// # Errors
///
/// Returns `RecordsError` on conflicting flags or a failed query.
pub fn run(args: &ViewArgs, store: &dyn RecordStore) -> Result<(), RecordsError> {
    let verbosity = Verbosity::resolve(args.verbose, args.very_verbose)?;
    let filter = RecordFilter::select(
        args.function.as_deref().unwrap_or(""),
        args.trigger.as_deref().unwrap_or(""),
        args.from.as_deref().unwrap_or(""),
        args.to.as_deref().unwrap_or(""),
    )?;

    let entries = query(store, &filter)?;
    write_records(&entries, verbosity);
    Ok(())
}

/// Dispatch the selected filter to its store operation.
fn query(
    store: &dyn RecordStore,
    filter: &RecordFilter,
) -> Result<Vec<RecordedEntry>, RecordsError> {
    let entries = match filter {
        RecordFilter::All => store.records_all(),
        RecordFilter::ByFunction(function) => store.records_by_function(function),
        RecordFilter::ByTrigger(trigger) => store.records_by_trigger(trigger),
        RecordFilter::ByTime { from, to } => store.records_by_time(from, to),
    }?;
    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::api::ApiError;

    /// In-memory store that counts calls and records arguments.
    #[derive(Default)]
    struct MockStore {
        all_calls: RefCell<usize>,
        function_calls: RefCell<Vec<String>>,
        trigger_calls: RefCell<Vec<String>>,
        time_calls: RefCell<Vec<(String, String)>>,
    }

    impl MockStore {
        fn total_calls(&self) -> usize {
            *self.all_calls.borrow()
                + self.function_calls.borrow().len()
                + self.trigger_calls.borrow().len()
                + self.time_calls.borrow().len()
        }
    }

    impl RecordStore for MockStore {
        fn records_all(&self) -> Result<Vec<RecordedEntry>, ApiError> {
            *self.all_calls.borrow_mut() += 1;
            Ok(vec![])
        }

        fn records_by_function(&self, function: &str) -> Result<Vec<RecordedEntry>, ApiError> {
            self.function_calls.borrow_mut().push(function.to_owned());
            Ok(vec![])
        }

        fn records_by_trigger(&self, trigger: &str) -> Result<Vec<RecordedEntry>, ApiError> {
            self.trigger_calls.borrow_mut().push(trigger.to_owned());
            Ok(vec![])
        }

        fn records_by_time(&self, from: &str, to: &str) -> Result<Vec<RecordedEntry>, ApiError> {
            self.time_calls
                .borrow_mut()
                .push((from.to_owned(), to.to_owned()));
            Ok(vec![])
        }
    }

    fn args() -> ViewArgs {
        ViewArgs {
            verbose: false,
            very_verbose: false,
            function: None,
            trigger: None,
            from: None,
            to: None,
        }
    }

    #[test]
    fn test_no_filters_queries_all_once() {
        let store = MockStore::default();
        run(&args(), &store).unwrap();
        assert_eq!(*store.all_calls.borrow(), 1);
        assert_eq!(store.total_calls(), 1);
    }

    #[test]
    fn test_function_filter_queries_function_once() {
        let store = MockStore::default();
        let mut args = args();
        args.function = Some("hello".to_owned());
        run(&args, &store).unwrap();
        assert_eq!(*store.function_calls.borrow(), ["hello"]);
        assert_eq!(store.total_calls(), 1);
    }

    #[test]
    fn test_trigger_filter_queries_trigger_once() {
        let store = MockStore::default();
        let mut args = args();
        args.trigger = Some("t1".to_owned());
        run(&args, &store).unwrap();
        assert_eq!(*store.trigger_calls.borrow(), ["t1"]);
        assert_eq!(store.total_calls(), 1);
    }

    #[test]
    fn test_time_range_queries_time_once() {
        let store = MockStore::default();
        let mut args = args();
        args.from = Some("2019-01-01".to_owned());
        args.to = Some("2019-01-02".to_owned());
        run(&args, &store).unwrap();
        assert_eq!(
            *store.time_calls.borrow(),
            [("2019-01-01".to_owned(), "2019-01-02".to_owned())]
        );
        assert_eq!(store.total_calls(), 1);
    }

    /// A lone --from falls through to the all-records query.
    #[test]
    fn test_from_only_queries_all() {
        let store = MockStore::default();
        let mut args = args();
        args.from = Some("2019-01-01".to_owned());
        run(&args, &store).unwrap();
        assert_eq!(*store.all_calls.borrow(), 1);
        assert_eq!(store.total_calls(), 1);
    }

    #[test]
    fn test_conflicting_verbosity_performs_no_query() {
        let store = MockStore::default();
        let mut args = args();
        args.verbose = true;
        args.very_verbose = true;
        let err = run(&args, &store).unwrap_err();
        assert!(matches!(err, RecordsError::ConflictingVerbosity));
        assert_eq!(store.total_calls(), 0);
    }

    #[test]
    fn test_multiple_filters_perform_no_query() {
        let store = MockStore::default();
        let mut args = args();
        args.function = Some("f".to_owned());
        args.trigger = Some("t".to_owned());
        let err = run(&args, &store).unwrap_err();
        assert!(matches!(err, RecordsError::MultipleFilters));
        assert_eq!(store.total_calls(), 0);
    }

    #[test]
    fn test_function_plus_lone_from_performs_no_query() {
        let store = MockStore::default();
        let mut args = args();
        args.function = Some("f".to_owned());
        args.from = Some("2019-01-01".to_owned());
        let err = run(&args, &store).unwrap_err();
        assert!(matches!(err, RecordsError::MultipleFilters));
        assert_eq!(store.total_calls(), 0);
    }

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn records_all(&self) -> Result<Vec<RecordedEntry>, ApiError> {
            Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_owned(),
            })
        }

        fn records_by_function(&self, _: &str) -> Result<Vec<RecordedEntry>, ApiError> {
            unreachable!()
        }

        fn records_by_trigger(&self, _: &str) -> Result<Vec<RecordedEntry>, ApiError> {
            unreachable!()
        }

        fn records_by_time(&self, _: &str, _: &str) -> Result<Vec<RecordedEntry>, ApiError> {
            unreachable!()
        }
    }

    #[test]
    fn test_query_failure_is_wrapped_with_context() {
        let err = run(&args(), &FailingStore).unwrap_err();
        assert!(matches!(err, RecordsError::Query(_)));
        let msg = err.to_string();
        assert!(msg.starts_with("error viewing records"), "got: {msg}");
        assert_eq!(err.exit_code(), 1);
    }
}
