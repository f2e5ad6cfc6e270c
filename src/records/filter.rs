/// Verbosity and filter selection: turn raw flag values into validated,
/// tagged state before anything touches the network.
use super::errors::RecordsError;

/// How much detail per record is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Request IDs only (default).
    #[default]
    Ids,
    /// Five-column summary table.
    Summary,
    /// Full structural dump, one entry per line.
    Full,
}

impl Verbosity {
    /// Resolve the verbosity from the two boolean switches.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError::ConflictingVerbosity` when both switches are set.
    pub fn resolve(low: bool, high: bool) -> Result<Self, RecordsError> {
        if low && high {
            return Err(RecordsError::ConflictingVerbosity);
        }
        if high {
            Ok(Self::Full)
        } else if low {
            Ok(Self::Summary)
        } else {
            Ok(Self::Ids)
        }
    }
}

/// Which query variant to run, constructed once during validation and
/// matched once during dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    /// No filter; fetch all records.
    All,
    /// Filter by function name.
    ByFunction(String),
    /// Filter by trigger name.
    ByTrigger(String),
    /// Filter by time range (both ends required).
    ByTime {
        /// Range start.
        from: String,
        /// Range end.
        to: String,
    },
}

impl RecordFilter {
    /// Select the filter from the raw flag values.
    ///
    /// At most one filter category may be specified. The time-range category
    /// counts as specified if either end is non-empty, but the time-range
    /// query itself only fires when both ends are non-empty; a lone `from`
    /// or `to` falls through to [`RecordFilter::All`].
    ///
    /// Precedence when selecting: function, then trigger, then time range.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError::MultipleFilters` when more than one category
    /// is specified.
    pub fn select(
        function: &str,
        trigger: &str,
        from: &str,
        to: &str,
    ) -> Result<Self, RecordsError> {
        let time_range = format!("{from}{to}");
        if multiple_filters_specified(&[function, trigger, time_range.as_str()]) {
            return Err(RecordsError::MultipleFilters);
        }

        if !function.is_empty() {
            return Ok(Self::ByFunction(function.to_owned()));
        }
        if !trigger.is_empty() {
            return Ok(Self::ByTrigger(trigger.to_owned()));
        }
        if !from.is_empty() && !to.is_empty() {
            return Ok(Self::ByTime {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }
        Ok(Self::All)
    }
}

/// Whether more than one of the given filter values is non-empty.
fn multiple_filters_specified(entries: &[&str]) -> bool {
    entries.iter().filter(|e| !e.is_empty()).count() > 1
}
