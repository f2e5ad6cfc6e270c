/// Output formatting: columnar tables per verbosity level.
use comfy_table::{Table, presets::NOTHING};

use crate::records::Verbosity;
use crate::types::RecordedEntry;

/// Render records at the given verbosity.
///
/// Pure: the result depends only on the entries and the verbosity, and the
/// entries are left untouched. Rows appear in input order.
#[must_use]
pub fn render_records(entries: &[RecordedEntry], verbosity: Verbosity) -> String {
    match verbosity {
        Verbosity::Ids => render_ids(entries),
        Verbosity::Summary => render_summary(entries),
        Verbosity::Full => render_full(entries),
    }
}

/// Write rendered records to stdout.
pub fn write_records(entries: &[RecordedEntry], verbosity: Verbosity) {
    println!("{}", render_records(entries, verbosity));
}

fn render_ids(entries: &[RecordedEntry]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(["REQUID"]);
    for entry in entries {
        table.add_row([entry.req_uid.as_str()]);
    }
    table.to_string()
}

fn render_summary(entries: &[RecordedEntry]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header([
        "REQUID",
        "REQUEST METHOD",
        "FUNCTION",
        "RESPONSE STATUS",
        "TRIGGER",
    ]);
    for entry in entries {
        table.add_row([
            entry.req_uid.as_str(),
            entry.req.method.as_str(),
            entry.function_name(),
            entry.resp.status.as_str(),
            entry.trigger.as_str(),
        ]);
    }
    table.to_string()
}

/// One entry per line, full JSON structure, no table formatting.
fn render_full(entries: &[RecordedEntry]) -> String {
    entries
        .iter()
        .map(|entry| serde_json::to_string(entry).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write an error to stderr.
pub fn write_error(err: &crate::records::RecordsError) {
    eprintln!("Error: {err}");
}
