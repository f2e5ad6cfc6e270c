/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// recordsctl — view recorded request/response traces.
#[derive(Debug, Parser)]
#[command(
    name = "recordsctl",
    about = "View recorded request/response traces from a serverless platform's records API",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Base URL of the records API server.
    #[arg(
        long,
        global = true,
        value_name = "URL",
        default_value = "http://localhost:8888"
    )]
    pub server: String,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// View recorded requests, optionally filtered by function, trigger,
    /// or time range.
    View(ViewArgs),
}

/// Arguments for `recordsctl view`.
#[derive(Debug, Parser)]
pub struct ViewArgs {
    /// Show a summary table per record (verbosity 1).
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Show the full structure of each record (verbosity 2).
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Only show records of invocations of this function.
    #[arg(long, value_name = "NAME")]
    pub function: Option<String>,

    /// Only show records produced by this trigger.
    #[arg(long, value_name = "NAME")]
    pub trigger: Option<String>,

    /// Start of the time range to show records from (requires --to).
    #[arg(long, value_name = "TIME")]
    pub from: Option<String>,

    /// End of the time range to show records from (requires --from).
    #[arg(long, value_name = "TIME")]
    pub to: Option<String>,
}
