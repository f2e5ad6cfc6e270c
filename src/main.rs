#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! recordsctl — view recorded request/response traces.

mod api;
mod cli;
mod commands;
mod records;
mod types;

use clap::Parser;

use api::ApiClient;
use cli::{Cli, write_error};
use records::RecordsError;

fn main() {
    let cli = Cli::parse();

    let client = match ApiClient::new(&cli.server) {
        Ok(client) => client,
        Err(err) => {
            let err = RecordsError::from(err);
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    };

    match commands::dispatch(&cli.command, &client) {
        Ok(()) => {}
        Err(err) => {
            write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
