// Entrypoint for the `transfersh` binary.
// - Keeps `main` small: parse arguments, build the API client and hand
//   both to the upload flow in `ui`.
// - Every upload failure ends up as the same message and exit code 1; the
//   cause is only visible in the log (`RUST_LOG=debug`).

use clap::Parser;
use env_logger::{Builder, Env};
use std::io;
use std::process;

use transfersh_cli::api::TransferClient;
use transfersh_cli::cli::Args;
use transfersh_cli::clipboard::SystemClipboard;
use transfersh_cli::{ui, Error, FAILURE_MESSAGE};

fn main() {
    // Logs go to stderr so stdout only carries the user-facing lines.
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let (request, url) = Args::parse().into_request();
    let mut clipboard = SystemClipboard::new();

    let result = TransferClient::new(url)
        .map_err(Error::from)
        .and_then(|api| ui::run(&request, &api, &mut clipboard, &mut io::stdout()));

    match result {
        Ok(_) => {}
        Err(err) if err.is_fatal() => {
            log::debug!("{}", err);
            println!("{}", FAILURE_MESSAGE);
            process::exit(1);
        }
        Err(err) => log::debug!("{}", err),
    }
}
