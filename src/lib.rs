// Library root
// -----------
// This crate exposes a small library surface for the `transfersh` binary.
// The binary (`main.rs`) parses the command line and hands the resulting
// request to `ui::run`.
//
// Module responsibilities:
// - `cli`: Command-line definition and the immutable upload request.
// - `api`: HTTP interaction with the transfer.sh endpoint (one multipart
//   POST carrying the file and the retention headers).
// - `progress`: Byte counting reader and the terminal progress bar.
// - `clipboard`: Best-effort copy of the download URL.
// - `ui`: The upload flow and everything it prints.
// - `error`: Fatal vs non-fatal error classes.
pub mod api;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod progress;
pub mod ui;

pub use error::{Error, FAILURE_MESSAGE};
