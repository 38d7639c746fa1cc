// UI layer: the single upload flow. Drives the progress bar, talks to the
// API client and writes the user-facing lines.

use std::io::Write;

use crate::api::TransferClient;
use crate::cli::UploadRequest;
use crate::clipboard::Clipboard;
use crate::error::Error;
use crate::progress::upload_bar;

pub const DOWNLOAD_PREFIX: &str = "Download from here: ";
pub const COPIED_MESSAGE: &str = "It has also been copied to the clipboard!";

/// Upload the file, report the download URL on `out` and try to put it on
/// the clipboard.
///
/// Returns the URL on success. Every upload failure comes back as
/// [`Error::Transfer`] with nothing written to `out`. Once the upload has
/// succeeded nothing is fatal: clipboard and output failures are logged
/// and otherwise ignored.
pub fn run<W: Write>(
    request: &UploadRequest,
    api: &TransferClient,
    clipboard: &mut dyn Clipboard,
    out: &mut W,
) -> Result<String, Error> {
    log::info!("Uploading {} to {}", request.filename, api.base_url());

    let mut bar = None;
    let url = api.upload(request, |total| {
        let pb = upload_bar(&request.filename, total)?;
        bar = Some(pb.clone());
        Ok(pb)
    });
    if let Some(pb) = bar {
        pb.finish();
    }
    let url = url?;

    if let Err(err) = writeln!(out, "{}{}", DOWNLOAD_PREFIX, url) {
        log::warn!("Failed to write download URL: {}", err);
    }

    match clipboard.copy(&url) {
        Ok(()) => {
            if let Err(err) = writeln!(out, "{}", COPIED_MESSAGE) {
                log::warn!("Failed to write output: {}", err);
            }
        }
        Err(err) => log::debug!("{}", err),
    }

    Ok(url)
}
