// API client module: a small blocking HTTP client for a transfer.sh
// instance. One operation: POST a single multipart part named `file` and
// read back the download URL as plain text.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fs::{self, File};
use std::io::Read;

use crate::cli::UploadRequest;
use crate::progress::{ProgressReader, ProgressSink};

// Retention headers (`Max-Days`, `Max-Downloads`). `from_static` only
// accepts the lowercase form.
pub const MAX_DAYS: &str = "max-days";
pub const MAX_DOWNLOADS: &str = "max-downloads";

/// Holds a reqwest blocking client and the base URL uploads are POSTed to.
#[derive(Clone)]
pub struct TransferClient {
    client: Client,
    base_url: String,
}

impl TransferClient {
    /// Create a client for the given base URL. Requests never time out:
    /// large uploads may legitimately take longer than reqwest's default.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(None)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(TransferClient {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload the file named by `request` and return the response body.
    ///
    /// The size is measured once, before the file is opened, and is the
    /// total reported through `on_start`. If the file cannot be opened no
    /// request is sent.
    pub fn upload<S, F>(&self, request: &UploadRequest, on_start: F) -> Result<String>
    where
        S: ProgressSink + 'static,
        F: FnOnce(u64) -> Result<S>,
    {
        let path = request.path();
        let size = fs::metadata(&path)
            .with_context(|| format!("Failed to read size of {}", path.display()))?
            .len();
        let file = File::open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let sink = on_start(size)?;

        self.upload_reader(request, file, size, sink)
    }

    /// Same as [`upload`](Self::upload) for an already opened source of
    /// `len` bytes. The reader is owned by the request body and dropped
    /// before this returns, whether the send succeeded or not.
    pub fn upload_reader<R, S>(
        &self,
        request: &UploadRequest,
        reader: R,
        len: u64,
        sink: S,
    ) -> Result<String>
    where
        R: Read + Send + 'static,
        S: ProgressSink + 'static,
    {
        let body = ProgressReader::new(reader, sink);
        let part = multipart::Part::reader_with_length(body, len)
            .file_name(request.remote_name());
        let form = multipart::Form::new().part("file", part);

        log::debug!(
            "POST {} ({} bytes, max_days={:?}, max_downloads={:?})",
            self.base_url,
            len,
            request.max_days,
            request.max_downloads
        );

        // The multipart Content-Type, boundary included, is set by reqwest.
        let res = self
            .client
            .post(&self.base_url)
            .headers(retention_headers(request))
            .multipart(form)
            .send()
            .context("Failed to send upload request")?;

        let status = res.status();
        let text = res.text().context("Failed to read upload response")?;
        if !status.is_success() {
            // The body is still handed back as the URL; only transport
            // errors count as failures.
            log::warn!("Server answered {}, reporting its body anyway", status);
        }
        Ok(text)
    }
}

/// `Max-Days` / `Max-Downloads`, each present only when set.
pub fn retention_headers(request: &UploadRequest) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(days) = request.max_days {
        headers.insert(HeaderName::from_static(MAX_DAYS), HeaderValue::from(days));
    }
    if let Some(downloads) = request.max_downloads {
        headers.insert(
            HeaderName::from_static(MAX_DOWNLOADS),
            HeaderValue::from(downloads),
        );
    }
    headers
}
