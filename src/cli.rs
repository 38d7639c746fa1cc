// Command-line definition. `Args` is what clap fills in; `UploadRequest`
// is the frozen form handed to the rest of the crate.

use clap::Parser;
use std::path::PathBuf;

/// Endpoint used when neither `--url` nor `TRANSFERSH_URL` is given.
pub const DEFAULT_URL: &str = "https://transfer.sh";

/// Uploads a file to Transfer.sh
#[derive(Parser, Debug)]
#[command(name = "transfersh", version, about, long_about = None)]
pub struct Args {
    /// File to upload
    #[arg(value_name = "FILENAME")]
    pub filename: String,

    /// Maximum number of days to keep file
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    pub max_days: Option<i64>,

    /// Maximum number of times that file can be downloaded
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub max_downloads: Option<i64>,

    /// Base URL of the transfer.sh instance
    #[arg(long, env = "TRANSFERSH_URL", default_value = DEFAULT_URL)]
    pub url: String,
}

/// Everything one upload needs. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Path exactly as typed; also used as the progress label.
    pub filename: String,
    pub max_days: Option<i64>,
    pub max_downloads: Option<i64>,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>) -> Self {
        UploadRequest {
            filename: filename.into(),
            max_days: None,
            max_downloads: None,
        }
    }

    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.filename)
    }

    /// Name sent in the multipart part: the last path component, or the
    /// argument itself when there is none (e.g. `..`). Directories in the
    /// argument are not sent, unlike the path as typed.
    pub fn remote_name(&self) -> String {
        self.path()
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.filename.clone())
    }
}

impl Args {
    /// Split into the upload request and the endpoint base URL.
    pub fn into_request(self) -> (UploadRequest, String) {
        let request = UploadRequest {
            filename: self.filename,
            max_days: self.max_days,
            max_downloads: self.max_downloads,
        };
        (request, self.url)
    }
}
