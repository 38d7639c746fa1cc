// Progress reporting: a reader adapter that counts bytes and a sink trait
// so the counting does not depend on how (or whether) progress is drawn.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Read};

const BAR_TEMPLATE: &str =
    "{msg}: {percent:>3}%|{wide_bar}| {binary_bytes}/{binary_total_bytes} [{elapsed_precise}<{eta_precise}, {binary_bytes_per_sec}]";

/// Receives the cumulative number of bytes read so far. Values never
/// decrease.
pub trait ProgressSink: Send {
    fn set_bytes_read(&self, bytes_read: u64);
}

impl ProgressSink for ProgressBar {
    fn set_bytes_read(&self, bytes_read: u64) {
        self.set_position(bytes_read);
    }
}

/// Wraps a reader and reports to `sink` after every `read` call.
pub struct ProgressReader<R, S> {
    inner: R,
    sink: S,
    bytes_read: u64,
}

impl<R: Read, S: ProgressSink> ProgressReader<R, S> {
    pub fn new(inner: R, sink: S) -> Self {
        ProgressReader {
            inner,
            sink,
            bytes_read: 0,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: Read, S: ProgressSink> Read for ProgressReader<R, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.bytes_read += n as u64;
        self.sink.set_bytes_read(self.bytes_read);
        Ok(n)
    }
}

/// Progress bar for one upload. `total` is the size measured before the
/// transfer starts and is not updated afterwards.
pub fn upload_bar(label: &str, total: u64) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template(BAR_TEMPLATE)
        .context("Invalid progress bar template")?;
    let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
    bar.set_style(style);
    bar.set_message(label.to_string());
    Ok(bar)
}
