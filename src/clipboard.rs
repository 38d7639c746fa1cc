// Clipboard integration. Only ever best effort: headless or remote hosts
// usually have no clipboard at all.

use crate::error::Error;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), Error>;
}

/// The OS clipboard, via `arboard`.
///
/// The handle is created lazily and kept for the lifetime of the value; on
/// X11 and Wayland the selection is only served while it is alive. Without
/// a clipboard manager to take it over, the text is gone once the process
/// exits, even though the copy itself reported success.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), Error> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(unavailable)?,
        };
        self.inner
            .insert(clipboard)
            .set_text(text.to_owned())
            .map_err(unavailable)
    }
}

fn unavailable(err: arboard::Error) -> Error {
    Error::ClipboardUnavailable(err.to_string())
}
