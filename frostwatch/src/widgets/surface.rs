// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use frostwatch_core::{FrostwatchError, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Text sink shared by the terminal widgets.
///
/// Each widget draws a whole frame under a single lock, so frames from
/// different widgets never interleave.
#[derive(Clone)]
pub struct Surface {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Surface {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Surface writing into memory, with a handle to read back what was drawn.
    #[must_use]
    pub fn in_memory() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Self::new(buffer.clone()), buffer)
    }

    /// Draw `frame` under a heading with the widget title.
    ///
    /// # Errors
    /// Returns `FrostwatchError::Render` if the underlying writer fails.
    pub fn draw(&self, widget: &str, title: &str, frame: &str) -> Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "== {title} ==")
            .and_then(|()| writeln!(out, "{frame}"))
            .and_then(|()| out.flush())
            .map_err(|e| FrostwatchError::render_error(widget, e.to_string()))
    }
}

/// Cloneable in-memory writer.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
