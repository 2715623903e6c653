//! Output backends for the final-state writers.
//!
//! A [`Sink`] is the capability the writer needs from its backend: append
//! text, release once. The two concrete encodings carry byte-identical text;
//! the writer is oblivious to which one is in use.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Capability required of an output backend.
pub trait Sink {
    /// Open the backing resource at `path`.
    fn create(path: &Path) -> io::Result<Self>
    where
        Self: Sized;

    /// Append `text` verbatim.
    fn append(&mut self, text: &str) -> io::Result<()>;

    /// Flush and release the backing resource. Called at most once, at close.
    fn finish(&mut self) -> io::Result<()>;
}

/// Plain text file sink.
pub struct PlainSink {
    inner: BufWriter<File>,
}

impl Sink for PlainSink {
    fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            inner: BufWriter::new(File::create(path)?),
        })
    }

    fn append(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Gzip-compressed text file sink. Same text content as [`PlainSink`].
pub struct GzipSink {
    inner: GzEncoder<BufWriter<File>>,
}

impl Sink for GzipSink {
    fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            inner: GzEncoder::new(
                BufWriter::new(File::create(path)?),
                Compression::default(),
            ),
        })
    }

    fn append(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn finish(&mut self) -> io::Result<()> {
        // Writes the gzip trailer, then pushes everything to disk.
        self.inner.try_finish()?;
        self.inner.get_mut().flush()
    }
}
