use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

use log::{debug, info, warn};

use crate::event::EventHeader;
use crate::particle::{Hadron, Parton, PartonShower, Record};
use crate::sink::Sink;

use super::config::WriterConfig;
use super::error::WriterError;
use super::header;
use super::stats::WriterStats;

/// Lifecycle states of a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    /// Constructed but no sink opened; `init(false)` keeps this state.
    Uninitialized,
    /// Sink open, file-level header written.
    Open,
    /// Footer written and sink released.
    Closed,
}

/// Object-safe writer surface consumed by the registry and the pipeline.
pub trait EventWriter {
    /// Open the sink and write the file-level header.
    ///
    /// A writer that is not marked active stays uninitialized and opens
    /// nothing; the enable flag is owned by the surrounding pipeline.
    fn init(&mut self, active: bool) -> Result<(), WriterError>;

    /// Replace the event header values read by the next flush and by close.
    fn set_header(&mut self, header: EventHeader);

    /// Buffer the final-state partons of `shower`, in shower order.
    ///
    /// No-op for writers that do not record partons, and for handles whose
    /// referent no longer exists.
    fn write_shower(&mut self, shower: &Weak<PartonShower>);

    /// Buffer a single hadron.
    ///
    /// No-op for writers that do not record hadrons, and for handles whose
    /// referent no longer exists.
    fn write_hadron(&mut self, hadron: &Weak<Hadron>);

    /// Per-event pipeline hook. Deliberately does nothing; the pipeline
    /// drives the flush through [`EventWriter::write_event`] directly.
    fn exec(&mut self) {}

    /// Flush the current event: header line, then the buffered particle
    /// lines in insertion order, then clear the buffer.
    fn write_event(&mut self) -> Result<(), WriterError>;

    /// Write the cross-section footer and release the sink.
    fn close(&mut self) -> Result<WriterStats, WriterError>;

    /// Whether the sink is currently open.
    fn is_open(&self) -> bool;
}

/// Streaming writer for final-state particle records.
///
/// Generic over the record kind `R` and the sink encoding `S`. The two
/// record kinds share all writer logic and differ only in which entity type
/// populates the buffer and in the `N_<label>` column label.
pub struct FinalStateWriter<R: Record, S: Sink> {
    output_path: PathBuf,
    config: WriterConfig,
    header_version: u32,
    header: EventHeader,
    buffer: Vec<Arc<R>>,
    sink: Option<S>,
    state: WriterState,
    current_event: u64,
    stats: WriterStats,
}

impl<R: Record, S: Sink> FinalStateWriter<R, S> {
    /// Create a writer for `path`. No resource is opened until `init`.
    pub fn new<P: AsRef<Path>>(path: P, config: WriterConfig) -> Self {
        Self {
            output_path: path.as_ref().to_path_buf(),
            config,
            header_version: super::config::DEFAULT_HEADER_VERSION,
            header: EventHeader::default(),
            buffer: Vec::new(),
            sink: None,
            state: WriterState::Uninitialized,
            current_event: 0,
            stats: WriterStats::default(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WriterState {
        self.state
    }

    /// Number of records buffered for the in-progress event.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Resolved per-event header version (meaningful once open).
    pub fn header_version(&self) -> u32 {
        self.header_version
    }

    fn push_record(&mut self, record: Arc<R>) {
        self.buffer.push(record);
    }

    fn init_impl(&mut self, active: bool) -> Result<(), WriterError> {
        if self.state != WriterState::Uninitialized {
            return Err(WriterError::AlreadyOpen);
        }
        if !active {
            return Ok(());
        }

        self.header_version = self.config.resolved_header_version();
        info!(
            "final-state {} writer v{} initialized, output file = {}",
            R::label(),
            self.header_version,
            self.output_path.display()
        );

        let mut sink = S::create(&self.output_path)?;
        sink.append(&header::file_header())?;
        self.sink = Some(sink);
        self.state = WriterState::Open;
        Ok(())
    }

    fn write_event_impl(&mut self) -> Result<(), WriterError> {
        let Some(sink) = self.sink.as_mut() else {
            return Err(WriterError::NotOpen);
        };

        // The pt_hat flag is read back out of the configuration on every
        // event, never cached at init.
        let line = header::event_header(
            self.current_event,
            &self.header,
            self.buffer.len(),
            R::label(),
            self.header_version,
            self.config.writes_pthat(),
        );

        let mut result = sink.append(&line);
        if result.is_ok() {
            for (index, record) in self.buffer.iter().enumerate() {
                result = sink.append(&header::particle_line(index, record.as_ref()));
                if result.is_err() {
                    break;
                }
            }
        }
        if result.is_ok() {
            debug!(
                "event {}: wrote {} {} records",
                self.current_event + 1,
                self.buffer.len(),
                R::label()
            );
            self.stats.events_written += 1;
            self.stats.particles_written += self.buffer.len();
        }

        // The buffer drains even when the sink faults; there is no
        // partial-write recovery.
        self.buffer.clear();
        self.current_event += 1;
        result.map_err(WriterError::from)
    }

    fn close_impl(&mut self) -> Result<WriterStats, WriterError> {
        let Some(mut sink) = self.sink.take() else {
            return Err(WriterError::NotOpen);
        };
        // The sink is released exactly once, even when the footer write
        // fails below.
        self.state = WriterState::Closed;

        sink.append(&header::footer(&self.header))?;
        sink.finish()?;

        info!("final-state {} writer closed: {}", R::label(), self.stats);
        Ok(self.stats.clone())
    }
}

impl<R: Record, S: Sink> Drop for FinalStateWriter<R, S> {
    fn drop(&mut self) {
        // A writer torn down while still open closes itself first, so the
        // footer is written whenever a sink was opened.
        if self.state == WriterState::Open {
            if let Err(error) = self.close_impl() {
                warn!(
                    "final-state {} writer: close on drop failed: {}",
                    R::label(),
                    error
                );
            }
        }
    }
}

impl<S: Sink> EventWriter for FinalStateWriter<Parton, S> {
    fn init(&mut self, active: bool) -> Result<(), WriterError> {
        self.init_impl(active)
    }

    fn set_header(&mut self, header: EventHeader) {
        self.header = header;
    }

    fn write_shower(&mut self, shower: &Weak<PartonShower>) {
        // A vanished shower means the generator tore it down before the
        // writer drained it; there is nothing to record.
        let Some(shower) = shower.upgrade() else {
            return;
        };
        for parton in shower.final_partons() {
            self.push_record(parton);
        }
    }

    fn write_hadron(&mut self, _hadron: &Weak<Hadron>) {}

    fn write_event(&mut self) -> Result<(), WriterError> {
        self.write_event_impl()
    }

    fn close(&mut self) -> Result<WriterStats, WriterError> {
        self.close_impl()
    }

    fn is_open(&self) -> bool {
        self.state == WriterState::Open
    }
}

impl<S: Sink> EventWriter for FinalStateWriter<Hadron, S> {
    fn init(&mut self, active: bool) -> Result<(), WriterError> {
        self.init_impl(active)
    }

    fn set_header(&mut self, header: EventHeader) {
        self.header = header;
    }

    fn write_shower(&mut self, _shower: &Weak<PartonShower>) {}

    fn write_hadron(&mut self, hadron: &Weak<Hadron>) {
        if let Some(hadron) = hadron.upgrade() {
            self.push_record(hadron);
        }
    }

    fn write_event(&mut self) -> Result<(), WriterError> {
        self.write_event_impl()
    }

    fn close(&mut self) -> Result<WriterStats, WriterError> {
        self.close_impl()
    }

    fn is_open(&self) -> bool {
        self.state == WriterState::Open
    }
}
