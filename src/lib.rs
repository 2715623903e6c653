//! # finalstate - Final-State Particle Record Writer
//!
//! `finalstate` serializes the per-event output of a heavy-ion event
//! generator (final-state partons or hadrons) into a versioned,
//! self-describing, line-oriented ASCII file intended for efficient
//! downstream parsing.
//!
//! ## Key Features
//!
//! - **Exactly-once framing**: one file-level header at init, one
//!   cross-section footer at close, guaranteed even when a writer is
//!   dropped while still open.
//!
//! - **Versioned event headers**: header version 2 by default; version 3
//!   extends each event header with the collision vertex. The per-event
//!   header version is independent of the fixed file-schema tag.
//!
//! - **Interchangeable sinks**: plain text or gzip-compressed output with
//!   byte-identical text content, selected at construction.
//!
//! - **Observer semantics**: particle records stay owned by the generator;
//!   the writer dereferences `Weak` handles and treats a vanished referent
//!   as "nothing to record".
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use finalstate::event::EventHeader;
//! use finalstate::particle::Hadron;
//! use finalstate::sink::PlainSink;
//! use finalstate::writer::{EventWriter, FinalStateWriter, WriterConfig};
//!
//! let mut writer = FinalStateWriter::<Hadron, PlainSink>::new(
//!     "final_state_hadrons.dat",
//!     WriterConfig::default(),
//! );
//! writer.init(true)?;
//!
//! // The generator owns the hadron; the writer only observes it.
//! let hadron = Arc::new(Hadron::new(211, 0, 1.0, 0.1, 0.2, 0.3));
//! writer.write_hadron(&Arc::downgrade(&hadron));
//!
//! writer.set_header(EventHeader::default());
//! writer.write_event()?;
//!
//! let stats = writer.close()?;
//! println!("{stats}");
//! # Ok::<(), finalstate::writer::WriterError>(())
//! ```
//!
//! This produces:
//!
//! ```text
//! #	JETSCAPE_FINAL_STATE	v3	|	N	pid	status	E	Px	Py	Pz
//! #	Event	1	weight	1	EPangle	0	N_Hadron	1
//! 0 211 0 1 0.1 0.2 0.3
//! #	sigmaGen	0	sigmaErr	0
//! ```
//!
//! ## Architecture
//!
//! - [`event`]: per-event header values and the run-level cross section
//! - [`particle`]: record kinds (partons, hadrons) and the shower container
//! - [`sink`]: output backends (plain and gzip-compressed text)
//! - [`writer`]: buffering, header formatting, and the writer lifecycle
//! - [`registry`]: explicit name-to-constructor registrations for pipelines

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod event;
pub mod particle;
pub mod registry;
pub mod sink;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::event::{EventHeader, EVENT_PLANE_UNSET};
    pub use crate::particle::{Hadron, Parton, PartonShower, Record};
    pub use crate::registry::{create, WriterRegistration, WRITERS};
    pub use crate::sink::{GzipSink, PlainSink, Sink};
    pub use crate::writer::{
        EventWriter, FinalStateWriter, WriterConfig, WriterError, WriterState, WriterStats,
    };
}
