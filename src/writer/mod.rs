//! # Final-state writer module
//!
//! Core functionality for serializing buffered final-state particle records
//! into the versioned, line-oriented ASCII format.
//!
//! ## Design principles
//!
//! 1. **One writer, one sink**: each writer instance exclusively owns its
//!    record buffer and its open output resource. Concurrent writers (one
//!    for partons, one for hadrons) are fully independent.
//!
//! 2. **Exactly-once framing**: the file-level header is written once at
//!    init, the cross-section footer once at close. A writer dropped while
//!    still open closes itself so the footer is never lost.
//!
//! 3. **Pure formatting**: header and particle lines are produced by pure
//!    functions taking precision as an explicit parameter per field. No
//!    shared formatting state exists to leak between fields.
//!
//! 4. **Encoding-oblivious**: the same writer logic drives a plain or a
//!    gzip-compressed sink with byte-identical text content.

mod config;
mod error;
mod header;
mod stats;
mod writer_impl;


pub use config::{WriterConfig, DEFAULT_HEADER_VERSION};
pub use error::WriterError;
pub use header::{FILE_SCHEMA_TAG, DEFAULT_PRECISION, WEIGHT_PRECISION};
pub use stats::WriterStats;
pub use writer_impl::{EventWriter, FinalStateWriter, WriterState};
