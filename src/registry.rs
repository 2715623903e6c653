//! Explicit writer registrations.
//!
//! Each entry maps a stable writer name to a constructor over one record
//! kind and one sink encoding. The table is a plain constant the surrounding
//! pipeline can inspect or iterate; no implicit instantiation machinery is
//! involved.

use std::path::Path;

use crate::particle::{Hadron, Parton};
use crate::sink::{GzipSink, PlainSink};
use crate::writer::{EventWriter, FinalStateWriter, WriterConfig};

/// A named writer constructor.
pub struct WriterRegistration {
    /// Name the pipeline selects the writer by.
    pub name: &'static str,
    /// Construct the writer. No resource is opened until `init`.
    pub construct: fn(&Path, WriterConfig) -> Box<dyn EventWriter>,
}

fn partons_ascii(path: &Path, config: WriterConfig) -> Box<dyn EventWriter> {
    Box::new(FinalStateWriter::<Parton, PlainSink>::new(path, config))
}

fn hadrons_ascii(path: &Path, config: WriterConfig) -> Box<dyn EventWriter> {
    Box::new(FinalStateWriter::<Hadron, PlainSink>::new(path, config))
}

fn partons_gz(path: &Path, config: WriterConfig) -> Box<dyn EventWriter> {
    Box::new(FinalStateWriter::<Parton, GzipSink>::new(path, config))
}

fn hadrons_gz(path: &Path, config: WriterConfig) -> Box<dyn EventWriter> {
    Box::new(FinalStateWriter::<Hadron, GzipSink>::new(path, config))
}

/// All registered final-state writers: {partons, hadrons} x {plain, gzip}.
pub const WRITERS: &[WriterRegistration] = &[
    WriterRegistration {
        name: "final_state_partons",
        construct: partons_ascii,
    },
    WriterRegistration {
        name: "final_state_hadrons",
        construct: hadrons_ascii,
    },
    WriterRegistration {
        name: "final_state_partons_gz",
        construct: partons_gz,
    },
    WriterRegistration {
        name: "final_state_hadrons_gz",
        construct: hadrons_gz,
    },
];

/// Construct the writer registered under `name`, or `None` if no such
/// registration exists.
pub fn create(name: &str, path: &Path, config: WriterConfig) -> Option<Box<dyn EventWriter>> {
    WRITERS
        .iter()
        .find(|registration| registration.name == name)
        .map(|registration| (registration.construct)(path, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_names_are_unique() {
        for (i, a) in WRITERS.iter().enumerate() {
            for b in &WRITERS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn create_resolves_every_registration() {
        let dir = tempfile::tempdir().unwrap();
        for registration in WRITERS {
            let path = dir.path().join(registration.name);
            let writer = create(registration.name, &path, WriterConfig::default());
            assert!(writer.is_some(), "missing registration: {}", registration.name);
        }
    }

    #[test]
    fn create_unknown_name_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dat");
        assert!(create("full_event_ascii", &path, WriterConfig::default()).is_none());
    }
}
