use std::fmt;

/// Statistics from a completed write run
#[derive(Debug, Clone, Default)]
pub struct WriterStats {
    /// Number of events flushed to the sink
    pub events_written: usize,
    /// Total number of particle lines written
    pub particles_written: usize,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} events ({} particles)",
            self.events_written, self.particles_written
        )
    }
}
