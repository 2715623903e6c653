//! Particle record model: partons, hadrons, and the shower container.
//!
//! Particle records are owned by the upstream event generator. The writer
//! observes them through [`std::sync::Weak`] handles and keeps `Arc` clones
//! in its buffer only until the next flush. A handle whose referent has
//! already been torn down reads as "nothing to record", never as an error:
//! the generator may legitimately outlive-race the writer at the end of a
//! simulation.

use std::sync::Arc;

/// Field accessors shared by every record kind the writer can serialize,
/// plus the display label used in the `N_<label>` header field.
pub trait Record {
    /// Display label for this record kind.
    fn label() -> &'static str;

    /// Particle species code (PDG id).
    fn pid(&self) -> i32;

    /// Generator status code.
    fn status(&self) -> i32;

    /// Energy.
    fn e(&self) -> f64;

    /// Momentum x component.
    fn px(&self) -> f64;

    /// Momentum y component.
    fn py(&self) -> f64;

    /// Momentum z component.
    fn pz(&self) -> f64;
}

/// Fundamental-constituent particle record.
#[derive(Debug, Clone, PartialEq)]
pub struct Parton {
    /// PDG species code.
    pub pid: i32,
    /// Generator status code.
    pub status: i32,
    /// Energy.
    pub e: f64,
    /// Momentum x component.
    pub px: f64,
    /// Momentum y component.
    pub py: f64,
    /// Momentum z component.
    pub pz: f64,
}

impl Parton {
    /// Create a parton record.
    pub fn new(pid: i32, status: i32, e: f64, px: f64, py: f64, pz: f64) -> Self {
        Self {
            pid,
            status,
            e,
            px,
            py,
            pz,
        }
    }
}

impl Record for Parton {
    fn label() -> &'static str {
        "Parton"
    }

    fn pid(&self) -> i32 {
        self.pid
    }

    fn status(&self) -> i32 {
        self.status
    }

    fn e(&self) -> f64 {
        self.e
    }

    fn px(&self) -> f64 {
        self.px
    }

    fn py(&self) -> f64 {
        self.py
    }

    fn pz(&self) -> f64 {
        self.pz
    }
}

/// Composite-particle record.
#[derive(Debug, Clone, PartialEq)]
pub struct Hadron {
    /// PDG species code.
    pub pid: i32,
    /// Generator status code.
    pub status: i32,
    /// Energy.
    pub e: f64,
    /// Momentum x component.
    pub px: f64,
    /// Momentum y component.
    pub py: f64,
    /// Momentum z component.
    pub pz: f64,
}

impl Hadron {
    /// Create a hadron record.
    pub fn new(pid: i32, status: i32, e: f64, px: f64, py: f64, pz: f64) -> Self {
        Self {
            pid,
            status,
            e,
            px,
            py,
            pz,
        }
    }
}

impl Record for Hadron {
    fn label() -> &'static str {
        "Hadron"
    }

    fn pid(&self) -> i32 {
        self.pid
    }

    fn status(&self) -> i32 {
        self.status
    }

    fn e(&self) -> f64 {
        self.e
    }

    fn px(&self) -> f64 {
        self.px
    }

    fn py(&self) -> f64 {
        self.py
    }

    fn pz(&self) -> f64 {
        self.pz
    }
}

/// A parton shower as handed over by the upstream generator.
///
/// The shower owns its partons. Each parton is tagged on insertion as final
/// state (it does not branch further) or intermediate; only the final-state
/// ones are eligible for output.
#[derive(Debug, Default)]
pub struct PartonShower {
    partons: Vec<ShowerParton>,
}

#[derive(Debug)]
struct ShowerParton {
    parton: Arc<Parton>,
    is_final: bool,
}

impl PartonShower {
    /// Create an empty shower.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parton; `is_final` marks it as not branching further.
    pub fn add_parton(&mut self, parton: Parton, is_final: bool) {
        self.partons.push(ShowerParton {
            parton: Arc::new(parton),
            is_final,
        });
    }

    /// The final-state partons, in insertion order.
    pub fn final_partons(&self) -> Vec<Arc<Parton>> {
        self.partons
            .iter()
            .filter(|p| p.is_final)
            .map(|p| Arc::clone(&p.parton))
            .collect()
    }

    /// Total number of partons in the shower, final and intermediate.
    pub fn parton_count(&self) -> usize {
        self.partons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_partons_filters_and_preserves_order() {
        let mut shower = PartonShower::new();
        shower.add_parton(Parton::new(21, 0, 10.0, 0.0, 0.0, 10.0), false);
        shower.add_parton(Parton::new(1, 0, 4.0, 1.0, 0.0, 3.0), true);
        shower.add_parton(Parton::new(-1, 0, 6.0, -1.0, 0.0, 5.0), true);

        let finals = shower.final_partons();
        assert_eq!(finals.len(), 2);
        assert_eq!(finals[0].pid, 1);
        assert_eq!(finals[1].pid, -1);
        assert_eq!(shower.parton_count(), 3);
    }
}
