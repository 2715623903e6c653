//! Pure formatting for header, particle, and footer lines.
//!
//! Every function here is stateless: values go in, a complete
//! newline-terminated line comes out. Numeric precision is an explicit
//! parameter per field.
//!
//! Named fields within header lines are tab-separated to simplify downstream
//! parsing; particle-line columns are space-separated.

use crate::event::EventHeader;
use crate::particle::Record;

/// File-schema tag written once in the file-level header.
///
/// Identifies the overall file layout and is fixed regardless of the
/// per-event header version; the two version concepts are independent.
pub const FILE_SCHEMA_TAG: &str = "v3";

/// Significant digits for the event weight field.
pub const WEIGHT_PRECISION: usize = 15;

/// Significant digits for every other floating-point field.
pub const DEFAULT_PRECISION: usize = 6;

/// Render `value` with `sig` significant digits.
///
/// Fixed notation where the exponent allows, scientific otherwise, trailing
/// zeros trimmed. Mirrors C-style `%g` so files stay byte-compatible with
/// the established format.
pub fn general(value: f64, sig: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0".to_string()
        } else {
            "0".to_string()
        };
    }

    let sig = sig.max(1);
    let sci = format!("{:.*e}", sig - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= sig as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (sig as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value))
    }
}

fn trim_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

/// The file-level header line, written exactly once per file lifetime.
pub fn file_header() -> String {
    format!("#\tJETSCAPE_FINAL_STATE\t{FILE_SCHEMA_TAG}\t|\tN\tpid\tstatus\tE\tPx\tPy\tPz\n")
}

/// The per-event header line.
///
/// `event` is the zero-based event index; it is printed one-based. Vertex
/// fields appear only under header version 3, `pt_hat` only when
/// `write_pthat` is set.
pub fn event_header(
    event: u64,
    header: &EventHeader,
    count: usize,
    label: &str,
    version: u32,
    write_pthat: bool,
) -> String {
    let mut line = format!(
        "#\tEvent\t{}\tweight\t{}\tEPangle\t{}\tN_{}\t{}",
        event + 1,
        general(header.event_weight, WEIGHT_PRECISION),
        event_plane(header.event_plane_angle),
        label,
        count,
    );
    if version == 3 {
        line.push_str(&format!(
            "\tvertex_x\t{}\tvertex_y\t{}\tvertex_z\t{}",
            general(header.vertex_x, DEFAULT_PRECISION),
            general(header.vertex_y, DEFAULT_PRECISION),
            general(header.vertex_z, DEFAULT_PRECISION),
        ));
    }
    if write_pthat {
        line.push_str(&format!(
            "\tpt_hat\t{}",
            general(header.pt_hat, DEFAULT_PRECISION)
        ));
    }
    line.push('\n');
    line
}

/// A single particle line: zero-based index, then the six record columns.
pub fn particle_line<R: Record>(index: usize, record: &R) -> String {
    format!(
        "{} {} {} {} {} {} {}\n",
        index,
        record.pid(),
        record.status(),
        general(record.e(), DEFAULT_PRECISION),
        general(record.px(), DEFAULT_PRECISION),
        general(record.py(), DEFAULT_PRECISION),
        general(record.pz(), DEFAULT_PRECISION),
    )
}

/// Cross-section footer line, written exactly once at close.
pub fn footer(header: &EventHeader) -> String {
    format!(
        "#\tsigmaGen\t{}\tsigmaErr\t{}\n",
        general(header.sigma_gen, DEFAULT_PRECISION),
        general(header.sigma_err, DEFAULT_PRECISION),
    )
}

// An angle at or below the sentinel prints as a literal 0.
fn event_plane(angle: f64) -> String {
    if angle > crate::event::EVENT_PLANE_UNSET {
        general(angle, DEFAULT_PRECISION)
    } else {
        "0".to_string()
    }
}
