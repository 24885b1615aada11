//! Exposition text handling for probe responses.
//!
//! - `line`: classify raw script output lines and split samples into
//!   `name{labels}` segment and value.
//! - `value`: decimal-comma normalization and numeric validation.
//! - `transform`: the order-preserving filter/map over a script's stdout.
//! - `synthetic`: the `script_success` / `script_duration_seconds` header.
//!
//! Everything here is panic-free: malformed script output is dropped and
//! counted, never surfaced as an error.

pub mod line;
pub mod synthetic;
pub mod transform;
pub mod value;

pub use line::{classify, MetricLine, Sample};
pub use synthetic::{render_probe, SCRIPT_NAMESPACE};
pub use transform::{Transformed, Transformer};
