//! wave-avg - Average value of periodic electrical signals
//!
//! This library evaluates sine, square and triangle waveforms with a given
//! amplitude, frequency, phase and DC offset, and estimates their mean over
//! one period with the trapezoidal rule. The `session` module wraps this in
//! the interactive prompt loop used by the `wave-avg` binary.

pub mod config;
pub mod error;
pub mod input;
pub mod integrate;
pub mod params;
pub mod session;
pub mod signal;
pub mod waveform;

// Re-export commonly used types at the crate root
pub use config::{Cli, Config, FrequencyPolicy, OutputFormat};
pub use error::{Error, Result};
pub use integrate::{DEFAULT_SUBINTERVALS, Rule, average, average_with, calculate_avg};
pub use params::{SignalParams, f};
pub use session::Session;
pub use signal::{Gain, Offset, Periodic, Signal, SignalExt};
pub use waveform::{Carrier, SignalType, g};
