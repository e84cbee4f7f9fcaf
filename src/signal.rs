//! Continuous-time signal abstractions.
//!
//! This module provides the traits shared by everything that can be evaluated
//! over time:
//! - `Signal` for any function of time `t` (in seconds)
//! - `Periodic` for signals with a fundamental frequency
//! - `SignalExt` with the `gain` and `offset` adapters
//!
//! Signals here are pure: evaluating at `t` never changes the signal, so the
//! same value can be sampled any number of times in any order.

/// Common interface for all time-domain signals.
pub trait Signal {
    /// Evaluates the signal at time `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time in seconds
    fn value_at(&self, t: f64) -> f64;

    /// Samples the signal at `t0, t0 + dt, t0 + 2*dt, ...` into a buffer.
    ///
    /// The default implementation calls `value_at()` for each element.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    /// * `t0` - Time of the first sample
    /// * `dt` - Spacing between samples
    fn sample(&self, buffer: &mut [f64], t0: f64, dt: f64) {
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample = self.value_at(t0 + i as f64 * dt);
        }
    }
}

/// Signals that repeat with a fundamental frequency.
///
/// # Examples
///
/// ```
/// use wave_avg::{Carrier, Periodic, SignalType};
///
/// let carrier = Carrier::new(SignalType::Sine, 50.0, 0.0);
/// assert_eq!(carrier.frequency(), 50.0);
/// assert_eq!(carrier.period(), 0.02);
/// ```
pub trait Periodic {
    /// Fundamental frequency in Hz.
    fn frequency(&self) -> f64;

    /// Duration of one cycle in seconds.
    fn period(&self) -> f64 {
        1.0 / self.frequency()
    }
}

/// Scales a signal by a constant factor (amplitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain<S: Signal> {
    pub source: S,
    pub gain: f64,
}

impl<S: Signal> Signal for Gain<S> {
    fn value_at(&self, t: f64) -> f64 {
        self.source.value_at(t) * self.gain
    }
}

impl<S: Signal + Periodic> Periodic for Gain<S> {
    fn frequency(&self) -> f64 {
        self.source.frequency()
    }
}

/// Adds a constant to a signal (DC offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset<S: Signal> {
    pub source: S,
    pub offset: f64,
}

impl<S: Signal> Signal for Offset<S> {
    fn value_at(&self, t: f64) -> f64 {
        self.source.value_at(t) + self.offset
    }
}

impl<S: Signal + Periodic> Periodic for Offset<S> {
    fn frequency(&self) -> f64 {
        self.source.frequency()
    }
}

/// Extension methods available on every `Signal`.
///
/// # Examples
///
/// ```
/// use wave_avg::{Carrier, Signal, SignalExt, SignalType};
///
/// // 230 V amplitude riding on a 12 V bias
/// let mains = Carrier::new(SignalType::Sine, 50.0, 0.0).gain(230.0).offset(12.0);
/// assert_eq!(mains.value_at(0.0), 12.0);
/// ```
pub trait SignalExt: Signal + Sized {
    /// Scales this signal by `gain`.
    fn gain(self, gain: f64) -> Gain<Self> {
        Gain { source: self, gain }
    }

    /// Adds `offset` to this signal.
    fn offset(self, offset: f64) -> Offset<Self> {
        Offset {
            source: self,
            offset,
        }
    }
}

impl<S: Signal> SignalExt for S {}
