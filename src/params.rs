//! Signal parameters and the full signal `f(t)`.

use crate::error::{Error, Result};
use crate::signal::{Gain, Offset, Signal, SignalExt};
use crate::waveform::{Carrier, SignalType};

/// Amplitude, frequency, phase and DC offset of a periodic signal.
///
/// Built through [`SignalParams::new`], which rejects frequencies without a
/// finite positive period, so `period()` is always finite and positive.
///
/// # Examples
///
/// ```
/// use wave_avg::{SignalParams, SignalType};
///
/// let params = SignalParams::new(2.0, 50.0, 0.0, 1.0).unwrap();
/// assert_eq!(params.period(), 0.02);
/// assert_eq!(params.value_at(0.0, SignalType::Sine), 1.0);
///
/// assert!(SignalParams::new(1.0, 0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    amplitude: f64,
    frequency: f64,
    phase: f64,
    offset: f64,
}

impl SignalParams {
    /// Creates validated parameters.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - `U`, any sign
    /// * `frequency` - `f0` in Hz, must be greater than zero
    /// * `phase` - `phi` in radians
    /// * `offset` - `C`, the DC component
    ///
    /// # Errors
    ///
    /// `Error::InvalidFrequency` if `frequency` is not greater than zero
    /// (NaN included), or so small or large that `1/f0` is not finite and
    /// positive.
    pub fn new(amplitude: f64, frequency: f64, phase: f64, offset: f64) -> Result<Self> {
        check_frequency(frequency)?;
        Ok(Self {
            amplitude,
            frequency,
            phase,
            offset,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Period `T = 1/f0` in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }

    /// The full signal `U * g(2*pi*f0*t + phi) + C` as a [`Signal`](crate::Signal).
    pub fn signal(&self, ty: SignalType) -> Offset<Gain<Carrier>> {
        Carrier::new(ty, self.frequency, self.phase)
            .gain(self.amplitude)
            .offset(self.offset)
    }

    /// Evaluates the full signal at time `t`.
    pub fn value_at(&self, t: f64, ty: SignalType) -> f64 {
        self.signal(ty).value_at(t)
    }
}

/// Full signal `f(t, params, type)`.
pub fn f(t: f64, params: &SignalParams, ty: SignalType) -> f64 {
    params.value_at(t, ty)
}

/// Rejects frequencies that do not give a finite positive period.
pub fn check_frequency(frequency: f64) -> Result<()> {
    if frequency > 0.0 && frequency.is_finite() && (1.0 / frequency).is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidFrequency(frequency))
    }
}
