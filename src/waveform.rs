//! Waveform shapes and the unit-amplitude carrier built from them.

use crate::signal::{Periodic, Signal};
use std::f64::consts::PI;
use std::fmt;

/// The periodic function family a signal follows.
///
/// Every shape has period `2*pi` in its phase argument and stays in
/// `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignalType {
    #[default]
    Sine,
    Square,
    Triangle,
}

impl SignalType {
    /// All shapes in menu order.
    pub const ALL: [SignalType; 3] = [SignalType::Sine, SignalType::Square, SignalType::Triangle];

    /// Evaluates the shape at phase angle `x` (radians).
    ///
    /// # Examples
    ///
    /// ```
    /// use wave_avg::SignalType;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_eq!(SignalType::Sine.eval(FRAC_PI_2), 1.0);
    /// assert_eq!(SignalType::Square.eval(FRAC_PI_2), 1.0);
    /// assert!((SignalType::Triangle.eval(FRAC_PI_2) - 1.0).abs() < 1e-12);
    /// ```
    pub fn eval(self, x: f64) -> f64 {
        match self {
            SignalType::Sine => x.sin(),
            // sin(x) == 0 falls to the low level
            SignalType::Square => {
                if x.sin() > 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            SignalType::Triangle => 2.0 / PI * x.sin().asin(),
        }
    }

    /// Maps a menu answer (`"1"`, `"2"`, `"3"`) to a shape.
    ///
    /// Returns `None` for anything else; the caller decides the fallback.
    pub fn from_choice(choice: &str) -> Option<SignalType> {
        match choice.trim() {
            "1" => Some(SignalType::Sine),
            "2" => Some(SignalType::Square),
            "3" => Some(SignalType::Triangle),
            _ => None,
        }
    }

    /// Menu number of this shape.
    pub fn choice(self) -> u8 {
        match self {
            SignalType::Sine => 1,
            SignalType::Square => 2,
            SignalType::Triangle => 3,
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalType::Sine => "Sine",
            SignalType::Square => "Square",
            SignalType::Triangle => "Triangle",
        };
        f.write_str(name)
    }
}

/// Waveform shape function `g(x, type)`.
///
/// Shorthand for [`SignalType::eval`].
pub fn g(x: f64, ty: SignalType) -> f64 {
    ty.eval(x)
}

/// A unit-amplitude waveform at a given frequency and phase.
///
/// Evaluates `g(2*pi*f0*t + phi)`. Combine with [`SignalExt`](crate::SignalExt)
/// to apply amplitude and DC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Carrier {
    shape: SignalType,
    frequency: f64,
    phase: f64,
}

impl Carrier {
    /// Creates a new carrier.
    ///
    /// # Arguments
    ///
    /// * `shape` - Waveform family
    /// * `frequency` - Frequency in Hz
    /// * `phase` - Phase offset in radians
    pub fn new(shape: SignalType, frequency: f64, phase: f64) -> Self {
        Self {
            shape,
            frequency,
            phase,
        }
    }
}

impl Signal for Carrier {
    fn value_at(&self, t: f64) -> f64 {
        self.shape.eval(2.0 * PI * self.frequency * t + self.phase)
    }
}

impl Periodic for Carrier {
    fn frequency(&self) -> f64 {
        self.frequency
    }
}
