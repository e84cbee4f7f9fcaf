//! Trapezoidal averaging over one period.
//!
//! The average of a signal over `[0, T]` is estimated with the composite
//! trapezoidal rule on `N` equal subintervals of width `dt = T/N`:
//!
//! ```text
//! sum = Σ (f(t_i) + f(t_{i+1})) * 0.5 * dt
//! avg = sum / T
//! ```
//!
//! Two summation ranges are available through [`Rule`]. The default,
//! `Rule::Truncated`, stops at `i = N-2` and therefore integrates
//! `[0, T - dt]` while still dividing by `T`; this reproduces the figures
//! printed by earlier releases. `Rule::FullPeriod` is the textbook rule.

use crate::params::SignalParams;
use crate::signal::{Periodic, Signal};
use crate::waveform::SignalType;
use log::trace;

/// Number of subintervals used when none is given.
pub const DEFAULT_SUBINTERVALS: usize = 1000;

/// Which subintervals the trapezoidal sum covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    /// Subintervals `0..N-1`, leaving out the last one.
    #[default]
    Truncated,
    /// All `N` subintervals.
    FullPeriod,
}

impl Rule {
    /// Number of trapezoids summed for `n` subintervals.
    pub fn trapezoids(self, n: usize) -> usize {
        match self {
            Rule::Truncated => n.saturating_sub(1),
            Rule::FullPeriod => n,
        }
    }
}

/// Integrates `signal` from `0` to `t` with the given rule.
///
/// `n == 0` is treated as a single subinterval.
pub fn integrate<S: Signal>(signal: &S, t: f64, n: usize, rule: Rule) -> f64 {
    let n = n.max(1);
    let dt = t / n as f64;

    // samples[i] is f(i * dt)
    let mut samples = vec![0.0; rule.trapezoids(n) + 1];
    signal.sample(&mut samples, 0.0, dt);

    let mut sum = 0.0;
    for pair in samples.windows(2) {
        sum += (pair[0] + pair[1]) * 0.5 * dt;
    }

    sum
}

/// Mean value of `signal` over `[0, t]`.
///
/// A zero-length window gives NaN.
pub fn average_with<S: Signal>(signal: &S, t: f64, n: usize, rule: Rule) -> f64 {
    let avg = integrate(signal, t, n, rule) / t;
    trace!("averaged over t={t} with n={n} ({rule:?}): {avg}");
    avg
}

/// Mean value of the full signal `U * g(2*pi*f0*t + phi) + C` over `[0, t]`.
///
/// Uses the truncated summation; see the module docs.
///
/// # Examples
///
/// ```
/// use wave_avg::{SignalParams, SignalType, calculate_avg, DEFAULT_SUBINTERVALS};
///
/// let params = SignalParams::new(1.0, 1.0, 0.0, 0.0).unwrap();
/// let avg = calculate_avg(&params, SignalType::Sine, params.period(), DEFAULT_SUBINTERVALS);
/// assert_eq!(format!("{avg:.5}"), "0.00000");
/// ```
pub fn calculate_avg(params: &SignalParams, ty: SignalType, t: f64, n: usize) -> f64 {
    average_with(&params.signal(ty), t, n, Rule::Truncated)
}

/// Mean value over exactly one period with [`DEFAULT_SUBINTERVALS`].
pub fn average(params: &SignalParams, ty: SignalType, rule: Rule) -> f64 {
    let signal = params.signal(ty);
    average_with(&signal, signal.period(), DEFAULT_SUBINTERVALS, rule)
}
