//! Run configuration and its command line surface.

use crate::integrate::Rule;
use clap::{Parser, ValueEnum};

/// What to do when a non-positive frequency is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FrequencyPolicy {
    /// Stop the run with an error.
    Abort,
    /// Report it and ask for all parameters again.
    #[default]
    Restart,
}

/// How the computed average is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Fixed number of decimal places.
    Fixed(usize),
    /// Rust's default float formatting.
    Plain,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Fixed(5)
    }
}

impl OutputFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            OutputFormat::Fixed(digits) => format!("{value:.digits$}"),
            OutputFormat::Plain => value.to_string(),
        }
    }
}

/// Settings for a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Keep prompting after each result until `exit`.
    pub repeat: bool,
    pub on_invalid_frequency: FrequencyPolicy,
    pub format: OutputFormat,
    pub rule: Rule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repeat: true,
            on_invalid_frequency: FrequencyPolicy::default(),
            format: OutputFormat::default(),
            rule: Rule::default(),
        }
    }
}

/// Average value of a periodic signal (sine, square or triangle).
#[derive(Debug, Parser)]
#[command(name = "wave-avg", version, about)]
pub struct Cli {
    /// Compute a single average and exit
    #[arg(long)]
    pub once: bool,

    /// Action when the frequency is not greater than zero
    #[arg(long, value_enum, default_value_t = FrequencyPolicy::Restart)]
    pub on_invalid_frequency: FrequencyPolicy,

    /// Decimal places of the printed average
    #[arg(long, value_name = "DIGITS", default_value_t = 5)]
    pub precision: usize,

    /// Print the average with default float formatting
    #[arg(long)]
    pub plain: bool,

    /// Sum all subintervals of the period instead of leaving out the last
    #[arg(long)]
    pub full_period: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            repeat: !cli.once,
            on_invalid_frequency: cli.on_invalid_frequency,
            format: if cli.plain {
                OutputFormat::Plain
            } else {
                OutputFormat::Fixed(cli.precision)
            },
            rule: if cli.full_period {
                Rule::FullPeriod
            } else {
                Rule::Truncated
            },
        }
    }
}
