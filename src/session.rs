//! Interactive prompt loop.
//!
//! A `Session` reads answers line by line from any `BufRead` and writes
//! prompts and results to any `Write`, so the binary drives it with the
//! terminal and tests drive it with in-memory buffers.

use crate::config::{Config, FrequencyPolicy};
use crate::error::{Error, Result};
use crate::input::{EXIT_COMMAND, MenuChoice, parse_menu_choice, parse_number};
use crate::integrate::average;
use crate::params::{SignalParams, check_frequency};
use crate::waveform::SignalType;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Prompt loop reading answers from `R` and writing prompts and results to `W`.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user exits, or after one result when not repeating.
    ///
    /// Exiting (or end of input) returns `Ok(())`. With
    /// `FrequencyPolicy::Abort` a non-positive frequency ends the run with
    /// `Error::InvalidFrequency`.
    pub fn run(&mut self) -> Result<()> {
        if self.config.repeat {
            writeln!(
                self.output,
                "Type '{EXIT_COMMAND}' at any prompt to quit."
            )?;
        }

        loop {
            match self.compute_once() {
                Ok(_) if self.config.repeat => {}
                Ok(_) => return Ok(()),
                Err(Error::Cancelled) => {
                    debug!("session cancelled");
                    return Ok(());
                }
                Err(Error::InvalidFrequency(frequency)) => {
                    warn!("rejected frequency {frequency}");
                    writeln!(self.output, "Frequency must be greater than zero.")?;
                    if self.config.on_invalid_frequency == FrequencyPolicy::Abort {
                        return Err(Error::InvalidFrequency(frequency));
                    }
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Reads one set of parameters and a waveform, prints and returns the average.
    pub fn compute_once(&mut self) -> Result<f64> {
        let params = self.read_params()?;
        let ty = self.read_signal_type()?;

        let avg = average(&params, ty, self.config.rule);
        debug!("{ty} {params:?} ({:?}): average {avg}", self.config.rule);

        writeln!(
            self.output,
            "Average signal value: {} V",
            self.config.format.format(avg)
        )?;
        Ok(avg)
    }

    fn read_params(&mut self) -> Result<SignalParams> {
        let amplitude = self.read_number("Enter signal amplitude (U): ")?;
        let frequency = self.read_number("Enter signal frequency (f0): ")?;
        // checked before asking for the rest
        check_frequency(frequency)?;
        let phase = self.read_number("Enter phase shift (phi): ")?;
        let offset = self.read_number("Enter DC offset (C): ")?;
        SignalParams::new(amplitude, frequency, phase, offset)
    }

    fn read_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let line = self.prompt(prompt)?;
            match parse_number(&line) {
                Err(Error::InvalidNumber(text)) => {
                    writeln!(self.output, "Invalid number {text:?}, please try again.")?;
                }
                result => return result,
            }
        }
    }

    fn read_signal_type(&mut self) -> Result<SignalType> {
        writeln!(self.output, "Select signal waveform:")?;
        for ty in SignalType::ALL {
            writeln!(self.output, "{} - {ty}", ty.choice())?;
        }

        let line = self.prompt("Your choice: ")?;
        match parse_menu_choice(&line)? {
            MenuChoice::Picked(ty) => Ok(ty),
            MenuChoice::Fallback(ty) => {
                warn!("unknown waveform choice {:?}", line.trim());
                writeln!(self.output, "Invalid choice, defaulting to {ty}.")?;
                Ok(ty)
            }
        }
    }

    /// Writes `text` and reads one line; end of input counts as exit.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(Error::Cancelled);
        }
        // undecodable bytes become U+FFFD and fail to parse like any typo
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
