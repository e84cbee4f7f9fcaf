//! Parsing of answers typed at the prompts.

use crate::error::{Error, Result};
use crate::waveform::SignalType;

/// Answer that ends the session from any prompt.
pub const EXIT_COMMAND: &str = "exit";

/// Returns true if `input` is the exit command.
pub fn is_exit(input: &str) -> bool {
    input.trim() == EXIT_COMMAND
}

/// Trims `input` and turns decimal commas into periods.
pub fn normalize_decimal(input: &str) -> String {
    input.trim().replace(',', ".")
}

/// Parses a decimal number, accepting `,` as the decimal separator.
///
/// # Errors
///
/// - `Error::Cancelled` for the exit command
/// - `Error::InvalidNumber` for anything that is not a finite number
///
/// # Examples
///
/// ```
/// use wave_avg::input::parse_number;
///
/// assert_eq!(parse_number("1,5").unwrap(), 1.5);
/// assert_eq!(parse_number(" -0.25\n").unwrap(), -0.25);
/// assert!(parse_number("exit").unwrap_err().is_cancelled());
/// ```
pub fn parse_number(input: &str) -> Result<f64> {
    if is_exit(input) {
        return Err(Error::Cancelled);
    }
    match normalize_decimal(input).parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumber(input.trim().to_string())),
    }
}

/// Outcome of the waveform menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// A listed entry was picked.
    Picked(SignalType),
    /// The answer matched no entry; the default shape applies.
    Fallback(SignalType),
}

impl MenuChoice {
    pub fn signal_type(self) -> SignalType {
        match self {
            MenuChoice::Picked(ty) | MenuChoice::Fallback(ty) => ty,
        }
    }
}

/// Parses a waveform menu answer.
///
/// Unknown answers fall back to [`SignalType::Sine`].
///
/// # Errors
///
/// `Error::Cancelled` for the exit command.
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice> {
    if is_exit(input) {
        return Err(Error::Cancelled);
    }
    Ok(match SignalType::from_choice(input) {
        Some(ty) => MenuChoice::Picked(ty),
        None => MenuChoice::Fallback(SignalType::default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_number("1,5").unwrap(), 1.5);
        assert_eq!(parse_number("-0,75").unwrap(), -0.75);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("42").unwrap(), 42.0);
        assert_eq!(parse_number("  3.25  ").unwrap(), 3.25);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_malformed() {
        for text in ["", "abc", "1,2,3", "1.5V", "--1"] {
            let err = parse_number(text).unwrap_err();
            assert!(matches!(err, Error::InvalidNumber(_)), "{text:?} gave {err:?}");
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("1e400").is_err());
    }

    #[test]
    fn test_exit() {
        assert!(parse_number("exit").unwrap_err().is_cancelled());
        assert!(parse_number("  exit\n").unwrap_err().is_cancelled());
        assert!(parse_menu_choice("exit").unwrap_err().is_cancelled());
    }

    #[test]
    fn test_exit_is_case_sensitive() {
        let err = parse_number("EXIT").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber(_)));
    }

    #[test]
    fn test_menu_picks() {
        assert_eq!(
            parse_menu_choice("2\n").unwrap(),
            MenuChoice::Picked(SignalType::Square)
        );
        assert_eq!(
            parse_menu_choice("3").unwrap().signal_type(),
            SignalType::Triangle
        );
    }

    #[test]
    fn test_menu_fallback_is_sine() {
        assert_eq!(
            parse_menu_choice("9").unwrap(),
            MenuChoice::Fallback(SignalType::Sine)
        );
        assert_eq!(
            parse_menu_choice("square").unwrap().signal_type(),
            SignalType::Sine
        );
    }
}
