use tracing::debug;

use crate::{
    error::EvalError,
    evaluate,
    history::History,
    util::{format_number, parse_decimal},
};

/// The sentinel shown in place of a result when evaluation fails.
pub const ERROR_DISPLAY: &str = "ERROR";

/// The calculator's display state machine.
///
/// A `Calculator` owns the display text and the evaluation history. Button
/// presses append to the display; the equals operation runs the full
/// evaluation pipeline on it and replaces it with the result, or with the
/// [`ERROR_DISPLAY`] sentinel when anything goes wrong. No failure is fatal:
/// the calculator stays usable after showing the sentinel.
///
/// Each operation runs to completion before the next one is accepted, and a
/// `Calculator` is not synchronized; to drive one from several threads, wrap
/// it in a lock.
///
/// # Example
/// ```
/// use deskcalc::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.press("2");
/// calc.press("+");
/// calc.press("2");
/// calc.equals();
/// assert_eq!(calc.display(), "4");
/// assert_eq!(calc.history().last().unwrap().expression, "2+2");
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    display:      String,
    history:      History,
    history_open: bool,
}

impl Calculator {
    /// Creates a calculator with an empty display and no history.
    #[must_use]
    pub const fn new() -> Self {
        Self { display:      String::new(),
               history:      History::new(),
               history_open: false, }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Appends a button label to the display.
    pub fn press(&mut self, label: &str) {
        self.display.push_str(label);
    }

    /// Empties the display.
    pub fn clear(&mut self) {
        self.display.clear();
    }

    /// Evaluates the display and replaces it with the result.
    ///
    /// On success the evaluation is recorded in the history under the
    /// expression exactly as it was displayed. On any failure the display
    /// becomes the [`ERROR_DISPLAY`] sentinel, nothing is recorded, and no
    /// partial result is shown.
    pub fn equals(&mut self) {
        match evaluate(&self.display) {
            Ok(result) => {
                let expression = std::mem::take(&mut self.display);
                self.history.record(expression, result);
                self.display = format_number(result);
            },

            Err(error) => {
                debug!(%error, "evaluation failed");
                self.display.clear();
                self.display.push_str(ERROR_DISPLAY);
            },
        }
    }

    /// Removes the last character of the display.
    ///
    /// An empty or single-character display becomes `"0"` instead.
    pub fn backspace(&mut self) {
        if self.display.chars().count() <= 1 {
            self.display.clear();
            self.display.push('0');
        } else {
            self.display.pop();
        }
    }

    /// Toggles the sign of the display.
    ///
    /// Strips a leading minus when there is one, prepends one otherwise.
    pub fn toggle_sign(&mut self) {
        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Replaces the display with its square root.
    ///
    /// The whole display is parsed as one number; it shares no state with
    /// expression evaluation and records nothing in the history. Failures
    /// show the [`ERROR_DISPLAY`] sentinel.
    pub fn square_root(&mut self) {
        match square_root_of(&self.display) {
            Ok(value) => self.display = format_number(value),

            Err(error) => {
                debug!(%error, "square root failed");
                self.display.clear();
                self.display.push_str(ERROR_DISPLAY);
            },
        }
    }

    /// Returns the evaluation history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Removes every history entry.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Shows or hides the history panel.
    pub fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
    }

    /// Returns whether the history panel is shown.
    #[must_use]
    pub fn is_history_open(&self) -> bool {
        self.history_open
    }

    /// Copies a history entry's expression back into the display.
    ///
    /// Does nothing when `index` is out of range.
    pub fn recall(&mut self, index: usize) {
        if let Some(entry) = self.history.entries().get(index) {
            self.display = entry.expression.clone();
        }
    }
}

/// The square-root transform.
///
/// Parses the entire display value as one number and returns its square
/// root. A negative input produces `NaN` under the usual floating-point
/// rules rather than an error.
///
/// # Parameters
/// - `text`: The display value.
///
/// # Returns
/// The square root of the parsed value.
///
/// # Errors
/// Returns [`EvalError::InvalidNumber`] when the text does not parse as a
/// number.
///
/// # Example
/// ```
/// use deskcalc::calculator::square_root_of;
///
/// assert_eq!(square_root_of("16").unwrap(), 4.0);
/// assert!(square_root_of("-4").unwrap().is_nan());
/// assert!(square_root_of("abc").is_err());
/// ```
pub fn square_root_of(text: &str) -> Result<f64, EvalError> {
    let value =
        parse_decimal(text).ok_or_else(|| EvalError::InvalidNumber { text: text.to_string() })?;
    Ok(value.sqrt())
}
