//! Six-cell one-time-code entry. Each cell holds at most one ASCII digit and
//! the widget tracks which cell should own keyboard focus, so a view only has
//! to mirror `digit(i)` into its inputs and move the caret to `focus()`.

use crate::error::AppError;

pub const OTP_LENGTH: usize = 6;

const INCOMPLETE_CODE: &str = "Please enter the complete 6-digit code.";

/// Result of offering a keystroke to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// A digit was stored; focus may have advanced.
    Filled,
    /// The cell was emptied.
    Cleared,
    /// Input was not a single digit; nothing changed.
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpInput {
    cells: [Option<char>; OTP_LENGTH],
    focus: usize,
}

impl OtpInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Records that the user moved focus, e.g. by clicking a cell.
    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(OTP_LENGTH - 1);
    }

    #[must_use]
    pub fn digit(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Cell content as the string an `<input>` value expects.
    #[must_use]
    pub fn value(&self, index: usize) -> String {
        self.digit(index).map(String::from).unwrap_or_default()
    }

    /// Applies the new value of cell `index`. Only an empty string or a single
    /// ASCII digit is accepted.
    pub fn input(&mut self, index: usize, value: &str) -> InputOutcome {
        if index >= OTP_LENGTH {
            return InputOutcome::Rejected;
        }

        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.cells[index] = None;
                InputOutcome::Cleared
            }
            (Some(digit), None) if digit.is_ascii_digit() => {
                self.cells[index] = Some(digit);
                self.focus = if index < OTP_LENGTH - 1 { index + 1 } else { index };
                InputOutcome::Filled
            }
            _ => InputOutcome::Rejected,
        }
    }

    /// Handles Backspace on cell `index`. Returns true when focus moved back.
    ///
    /// A filled cell is emptied by the input event that follows, so only an
    /// already empty cell hands focus to its left neighbour.
    pub fn backspace(&mut self, index: usize) -> bool {
        if index == 0 || index >= OTP_LENGTH || self.cells[index].is_some() {
            return false;
        }
        self.focus = index - 1;
        true
    }

    /// Spreads pasted text across the cells starting at cell 0. Non-digits are
    /// dropped and at most six digits are used; later cells keep their value.
    /// Returns the number of cells filled.
    pub fn paste(&mut self, text: &str) -> usize {
        let digits: Vec<char> = text
            .chars()
            .filter(char::is_ascii_digit)
            .take(OTP_LENGTH)
            .collect();

        if digits.is_empty() {
            return 0;
        }

        for (cell, digit) in self.cells.iter_mut().zip(&digits) {
            *cell = Some(*digit);
        }
        self.focus = digits.len() - 1;

        digits.len()
    }

    /// Joined digits, skipping empty cells.
    #[must_use]
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the code to submit, or the inline validation error when any
    /// cell is still empty.
    ///
    /// # Errors
    /// Returns `AppError::Validation` unless all six cells hold a digit.
    pub fn submission(&self) -> Result<String, AppError> {
        let code = self.code();
        if code.len() == OTP_LENGTH {
            Ok(code)
        } else {
            Err(AppError::Validation(INCOMPLETE_CODE.to_string()))
        }
    }
}
