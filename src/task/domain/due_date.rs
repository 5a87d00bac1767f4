//! Date-only due dates.

use super::TaskFieldError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const WIRE_FORMAT: &str = "%Y-%m-%d";
const WIRE_LENGTH: usize = 10;

/// Calendar day a task is due, without a time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a `YYYY-MM-DD` date string.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFieldError::MalformedDueDate`] when the value is not a
    /// valid calendar date in that form.
    pub fn parse(value: &str) -> Result<Self, TaskFieldError> {
        let malformed = || TaskFieldError::MalformedDueDate(value.to_owned());
        let trimmed = value.trim();
        if !has_wire_shape(trimmed) {
            return Err(malformed());
        }
        NaiveDate::parse_from_str(trimmed, WIRE_FORMAT)
            .map(Self)
            .map_err(|_| malformed())
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

/// Checks the exact `YYYY-MM-DD` layout, which chrono's parser relaxes.
fn has_wire_shape(value: &str) -> bool {
    value.len() == WIRE_LENGTH
        && value.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}
