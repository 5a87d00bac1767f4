//! Submit-time validation rules for task fields.
//!
//! Each rule is a pure function so it can run without any presentation
//! layer. [`validate_submission`] combines them and reports every failing
//! field at once.

use super::{DueDate, TaskFieldError, TaskValidationError};
use chrono::NaiveDate;
use mockable::Clock;

/// Validates that the title is not blank.
///
/// # Errors
///
/// Returns [`TaskFieldError::TitleRequired`] when the trimmed title is empty.
pub fn validate_title(title: &str) -> Result<(), TaskFieldError> {
    if title.trim().is_empty() {
        return Err(TaskFieldError::TitleRequired);
    }
    Ok(())
}

/// Validates that the due date is not before `today`.
///
/// Both sides are calendar dates, so the time of day plays no part.
///
/// # Errors
///
/// Returns [`TaskFieldError::DueDateInPast`] when `due_date` is strictly
/// earlier than `today`.
pub fn validate_due_date(due_date: DueDate, today: NaiveDate) -> Result<(), TaskFieldError> {
    if due_date.date() < today {
        return Err(TaskFieldError::DueDateInPast);
    }
    Ok(())
}

/// Parses and validates a raw `YYYY-MM-DD` due date string.
///
/// # Errors
///
/// Returns [`TaskFieldError::MalformedDueDate`] for unparsable input or
/// [`TaskFieldError::DueDateInPast`] for a date before `today`.
pub fn validate_raw_due_date(raw: &str, today: NaiveDate) -> Result<DueDate, TaskFieldError> {
    let due_date = DueDate::parse(raw)?;
    validate_due_date(due_date, today)?;
    Ok(due_date)
}

/// Runs every field rule for a create or edit submission.
///
/// Returns the parsed due date when the submission is acceptable.
///
/// # Errors
///
/// Returns [`TaskValidationError`] carrying the failure of each invalid
/// field.
pub fn validate_submission(
    title: &str,
    raw_due_date: &str,
    today: NaiveDate,
) -> Result<DueDate, TaskValidationError> {
    match (
        validate_title(title),
        validate_raw_due_date(raw_due_date, today),
    ) {
        (Ok(()), Ok(due_date)) => Ok(due_date),
        (title_outcome, due_date_outcome) => Err(TaskValidationError::new(
            title_outcome.err(),
            due_date_outcome.err(),
        )),
    }
}

/// Returns the current UTC calendar date according to `clock`.
#[must_use]
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.utc().date_naive()
}
