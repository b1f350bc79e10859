//! Status message formatting

use crate::domain::homework::{HOMEWORK_NAME_FIELD, STATUS_FIELD};
use crate::domain::{HomeworkRecord, StatusVerdict};
use crate::error::ValidationError;

/// Builds the chat message announcing a homework's review status
///
/// Fails when the record has no `homework_name` or `status`, when
/// `homework_name` is not a string, or when the status is not in the
/// catalog. A non-string status is reported as an unknown status.
pub fn format_status_message(record: &HomeworkRecord) -> Result<String, ValidationError> {
    let name = record
        .name_value()
        .ok_or(ValidationError::MissingField(HOMEWORK_NAME_FIELD))?
        .as_str()
        .ok_or(ValidationError::InvalidField {
            field: HOMEWORK_NAME_FIELD,
        })?;

    let status = record
        .status_value()
        .ok_or(ValidationError::MissingField(STATUS_FIELD))?;

    let verdict = match status.as_str() {
        Some(code) => StatusVerdict::from_code(code)
            .ok_or_else(|| ValidationError::UnknownStatus(code.to_string()))?,
        None => return Err(ValidationError::UnknownStatus(status.to_string())),
    };

    Ok(format!(
        "Changed review status for \"{}\". {}",
        name,
        verdict.verdict()
    ))
}
