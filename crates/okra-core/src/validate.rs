use chrono::NaiveDate;
use thiserror::Error;

use crate::types::ObjectiveDraft;

/// Minimum span between start and target date, in calendar days.
pub const MIN_SPAN_DAYS: i64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} is not a valid date: {value} (expected YYYY-MM-DD)")]
    BadDate { field: &'static str, value: String },
    #[error("target date must be later than start date")]
    TargetNotAfterStart,
    #[error("target date must be at least {MIN_SPAN_DAYS} days after start date (got {days})")]
    SpanTooShort { days: i64 },
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::BadDate {
        field,
        value: value.to_string(),
    })
}

/// Check a draft before submission. The first violated rule wins, and a
/// failing draft must never reach the network.
pub fn validate_draft(draft: &ObjectiveDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title"));
    }
    if draft.assignee_id.is_empty() {
        return Err(ValidationError::MissingField("assignee"));
    }
    if draft.owner_id.is_empty() {
        return Err(ValidationError::MissingField("owner"));
    }
    if draft.capital.trim().is_empty() {
        return Err(ValidationError::MissingField("capital type"));
    }
    if draft.start_date.trim().is_empty() {
        return Err(ValidationError::MissingField("start date"));
    }
    if draft.target_date.trim().is_empty() {
        return Err(ValidationError::MissingField("target date"));
    }

    let start = parse_date("start date", &draft.start_date)?;
    let target = parse_date("target date", &draft.target_date)?;

    if target <= start {
        return Err(ValidationError::TargetNotAfterStart);
    }
    let days = (target - start).num_days();
    if days < MIN_SPAN_DAYS {
        return Err(ValidationError::SpanTooShort { days });
    }

    Ok(())
}
