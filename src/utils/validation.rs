use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::AppError;
use crate::planner::calendar::in_supported_range;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(describe)
}

fn describe(err: ValidationErrors) -> AppError {
    let details = err
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let errors = errs
                .iter()
                .map(|e| format!("{}: {}", e.code, e.message.as_deref().unwrap_or("")))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, errors)
        })
        .collect::<Vec<_>>()
        .join("; ");
    AppError::BadRequest(format!("Validation failed: {}", details))
}

pub fn validate_calendar_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if !in_supported_range(*date) {
        let mut error = ValidationError::new("date_out_of_range");
        error.message = Some("Date must fall between years 1900 and 2999".into());
        return Err(error);
    }
    Ok(())
}
