//! Response validation
//!
//! Checks the shape of a decoded review API response before anything
//! looks at individual records. Checks run in a fixed order and the first
//! violation wins.

use serde_json::Value;

use crate::domain::homework::{CURRENT_DATE_KEY, HOMEWORKS_KEY};
use crate::domain::{ApiResponse, HomeworkRecord};
use crate::error::ValidationError;

/// Validates a response and returns its homework list
///
/// Records are returned as-is and in order; their fields are checked later
/// by [`crate::format_status_message`].
pub fn extract_homeworks(response: &Value) -> Result<Vec<HomeworkRecord>, ValidationError> {
    validate_response(response).map(|response| response.homeworks)
}

/// Validates a response and returns both the homework list and the
/// server timestamp
pub fn validate_response(response: &Value) -> Result<ApiResponse, ValidationError> {
    let object = response
        .as_object()
        .ok_or_else(|| ValidationError::malformed("not an object"))?;

    if object.is_empty() {
        return Err(ValidationError::malformed("empty object"));
    }

    let homeworks = object
        .get(HOMEWORKS_KEY)
        .ok_or_else(|| ValidationError::malformed(format!("missing \"{}\"", HOMEWORKS_KEY)))?;

    let current_date = object
        .get(CURRENT_DATE_KEY)
        .ok_or_else(|| ValidationError::malformed(format!("missing \"{}\"", CURRENT_DATE_KEY)))?;

    let homeworks = homeworks.as_array().ok_or_else(|| {
        ValidationError::malformed(format!("\"{}\" is not a list", HOMEWORKS_KEY))
    })?;

    Ok(ApiResponse {
        homeworks: homeworks.iter().cloned().map(HomeworkRecord::from).collect(),
        current_date: current_date.as_i64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn malformed(reason: &str) -> ValidationError {
        ValidationError::MalformedResponse(reason.to_string())
    }

    #[test]
    fn test_extract_preserves_order_and_length() {
        let response = json!({
            "homeworks": [
                {"homework_name": "proj3", "status": "reviewing"},
                {"homework_name": "proj2", "status": "rejected"},
                {"homework_name": "proj1", "status": "approved"}
            ],
            "current_date": 1_700_000_000
        });

        let homeworks = extract_homeworks(&response).unwrap();
        let names: Vec<_> = homeworks.iter().map(|h| h.name().unwrap()).collect();
        assert_eq!(names, vec!["proj3", "proj2", "proj1"]);
        assert_eq!(homeworks[1].as_value(), &response["homeworks"][1]);
    }

    #[test]
    fn test_extract_empty_list() {
        let response = json!({"homeworks": [], "current_date": 0});
        assert!(extract_homeworks(&response).unwrap().is_empty());
    }

    #[test]
    fn test_records_are_not_checked_here() {
        let response = json!({"homeworks": [{"foo": "bar"}, 42], "current_date": 0});
        assert_eq!(extract_homeworks(&response).unwrap().len(), 2);
    }

    #[test]
    fn test_not_an_object() {
        assert_eq!(
            extract_homeworks(&json!([1, 2])).unwrap_err(),
            malformed("not an object")
        );
        assert_eq!(
            extract_homeworks(&json!("homeworks")).unwrap_err(),
            malformed("not an object")
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(
            extract_homeworks(&json!({})).unwrap_err(),
            malformed("empty object")
        );
    }

    #[test]
    fn test_missing_homeworks() {
        let response = json!({"current_date": 0});
        assert_eq!(
            extract_homeworks(&response).unwrap_err(),
            malformed("missing \"homeworks\"")
        );
    }

    #[test]
    fn test_missing_current_date() {
        let response = json!({"homeworks": []});
        assert_eq!(
            extract_homeworks(&response).unwrap_err(),
            malformed("missing \"current_date\"")
        );
    }

    #[test]
    fn test_homeworks_not_a_list() {
        let response = json!({"homeworks": {"homework_name": "proj1"}, "current_date": 0});
        assert_eq!(
            extract_homeworks(&response).unwrap_err(),
            malformed("\"homeworks\" is not a list")
        );
    }

    #[test]
    fn test_first_violation_wins() {
        // Missing homeworks is reported before the missing timestamp
        let response = json!({"other": 1});
        assert_eq!(
            extract_homeworks(&response).unwrap_err(),
            malformed("missing \"homeworks\"")
        );

        // Missing timestamp is reported before the wrong list type
        let response = json!({"homeworks": "nope"});
        assert_eq!(
            extract_homeworks(&response).unwrap_err(),
            malformed("missing \"current_date\"")
        );
    }

    #[test]
    fn test_validate_response_exposes_current_date() {
        let response = json!({"homeworks": [], "current_date": 1_700_000_123});
        assert_eq!(
            validate_response(&response).unwrap().current_date,
            Some(1_700_000_123)
        );

        let response = json!({"homeworks": [], "current_date": "yesterday"});
        assert_eq!(validate_response(&response).unwrap().current_date, None);
    }
}
