//! Homework domain types

use serde_json::Value;

/// Key of the homework list in an API response
pub const HOMEWORKS_KEY: &str = "homeworks";
/// Key of the server timestamp in an API response
pub const CURRENT_DATE_KEY: &str = "current_date";
/// Field holding the homework name inside a record
pub const HOMEWORK_NAME_FIELD: &str = "homework_name";
/// Field holding the review status inside a record
pub const STATUS_FIELD: &str = "status";

/// One submission's review status as returned by the review API
///
/// The record is kept as raw JSON: the list is accepted as a whole first,
/// and individual records are checked only when they are formatted.
/// Fields other than `homework_name` and `status` are carried along
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkRecord(Value);

impl HomeworkRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw homework name value, if present
    pub fn name_value(&self) -> Option<&Value> {
        self.0.get(HOMEWORK_NAME_FIELD)
    }

    /// Homework name, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.name_value().and_then(Value::as_str)
    }

    /// Raw status value, if present
    pub fn status_value(&self) -> Option<&Value> {
        self.0.get(STATUS_FIELD)
    }

    /// Status code, if present and a string
    pub fn status(&self) -> Option<&str> {
        self.status_value().and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for HomeworkRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A validated review API response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Homework records, most recent first
    pub homeworks: Vec<HomeworkRecord>,

    /// Server timestamp; `None` when present but not an integer
    pub current_date: Option<i64>,
}
