//! Review status catalog
//!
//! The review API reports one of a closed set of statuses. Each maps to a
//! fixed verdict shown to the student.

use serde::{Deserialize, Serialize};

/// Review status of a homework submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVerdict {
    /// Reviewer accepted the work
    Approved,

    /// Reviewer picked the work up
    Reviewing,

    /// Reviewer left remarks to address
    Rejected,
}

impl StatusVerdict {
    /// Every status the catalog knows about
    pub const ALL: [StatusVerdict; 3] = [
        StatusVerdict::Approved,
        StatusVerdict::Reviewing,
        StatusVerdict::Rejected,
    ];

    /// Looks up a status code as sent by the review API
    ///
    /// Returns `None` for anything outside the catalog.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(StatusVerdict::Approved),
            "reviewing" => Some(StatusVerdict::Reviewing),
            "rejected" => Some(StatusVerdict::Rejected),
            _ => None,
        }
    }

    /// Wire code of this status
    pub fn code(&self) -> &'static str {
        match self {
            StatusVerdict::Approved => "approved",
            StatusVerdict::Reviewing => "reviewing",
            StatusVerdict::Rejected => "rejected",
        }
    }

    /// Human-readable verdict text
    pub fn verdict(&self) -> &'static str {
        match self {
            StatusVerdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            StatusVerdict::Reviewing => "Работа взята на проверку ревьюером.",
            StatusVerdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl std::fmt::Display for StatusVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_round_trips_catalog() {
        for status in StatusVerdict::ALL {
            assert_eq!(StatusVerdict::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(StatusVerdict::from_code("pending"), None);
        assert_eq!(StatusVerdict::from_code("Approved"), None);
        assert_eq!(StatusVerdict::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&StatusVerdict::Reviewing).unwrap();
        assert_eq!(json, "\"reviewing\"");
    }
}
