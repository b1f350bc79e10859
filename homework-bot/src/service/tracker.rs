//! Status tracker
//!
//! Remembers the last announced status of every homework for the life of
//! the process and picks which records of a fresh response to announce.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use homework_core::domain::HomeworkRecord;

/// Which records of a response get announced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotifyPolicy {
    /// Every record whose status differs from the last one announced
    #[default]
    DiffAll,

    /// Only the first (most recent) record of a non-empty response
    NewestOnly,
}

impl FromStr for NotifyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diff-all" => Ok(NotifyPolicy::DiffAll),
            "newest-only" => Ok(NotifyPolicy::NewestOnly),
            other => Err(format!(
                "unknown policy '{}', expected 'diff-all' or 'newest-only'",
                other
            )),
        }
    }
}

impl fmt::Display for NotifyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyPolicy::DiffAll => write!(f, "diff-all"),
            NotifyPolicy::NewestOnly => write!(f, "newest-only"),
        }
    }
}

/// Tracks announced statuses by homework name
///
/// Entries are only ever added or overwritten.
#[derive(Debug, Default)]
pub struct StatusTracker {
    policy: NotifyPolicy,
    seen: HashMap<String, String>,
}

impl StatusTracker {
    pub fn new(policy: NotifyPolicy) -> Self {
        Self {
            policy,
            seen: HashMap::new(),
        }
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    /// Last announced status of `name`
    pub fn seen_status(&self, name: &str) -> Option<&str> {
        self.seen.get(name).map(String::as_str)
    }

    /// Number of homeworks with a known status
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Picks the records of `homeworks` that should be announced
    ///
    /// Nothing is remembered until [`StatusTracker::commit`] is called.
    /// Records lacking a name or a string status are always picked so that
    /// formatting reports them.
    pub fn select<'a>(&self, homeworks: &'a [HomeworkRecord]) -> Vec<&'a HomeworkRecord> {
        match self.policy {
            NotifyPolicy::NewestOnly => homeworks.first().into_iter().collect(),
            NotifyPolicy::DiffAll => {
                // Repeated names within one response compare against each other
                let mut pending: HashMap<&'a str, &'a str> = HashMap::new();

                homeworks
                    .iter()
                    .filter(|record| match (record.name(), record.status()) {
                        (Some(name), Some(status)) => {
                            let previous = pending
                                .get(name)
                                .copied()
                                .or_else(|| self.seen_status(name));
                            if previous == Some(status) {
                                false
                            } else {
                                pending.insert(name, status);
                                true
                            }
                        }
                        _ => true,
                    })
                    .collect()
            }
        }
    }

    /// Remembers the statuses of announced records
    pub fn commit(&mut self, records: &[&HomeworkRecord]) {
        for record in records {
            if let (Some(name), Some(status)) = (record.name(), record.status()) {
                self.seen.insert(name.to_string(), status.to_string());
            }
        }
    }
}
