//! Poll cycle errors

use homework_client::ClientError;
use homework_core::ValidationError;
use thiserror::Error;

/// Errors that end a poll cycle early
///
/// None of these stop the loop; the next cycle starts after the usual pause.
#[derive(Debug, Error)]
pub enum PollError {
    /// Review API unreachable, answered non-200, or sent something other than JSON
    #[error("review API unavailable: {0}")]
    UpstreamUnavailable(#[from] ClientError),

    /// Response or one of its records failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
