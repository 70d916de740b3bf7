// src/error.rs

use thiserror::Error;

use crate::fetch::FetchError;

/// Outcome taxonomy for a lookup. A missing defining anchor (player name,
/// leaderboard table) is `NotFound`; anything transport-shaped is `Fetch`.
/// Field-level gaps never surface here — they default at assembly time.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no data for the requested player or category")]
    NotFound,
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}
