//! Load status of the listing fetch.

use std::fmt;

/// Outcome of the most recent fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStatus {
    /// A fetch is in flight
    Loading,
    /// The last fetch failed; the listing collection is empty
    Error,
    /// The last fetch succeeded
    Done,
}

impl LoadStatus {
    /// True for `Done` and `Error`.
    pub fn is_settled(self) -> bool {
        !matches!(self, LoadStatus::Loading)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadStatus::Loading => "LOADING",
            LoadStatus::Error => "ERROR",
            LoadStatus::Done => "DONE",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
