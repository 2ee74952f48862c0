//! Scriptable [`ListingSource`] for loader tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Notify, Semaphore};

use crate::error::FetchError;
use crate::models::Listing;
use crate::traits::{HttpError, ListingSource};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Listings(Vec<Listing>),
    Http(HttpError),
    Status(u16),
}

impl MockOutcome {
    fn into_result(self) -> Result<Vec<Listing>, FetchError> {
        match self {
            MockOutcome::Listings(listings) => Ok(listings),
            MockOutcome::Http(err) => Err(FetchError::Http(err)),
            MockOutcome::Status(status) => Err(FetchError::Status { status }),
        }
    }
}

/// A listing source with a fixed outcome.
///
/// A held source parks every call until [`MockListingSource::release`] is
/// called, which lets tests observe the in-flight state and drop the loader
/// mid-fetch.
#[derive(Debug, Clone)]
pub struct MockListingSource {
    outcome: MockOutcome,
    gate: Option<Arc<Semaphore>>,
    started: Arc<Notify>,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
    abandoned: Arc<AtomicUsize>,
}

impl MockListingSource {
    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            gate: None,
            started: Arc::new(Notify::new()),
            calls: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
            abandoned: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Resolve with `listings`.
    pub fn succeeding(listings: Vec<Listing>) -> Self {
        Self::with_outcome(MockOutcome::Listings(listings))
    }

    /// Fail with a transport error.
    pub fn failing(err: HttpError) -> Self {
        Self::with_outcome(MockOutcome::Http(err))
    }

    /// Fail as if the server answered with `status`.
    pub fn failing_with_status(status: u16) -> Self {
        Self::with_outcome(MockOutcome::Status(status))
    }

    /// Park calls until released.
    pub fn held(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    /// Let one parked call through.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Resolves once a call has entered `get_listings`.
    pub async fn started(&self) {
        self.started.notified().await;
    }

    /// Calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calls that ran to completion.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Calls whose future was dropped before completing.
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }
}

/// Counts a call as abandoned unless it is marked finished before drop.
struct CallGuard {
    abandoned: Arc<AtomicUsize>,
    finished: bool,
}

impl Drop for CallGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.abandoned.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl ListingSource for MockListingSource {
    async fn get_listings(&self) -> Result<Vec<Listing>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut guard = CallGuard {
            abandoned: Arc::clone(&self.abandoned),
            finished: false,
        };
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| FetchError::Other(e.to_string()))?;
            permit.forget();
        }

        guard.finished = true;
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone().into_result()
    }
}
