//! The listing loader behind the overview screen.
//!
//! [`ListingLoader`] owns three observable fields:
//!
//! - load status (`None` until the first fetch starts)
//! - the listing collection
//! - the selected listing, a one-shot navigation request
//!
//! A fetch is started as soon as the loader is built. It runs as a tokio task
//! bound to the loader: dropping the loader aborts the task and any result
//! that is still pending is discarded.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::status::LoadStatus;
use crate::error::FetchError;
use crate::models::Listing;
use crate::observable::Observable;
use crate::traits::ListingSource;

/// The observable state, shared with in-flight fetch tasks through a `Weak`.
#[derive(Debug, Default)]
struct Fields {
    status: Observable<Option<LoadStatus>>,
    listings: Observable<Vec<Listing>>,
    selected: Observable<Option<Listing>>,
}

impl Fields {
    /// Publish a finished fetch. The collection is written before the status
    /// so anyone woken by a settled status reads the matching collection.
    fn apply(&self, result: Result<Vec<Listing>, FetchError>) {
        match result {
            Ok(listings) => {
                info!(count = listings.len(), "Listings loaded");
                self.listings.set(listings);
                self.status.set(Some(LoadStatus::Done));
            }
            Err(err) => {
                warn!(error = %err, code = err.error_code(), "Listing fetch failed");
                self.listings.set(Vec::new());
                self.status.set(Some(LoadStatus::Error));
            }
        }
    }
}

/// Loads listings from a [`ListingSource`] and tracks the selected listing.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use marsview::overview::{ListingLoader, LoadStatus};
///
/// let loader = ListingLoader::new(Arc::new(source));
/// if loader.wait_until_settled().await == LoadStatus::Done {
///     for listing in loader.listings() {
///         println!("{}", listing.id);
///     }
/// }
/// ```
pub struct ListingLoader {
    fields: Arc<Fields>,
    source: Arc<dyn ListingSource>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl ListingLoader {
    /// Build a loader and start fetching immediately.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        let loader = Self {
            fields: Arc::new(Fields::default()),
            source,
            tasks: Mutex::new(Vec::new()),
        };
        loader.trigger_fetch();
        loader
    }

    /// Set the status to `Loading` and fetch the full collection in the
    /// background.
    ///
    /// A fetch that is already in flight is not cancelled; whichever finishes
    /// last decides the published state.
    pub fn trigger_fetch(&self) {
        self.fields.status.set(Some(LoadStatus::Loading));

        let source = Arc::clone(&self.source);
        let fields: Weak<Fields> = Arc::downgrade(&self.fields);

        let handle = tokio::spawn(async move {
            let result = source.get_listings().await;
            match fields.upgrade() {
                Some(fields) => fields.apply(result),
                None => debug!("Loader dropped before fetch completed, discarding result"),
            }
        });

        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// Record `listing` as the pending navigation target.
    pub fn select_listing(&self, listing: Listing) {
        debug!(id = %listing.id, "Listing selected");
        self.fields.selected.set(Some(listing));
    }

    /// Clear the pending navigation target once it has been handled.
    pub fn clear_selection(&self) {
        self.fields.selected.set(None);
    }

    /// Current load status, `None` only before the first fetch.
    pub fn status(&self) -> Option<LoadStatus> {
        self.fields.status.get()
    }

    /// Current listing collection.
    pub fn listings(&self) -> Vec<Listing> {
        self.fields.listings.get()
    }

    /// Current navigation target.
    pub fn selected_listing(&self) -> Option<Listing> {
        self.fields.selected.get()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<Option<LoadStatus>> {
        self.fields.status.subscribe()
    }

    pub fn subscribe_listings(&self) -> watch::Receiver<Vec<Listing>> {
        self.fields.listings.subscribe()
    }

    pub fn subscribe_selection(&self) -> watch::Receiver<Option<Listing>> {
        self.fields.selected.subscribe()
    }

    /// Wait until the status is `Done` or `Error` and return it.
    pub async fn wait_until_settled(&self) -> LoadStatus {
        let mut rx = self.fields.status.subscribe();
        // The sender lives in `self.fields`, so `wait_for` cannot observe a
        // closed channel while `self` is borrowed.
        let settled = rx
            .wait_for(|status| status.is_some_and(LoadStatus::is_settled))
            .await
            .ok()
            .and_then(|status| *status);
        settled.unwrap_or(LoadStatus::Error)
    }

    /// Fetch tasks that have not finished yet.
    pub fn pending_fetches(&self) -> usize {
        let tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.iter().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for ListingLoader {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut().unwrap_or_else(PoisonError::into_inner);
        for task in tasks.drain(..) {
            if !task.is_finished() {
                debug!("Aborting in-flight listing fetch");
            }
            task.abort();
        }
    }
}
