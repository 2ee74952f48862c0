//! Text presentation of the overview state, used by the binary.
//!
//! This is a minimal presentation layer: it follows the status field until a
//! fetch settles, renders listings as lines of text, and consumes navigation
//! requests one at a time.

use tracing::info;

use crate::models::Listing;
use crate::overview::{ListingLoader, LoadStatus};

/// Follow status transitions until the fetch settles.
///
/// `on_status` is called with every status value observed, starting with the
/// current one.
pub async fn follow_status<F>(loader: &ListingLoader, mut on_status: F) -> LoadStatus
where
    F: FnMut(LoadStatus),
{
    let mut rx = loader.subscribe_status();
    loop {
        let current = *rx.borrow_and_update();
        if let Some(status) = current {
            on_status(status);
            if status.is_settled() {
                return status;
            }
        }
        if rx.changed().await.is_err() {
            return current.unwrap_or(LoadStatus::Error);
        }
    }
}

/// Take the pending navigation target, clearing it so it is handled once.
pub fn take_selection(loader: &ListingLoader) -> Option<Listing> {
    let selected = loader.selected_listing()?;
    loader.clear_selection();
    info!(id = %selected.id, "Navigating to listing details");
    Some(selected)
}

/// Price with thousands separators, suffixed with "/month" for rentals.
pub fn format_price(listing: &Listing) -> String {
    let whole = listing.price.round().max(0.0) as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if listing.is_rental() {
        format!("${}/month", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// One listing as a single line.
pub fn format_listing(listing: &Listing) -> String {
    format!(
        "{:>8}  {:<4}  {:>16}  {}",
        listing.id,
        listing.kind,
        format_price(listing),
        listing.img_src_url
    )
}
