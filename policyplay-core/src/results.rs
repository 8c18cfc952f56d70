//! Short-lived hand-off of final results from a play page to its results page.

use crate::models::{EscapeResults, TapResults};
use crate::store::{KeyValueStore, StoreError, get_json, set_json};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const TAP_RESULTS_KEY: &str = "policyTapResults";
pub const ESCAPE_RESULTS_KEY: &str = "escapeRoomResults";

/// Store results for the next page to pick up.
///
/// # Errors
///
/// Returns an error if the results cannot be serialized or written.
pub fn stash_results<S, T>(store: &S, key: &str, results: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    set_json(store, key, results)
}

/// Read and delete stashed results. A second call returns `None`.
///
/// Unreadable entries are discarded and reported as absent.
pub fn take_results<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let results = match get_json::<S, T>(store, key) {
        Ok(results) => results,
        Err(err) => {
            log::warn!("discarding unreadable {key}: {err}");
            None
        }
    };
    if let Err(err) = store.remove_item(key) {
        log::warn!("failed to clear {key}: {err}");
    }
    results
}

/// Results that name the attempt they close.
pub trait AttemptResults {
    fn attempt_id(&self) -> &str;
}

impl AttemptResults for TapResults {
    fn attempt_id(&self) -> &str {
        &self.attempt_id
    }
}

impl AttemptResults for EscapeResults {
    fn attempt_id(&self) -> &str {
        &self.attempt_id
    }
}

/// Like [`take_results`], but only hands back results for `attempt_id`.
///
/// Entries without an attempt id match any attempt. Entries for another
/// attempt are still cleared.
pub fn take_results_for<S, T>(store: &S, key: &str, attempt_id: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned + AttemptResults,
{
    take_results::<S, T>(store, key).filter(|results| {
        let stored = results.attempt_id();
        let matches = stored.is_empty() || stored == attempt_id;
        if !matches {
            log::warn!("ignoring {key} for attempt {stored}, expected {attempt_id}");
        }
        matches
    })
}
