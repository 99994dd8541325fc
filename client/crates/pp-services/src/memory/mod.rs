//! In-process collaborators for offline runs and tests.
//!
//! They keep the same contracts as the REST clients (merge writes, session
//! broadcasts, readable failures) and expose hooks to inject failures and
//! latency.

mod blob_store;
mod profile_store;
mod session_authority;
mod weather;

pub use blob_store::InMemoryBlobStore;
pub use profile_store::InMemoryProfileStore;
pub use session_authority::InMemorySessionAuthority;
pub use weather::StaticWeatherLookup;

use std::sync::{Mutex, MutexGuard};

/// Lock ignoring poisoning; the guarded maps stay consistent between statements
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
