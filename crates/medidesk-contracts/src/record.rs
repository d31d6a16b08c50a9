//! The `Record` trait implemented by every stored entity.

use serde::{de::DeserializeOwned, Serialize};

/// A storable entity with a string identity.
///
/// Repositories match records by `record_id()` only; no other field is
/// treated as a key.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular noun used in logs and `NotFound` errors (e.g. `"appointment"`).
    const KIND: &'static str;

    /// Plural form; also the JSON file stem of the persistent backend.
    const COLLECTION: &'static str;

    fn record_id(&self) -> &str;
}
