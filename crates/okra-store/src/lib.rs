pub mod error;
pub mod session;

pub use error::StoreError;
pub use session::{MemorySessionStore, SessionStore, OBJECTIVES_KEY, TIMESTAMP_KEY};

use chrono::{DateTime, Utc};
use okra_core::types::{Objective, ObjectiveId};

/// Typed view over the session store holding the cached objective set.
///
/// Every mutation rewrites the whole collection together with a fresh
/// write timestamp; there is no incremental patching. No expiry is
/// enforced here — staleness policy belongs to the caller.
pub struct ObjectiveCache<S> {
    store: S,
}

impl<S: SessionStore> ObjectiveCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The cached collection, or `None` if nothing has been written this
    /// session.
    pub fn get(&self) -> Result<Option<Vec<Objective>>, StoreError> {
        match self.store.get(OBJECTIVES_KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Time of the last collection write, if any.
    pub fn last_write(&self) -> Option<DateTime<Utc>> {
        self.store.get(TIMESTAMP_KEY)?.parse().ok()
    }

    pub fn replace_all(&self, objectives: &[Objective]) -> Result<(), StoreError> {
        self.write(objectives)
    }

    pub fn append(&self, objective: Objective) -> Result<(), StoreError> {
        let mut all = self.get()?.unwrap_or_default();
        all.push(objective);
        self.write(&all)
    }

    /// Replace the entry whose id matches. No-op if the id is not cached.
    pub fn update_by_id(&self, objective: Objective) -> Result<(), StoreError> {
        let mut all = self.get()?.unwrap_or_default();
        if let Some(slot) = all.iter_mut().find(|o| o.id == objective.id) {
            *slot = objective;
            self.write(&all)?;
        }
        Ok(())
    }

    pub fn remove_by_id(&self, id: ObjectiveId) -> Result<(), StoreError> {
        let mut all = self.get()?.unwrap_or_default();
        all.retain(|o| o.id != id);
        self.write(&all)
    }

    /// Drop the cached collection entirely, forcing the next read to
    /// refetch from the server.
    pub fn clear(&self) {
        self.store.remove(OBJECTIVES_KEY);
        self.store.remove(TIMESTAMP_KEY);
    }

    fn write(&self, objectives: &[Objective]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(objectives)?;
        self.store.set(OBJECTIVES_KEY, &raw);
        self.store.set(TIMESTAMP_KEY, &Utc::now().to_rfc3339());
        tracing::debug!(count = objectives.len(), "session cache rewritten");
        Ok(())
    }
}
