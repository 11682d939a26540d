use okra_api::ObjectiveTransport;
use okra_core::types::{
    Objective, ObjectiveDraft, ObjectiveId, ObjectivePatch, Role, RoleId, ViewRole,
};
use okra_core::validate;
use okra_store::{ObjectiveCache, SessionStore};

use crate::ClientError;

/// Orchestrates the session cache and the remote API.
///
/// The server is the system of record. Every mutation goes remote first and
/// the cache is reconciled only from the server's response, so a failed
/// request leaves the cache exactly as it was. The full objective set is
/// pulled at most once per session; filtering, sorting and the
/// Assignee→Owner fallback all run locally against the cached set.
pub struct ObjectiveRepository<S, T> {
    cache: ObjectiveCache<S>,
    transport: T,
    user: RoleId,
    roles: Option<Vec<Role>>,
}

impl<S: SessionStore, T: ObjectiveTransport> ObjectiveRepository<S, T> {
    pub fn new(store: S, transport: T, user: RoleId) -> Self {
        Self {
            cache: ObjectiveCache::new(store),
            transport,
            user,
            roles: None,
        }
    }

    pub fn user(&self) -> &RoleId {
        &self.user
    }

    pub fn cache(&self) -> &ObjectiveCache<S> {
        &self.cache
    }

    /// Pull server truth into the session cache. A populated cache is
    /// trusted and the network is skipped entirely.
    pub async fn load_initial(&mut self) -> Result<(), ClientError> {
        if self.cache.get()?.is_some() {
            tracing::debug!("session cache already populated, skipping server fetch");
            return Ok(());
        }
        self.refresh().await
    }

    /// Unconditionally refetch the full set and overwrite the cache.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let objectives = self.transport.fetch_all(None).await?;
        tracing::info!(count = objectives.len(), "loaded objective set from server");
        self.cache.replace_all(&objectives)?;
        Ok(())
    }

    async fn cached_or_fetched(&mut self) -> Result<Vec<Objective>, ClientError> {
        if let Some(objectives) = self.cache.get()? {
            return Ok(objectives);
        }
        let objectives = self.transport.fetch_all(None).await?;
        self.cache.replace_all(&objectives)?;
        Ok(objectives)
    }

    /// The current user's objectives for `year` in the given role.
    ///
    /// An empty Assignee view retries once as Owner, writing the switched
    /// role back through `view_as` so the caller's screen state follows.
    /// The retry never cascades: an empty Owner view (whether requested or
    /// reached by fallback) is returned as-is.
    pub async fn list_mine(
        &mut self,
        year: i32,
        view_as: &mut ViewRole,
    ) -> Result<Vec<Objective>, ClientError> {
        let all = self.cached_or_fetched().await?;
        let mine = filter_mine(&all, year, &self.user, *view_as);

        if mine.is_empty() && *view_as == ViewRole::Assignee {
            tracing::debug!(year, "no objectives as assignee, retrying as owner");
            *view_as = ViewRole::Owner;
            return Ok(filter_mine(&all, year, &self.user, ViewRole::Owner));
        }

        Ok(mine)
    }

    /// All objectives for `year`, ordered by assignee display name.
    /// Equal names keep their cache order.
    pub async fn list_all(&mut self, year: i32) -> Result<Vec<Objective>, ClientError> {
        let mut all = self.cached_or_fetched().await?;
        all.retain(|o| o.year == year);
        all.sort_by_cached_key(|o| o.assignee.to_lowercase());
        Ok(all)
    }

    /// Look up one objective from the cached set.
    pub async fn get(&mut self, id: ObjectiveId) -> Result<Option<Objective>, ClientError> {
        Ok(self
            .cached_or_fetched()
            .await?
            .into_iter()
            .find(|o| o.id == id))
    }

    /// Validate and submit a new objective; on success the server-assigned
    /// record is appended to the cache.
    pub async fn create(&mut self, draft: ObjectiveDraft) -> Result<Objective, ClientError> {
        validate::validate_draft(&draft)?;
        let created = self.transport.create(&draft).await?;
        self.cache.append(created.clone())?;
        tracing::info!(id = %created.id, "objective created");
        Ok(created)
    }

    /// Apply `patch` to an existing objective. Months in
    /// `patch.monthly_updates` are merged over the cached entry's map
    /// before the request goes out, so untouched months survive.
    pub async fn update(
        &mut self,
        id: ObjectiveId,
        mut patch: ObjectivePatch,
    ) -> Result<Objective, ClientError> {
        let cached = self.cached_or_fetched().await?;
        let existing = cached
            .iter()
            .find(|o| o.id == id)
            .ok_or(ClientError::UnknownObjective(id))?;

        let mut merged = existing.monthly_updates.clone();
        merged.extend(patch.monthly_updates);
        patch.monthly_updates = merged;

        let updated = self.transport.update(id, &patch).await?;
        self.cache.update_by_id(updated.clone())?;
        tracing::info!(id = %id, "objective updated");
        Ok(updated)
    }

    pub async fn remove(&mut self, id: ObjectiveId) -> Result<(), ClientError> {
        self.transport.delete(id).await?;
        self.cache.remove_by_id(id)?;
        tracing::info!(id = %id, "objective deleted");
        Ok(())
    }

    /// Role reference data, fetched once and memoized for the session.
    pub async fn roles(&mut self) -> Result<&[Role], ClientError> {
        if self.roles.is_none() {
            self.roles = Some(self.transport.fetch_roles().await?);
        }
        Ok(self.roles.as_deref().unwrap_or_default())
    }
}

fn filter_mine(all: &[Objective], year: i32, user: &RoleId, view_as: ViewRole) -> Vec<Objective> {
    all.iter()
        .filter(|o| o.year == year)
        .filter(|o| match view_as {
            ViewRole::Assignee => &o.assignee_id == user,
            ViewRole::Owner => &o.owner_id == user,
        })
        .cloned()
        .collect()
}
