use async_trait::async_trait;

use okra_core::types::{
    Objective, ObjectiveDraft, ObjectiveId, ObjectivePatch, Role, RoleId, ViewRole,
};

use crate::ApiError;

/// The remote API the client consumes. A trait so repository logic can run
/// against a scripted transport in tests.
#[async_trait]
pub trait ObjectiveTransport: Send {
    async fn fetch_roles(&mut self) -> Result<Vec<Role>, ApiError>;

    /// The complete objective set, optionally narrowed to one year.
    async fn fetch_all(&mut self, year: Option<i32>) -> Result<Vec<Objective>, ApiError>;

    /// Server-side filtered listing by year and role. Part of the API
    /// contract; the cache-based repository filters locally instead.
    async fn fetch_filtered(
        &mut self,
        year: i32,
        user: &RoleId,
        view_as: ViewRole,
    ) -> Result<Vec<Objective>, ApiError>;

    /// Create an objective; the server returns it with its assigned id.
    async fn create(&mut self, draft: &ObjectiveDraft) -> Result<Objective, ApiError>;

    /// Apply a partial update; the server returns the updated objective.
    async fn update(
        &mut self,
        id: ObjectiveId,
        patch: &ObjectivePatch,
    ) -> Result<Objective, ApiError>;

    async fn delete(&mut self, id: ObjectiveId) -> Result<(), ApiError>;
}
