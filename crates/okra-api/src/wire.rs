//! Response envelopes and request bodies for the objectives REST API.
//!
//! Every response carries a `success` flag; failures put a human-readable
//! message in `error`, which callers surface verbatim.

use serde::{Deserialize, Serialize};

use okra_core::types::{Objective, ObjectiveId, Role, RoleId};

/// Body of `POST /objectives`, the server-side filtered listing.
/// Exactly one of `assignee` / `owner` is set.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveQuery {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<RoleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<RoleId>,
}

#[derive(Debug, Deserialize)]
pub struct ObjectiveListResponse {
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ObjectiveResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub objective: Option<Objective>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "deletedId")]
    pub deleted_id: Option<ObjectiveId>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RolesResponse {
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
