use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::types::role::RoleId;

/// Server-assigned numeric objective id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ObjectiveId(pub i64);

impl fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectiveStatus {
    Open,
    // "On-Going" is the legacy spelling still present in older records.
    #[serde(rename = "In Progress", alias = "On-Going")]
    InProgress,
    Closed,
}

impl ObjectiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveStatus::Open => "Open",
            ObjectiveStatus::InProgress => "In Progress",
            ObjectiveStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for ObjectiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ObjectiveStatus {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(ObjectiveStatus::Open),
            "in progress" | "in-progress" | "on-going" => Ok(ObjectiveStatus::InProgress),
            "closed" => Ok(ObjectiveStatus::Closed),
            _ => Err(crate::CoreError::InvalidStatus(s.to_string())),
        }
    }
}

/// Red/Amber/Green health indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rag {
    Red,
    Amber,
    Green,
}

impl fmt::Display for Rag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rag::Red => "Red",
            Rag::Amber => "Amber",
            Rag::Green => "Green",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Rag {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Rag::Red),
            "amber" => Ok(Rag::Amber),
            "green" => Ok(Rag::Green),
            _ => Err(crate::CoreError::InvalidRag(s.to_string())),
        }
    }
}

/// Sparse per-month progress notes; keys appear lazily as notes are written.
pub type MonthlyUpdates = BTreeMap<Month, String>;

/// A goal-tracking record scoped to a reporting year.
///
/// Dates are carried in the canonical `YYYY-MM-DD` wire format; see
/// [`crate::datefmt`] for display conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: ObjectiveId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ObjectiveStatus,
    pub rag: Rag,
    pub year: i32,
    pub from_date: String,
    pub to_date: String,
    pub assignee: String,
    #[serde(rename = "assigneeID")]
    pub assignee_id: RoleId,
    pub owner: String,
    #[serde(rename = "ownerID")]
    pub owner_id: RoleId,
    #[serde(default)]
    pub milestones: String,
    #[serde(default)]
    pub metrics: String,
    #[serde(default)]
    pub monthly_updates: MonthlyUpdates,
    pub last_updated: String,
}

impl Objective {
    /// Whether `user` may edit this objective (must hold either role on it).
    pub fn editable_by(&self, user: &RoleId) -> bool {
        &self.assignee_id == user || &self.owner_id == user
    }
}

/// Submission payload for a new objective. The server assigns the id,
/// initial status and RAG, and the `lastUpdated` stamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub milestones: String,
    #[serde(default)]
    pub metrics: String,
    #[serde(rename = "assigneeID")]
    pub assignee_id: RoleId,
    #[serde(rename = "ownerID")]
    pub owner_id: RoleId,
    pub capital: String,
    pub start_date: String,
    pub target_date: String,
    pub year: i32,
}

/// Partial update for an existing objective. `monthly_updates` holds only
/// the months being written; the repository merges them into the cached
/// entry's map before the request goes out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectivePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ObjectiveStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rag: Option<Rag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
    #[serde(default, skip_serializing_if = "MonthlyUpdates::is_empty")]
    pub monthly_updates: MonthlyUpdates,
}
