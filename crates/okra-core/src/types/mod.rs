mod objective;
mod role;
mod view;

pub use objective::{
    MonthlyUpdates, Objective, ObjectiveDraft, ObjectiveId, ObjectivePatch, ObjectiveStatus, Rag,
};
pub use role::{Role, RoleId};
pub use view::{ViewRole, ViewState};
