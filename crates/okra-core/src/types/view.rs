use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::types::objective::ObjectiveId;
use crate::CoreError;

/// Which relationship the current user is filtering their objectives by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewRole {
    Assignee,
    Owner,
}

impl ViewRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewRole::Assignee => "Assignee",
            ViewRole::Owner => "Owner",
        }
    }
}

impl fmt::Display for ViewRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            _ if s.eq_ignore_ascii_case("assignee") => Ok(ViewRole::Assignee),
            _ if s.eq_ignore_ascii_case("owner") => Ok(ViewRole::Owner),
            _ => Err(CoreError::InvalidViewRole(s.to_string())),
        }
    }
}

/// Client-side state for the list / edit / submit flow. Not persisted.
///
/// `selected` is `Some` only while an edit flow is active; callers go
/// through [`ViewState::select`] / [`ViewState::clear_selection`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub year: i32,
    pub view_as: ViewRole,
    pub month: Month,
    pub viewing_all: bool,
    pub page: usize,
    selected: Option<ObjectiveId>,
}

impl ViewState {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            view_as: ViewRole::Assignee,
            month: Month::current(),
            viewing_all: false,
            page: 1,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<ObjectiveId> {
        self.selected
    }

    /// Enter the edit flow for one objective.
    pub fn select(&mut self, id: ObjectiveId) {
        self.selected = Some(id);
    }

    /// Leave the edit flow.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Filter changes restart pagination from the first page.
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.page = 1;
    }

    pub fn set_view_as(&mut self, view_as: ViewRole) {
        self.view_as = view_as;
        self.viewing_all = false;
        self.page = 1;
    }

    pub fn toggle_view_all(&mut self) {
        self.viewing_all = !self.viewing_all;
        self.page = 1;
    }
}
