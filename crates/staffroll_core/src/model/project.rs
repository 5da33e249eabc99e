//! Project record.
//!
//! A project does not own its member list; members are the employees whose
//! `project_ids` contain the project id.

use super::{require_id, require_text, ProjectId, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id("ID", self.id)?;
        validate_project_name(&self.name)
    }
}

/// Validates a project name before insert or rename.
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    require_text("Name", name)
}
