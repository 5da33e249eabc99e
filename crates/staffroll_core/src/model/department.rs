//! Department record.

use super::{require_id, require_text, DepartmentId, ValidationError};
use serde::{Deserialize, Serialize};

/// Organizational unit every employee belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

impl Department {
    pub fn new(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Validates a persisted department.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_id("ID", self.id)?;
        validate_department_name(&self.name)
    }
}

/// Validates a department name before insert or rename.
pub fn validate_department_name(name: &str) -> Result<(), ValidationError> {
    require_text("Name", name)
}
