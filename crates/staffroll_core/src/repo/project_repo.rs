//! Project repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Deleting a project removes its `employee_project` rows through
//!   `ON DELETE CASCADE`; employees themselves are untouched.
//! - `find_all_by_id` silently skips ids that do not exist and binds at most
//!   `FIND_BATCH_SIZE` ids per statement, staying under SQLite's bound
//!   variable limit for arbitrarily long inputs.

use crate::model::employee::normalize_project_ids;
use crate::model::project::{validate_project_name, Project};
use crate::model::{EntityKind, ProjectId};
use crate::repo::{ensure_tables, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const FIND_BATCH_SIZE: usize = 500;

/// Repository interface for project CRUD operations.
pub trait ProjectRepository {
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// Batch lookup. Result is ordered by id and free of duplicates;
    /// unknown ids are dropped.
    fn find_all_by_id(&self, ids: &[ProjectId]) -> RepoResult<Vec<Project>>;
    fn create_project(&self, name: &str) -> RepoResult<Project>;
    fn update_project(&self, project: &Project) -> RepoResult<()>;
    fn delete_project(&self, id: ProjectId) -> RepoResult<()>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["project", "employee_project"])?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM project ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let project = self
            .conn
            .query_row("SELECT id, name FROM project WHERE id = ?1;", [id], |row| {
                Ok(Project::new(row.get("id")?, row.get::<_, String>("name")?))
            })
            .optional()?;
        match project {
            Some(project) => Ok(Some(checked_project(project)?)),
            None => Ok(None),
        }
    }

    fn find_all_by_id(&self, ids: &[ProjectId]) -> RepoResult<Vec<Project>> {
        let ids = normalize_project_ids(ids);
        let mut projects = Vec::new();
        for chunk in ids.chunks(FIND_BATCH_SIZE) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let sql = format!(
                "SELECT id, name FROM project WHERE id IN ({placeholders}) ORDER BY id ASC;"
            );
            let bind_values = chunk.iter().map(|id| Value::Integer(*id));

            let mut stmt = self.conn.prepare(&sql)?;
            let mut rows = stmt.query(params_from_iter(bind_values))?;
            while let Some(row) = rows.next()? {
                projects.push(parse_project_row(row)?);
            }
        }
        Ok(projects)
    }

    fn create_project(&self, name: &str) -> RepoResult<Project> {
        validate_project_name(name)?;
        self.conn
            .execute("INSERT INTO project (name) VALUES (?1);", [name])?;
        Ok(Project::new(self.conn.last_insert_rowid(), name))
    }

    fn update_project(&self, project: &Project) -> RepoResult<()> {
        project.validate()?;
        let changed = self.conn.execute(
            "UPDATE project SET name = ?1 WHERE id = ?2;",
            params![project.name.as_str(), project.id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Project,
                id: project.id,
            });
        }
        Ok(())
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM project WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Project,
                id,
            });
        }
        Ok(())
    }
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    checked_project(Project::new(row.get("id")?, row.get::<_, String>("name")?))
}

fn checked_project(project: Project) -> RepoResult<Project> {
    project
        .validate()
        .map_err(|err| RepoError::invalid_row(EntityKind::Project, project.id, err))?;
    Ok(project)
}
