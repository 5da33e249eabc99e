//! Department repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Deleting a department that employees still reference fails with
//!   `RepoError::Referenced`; the foreign key is `ON DELETE RESTRICT`.

use crate::model::department::{validate_department_name, Department};
use crate::model::{DepartmentId, EntityKind};
use crate::repo::{ensure_tables, is_foreign_key_violation, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Repository interface for department CRUD operations.
pub trait DepartmentRepository {
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    fn create_department(&self, name: &str) -> RepoResult<Department>;
    fn update_department(&self, department: &Department) -> RepoResult<()>;
    fn delete_department(&self, id: DepartmentId) -> RepoResult<()>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["department", "employee"])?;
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM department ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }
        Ok(departments)
    }

    fn get_department(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let department = self
            .conn
            .query_row(
                "SELECT id, name FROM department WHERE id = ?1;",
                [id],
                |row| Ok(Department::new(row.get("id")?, row.get::<_, String>("name")?)),
            )
            .optional()?;
        match department {
            Some(department) => Ok(Some(checked_department(department)?)),
            None => Ok(None),
        }
    }

    fn create_department(&self, name: &str) -> RepoResult<Department> {
        validate_department_name(name)?;
        self.conn
            .execute("INSERT INTO department (name) VALUES (?1);", [name])?;
        Ok(Department::new(self.conn.last_insert_rowid(), name))
    }

    fn update_department(&self, department: &Department) -> RepoResult<()> {
        department.validate()?;
        let changed = self.conn.execute(
            "UPDATE department SET name = ?1 WHERE id = ?2;",
            params![department.name.as_str(), department.id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Department,
                id: department.id,
            });
        }
        Ok(())
    }

    fn delete_department(&self, id: DepartmentId) -> RepoResult<()> {
        let changed = match self
            .conn
            .execute("DELETE FROM department WHERE id = ?1;", [id])
        {
            Ok(changed) => changed,
            Err(err) if is_foreign_key_violation(&err) => {
                return Err(RepoError::Referenced {
                    entity: EntityKind::Department,
                    id,
                });
            }
            Err(err) => return Err(err.into()),
        };
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Department,
                id,
            });
        }
        Ok(())
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    checked_department(Department::new(row.get("id")?, row.get::<_, String>("name")?))
}

fn checked_department(department: Department) -> RepoResult<Department> {
    department
        .validate()
        .map_err(|err| RepoError::invalid_row(EntityKind::Department, department.id, err))?;
    Ok(department)
}
