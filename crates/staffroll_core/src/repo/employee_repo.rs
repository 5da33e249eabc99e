//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist employee rows together with their `employee_project` join rows.
//! - Own project-set replacement with atomic semantics.
//!
//! # Invariants
//! - Employee row and join rows are written in a single transaction.
//! - Project-set replacement deletes every previous join row first; no old
//!   association survives a replacement.
//! - Loaded `project_ids` are ordered ascending.

use crate::model::employee::{normalize_project_ids, Employee, NewEmployee};
use crate::model::{EmployeeId, EntityKind, ProjectId};
use crate::repo::{ensure_tables, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    e.id,
    e.name,
    e.position,
    e.department_id
FROM employee e";

/// Repository interface for employee CRUD operations.
pub trait EmployeeRepository {
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Employees assigned to the given project, ordered by id.
    fn list_employees_by_project(&self, project_id: ProjectId) -> RepoResult<Vec<Employee>>;
    fn create_employee(&self, employee: &NewEmployee) -> RepoResult<Employee>;
    /// Rewrites the employee row and replaces its full project set.
    fn update_employee(&self, employee: &Employee) -> RepoResult<()>;
    /// Replaces the full project set of one employee.
    fn set_employee_projects(&self, id: EmployeeId, project_ids: &[ProjectId]) -> RepoResult<()>;
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["employee", "employee_project"])?;
        Ok(Self { conn })
    }

    fn query_employees(&self, sql: &str, id: Option<i64>) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = match id {
            Some(id) => stmt.query([id])?,
            None => stmt.query([])?,
        };
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(self.conn, row)?);
        }
        Ok(employees)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        self.query_employees(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY e.id ASC;"), None)
    }

    fn get_employee(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let employees =
            self.query_employees(&format!("{EMPLOYEE_SELECT_SQL} WHERE e.id = ?1;"), Some(id))?;
        Ok(employees.into_iter().next())
    }

    fn list_employees_by_project(&self, project_id: ProjectId) -> RepoResult<Vec<Employee>> {
        self.query_employees(
            &format!(
                "{EMPLOYEE_SELECT_SQL}
                 INNER JOIN employee_project ep ON ep.employee_id = e.id
                 WHERE ep.project_id = ?1
                 ORDER BY e.id ASC;"
            ),
            Some(project_id),
        )
    }

    fn create_employee(&self, employee: &NewEmployee) -> RepoResult<Employee> {
        employee.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO employee (name, position, department_id) VALUES (?1, ?2, ?3);",
            params![
                employee.name.as_str(),
                employee.position.as_str(),
                employee.department_id,
            ],
        )?;
        let id = tx.last_insert_rowid();
        replace_project_links(&tx, id, &employee.project_ids)?;
        tx.commit()?;

        Ok(employee.clone().into_employee(id))
    }

    fn update_employee(&self, employee: &Employee) -> RepoResult<()> {
        employee.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        let changed = tx.execute(
            "UPDATE employee
             SET
                name = ?1,
                position = ?2,
                department_id = ?3
             WHERE id = ?4;",
            params![
                employee.name.as_str(),
                employee.position.as_str(),
                employee.department_id,
                employee.id,
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Employee,
                id: employee.id,
            });
        }
        replace_project_links(&tx, employee.id, &employee.project_ids)?;
        tx.commit()?;
        Ok(())
    }

    fn set_employee_projects(&self, id: EmployeeId, project_ids: &[ProjectId]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        if !employee_exists_in_tx(&tx, id)? {
            return Err(RepoError::NotFound {
                entity: EntityKind::Employee,
                id,
            });
        }
        replace_project_links(&tx, id, project_ids)?;
        tx.commit()?;
        Ok(())
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employee WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: EntityKind::Employee,
                id,
            });
        }
        Ok(())
    }
}

fn parse_employee_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;
    let employee = Employee {
        id,
        name: row.get("name")?,
        position: row.get("position")?,
        department_id: row.get("department_id")?,
        project_ids: load_project_ids(conn, id)?,
    };
    employee
        .validate()
        .map_err(|err| RepoError::invalid_row(EntityKind::Employee, id, err))?;
    Ok(employee)
}

fn load_project_ids(conn: &Connection, employee_id: EmployeeId) -> RepoResult<Vec<ProjectId>> {
    let mut stmt = conn.prepare(
        "SELECT project_id
         FROM employee_project
         WHERE employee_id = ?1
         ORDER BY project_id ASC;",
    )?;
    let mut rows = stmt.query([employee_id])?;
    let mut project_ids = Vec::new();
    while let Some(row) = rows.next()? {
        project_ids.push(row.get(0)?);
    }
    Ok(project_ids)
}

fn replace_project_links(
    tx: &Transaction<'_>,
    employee_id: EmployeeId,
    project_ids: &[ProjectId],
) -> RepoResult<()> {
    tx.execute(
        "DELETE FROM employee_project WHERE employee_id = ?1;",
        [employee_id],
    )?;
    for project_id in normalize_project_ids(project_ids) {
        tx.execute(
            "INSERT INTO employee_project (employee_id, project_id) VALUES (?1, ?2);",
            params![employee_id, project_id],
        )?;
    }
    Ok(())
}

fn employee_exists_in_tx(tx: &Transaction<'_>, id: EmployeeId) -> RepoResult<bool> {
    let found = tx
        .query_row("SELECT 1 FROM employee WHERE id = ?1;", [id], |row| {
            row.get::<_, i64>(0)
        })
        .optional()?;
    Ok(found.is_some())
}
