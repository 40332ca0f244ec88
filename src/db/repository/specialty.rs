use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Specialty;

/// Full specialty catalog, id + name.
pub fn list_specialties(conn: &Connection) -> Result<Vec<Specialty>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name FROM specialties ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Specialty {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Look up a specialty by exact name, inserting it if absent.
pub fn find_or_create_specialty(
    conn: &Connection,
    name: &str,
) -> Result<Specialty, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name FROM specialties WHERE name = ?1 LIMIT 1")?;
    let result = stmt.query_row(params![name], |row| {
        Ok(Specialty {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    });

    match result {
        Ok(specialty) => Ok(specialty),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            conn.execute("INSERT INTO specialties (name) VALUES (?1)", params![name])?;
            Ok(Specialty {
                id: conn.last_insert_rowid(),
                name: name.to_string(),
            })
        }
        Err(e) => Err(e.into()),
    }
}
