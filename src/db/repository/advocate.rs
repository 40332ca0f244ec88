//! Advocate search — the directory's query/filter service.
//!
//! Builds one parameterized query from an `AdvocateFilter` and folds the
//! join fan-out back into a single record per advocate. Filter categories
//! are ANDed; the specialty category is an OR over the supplied names,
//! expressed as an EXISTS subquery so the specialty list on each returned
//! record stays complete regardless of which names matched.

use std::str::FromStr;

use rusqlite::{params, Connection, ToSql};

use crate::db::DatabaseError;
use crate::models::{Advocate, AdvocateFilter, Degree, NewAdvocate};

/// Escape LIKE wildcards in user input. Patterns built from the result
/// must carry `ESCAPE '\'`.
fn like_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn contains_pattern(input: &str) -> String {
    format!("%{}%", like_escape(input))
}

// Intermediate shape for one joined row before aggregation.
struct SearchRow {
    id: i64,
    first_name: String,
    last_name: String,
    city: String,
    degree: String,
    years_of_experience: i64,
    phone_number: i64,
    email: String,
    background: String,
    specialty: Option<String>,
}

/// Run the directory search. Absent filter fields impose no constraint;
/// an unconstrained filter returns every advocate.
///
/// City and name-token matching is a case-insensitive substring test
/// (SQLite LIKE, ASCII case folding). Specialty matching is an exact,
/// case-sensitive membership test against the supplied names.
pub fn search_advocates(
    conn: &Connection,
    filter: &AdvocateFilter,
) -> Result<Vec<Advocate>, DatabaseError> {
    let mut sql = String::from(
        "SELECT a.id, a.first_name, a.last_name, a.city, a.degree,
                a.years_of_experience, a.phone_number, a.email, a.background,
                s.name
         FROM advocates a
         LEFT JOIN advocate_specialties ads ON ads.advocate_id = a.id
         LEFT JOIN specialties s ON s.id = ads.specialty_id",
    );

    let mut clauses: Vec<String> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(city) = &filter.city {
        clauses.push("a.city LIKE ? ESCAPE '\\'".into());
        values.push(contains_pattern(city));
    }

    // One clause per token: the token must appear in first OR last name.
    for token in filter.name_tokens() {
        clauses.push("(a.first_name LIKE ? ESCAPE '\\' OR a.last_name LIKE ? ESCAPE '\\')".into());
        let pattern = contains_pattern(token);
        values.push(pattern.clone());
        values.push(pattern);
    }

    if !filter.specialties.is_empty() {
        let placeholders = vec!["?"; filter.specialties.len()].join(", ");
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM advocate_specialties x
                     JOIN specialties sp ON sp.id = x.specialty_id
                     WHERE x.advocate_id = a.id AND sp.name IN ({placeholders}))"
        ));
        values.extend(filter.specialties.iter().cloned());
    }

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY a.id");

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();

    let rows = stmt.query_map(&params[..], |row| {
        Ok(SearchRow {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            city: row.get(3)?,
            degree: row.get(4)?,
            years_of_experience: row.get(5)?,
            phone_number: row.get(6)?,
            email: row.get(7)?,
            background: row.get(8)?,
            specialty: row.get(9)?,
        })
    })?;

    // Rows arrive grouped by advocate id; fold each group into one record.
    let mut advocates: Vec<Advocate> = Vec::new();
    for row in rows {
        let row = row?;
        match advocates.last_mut() {
            Some(last) if last.id == row.id => {
                if let Some(name) = row.specialty {
                    if !last.specialties.contains(&name) {
                        last.specialties.push(name);
                    }
                }
            }
            _ => advocates.push(advocate_from_row(row)?),
        }
    }

    Ok(advocates)
}

fn advocate_from_row(row: SearchRow) -> Result<Advocate, DatabaseError> {
    Ok(Advocate {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        city: row.city,
        degree: Degree::from_str(&row.degree)?,
        years_of_experience: row.years_of_experience.max(0) as u32,
        phone_number: row.phone_number,
        email: row.email,
        background: row.background,
        specialties: row.specialty.into_iter().collect(),
    })
}

/// Distinct city values among advocates, sorted for stable output.
pub fn distinct_cities(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT DISTINCT city FROM advocates ORDER BY city")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Insert a new advocate (seeding only) and return its generated id.
pub fn insert_advocate(conn: &Connection, advocate: &NewAdvocate) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO advocates (first_name, last_name, city, degree,
         years_of_experience, phone_number, email, background)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            advocate.first_name,
            advocate.last_name,
            advocate.city,
            advocate.degree.as_str(),
            advocate.years_of_experience,
            advocate.phone_number,
            advocate.email,
            advocate.background,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Attach a specialty to an advocate. Re-linking is a no-op.
pub fn link_specialty(
    conn: &Connection,
    advocate_id: i64,
    specialty_id: i64,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT OR IGNORE INTO advocate_specialties (advocate_id, specialty_id)
         VALUES (?1, ?2)",
        params![advocate_id, specialty_id],
    )?;
    Ok(())
}

/// Delete every row from the three directory tables (reset utility).
/// Children first so the cascade order is explicit.
pub fn clear_directory(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "DELETE FROM advocate_specialties;
         DELETE FROM advocates;
         DELETE FROM specialties;",
    )?;
    Ok(())
}
