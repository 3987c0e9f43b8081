use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::Db;
use crate::error::{IsnadError, Result};
use crate::graph::Edge;
use crate::models::{non_blank, NewTransmission, Transmission};

/// All transmissions, oldest first.
pub async fn list_transmissions(db: &Db) -> Result<Vec<Transmission>> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, teacher_id, student_id, ijaza_id FROM transmissions ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Transmission {
                id: row.get(0)?,
                teacher_id: row.get(1)?,
                student_id: row.get(2)?,
                ijaza_id: row.get(3)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
    .await
}

/// Teacher → student pairs of every transmission, oldest first.
pub async fn load_edges(db: &Db) -> Result<Vec<Edge>> {
    db.with_connection(|conn| {
        let mut stmt =
            conn.prepare("SELECT teacher_id, student_id FROM transmissions ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| Ok(Edge::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
    .await
}

/// Record a transmission from teacher to student.
///
/// Both persons must exist, as must the ijaza when one is given. A person
/// recorded as their own teacher is accepted; graph queries ignore it.
pub async fn insert_transmission(db: &Db, new: NewTransmission) -> Result<Transmission> {
    let teacher_id = new.teacher_id.trim().to_string();
    let student_id = new.student_id.trim().to_string();
    if teacher_id.is_empty() || student_id.is_empty() {
        return Err(IsnadError::InvalidInput(
            "teacher_id and student_id are required".to_string(),
        ));
    }

    let transmission = Transmission {
        id: Uuid::new_v4().to_string(),
        teacher_id,
        student_id,
        ijaza_id: non_blank(new.ijaza_id),
    };

    let row = transmission.clone();
    db.with_connection(move |conn| {
        let tx = conn.transaction()?;

        for person_id in [&row.teacher_id, &row.student_id] {
            if !exists(&tx, "SELECT 1 FROM persons WHERE id = ?1", person_id)? {
                return Err(IsnadError::PersonNotFound(person_id.clone()));
            }
        }
        if let Some(ijaza_id) = &row.ijaza_id {
            if !exists(&tx, "SELECT 1 FROM ijazas WHERE id = ?1", ijaza_id)? {
                return Err(IsnadError::InvalidInput(format!("Ijaza not found: {}", ijaza_id)));
            }
        }

        tx.execute(
            "INSERT INTO transmissions (id, teacher_id, student_id, ijaza_id) VALUES (?1, ?2, ?3, ?4)",
            params![row.id, row.teacher_id, row.student_id, row.ijaza_id],
        )?;
        tx.commit()?;
        Ok(())
    })
    .await?;

    log::info!(
        "Recorded transmission {} → {}",
        transmission.teacher_id,
        transmission.student_id
    );
    Ok(transmission)
}

fn exists(conn: &Connection, sql: &str, id: &str) -> Result<bool> {
    let found = conn
        .query_row(sql, params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}
