use rusqlite::params;
use uuid::Uuid;

use crate::db::Db;
use crate::error::Result;
use crate::models::{non_blank, Ijaza, NewIjaza};

/// All ijazas, oldest first.
pub async fn list_ijazas(db: &Db) -> Result<Vec<Ijaza>> {
    db.with_connection(|conn| {
        let mut stmt =
            conn.prepare("SELECT id, title, issued_at, notes FROM ijazas ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok(Ijaza {
                id: row.get(0)?,
                title: row.get(1)?,
                issued_at: row.get(2)?,
                notes: row.get(3)?,
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

/// Insert an ijaza. Every field is optional.
pub async fn insert_ijaza(db: &Db, new: NewIjaza) -> Result<Ijaza> {
    let ijaza = Ijaza {
        id: Uuid::new_v4().to_string(),
        title: non_blank(new.title),
        issued_at: non_blank(new.issued_at),
        notes: non_blank(new.notes),
    };

    let row = ijaza.clone();
    db.with_connection(move |conn| {
        conn.execute(
            "INSERT INTO ijazas (id, title, issued_at, notes) VALUES (?1, ?2, ?3, ?4)",
            params![row.id, row.title, row.issued_at, row.notes],
        )?;
        Ok(())
    })
    .await?;

    log::info!("Added ijaza {}", ijaza.id);
    Ok(ijaza)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::migrated_db;

    #[tokio::test]
    async fn test_insert_and_list() {
        let (db, _temp) = migrated_db().await;

        let empty = insert_ijaza(&db, NewIjaza::default()).await.unwrap();
        let full = insert_ijaza(
            &db,
            NewIjaza {
                title: Some("Ijaza in the reading of Hafs".to_string()),
                issued_at: Some("1402 AH".to_string()),
                notes: Some("Complete recitation".to_string()),
            },
        )
        .await
        .unwrap();

        let ijazas = list_ijazas(&db).await.unwrap();
        assert_eq!(ijazas, vec![empty.clone(), full]);
        assert!(empty.title.is_none());
    }
}
