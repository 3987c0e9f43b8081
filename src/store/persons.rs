use rusqlite::params;
use uuid::Uuid;

use crate::db::Db;
use crate::error::{IsnadError, Result};
use crate::models::{non_blank, NewPerson, Person};

/// All persons, oldest first.
pub async fn list_persons(db: &Db) -> Result<Vec<Person>> {
    db.with_connection(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, name, birth_date, death_date FROM persons ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Person {
                id: row.get(0)?,
                name: row.get(1)?,
                birth_date: row.get(2)?,
                death_date: row.get(3)?,
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

/// Insert a person and return the stored row.
///
/// The name is required; blank date markers are stored as NULL.
pub async fn insert_person(db: &Db, new: NewPerson) -> Result<Person> {
    let name = new.name.trim().to_string();
    if name.is_empty() {
        return Err(IsnadError::InvalidInput("name is required".to_string()));
    }

    let person = Person {
        id: Uuid::new_v4().to_string(),
        name,
        birth_date: non_blank(new.birth_date),
        death_date: non_blank(new.death_date),
    };

    let row = person.clone();
    db.with_connection(move |conn| {
        conn.execute(
            "INSERT INTO persons (id, name, birth_date, death_date) VALUES (?1, ?2, ?3, ?4)",
            params![row.id, row.name, row.birth_date, row.death_date],
        )?;
        Ok(())
    })
    .await?;

    log::info!("Added person {} ({})", person.name, person.id);
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::migrated_db;

    fn named(name: &str) -> NewPerson {
        NewPerson {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_in_order() {
        let (db, _temp) = migrated_db().await;

        let first = insert_person(&db, named("Asim")).await.unwrap();
        let second = insert_person(
            &db,
            NewPerson {
                name: "Shu'ba".to_string(),
                birth_date: Some("95 AH".to_string()),
                death_date: Some("193 AH".to_string()),
            },
        )
        .await
        .unwrap();
        let third = insert_person(&db, named("Hafs")).await.unwrap();

        let persons = list_persons(&db).await.unwrap();
        assert_eq!(persons, vec![first, second.clone(), third]);
        assert_eq!(persons[1].death_date.as_deref(), Some("193 AH"));
        assert_eq!(second.id.len(), 36);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let (db, _temp) = migrated_db().await;
        let result = insert_person(&db, named("   ")).await;
        assert!(matches!(result, Err(IsnadError::InvalidInput(_))));
        assert!(list_persons(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_dates_stored_as_null() {
        let (db, _temp) = migrated_db().await;
        let person = insert_person(
            &db,
            NewPerson {
                name: " Warsh ".to_string(),
                birth_date: Some(String::new()),
                death_date: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(person.name, "Warsh");
        assert!(person.birth_date.is_none());

        let stored = list_persons(&db).await.unwrap();
        assert!(stored[0].birth_date.is_none());
    }
}
