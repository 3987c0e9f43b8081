use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tokio::task;
use crate::error::{Result, IsnadError};

pub mod migrate;

/// WAL for concurrent readers while the API inserts, foreign keys so a
/// transmission cannot point at a missing person or ijaza.
const PRAGMAS: &str = "PRAGMA journal_mode = WAL; \
     PRAGMA synchronous = NORMAL; \
     PRAGMA foreign_keys = ON; \
     PRAGMA temp_store = MEMORY;";

/// Database handle. Cheap to clone; each operation opens its own connection.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    /// Create a new database connection manager
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Execute a closure with a database connection in a blocking task
    pub async fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();
        task::spawn_blocking(move || {
            let mut conn = open(&path)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| IsnadError::Task(e.to_string()))?
    }

    /// Apply pending migrations from `migrations_dir`
    pub async fn migrate<P: AsRef<Path>>(&self, migrations_dir: P) -> Result<()> {
        let migrations_dir = migrations_dir.as_ref().to_path_buf();
        self.with_connection(move |conn| migrate::run_migrations(conn, &migrations_dir))
            .await
    }
}

fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).map_err(IsnadError::Database)?;
    conn.execute_batch(PRAGMAS)?;
    Ok(conn)
}
