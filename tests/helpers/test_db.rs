#![allow(dead_code)]
use leavetrack::infrastructure::persistence::Database;
use std::path::PathBuf;
use uuid::Uuid;

/// Migrated SQLite database backed by a throwaway file
pub struct TestDatabase {
    db: Database,
    path: PathBuf,
}

impl TestDatabase {
    pub fn db(&self) -> Database {
        self.db.clone()
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        let path = self.path.display().to_string();
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{}", path, suffix));
        }
    }
}

pub async fn setup_test_db() -> TestDatabase {
    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    let path = std::env::temp_dir().join(format!("leavetrack_test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDatabase { db, path }
}
