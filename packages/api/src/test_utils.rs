use crate::config::{AppConfig, AppMode, DatabaseConfig, StorageConfig};
use crate::db::{Database, SqliteDatabase};
use crate::state::AppState;
use crate::storage::filesystem::FilesystemStorageService;
use sqlx::{Any, Pool};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

// Global mutex to serialize tests that install app state
static TEST_MUTEX: Mutex<()> = Mutex::new(());

/// Throwaway SQLite database plus uploads directory, torn down on drop.
pub struct TestContext {
    pub pool: Pool<Any>,
    pub state: Arc<AppState>,
    pub uploads_path: PathBuf,
    db_path: PathBuf,
    _guard: MutexGuard<'static, ()>,
}

impl TestContext {
    pub async fn new() -> Self {
        // Serialize test execution so per-thread state never leaks between tests
        let guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        // Install sqlx drivers for Any pool
        sqlx::any::install_default_drivers();

        let test_id = Uuid::new_v4();
        let db_path = PathBuf::from(format!(".test-{}.db", test_id));
        let uploads_path = PathBuf::from(format!(".test-uploads-{}", test_id));

        let database = SqliteDatabase::connect(&db_path.to_string_lossy())
            .await
            .expect("Failed to create test database");

        database
            .run_migrations()
            .await
            .expect("Failed to run migrations");

        let pool = database.pool().await.clone();

        let config = AppConfig {
            mode: AppMode::Local,
            database: DatabaseConfig::SQLite {
                path: db_path.to_string_lossy().to_string(),
            },
            storage: StorageConfig::Filesystem {
                base_path: uploads_path.to_string_lossy().to_string(),
                serve_url: "http://localhost:8080/dev/uploads".to_string(),
            },
        };

        let state = Arc::new(AppState {
            db: Arc::new(database),
            storage: Arc::new(FilesystemStorageService::new(
                &uploads_path.to_string_lossy(),
                "http://localhost:8080/dev/uploads",
            )),
            config,
        });

        Self {
            pool,
            state,
            uploads_path,
            db_path,
            _guard: guard,
        }
    }

    pub fn set_global(&self) {
        // Thread-local state instead of the process-wide OnceLock, so each
        // test gets its own isolated AppState.
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = Some(self.state.clone());
        });
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        crate::state::TEST_STATE.with(|s| {
            *s.borrow_mut() = None;
        });

        let _ = std::fs::remove_file(&self.db_path);
        let _ = std::fs::remove_dir_all(&self.uploads_path);
    }
}
