//! Test application setup.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;

use trademedia_api::setup::routes::setup_routes;
use trademedia_api::state::AppState;
use trademedia_core::{Config, StorageBackend};
use trademedia_storage::{LocalStorage, Storage, StorageError, StorageResult};

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup a test application with tempdir-backed local storage and a
/// configured write credential.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path(), "http://localhost:3000/media".to_string())
            .await
            .expect("Failed to create local storage"),
    );
    build_app(test_config(true), storage, temp_dir)
}

/// Same as [`setup_test_app`] but without a write credential, so every valid
/// upload is rejected as unconfigured.
pub async fn setup_test_app_without_token() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path(), "http://localhost:3000/media".to_string())
            .await
            .expect("Failed to create local storage"),
    );
    build_app(test_config(false), storage, temp_dir)
}

/// Setup a test application whose storage backend fails every write.
pub async fn setup_failing_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    build_app(test_config(true), Arc::new(FailingStorage), temp_dir)
}

fn build_app(config: Config, storage: Arc<dyn Storage>, temp_dir: TempDir) -> TestApp {
    let state = Arc::new(AppState::new(config, storage.clone()));
    let router = setup_routes(state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        storage,
        _temp_dir: temp_dir,
    }
}

/// Create test configuration
fn test_config(with_token: bool) -> Config {
    Config {
        server_port: 3000,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        blob_read_write_token: with_token.then(|| "test-blob-rw-token".to_string()),
        storage_backend: Some(StorageBackend::Local),
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        local_storage_path: None,
        local_storage_base_url: None,
        max_upload_size_bytes: 10 * 1024 * 1024,
    }
}

/// Storage backend that fails every write, for exercising the upload
/// failure path.
pub struct FailingStorage;

/// Message carried by every [`FailingStorage`] write error.
pub const FAILING_STORAGE_MESSAGE: &str = "simulated network failure";

#[async_trait]
impl Storage for FailingStorage {
    async fn put(&self, _key: &str, _content_type: &str, _data: Vec<u8>) -> StorageResult<String> {
        Err(StorageError::BackendError(
            FAILING_STORAGE_MESSAGE.to_string(),
        ))
    }

    async fn get(&self, key: &str) -> StorageResult<Vec<u8>> {
        Err(StorageError::NotFound(key.to_string()))
    }

    async fn exists(&self, _key: &str) -> StorageResult<bool> {
        Ok(false)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
