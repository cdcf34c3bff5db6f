//! Project store access
//!
//! The project list lives in an external document store; this module
//! defines the narrow read contract, the Firestore REST implementation,
//! and an in-memory mock for tests.

use thiserror::Error;

use crate::domain::entities::Project;

pub mod firestore;
pub mod mock;

#[derive(Error, Debug, Clone)]
pub enum ProjectsError {
    #[error("Project store configuration error: {0}")]
    Configuration(String),

    #[error("Failed to fetch projects: {0}")]
    Request(String),

    #[error("Failed to fetch projects: {0}")]
    Response(String),

    #[error("Failed to decode project records: {0}")]
    Decode(String),
}

/// Read-only project store trait for different implementations
#[async_trait::async_trait]
pub trait ProjectStore: Send + Sync {
    /// Fetch every project record, sorted ascending by `order`
    ///
    /// All-or-nothing: any failure rejects the whole read, never a
    /// silently truncated list.
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectsError>;
}

/// Project store configuration
#[derive(Clone)]
pub struct FirestoreConfig {
    /// Store provider (firestore, mock)
    pub provider: String,
    /// Firebase project identifier
    pub project_id: String,
    /// Optional API key appended to read requests
    pub api_key: Option<String>,
    /// Base URL for the Firestore REST API (overridable for test servers)
    pub base_url: String,
    /// Collection holding the project documents
    pub collection: String,
}

impl std::fmt::Debug for FirestoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreConfig")
            .field("provider", &self.provider)
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("collection", &self.collection)
            .finish()
    }
}

impl FirestoreConfig {
    /// Create store config from environment variables
    pub fn from_env() -> Result<Self, ProjectsError> {
        dotenvy::dotenv().ok();

        let provider =
            std::env::var("PROJECTS_PROVIDER").unwrap_or_else(|_| "firestore".to_string());

        let project_id = std::env::var("FIREBASE_PROJECT_ID").unwrap_or_default();
        let api_key = std::env::var("FIREBASE_API_KEY").ok().filter(|k| !k.is_empty());

        let base_url = std::env::var("FIRESTORE_BASE_URL")
            .unwrap_or_else(|_| "https://firestore.googleapis.com".to_string());
        let collection =
            std::env::var("FIRESTORE_COLLECTION").unwrap_or_else(|_| "projects".to_string());

        if provider == "firestore" && project_id.is_empty() {
            return Err(ProjectsError::Configuration(
                "FIREBASE_PROJECT_ID is required for the firestore provider".to_string(),
            ));
        }

        Ok(Self {
            provider,
            project_id,
            api_key,
            base_url,
            collection,
        })
    }
}

/// Factory for creating ProjectStore implementations
pub struct ProjectStoreFactory;

impl ProjectStoreFactory {
    /// Create a project store based on configuration
    pub fn create(
        config: FirestoreConfig,
    ) -> Result<std::sync::Arc<dyn ProjectStore>, ProjectsError> {
        match config.provider.as_str() {
            "firestore" => {
                tracing::info!(project_id = %config.project_id, "Creating Firestore project store");
                Ok(std::sync::Arc::new(firestore::FirestoreStore::new(&config)))
            }
            "mock" => {
                tracing::info!("Creating mock project store");
                Ok(std::sync::Arc::new(mock::MockProjectStore::new()))
            }
            provider => Err(ProjectsError::Configuration(format!(
                "Unknown project store provider: {}. Supported providers: firestore, mock",
                provider
            ))),
        }
    }
}
