//! Projects domain: project records, document store read, loader

pub mod domain;
pub mod loader;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{sort_by_order, Project};
pub use domain::state::{FetchEvent, FetchPhase, FetchStateMachine};
pub use loader::{ProjectsLoader, ProjectsSnapshot};
pub use repository::{
    FirestoreConfig, ProjectStore, ProjectStoreFactory, ProjectsError,
};
