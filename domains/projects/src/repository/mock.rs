//! Mock Project Store Implementation
//!
//! In-memory store for testing the loader without a document store.
//! Responses are scriptable, optionally delayed to exercise in-flight
//! behavior.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::entities::{sort_by_order, Project};
use crate::repository::{ProjectStore, ProjectsError};

/// Mock project store for testing
#[derive(Clone)]
pub struct MockProjectStore {
    result: Arc<Mutex<Result<Vec<Project>, ProjectsError>>>,
    calls: Arc<Mutex<usize>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

impl MockProjectStore {
    pub fn new() -> Self {
        Self {
            result: Arc::new(Mutex::new(Ok(Vec::new()))),
            calls: Arc::new(Mutex::new(0)),
            delay: Arc::new(Mutex::new(None)),
        }
    }

    /// Store answering every read with the given records
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let store = Self::new();
        store.set_projects(projects);
        store
    }

    /// Store failing every read with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_failure(message);
        store
    }

    pub fn set_projects(&self, projects: Vec<Project>) {
        *self.result.lock().unwrap() = Ok(projects);
    }

    pub fn set_failure(&self, message: impl Into<String>) {
        *self.result.lock().unwrap() = Err(ProjectsError::Request(message.into()));
    }

    /// Delay every read, for tests that need an observable Loading window
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Number of reads performed
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Default for MockProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProjectStore for MockProjectStore {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectsError> {
        *self.calls.lock().unwrap() += 1;

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let result = self.result.lock().unwrap().clone();
        result.map(|mut projects| {
            sort_by_order(&mut projects);
            projects
        })
    }
}
