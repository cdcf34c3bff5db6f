//! Projects loader
//!
//! Drives the fetch state machine for the display layer: Loading on
//! mount, Loaded or Failed on resolution, and explicit user-triggered
//! retries. At most one read is in flight; retries issued while Loading
//! are ignored rather than stacked.

use std::sync::{Arc, Mutex};

use crate::domain::entities::Project;
use crate::domain::state::{FetchEvent, FetchPhase, FetchStateMachine};
use crate::repository::ProjectStore;

/// Render-ready view of the project list
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsSnapshot {
    pub phase: FetchPhase,
    pub projects: Vec<Project>,
    /// Failure text, kept verbatim for display alongside the retry control
    pub error: Option<String>,
}

struct LoaderInner {
    phase: FetchPhase,
    projects: Vec<Project>,
    error: Option<String>,
    in_flight: bool,
    // Bumped on detach so pending reads cannot mutate a torn-down loader
    generation: u64,
}

/// One project-list loader instance
#[derive(Clone)]
pub struct ProjectsLoader {
    inner: Arc<Mutex<LoaderInner>>,
    store: Arc<dyn ProjectStore>,
}

impl ProjectsLoader {
    /// Create a loader; it starts in Loading, expecting an immediate
    /// [`load`](Self::load) on mount
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LoaderInner {
                phase: FetchPhase::Loading,
                projects: Vec::new(),
                error: None,
                in_flight: false,
                generation: 0,
            })),
            store,
        }
    }

    /// Perform one read cycle
    ///
    /// A call while a read is already in flight is a no-op.
    pub async fn load(&self) {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            if inner.in_flight {
                tracing::debug!("Ignoring fetch request while a read is in flight");
                return;
            }
            inner.in_flight = true;
            inner.error = None;
            // Re-entering Loading from Loaded/Failed is a retry; the
            // initial state is already Loading
            if inner.phase != FetchPhase::Loading {
                Self::apply(&mut inner, FetchEvent::Retry);
            }
            inner.generation
        };

        let result = self.store.list_projects().await;

        let mut inner = self.inner.lock().unwrap();
        if inner.generation != generation {
            // The loader was detached while the read was pending
            tracing::debug!("Discarding stale project read");
            inner.in_flight = false;
            return;
        }

        match result {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "Project read resolved");
                inner.projects = projects;
                Self::apply(&mut inner, FetchEvent::Resolve);
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "Project read failed");
                inner.error = Some(message);
                Self::apply(&mut inner, FetchEvent::Fail);
            }
        }
        inner.in_flight = false;
    }

    /// User-triggered re-fetch; coalesced with any read already in flight
    pub async fn retry(&self) {
        self.load().await;
    }

    /// Current render state
    pub fn snapshot(&self) -> ProjectsSnapshot {
        let inner = self.inner.lock().unwrap();
        ProjectsSnapshot {
            phase: inner.phase,
            projects: inner.projects.clone(),
            error: inner.error.clone(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().unwrap().phase == FetchPhase::Loading
    }

    /// Detach the loader from pending async work (component teardown)
    pub fn detach(&self) {
        self.inner.lock().unwrap().generation += 1;
    }

    fn apply(inner: &mut LoaderInner, event: FetchEvent) {
        match FetchStateMachine::transition(inner.phase, event) {
            Ok(next) => inner.phase = next,
            Err(e) => tracing::warn!(error = %e, "Fetch transition rejected"),
        }
    }
}
