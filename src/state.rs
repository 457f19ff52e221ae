use crate::client::GenerateClient;
use crate::models::{Reframe, SessionState};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Transient dashboard state, kept apart from the session store.
#[derive(Debug, Default)]
pub struct DashboardView {
    /// Set while a reframe request is in flight.
    pub pending: bool,
    pub last: Option<Reframe>,
    pub notice: Option<String>,
    /// Bumped on every session reset so late reframe results can be told apart.
    pub generation: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SessionState>>,
    pub dashboard: Arc<Mutex<DashboardView>>,
    pub client: GenerateClient,
}

impl AppState {
    pub fn new(client: GenerateClient) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState::default())),
            dashboard: Arc::new(Mutex::new(DashboardView::default())),
            client,
        }
    }
}
