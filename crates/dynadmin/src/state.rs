use std::sync::Arc;

use tokio::sync::RwLock;

use crate::connection::{ConnectionFactory, InMemoryConnectionFactory};
use crate::dispatcher::Dispatcher;
use crate::settings::{SettingsError, SettingsStore};

/// Shared application state.
///
/// Cloned for each request handler. Holds the active dispatcher behind a lock
/// so the endpoint can be switched at runtime.
#[derive(Clone)]
pub struct AppState {
    /// Active dispatcher. Handlers take a snapshot per request; switching the
    /// endpoint swaps in a new one and leaves in-flight snapshots alone.
    dispatcher: Arc<RwLock<Arc<Dispatcher>>>,
    /// Builds the connection for each endpoint.
    factory: Arc<dyn ConnectionFactory>,
    /// Where the endpoint is persisted.
    settings: Arc<SettingsStore>,
}

impl AppState {
    /// Creates the state, connecting to the persisted endpoint.
    pub fn new(factory: Arc<dyn ConnectionFactory>, settings: SettingsStore) -> Self {
        let endpoint = settings.load_endpoint();
        let dispatcher = Dispatcher::new(factory.connect(&endpoint));

        Self {
            dispatcher: Arc::new(RwLock::new(Arc::new(dispatcher))),
            factory,
            settings: Arc::new(settings),
        }
    }

    /// Creates state backed by in-memory tables with unpersisted settings.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryConnectionFactory::new()),
            SettingsStore::unavailable(),
        )
    }

    /// Get the active dispatcher.
    pub async fn dispatcher(&self) -> Arc<Dispatcher> {
        self.dispatcher.read().await.clone()
    }

    /// Current endpoint. Never fails.
    pub async fn endpoint(&self) -> String {
        self.dispatcher.read().await.endpoint().to_string()
    }

    /// Switches to a new endpoint.
    ///
    /// Both handles are rebuilt before this returns, so the next request uses
    /// the new endpoint. The endpoint is persisted while the switch still holds
    /// the lock, so the stored value is always the active one. A persistence
    /// failure is logged and does not undo the switch.
    pub async fn set_endpoint(&self, endpoint: &str) -> Arc<Dispatcher> {
        let dispatcher = Arc::new(Dispatcher::new(self.factory.connect(endpoint)));

        let mut guard = self.dispatcher.write().await;
        let old = std::mem::replace(&mut *guard, dispatcher.clone());

        tracing::info!(from = %old.endpoint(), to = %endpoint, "Endpoint switched");

        match self.settings.save_endpoint(endpoint) {
            Ok(()) => {}
            Err(SettingsError::Unavailable) => {
                tracing::warn!("Settings storage unavailable, endpoint not persisted");
            }
            Err(e) => tracing::warn!(error = %e, "Failed to persist endpoint"),
        }
        drop(guard);

        dispatcher
    }
}
