use crate::{config::RuntimeConfiguration, data::StudentStore};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Clone)]
pub struct RegistryState {
    store: Arc<Mutex<dyn StudentStore + Send>>,
    config: RuntimeConfiguration,
}

impl RegistryState {
    pub fn new(store: impl StudentStore + Send + 'static, config: RuntimeConfiguration) -> Self {
        let store: Arc<Mutex<dyn StudentStore + Send>> = Arc::new(Mutex::new(store));
        Self { store, config }
    }

    /// Hold the guard for a handler's whole read-modify-write so requests never interleave.
    pub async fn students(&self) -> MutexGuard<'_, dyn StudentStore + Send> {
        self.store.lock().await
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }
}
