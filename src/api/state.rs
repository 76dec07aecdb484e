//! Application state for the compensation engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded engine configuration, which is read-only once the
/// server starts.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone_and_send() {
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::new(ConfigLoader::load("./config/compensation").unwrap());
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
