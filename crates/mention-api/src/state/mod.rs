//! Application state
//!
//! Holds the shared state for the Axum application: the configuration and
//! the platform collaborators.

use std::sync::Arc;

use mention_common::BotConfig;
use mention_core::traits::{MemberSource, MessageDispatcher};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<BotConfig>,
    members: Arc<dyn MemberSource>,
    dispatcher: Arc<dyn MessageDispatcher>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        config: BotConfig,
        members: Arc<dyn MemberSource>,
        dispatcher: Arc<dyn MessageDispatcher>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            members,
            dispatcher,
        }
    }

    /// Get the bot configuration
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn members(&self) -> &dyn MemberSource {
        self.members.as_ref()
    }

    pub fn dispatcher(&self) -> &dyn MessageDispatcher {
        self.dispatcher.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("members", &"MemberSource")
            .field("dispatcher", &"MessageDispatcher")
            .finish()
    }
}
