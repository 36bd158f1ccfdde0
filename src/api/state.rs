use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::Result;

use crate::ai::FitnessAdvisor;
use crate::chat::SessionStore;
use crate::core::AppConfig;
use crate::site::{PageRenderer, SiteContent};

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    pub config: AppConfig,
    pub advisor: Arc<FitnessAdvisor>,
    // Chat sessions for everyone currently on the site
    pub sessions: SessionStore,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let advisor = FitnessAdvisor::from_config(&config);
        Self::with_advisor(config, advisor)
    }

    /// Build state around an existing advisor, e.g. one with a stubbed
    /// text generator.
    pub fn with_advisor(config: AppConfig, advisor: FitnessAdvisor) -> Result<Self> {
        let pages = PageRenderer::new(SiteContent::default())?;
        let sessions = SessionStore::new(
            Duration::from_secs(config.session_idle_secs),
            config.max_sessions,
        );
        Ok(Self {
            config,
            advisor: Arc::new(advisor),
            sessions,
            pages: Arc::new(pages),
        })
    }
}
