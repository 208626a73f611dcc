use std::sync::Arc;

use cineguru_core::{
    ActivityLedger, Authenticator, Config, ListCoordinator, SanitizedConfig, TitleCatalog,
};

/// Shared application state
pub struct AppState {
    config: Config,
    authenticator: Arc<dyn Authenticator>,
    catalog: Arc<dyn TitleCatalog>,
    lists: ListCoordinator,
    activity: Arc<dyn ActivityLedger>,
}

impl AppState {
    pub fn new(
        config: Config,
        authenticator: Arc<dyn Authenticator>,
        catalog: Arc<dyn TitleCatalog>,
        lists: ListCoordinator,
        activity: Arc<dyn ActivityLedger>,
    ) -> Self {
        Self {
            config,
            authenticator,
            catalog,
            lists,
            activity,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn catalog(&self) -> &dyn TitleCatalog {
        self.catalog.as_ref()
    }

    pub fn lists(&self) -> &ListCoordinator {
        &self.lists
    }

    pub fn activity(&self) -> &dyn ActivityLedger {
        self.activity.as_ref()
    }

    /// Upper year bound for searches that give none.
    pub fn latest_year(&self) -> i32 {
        self.config.search.latest_year
    }
}
