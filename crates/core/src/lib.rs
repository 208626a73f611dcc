pub mod activity;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod lists;
pub mod metrics;
pub mod query;
pub mod store;
pub mod users;

pub use activity::{ActivityEntry, ActivityFeedItem, ActivityKind, ActivityLedger};
pub use auth::{
    create_authenticator, AuthError, AuthRequest, Authenticator, Identity, TokenAuthenticator,
};
pub use catalog::{NewTitle, SearchResult, Title, TitleCatalog};
pub use config::{
    load_config, load_config_from_str, validate_config, AuthMethod, Config, ConfigError,
    SanitizedConfig,
};
pub use lists::{
    AddOutcome, ListCoordinator, ListKind, ListStore, ToggleDirection, ToggleOutcome,
};
pub use query::{RawTitleQuery, SortOrder, TitleQuery, PAGE_SIZE};
pub use store::{SqliteStore, StoreError};
pub use users::{User, UserStore};
