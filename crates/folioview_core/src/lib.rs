//! Core rendering and interaction logic for FolioView.
//! This crate is the single source of truth for portfolio behavior.

pub mod db;
pub mod loader;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod render;
pub mod state;
pub mod view;

pub use loader::fetch::{load_document, DocumentSource, LoadError, LoadResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    FilterCategory, PortfolioDocument, Profile, Project, ProjectLink, SocialLink, DEFAULT_FILTER,
};
pub use prefs::theme_store::{
    load_theme_or_default, PreferenceStore, PrefsError, PrefsResult, SqlitePreferenceStore,
};
pub use state::interaction::{
    Action, Effect, FocusTarget, InteractionState, Key, LinkDisposition, SelectionState, Theme,
    MOBILE_BREAKPOINT_PX,
};
pub use view::controller::{error_page, ViewController, ViewError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
