//! Startup orchestration and action forwarding.

use crate::loader::fetch::{load_document, DocumentSource, LoadError};
use crate::model::document::PortfolioDocument;
use crate::prefs::theme_store::{load_theme_or_default, PreferenceStore, PrefsError};
use crate::render::fragments;
use crate::state::interaction::{Action, Effect, InteractionState, SelectionState, Theme};
use chrono::Datelike;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// View-level failure.
#[derive(Debug)]
pub enum ViewError {
    /// Document fetch failed; initialization halted.
    Load(LoadError),
    /// Theme persistence failed on write-back.
    Prefs(PrefsError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "{err}"),
            Self::Prefs(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Prefs(err) => Some(err),
        }
    }
}

impl From<LoadError> for ViewError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<PrefsError> for ViewError {
    fn from(value: PrefsError) -> Self {
        Self::Prefs(value)
    }
}

/// Composes loader, renderer, interaction state and preference store.
///
/// Startup is strictly sequential: nothing past the loader runs when
/// the fetch fails, so no listeners or theming exist in the error
/// state. After startup the controller is driven entirely through
/// [`ViewController::dispatch`].
#[derive(Debug)]
pub struct ViewController<P: PreferenceStore> {
    document: PortfolioDocument,
    state: InteractionState,
    prefs: P,
    page: String,
    footer_year: i32,
}

impl<P: PreferenceStore> ViewController<P> {
    /// Loads the document and builds the initial page.
    ///
    /// # Contract
    /// - One fetch attempt; a `Load` error means the caller shows
    ///   [`error_page`] and stops.
    /// - A broken preference store does not halt startup; the default
    ///   theme is used and the failure logged.
    pub fn start(source: &DocumentSource, prefs: P) -> Result<Self, ViewError> {
        let document = load_document(source)?;
        let theme = load_theme_or_default(&prefs);

        let mut controller = Self {
            document,
            state: InteractionState::new(theme),
            prefs,
            page: String::new(),
            footer_year: chrono::Local::now().year(),
        };
        controller.render_full();
        info!(
            "event=view_ready module=view status=ok theme={} cards={}",
            theme.as_str(),
            controller.document.project_count()
        );
        Ok(controller)
    }

    /// Re-renders the whole page from current document and state.
    ///
    /// Replaces the page wholesale and rebuilds the card index; effect
    /// card indices from before this call are stale.
    pub fn render_full(&mut self) -> &str {
        self.page = fragments::page(
            &self.document,
            self.state.selection(),
            self.state.theme(),
            Some(self.footer_year),
        );

        let categories = self
            .document
            .projects
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|project| project.category.clone())
            .collect();
        self.state.set_cards(categories);

        info!(
            "event=render_page module=view status=ok cards={}",
            self.document.project_count()
        );
        &self.page
    }

    /// Applies one action; theme changes are persisted before the
    /// effects are returned to the binding layer.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Effect>, ViewError> {
        let effects = self.state.dispatch(action);
        for effect in &effects {
            if let Effect::ApplyTheme(theme) = effect {
                self.prefs.save_theme(*theme)?;
            }
        }
        Ok(effects)
    }

    /// The explicit default-filter pass performed after startup; the
    /// initial render already reflects it, so effects are a no-op set.
    pub fn initial_filter_effects(&self) -> Vec<Effect> {
        self.state.filter_effects()
    }

    pub fn page_html(&self) -> &str {
        &self.page
    }

    pub fn document(&self) -> &PortfolioDocument {
        &self.document
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn selection(&self) -> &SelectionState {
        self.state.selection()
    }

    /// Visibility of the card at `index` under the active filter.
    pub fn is_card_visible(&self, index: usize) -> bool {
        self.state.is_card_visible(index)
    }
}

/// Replacement markup for the fetch-failure state.
pub fn error_page() -> String {
    fragments::error_page()
}
