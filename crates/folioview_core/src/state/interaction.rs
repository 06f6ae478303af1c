//! Action dispatcher for theme, filtering, menu, links and affordances.
//!
//! # Responsibility
//! - Define the two-state theme, the selection state and every named
//!   action the page reacts to.
//! - Compute, per action, the list of effects a binding layer must
//!   apply to the rendering surface.
//!
//! # Invariants
//! - Filtering is idempotent: re-selecting the active filter emits the
//!   same visibility set.
//! - Menu auto-close transitions (outside click, resize, Escape) are
//!   no-ops while the menu is already closed.
//! - Hover offsets are never emitted for hidden cards.

use crate::model::document::DEFAULT_FILTER;
use log::info;

/// Width above which the mobile menu cannot stay open.
pub const MOBILE_BREAKPOINT_PX: u32 = 767;

/// Visual appearance, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme; toggling twice returns the original value.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable storage/attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; unknown text yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Toggle control glyph: moon while light, sun while dark.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }

    /// Whole-document class reflecting the theme name.
    pub fn body_class(self) -> String {
        format!("{}-theme", self.as_str())
    }
}

/// Transient UI selection state, reset on every reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Currently active filter value.
    pub active_filter: String,
    /// Mobile menu open flag; purely presentational.
    pub menu_open: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active_filter: DEFAULT_FILTER.to_string(),
            menu_open: false,
        }
    }
}

/// Keyboard keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
}

/// Where input focus sits when a key arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    FilterButton(String),
    MenuToggle,
    Elsewhere,
}

/// Named user/page actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    SelectFilter(String),
    ToggleMenu,
    /// Click outside both the menu toggle and the filter container.
    OutsideClick,
    Resize { width: u32 },
    Key { key: Key, focus: FocusTarget },
    /// Activation of an anchor with the given href.
    Navigate { href: String },
    /// Pointer entered the card at this render index.
    HoverEnter { card: usize },
    /// Pointer left the card at this render index.
    HoverLeave { card: usize },
    VisibilityChange { hidden: bool },
}

/// How an activated anchor should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDisposition {
    /// Empty or bare-fragment href; left alone.
    Ignore,
    /// `mailto:` address; navigate the current context.
    CurrentContext,
    /// `http(s)` address; open detached (noopener + noreferrer).
    NewContext,
    /// Anything else falls through to default navigation.
    BrowserDefault,
}

/// Classifies an anchor href per the link-handling contract.
pub fn classify_link(href: &str) -> LinkDisposition {
    if href.is_empty() || href == "#" {
        LinkDisposition::Ignore
    } else if href.starts_with("mailto:") {
        LinkDisposition::CurrentContext
    } else if href.starts_with("http") {
        LinkDisposition::NewContext
    } else {
        LinkDisposition::BrowserDefault
    }
}

/// The filtering predicate shared with the renderer.
pub fn card_visible(filter: &str, category: &str) -> bool {
    filter == DEFAULT_FILTER || category == filter
}

/// Surface mutations a binding layer must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the root scheme attribute and body class, swap the toggle
    /// icon, and persist the value.
    ApplyTheme(Theme),
    /// Move the active marker to exactly this filter button.
    MarkActiveFilter(String),
    /// Show or hide the card at this render index; hiding also applies
    /// the `hidden` marker for transition hooks.
    SetCardVisible { card: usize, visible: bool },
    /// Add the active/show markers to toggle and filter container.
    OpenMenu,
    /// Remove both menu markers.
    CloseMenu,
    /// Navigate the current context (mailto).
    NavigateCurrent(String),
    /// Open detached, with no back-reference to this page.
    OpenNewContext(String),
    /// Vertical offset in pixels for the card at this render index.
    SetCardOffset { card: usize, offset_px: i32 },
    /// Toggle the `page-hidden` body class.
    SetPageHidden(bool),
}

/// Dispatcher owning theme, selection state and the card index.
///
/// The card index (one category per rendered card, in render order)
/// must be rebuilt after every full re-render, since effects address
/// cards by position.
#[derive(Debug, Default)]
pub struct InteractionState {
    theme: Theme,
    selection: SelectionState,
    card_categories: Vec<String>,
}

impl InteractionState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Replaces the card index after a full re-render.
    pub fn set_cards(&mut self, categories: Vec<String>) {
        self.card_categories = categories;
    }

    /// Returns whether the card at `index` passes the active filter.
    pub fn is_card_visible(&self, index: usize) -> bool {
        self.card_categories
            .get(index)
            .is_some_and(|category| card_visible(&self.selection.active_filter, category))
    }

    /// Visibility effects for every card under the active filter.
    ///
    /// Used both by `SelectFilter` and by the explicit default-filter
    /// pass at startup.
    pub fn filter_effects(&self) -> Vec<Effect> {
        self.card_categories
            .iter()
            .enumerate()
            .map(|(card, category)| Effect::SetCardVisible {
                card,
                visible: card_visible(&self.selection.active_filter, category),
            })
            .collect()
    }

    /// Applies one action and returns the effects to perform, in order.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                info!(
                    "event=theme_toggle module=state status=ok theme={}",
                    self.theme.as_str()
                );
                vec![Effect::ApplyTheme(self.theme)]
            }
            Action::SelectFilter(value) => self.select_filter(value),
            Action::ToggleMenu => {
                if self.selection.menu_open {
                    self.close_menu()
                } else {
                    self.selection.menu_open = true;
                    vec![Effect::OpenMenu]
                }
            }
            Action::OutsideClick => {
                if self.selection.menu_open {
                    self.close_menu()
                } else {
                    Vec::new()
                }
            }
            Action::Resize { width } => {
                if width > MOBILE_BREAKPOINT_PX && self.selection.menu_open {
                    self.close_menu()
                } else {
                    Vec::new()
                }
            }
            Action::Key { key, focus } => self.handle_key(key, focus),
            Action::Navigate { href } => match classify_link(&href) {
                LinkDisposition::CurrentContext => vec![Effect::NavigateCurrent(href)],
                LinkDisposition::NewContext => vec![Effect::OpenNewContext(href)],
                LinkDisposition::Ignore | LinkDisposition::BrowserDefault => Vec::new(),
            },
            Action::HoverEnter { card } => {
                if self.is_card_visible(card) {
                    vec![Effect::SetCardOffset {
                        card,
                        offset_px: -4,
                    }]
                } else {
                    Vec::new()
                }
            }
            Action::HoverLeave { card } => {
                if card < self.card_categories.len() {
                    vec![Effect::SetCardOffset { card, offset_px: 0 }]
                } else {
                    Vec::new()
                }
            }
            Action::VisibilityChange { hidden } => vec![Effect::SetPageHidden(hidden)],
        }
    }

    fn select_filter(&mut self, value: String) -> Vec<Effect> {
        info!("event=filter_select module=state status=ok filter={value}");
        self.selection.active_filter = value.clone();
        // Menu close is an unconditional side effect of any selection.
        self.selection.menu_open = false;

        let mut effects = vec![Effect::MarkActiveFilter(value)];
        effects.extend(self.filter_effects());
        effects.push(Effect::CloseMenu);
        effects
    }

    fn handle_key(&mut self, key: Key, focus: FocusTarget) -> Vec<Effect> {
        match (key, focus) {
            (Key::Enter | Key::Space, FocusTarget::FilterButton(value)) => {
                self.dispatch(Action::SelectFilter(value))
            }
            (Key::Enter | Key::Space, FocusTarget::MenuToggle) => self.dispatch(Action::ToggleMenu),
            (Key::Escape, _) => {
                if self.selection.menu_open {
                    self.close_menu()
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    fn close_menu(&mut self) -> Vec<Effect> {
        self.selection.menu_open = false;
        vec![Effect::CloseMenu]
    }
}
