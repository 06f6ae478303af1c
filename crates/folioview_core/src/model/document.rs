//! Portfolio document model.
//!
//! # Responsibility
//! - Mirror the wire shape of the portfolio JSON document.
//! - Provide the single filtering predicate used by renderer and state.
//!
//! # Invariants
//! - Wire field names stay camelCase (`filterCategories`, `socialLinks`)
//!   to match the published document format.
//! - `DEFAULT_FILTER` is the reserved category value that disables
//!   filtering; a well-formed document declares exactly one category
//!   with this value.
//! - A project whose category matches no declared filter stays visible
//!   under `"all"` and hidden under every specific filter. This is
//!   documented behavior, not a defect to fix here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reserved filter value that shows every project card.
pub const DEFAULT_FILTER: &str = "all";

/// Top-level portfolio document.
///
/// Every section is optional: a missing section disables the matching
/// page fragment instead of failing the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_categories: Option<Vec<FilterCategory>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

/// Owner identity block rendered once at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    /// Image URI, interpolated verbatim into the profile fragment.
    pub image: String,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

/// One social icon link, opened in a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Icon class identifier, e.g. `fab fa-github`.
    pub icon: String,
}

/// User-selectable grouping key with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    pub name: String,
    pub value: String,
}

impl FilterCategory {
    /// Returns whether this is the reserved `"all"` category.
    pub fn is_default(&self) -> bool {
        self.value == DEFAULT_FILTER
    }
}

/// One portfolio entry rendered as a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Filter key; should correspond to a declared `FilterCategory`.
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

/// External link shown in the card overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    /// Serialized as `type` to match the wire format.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub icon: String,
}

impl Project {
    /// The filtering predicate: visible under `"all"` or an exact
    /// category match.
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter == DEFAULT_FILTER || self.category == filter
    }
}

impl PortfolioDocument {
    /// Number of project entries, zero when the section is absent.
    pub fn project_count(&self) -> usize {
        self.projects.as_ref().map_or(0, Vec::len)
    }

    /// Declared filter values, excluding nothing.
    pub fn declared_filter_values(&self) -> BTreeSet<&str> {
        self.filter_categories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|category| category.value.as_str())
            .collect()
    }

    /// Returns whether the reserved `"all"` category is declared.
    pub fn has_default_filter(&self) -> bool {
        self.filter_categories
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(FilterCategory::is_default)
    }

    /// Projects whose category matches no declared filter value.
    ///
    /// Such projects are reachable only while the `"all"` filter is
    /// active. Callers may log this; behavior is left as documented.
    pub fn orphaned_projects(&self) -> Vec<&Project> {
        let declared = self.declared_filter_values();
        if declared.is_empty() {
            return Vec::new();
        }
        self.projects
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|project| !declared.contains(project.category.as_str()))
            .collect()
    }
}
