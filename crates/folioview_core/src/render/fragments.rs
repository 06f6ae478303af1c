//! Fragment and page builders.
//!
//! Markup structure and class vocabulary follow the published page
//! skeleton: `profile-*`, `filter-btn`, `project-card` and friends are
//! load-bearing for the stylesheet and the binding layer.

use crate::model::document::{FilterCategory, PortfolioDocument, Profile, Project};
use crate::state::interaction::{card_visible, SelectionState, Theme};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write as _;

// Icon identifiers land in a class attribute; anything outside this
// shape renders as a bare <i> instead of reaching the attribute.
static ICON_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 _-]+$").expect("valid icon class regex"));

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn icon_markup(raw: &str) -> String {
    if ICON_CLASS_RE.is_match(raw) {
        format!("<i class=\"{raw}\"></i>")
    } else {
        "<i></i>".to_string()
    }
}

/// Profile fragment: image, name, title, bio, social icon links.
pub fn profile_fragment(profile: &Profile) -> String {
    let mut out = String::new();
    let name = escape_html(&profile.name);

    let _ = write!(
        out,
        "<div class=\"profile-image\"><img src=\"{}\" alt=\"{name}\" /></div>",
        escape_html(&profile.image)
    );
    let _ = write!(
        out,
        "<div class=\"profile-content\">\
         <h1 class=\"profile-name\">{name}</h1>\
         <p class=\"profile-title\">{}</p>\
         <p class=\"profile-bio\">{}</p>",
        escape_html(&profile.title),
        escape_html(&profile.bio)
    );

    out.push_str("<div class=\"social-links\">");
    for link in &profile.social_links {
        let _ = write!(
            out,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>",
            escape_html(&link.url),
            escape_html(&link.platform),
            icon_markup(&link.icon)
        );
    }
    out.push_str("</div></div>");
    out
}

/// Filter-buttons fragment; exactly the button matching `active`
/// carries the active marker.
pub fn filter_buttons_fragment(categories: &[FilterCategory], active: &str) -> String {
    let mut out = String::new();
    for category in categories {
        let marker = if category.value == active { " active" } else { "" };
        let _ = write!(
            out,
            "<button class=\"filter-btn{marker}\" data-filter=\"{}\">{}</button>",
            escape_html(&category.value),
            escape_html(&category.name)
        );
    }
    out
}

/// Project-cards fragment; cards failing the active filter carry the
/// `hidden` marker plus a display toggle (both are styling hooks).
pub fn project_cards_fragment(projects: &[Project], selection: &SelectionState) -> String {
    let mut out = String::new();
    for project in projects {
        let visible = card_visible(&selection.active_filter, &project.category);
        let (marker, style) = if visible {
            ("", "")
        } else {
            (" hidden", " style=\"display:none\"")
        };

        let _ = write!(
            out,
            "<article class=\"project-card{marker}\" data-category=\"{}\"{style}>",
            escape_html(&project.category)
        );

        let title = escape_html(&project.title);
        let _ = write!(
            out,
            "<div class=\"project-image\"><img src=\"{}\" alt=\"{title}\" />\
             <div class=\"project-overlay\"><div class=\"project-links\">",
            escape_html(&project.image)
        );
        for link in &project.links {
            let _ = write!(
                out,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{}</a>",
                escape_html(&link.url),
                escape_html(&link.kind),
                icon_markup(&link.icon)
            );
        }
        out.push_str("</div></div></div>");

        let _ = write!(
            out,
            "<div class=\"project-info\"><h3 class=\"project-title\">{title}</h3>\
             <p class=\"project-description\">{}</p><div class=\"project-tags\">",
            escape_html(&project.description)
        );
        for tag in &project.tags {
            let _ = write!(out, "<span class=\"tag\">{}</span>", escape_html(tag));
        }
        out.push_str("</div></div></article>");
    }
    out
}

/// Full page skeleton composing the three fragments.
///
/// Absent document sections leave their containers empty. The theme is
/// reflected both as the root scheme attribute and as the body class;
/// the toggle control starts with the matching glyph.
pub fn page(
    document: &PortfolioDocument,
    selection: &SelectionState,
    theme: Theme,
    footer_year: Option<i32>,
) -> String {
    let title = document
        .profile
        .as_ref()
        .map_or_else(|| "Portfolio".to_string(), |p| escape_html(&p.name));

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\" data-color-scheme=\"{}\">\n<head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"style.css\" />\n\
         </head>\n<body class=\"{}\">\n",
        theme.as_str(),
        theme.body_class()
    );

    let toggle_marker = if selection.menu_open { " active" } else { "" };
    let show_marker = if selection.menu_open { " show" } else { "" };
    let _ = write!(
        out,
        "<header class=\"site-header\">\n\
         <button id=\"theme-toggle\" aria-label=\"Toggle theme\"><i class=\"{}\"></i></button>\n\
         <button id=\"mobile-menu-toggle\" class=\"menu-toggle{toggle_marker}\" aria-label=\"Toggle filters\"><i class=\"fas fa-bars\"></i></button>\n\
         </header>\n",
        theme.icon_class()
    );

    out.push_str("<main>\n<section id=\"profile-container\" class=\"profile\">");
    if let Some(profile) = &document.profile {
        out.push_str(&profile_fragment(profile));
    }
    out.push_str("</section>\n");

    let _ = write!(
        out,
        "<nav id=\"filter-buttons\" class=\"filters{show_marker}\">"
    );
    if let Some(categories) = &document.filter_categories {
        out.push_str(&filter_buttons_fragment(
            categories,
            &selection.active_filter,
        ));
    }
    out.push_str("</nav>\n");

    out.push_str("<section id=\"projects\" class=\"projects-grid\">");
    if let Some(projects) = &document.projects {
        out.push_str(&project_cards_fragment(projects, selection));
    }
    out.push_str("</section>\n</main>\n");

    out.push_str("<footer class=\"site-footer\">");
    if let Some(year) = footer_year {
        let _ = write!(out, "<p>&copy; <span id=\"current-year\">{year}</span></p>");
    }
    out.push_str("</footer>\n</body>\n</html>\n");
    out
}

/// Replacement content shown when the document load fails.
///
/// Nothing else renders in this state; initialization halts.
pub fn error_page() -> String {
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\" /><title>Portfolio</title></head>\n\
     <body><div class=\"error-message\">Failed to load portfolio content. Please try again later.</div></body>\n</html>\n"
        .to_string()
}
