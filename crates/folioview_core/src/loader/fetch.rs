//! Single-attempt document fetch.

use crate::model::document::PortfolioDocument;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

pub type LoadResult<T> = Result<T, LoadError>;

/// Where the portfolio document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Local JSON file.
    Path(PathBuf),
    /// Remote JSON document fetched over http(s).
    Url(String),
}

impl DocumentSource {
    /// Classifies a raw source string: http(s) goes over the network,
    /// everything else is treated as a filesystem path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::Path(PathBuf::from(raw))
        }
    }
}

impl Display for DocumentSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load failure for the portfolio document fetch.
#[derive(Debug)]
pub enum LoadError {
    /// Filesystem read failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Transport-level HTTP failure.
    Http(reqwest::Error),
    /// Non-success HTTP status.
    Status { url: String, status: u16 },
    /// Document body is not valid portfolio JSON.
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Http(err) => write!(f, "{err}"),
            Self::Status { url, status } => {
                write!(f, "fetch of `{url}` returned status {status}")
            }
            Self::Parse(err) => write!(f, "invalid portfolio document: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Http(err) => Some(err),
            Self::Status { .. } => None,
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Loads and parses the portfolio document from the given source.
///
/// # Contract
/// - One attempt; failures are returned, never retried.
/// - Emits `document_load` logging events with duration and status.
/// - Logs a warning for orphaned projects without changing behavior.
pub fn load_document(source: &DocumentSource) -> LoadResult<PortfolioDocument> {
    let started_at = Instant::now();
    info!("event=document_load module=loader status=start source={source}");

    let body = match read_source(source) {
        Ok(body) => body,
        Err(err) => {
            error!(
                "event=document_load module=loader status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err);
        }
    };

    let document: PortfolioDocument = match serde_json::from_str(&body) {
        Ok(document) => document,
        Err(err) => {
            error!(
                "event=document_load module=loader status=error duration_ms={} error_code=parse_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    let orphaned = document.orphaned_projects();
    if !orphaned.is_empty() {
        warn!(
            "event=document_load module=loader status=warn orphaned_projects={}",
            orphaned.len()
        );
    }

    info!(
        "event=document_load module=loader status=ok duration_ms={} projects={}",
        started_at.elapsed().as_millis(),
        document.project_count()
    );
    Ok(document)
}

fn read_source(source: &DocumentSource) -> LoadResult<String> {
    match source {
        DocumentSource::Path(path) => {
            std::fs::read_to_string(path).map_err(|err| LoadError::Io {
                path: path.clone(),
                source: err,
            })
        }
        DocumentSource::Url(url) => {
            let response = reqwest::blocking::get(url)?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            Ok(response.text()?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentSource;
    use std::path::PathBuf;

    #[test]
    fn parse_classifies_urls_and_paths() {
        assert_eq!(
            DocumentSource::parse("https://example.org/data.json"),
            DocumentSource::Url("https://example.org/data.json".to_string())
        );
        assert_eq!(
            DocumentSource::parse("data.json"),
            DocumentSource::Path(PathBuf::from("data.json"))
        );
    }
}
