//! FolioView CLI entry point.
//!
//! # Responsibility
//! - Load a portfolio document from a path or URL and write the
//!   rendered page to stdout or a file.
//! - Expose the persisted theme (restore on start, optional toggle).

use clap::Parser;
use folioview_core::{
    error_page, Action, DocumentSource, SqlitePreferenceStore, ViewController,
};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "folioview", version, about = "Render a portfolio document to a static page")]
struct Cli {
    /// Portfolio document: local JSON file or http(s) URL.
    #[arg(default_value = "data.json")]
    source: String,

    /// Write the page here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Preference database path; omitted means a fresh in-memory store.
    #[arg(long)]
    prefs_db: Option<PathBuf>,

    /// Render with this filter active instead of "all".
    #[arg(long)]
    filter: Option<String>,

    /// Flip the persisted theme before rendering.
    #[arg(long)]
    toggle_theme: bool,

    /// Enable rolling file logs in this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = folioview_core::init_logging(
            folioview_core::default_log_level(),
            &log_dir.to_string_lossy(),
        ) {
            eprintln!("folioview: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(&cli) {
        Ok(page) => match write_page(&cli.out, &page) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("folioview: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            // Fail-fast contract: the error page replaces all content
            // and nothing else initializes.
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("folioview: {err}");
            let _ = write_page(&cli.out, &error_page());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let prefs = match &cli.prefs_db {
        Some(path) => SqlitePreferenceStore::open(path)?,
        None => SqlitePreferenceStore::in_memory()?,
    };

    let source = DocumentSource::parse(&cli.source);
    let mut controller = ViewController::start(&source, prefs)?;

    if cli.toggle_theme {
        controller.dispatch(Action::ToggleTheme)?;
        controller.render_full();
    }
    if let Some(filter) = &cli.filter {
        controller.dispatch(Action::SelectFilter(filter.clone()))?;
        controller.render_full();
    }

    Ok(controller.page_html().to_string())
}

fn write_page(out: &Option<PathBuf>, page: &str) -> std::io::Result<()> {
    match out {
        Some(path) => std::fs::write(path, page),
        None => {
            print!("{page}");
            Ok(())
        }
    }
}
