use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::KeyResolver;
use crate::gallery::Gallery;

mod app;
mod cli;
mod command;
mod config;
mod gallery;
mod media;
mod search;
mod theme;
mod tui;
mod ui;

pub use theme::Theme;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting lightbox");

    let args = cli::Args::parse();

    let config = config::load()?;
    let theme_name = args.theme.unwrap_or(config.theme.name);
    let resolver = Arc::new(KeyResolver::new(Arc::new(config.keybindings)));

    let gallery = load_gallery(args.gallery.as_deref())?;

    let mut app = App::new(gallery, resolver, theme_name);
    app.run().await?;

    Ok(())
}

/// Load the gallery from the CLI path, then the config directory, then the
/// built-in demo.
fn load_gallery(path: Option<&std::path::Path>) -> Result<Gallery> {
    if let Some(path) = path {
        return Gallery::load(path);
    }
    if let Some(default_path) = config::gallery_path()
        && default_path.exists()
    {
        return Gallery::load(&default_path);
    }
    Ok(Gallery::demo())
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("lightbox").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "lightbox.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}
