use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lightbox", version, about = "Terminal media gallery with a modal viewer")]
pub struct Args {
    /// Path to a gallery TOML file
    #[arg(short, long)]
    pub gallery: Option<PathBuf>,

    /// Theme name (e.g., "Catppuccin Mocha")
    #[arg(short, long)]
    pub theme: Option<String>,
}
