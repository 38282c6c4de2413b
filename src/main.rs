#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Whether page transitions are disabled (reduced motion)
static REDUCED_MOTION: OnceLock<bool> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    })
}

/// True when transitions should collapse to an immediate swap
pub fn reduced_motion() -> bool {
    REDUCED_MOTION.get().copied().unwrap_or(false)
}

/// Personal portfolio - routed pages with animated transitions
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio - home, about, projects, skills, contact")]
struct Args {
    /// Data directory for the persisted theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Disable page transition animations
    #[arg(long)]
    reduced_motion: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
    });

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = REDUCED_MOTION.set(args.reduced_motion);

    tracing::info!(data_dir = %data_dir.display(), "starting portfolio desktop");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(portfolio_core::content::OWNER_NAME)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
