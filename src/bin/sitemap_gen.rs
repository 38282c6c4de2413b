//! Sitemap generator.
//!
//! Regenerates `sitemap.xml` from the fixed route list and site base URL.
//! Output is deterministic apart from the embedded current date.

use std::path::PathBuf;

use clap::Parser;
use portfolio_core::SitemapConfig;

/// Generate the site's sitemap.xml
#[derive(Parser, Debug)]
#[command(name = "sitemap-gen")]
#[command(about = "Generate sitemap.xml from the site's route list")]
struct Args {
    /// Output file path
    #[arg(short, long, default_value = "public/sitemap.xml")]
    out: PathBuf,

    /// Override the site base URL
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match args.base_url {
        Some(base) => SitemapConfig::with_base_url(base),
        None => SitemapConfig::default(),
    };

    config.write(&args.out)?;
    println!("Sitemap generated at {}", args.out.display());
    Ok(())
}
