//! XYZ Storefront CLI - Render and verify the mockup documents.
//!
//! # Usage
//!
//! ```bash
//! # Render index.html, cart.html, checkout.html into dist/
//! xyz-store build
//!
//! # Render into a custom directory
//! xyz-store build --out-dir public
//!
//! # Render in memory and verify every page against the markup contract
//! xyz-store check
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use xyz_storefront::{Site, SiteConfig};

#[derive(Parser)]
#[command(name = "xyz-store")]
#[command(author, version, about = "XYZ storefront mockup tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the documents to the output directory
    Build {
        /// Output directory (defaults to STORE_OUT_DIR or `dist`)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Render every document and verify it against the markup contract
    Check,
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env()?;
    let site = Site::from_config(&config);

    match cli.command {
        Commands::Build { out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| config.out_dir.clone());
            site.write_to(&out_dir)?;
            tracing::info!(out_dir = %out_dir.display(), "site built");
        }
        Commands::Check => {
            let mut violations = 0_usize;
            for (page, markup) in site.render_all()? {
                let report = xyz_storefront_conformance::check(page, site.identity(), &markup);
                if report.is_conformant() {
                    tracing::info!(page = %page, "conformant");
                } else {
                    violations += report.violations().len();
                    for violation in report.violations() {
                        tracing::error!(page = %page, "{violation}");
                    }
                }
            }
            if violations > 0 {
                return Err(format!("{violations} contract violation(s)").into());
            }
            tracing::info!("all documents conform to the markup contract");
        }
    }

    Ok(())
}
