mod commands;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use storefront_catalog::InMemoryCatalog;
use storefront_recommend::RelatedConfig;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Inspect a storefront catalog snapshot: spec tables, filters, related products")]
#[command(version)]
struct Cli {
    /// Catalog snapshot: a JSON array of product records
    #[arg(long, short = 'c', env = "STOREFRONT_CATALOG")]
    catalog: PathBuf,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the spec table for a product
    Specs {
        /// Product slug
        slug: String,
    },

    /// List products related to a product
    Related {
        /// Product slug
        slug: String,

        /// Maximum number of results (defaults to STOREFRONT_RELATED_LIMIT or 4)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// List mousepads matching the given filters
    Mousepads {
        /// Surface type: Speed, Control or Hybrid
        #[arg(long)]
        surface: Option<String>,

        /// Size: Small, Medium, Large, XL or "Desk Mat"
        #[arg(long)]
        size: Option<String>,

        #[arg(long, default_value_t = 0.0)]
        min_speed: f64,

        #[arg(long, default_value_t = 10.0)]
        max_speed: f64,

        #[arg(long, default_value_t = 0.0)]
        min_control: f64,

        #[arg(long, default_value_t = 10.0)]
        max_control: f64,
    },

    /// List products featured in a pick list
    Picks,
}

fn load_catalog(path: &Path) -> anyhow::Result<InMemoryCatalog> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let catalog = InMemoryCatalog::from_json_reader(BufReader::new(file))
        .with_context(|| format!("reading catalog {}", path.display()))?;
    Ok(catalog)
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let catalog = load_catalog(&cli.catalog)?;
    tracing::debug!(products = catalog.len(), "catalog loaded");

    match cli.command {
        Commands::Specs { slug } => commands::specs(&catalog, &slug, cli.json),
        Commands::Related { slug, limit } => {
            let mut config = RelatedConfig::from_env();
            if let Some(limit) = limit {
                config = config.with_limit(limit);
            }
            commands::related(&catalog, &slug, config, cli.json)
        }
        Commands::Mousepads {
            surface,
            size,
            min_speed,
            max_speed,
            min_control,
            max_control,
        } => {
            let filter = commands::mousepad_filter(
                surface.as_deref(),
                size.as_deref(),
                (min_speed, max_speed),
                (min_control, max_control),
            )?;
            commands::mousepads(&catalog, &filter, cli.json)
        }
        Commands::Picks => commands::picks(&catalog, cli.json),
    }
}

fn main() -> ExitCode {
    storefront_observability::init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_catalog_file_names_the_path() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.json"));
    }
}
