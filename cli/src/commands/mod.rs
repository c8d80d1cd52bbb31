pub mod browse;
pub mod check;
pub mod taxonomy;

use std::path::Path;

use anyhow::{Context, Result};
use blogdev_shared::{markdown, seed, ArticleCatalog};
use serde_json::Value;

use crate::cli::{Cli, Commands};

pub async fn run(cli: Cli) -> Result<()> {
    let output = execute(&cli).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Run a command and return its JSON report.
pub async fn execute(cli: &Cli) -> Result<Value> {
    let catalog = load_catalog(cli.content_dir.as_deref()).await?;

    let output = match &cli.command {
        Commands::List {
            query,
            category,
            page,
            limit,
        } => serde_json::to_value(browse::list(
            &catalog,
            query.as_deref(),
            category.as_deref(),
            *page,
            *limit,
        ))?,
        Commands::Show {
            slug,
        } => serde_json::to_value(browse::show(&catalog, slug)?)?,
        Commands::Related {
            slug,
            limit,
        } => serde_json::to_value(browse::related(&catalog, slug, *limit)?)?,
        Commands::Trending {
            limit,
        } => serde_json::to_value(browse::trending(&catalog, *limit))?,
        Commands::Featured => serde_json::to_value(browse::featured(&catalog))?,
        Commands::Categories => serde_json::to_value(taxonomy::categories(&catalog))?,
        Commands::Tags => serde_json::to_value(taxonomy::tags(&catalog))?,
        Commands::Check => serde_json::to_value(check::run(&catalog))?,
    };
    Ok(output)
}

pub async fn load_catalog(content_dir: Option<&Path>) -> Result<ArticleCatalog> {
    match content_dir {
        Some(dir) => {
            let catalog = markdown::load_catalog_dir(dir)
                .await
                .with_context(|| format!("failed to load articles from {}", dir.display()))?;
            tracing::info!("Loaded {} articles from {}", catalog.len(), dir.display());
            Ok(catalog)
        },
        None => seed::seed_catalog().context("failed to load bundled articles"),
    }
}
