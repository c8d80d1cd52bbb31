//! The article collection bundled with the crate.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{ArticleCatalog, ArticleRecord, Author};

const SEED_CATALOG_JSON: &str = include_str!("../data/posts.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    author: Author,
    posts: Vec<ArticleRecord>,
}

/// Parse a catalog document: one author shared by every post.
pub fn parse_catalog_json(raw: &str) -> Result<ArticleCatalog> {
    let file: CatalogFile = serde_json::from_str(raw).context("invalid catalog JSON")?;
    let author = Arc::new(file.author);
    let articles = file
        .posts
        .into_iter()
        .map(|record| record.into_article(Arc::clone(&author)))
        .collect();
    Ok(ArticleCatalog::new(articles)?)
}

pub fn seed_catalog() -> Result<ArticleCatalog> {
    parse_catalog_json(SEED_CATALOG_JSON).context("failed to load bundled catalog")
}

/// Author of the bundled catalog, used when a content directory has none.
pub fn seed_author() -> Result<Arc<Author>> {
    let file: CatalogFile =
        serde_json::from_str(SEED_CATALOG_JSON).context("invalid bundled catalog JSON")?;
    Ok(Arc::new(file.author))
}
