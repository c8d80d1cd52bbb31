use blogdev_shared::ArticleCatalog;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub articles: usize,
    pub featured: usize,
    pub categories: usize,
    pub tags: usize,
    /// Non-fatal findings, one line each.
    pub warnings: Vec<String>,
}

/// Summarize a catalog that already passed load-time validation.
///
/// Duplicate slugs and unknown categories fail while loading, so they never
/// reach this point.
pub fn run(catalog: &ArticleCatalog) -> CheckReport {
    let mut warnings = Vec::new();
    for article in catalog.articles() {
        if article.tags.is_empty() {
            warnings.push(format!("{}: no tags", article.slug));
        }
        if article.excerpt.trim().is_empty() {
            warnings.push(format!("{}: empty excerpt", article.slug));
        }
    }
    let featured = catalog.featured().len();
    if featured == 0 && !catalog.is_empty() {
        warnings.push("no featured article".to_string());
    }
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    CheckReport {
        articles: catalog.len(),
        featured,
        categories: catalog.categories().len(),
        tags: catalog.tags().len(),
        warnings,
    }
}
