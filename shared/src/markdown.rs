use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gray_matter::{engine::YAML, Matter};
use serde::Deserialize;
use tokio::fs;

use crate::{seed, Article, ArticleCatalog, Author, Category};

const AUTHOR_FILE: &str = "author.json";

#[derive(Debug, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: Category,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Load every `.md` file of `content_dir` into a catalog, newest first.
///
/// The slug is the file stem. Files with broken front matter are skipped with
/// a warning. Articles without an `id` get one after the highest explicit id.
pub async fn load_catalog_dir(content_dir: &Path) -> Result<ArticleCatalog> {
    if !content_dir.exists() {
        anyhow::bail!("Content directory does not exist: {}", content_dir.display());
    }

    let author = load_author(content_dir).await?;

    let mut files: Vec<PathBuf> = Vec::new();
    let mut entries = fs::read_dir(content_dir)
        .await
        .with_context(|| format!("failed to read {}", content_dir.display()))?;
    while let Some(entry) = entries.next_entry().await? {
        let file_path = entry.path();
        if file_path.extension().and_then(|s| s.to_str()) == Some("md") {
            files.push(file_path);
        }
    }
    files.sort();

    let mut parsed: Vec<(Option<u32>, Article)> = Vec::with_capacity(files.len());
    for file_path in &files {
        let Some(slug) = file_path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!("Skipping file with non UTF-8 name: {}", file_path.display());
            continue;
        };
        let raw = match fs::read_to_string(file_path).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("Failed to read {}: {}", file_path.display(), err);
                continue;
            },
        };
        match parse_article(&raw, slug, Arc::clone(&author)) {
            Ok(entry) => parsed.push(entry),
            Err(err) => tracing::warn!("Failed to parse {}: {:#}", file_path.display(), err),
        }
    }

    // Sort by date descending (newest first)
    parsed.sort_by(|a, b| b.1.date.cmp(&a.1.date));

    let mut next_id = parsed
        .iter()
        .filter_map(|(id, _)| *id)
        .max()
        .unwrap_or(0);
    let articles = parsed
        .into_iter()
        .map(|(id, mut article)| {
            article.id = id.unwrap_or_else(|| {
                next_id += 1;
                next_id
            });
            article
        })
        .collect();

    Ok(ArticleCatalog::new(articles)?)
}

/// Parse one markdown document. Returns the explicit id, if any, and the
/// article with a placeholder id.
pub fn parse_article(raw: &str, slug: &str, author: Arc<Author>) -> Result<(Option<u32>, Article)> {
    let matter = Matter::<YAML>::new();
    let parsed = matter.parse(raw);

    let frontmatter: Frontmatter = parsed
        .data
        .ok_or_else(|| anyhow::anyhow!("No frontmatter found"))?
        .deserialize()
        .context("Failed to deserialize frontmatter")?;

    let article = Article {
        id: frontmatter.id.unwrap_or(0),
        slug: slug.to_string(),
        title: frontmatter.title,
        excerpt: frontmatter.excerpt,
        content: parsed.content,
        date: frontmatter.date,
        read_time: frontmatter.read_time,
        category: frontmatter.category,
        cover_image: frontmatter.cover_image,
        views: frontmatter.views,
        likes: frontmatter.likes,
        tags: frontmatter.tags,
        author,
        featured: frontmatter.featured,
    };
    Ok((frontmatter.id, article))
}

async fn load_author(content_dir: &Path) -> Result<Arc<Author>> {
    let path = content_dir.join(AUTHOR_FILE);
    if !path.exists() {
        return seed::seed_author();
    }
    let raw = fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let author: Author = serde_json::from_str(&raw)
        .with_context(|| format!("invalid author JSON: {}", path.display()))?;
    Ok(Arc::new(author))
}
