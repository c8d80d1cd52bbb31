use std::num::NonZeroUsize;

use anyhow::{bail, Result};
use blogdev_shared::{
    listing::{self, ListingQuery},
    Article, ArticleCatalog, ArticleListItem, CategoryFilter, PageRequest, PaginationMeta,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListReport {
    pub posts: Vec<ArticleListItem>,
    pub pagination: PaginationMeta,
    /// Only shown on the unfiltered first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<ArticleListItem>,
    pub trending: Vec<ArticleListItem>,
}

#[derive(Debug, Serialize)]
pub struct PostsReport {
    pub total: usize,
    pub posts: Vec<ArticleListItem>,
}

impl PostsReport {
    fn from_articles(articles: Vec<&Article>) -> Self {
        Self {
            total: articles.len(),
            posts: articles.into_iter().map(ArticleListItem::from).collect(),
        }
    }
}

pub fn list(
    catalog: &ArticleCatalog,
    query: Option<&str>,
    category: Option<&str>,
    page: NonZeroUsize,
    limit: NonZeroUsize,
) -> ListReport {
    let query = ListingQuery {
        query: query.unwrap_or_default().to_string(),
        category: CategoryFilter::parse(category),
        page: PageRequest::new(page, limit),
    };
    let listing = listing::compose_listing(catalog, &query, blogdev_shared::DEFAULT_TRENDING_LIMIT);
    let page = listing.page.map(ArticleListItem::from);

    ListReport {
        posts: page.items,
        pagination: page.meta,
        featured: listing
            .featured
            .filter(|_| query.is_landing())
            .map(ArticleListItem::from),
        trending: listing.trending.into_iter().map(ArticleListItem::from).collect(),
    }
}

pub fn show(catalog: &ArticleCatalog, slug: &str) -> Result<Article> {
    match catalog.find_by_slug(slug) {
        Some(article) => Ok(article.clone()),
        None => bail!("article not found: {slug}"),
    }
}

pub fn related(catalog: &ArticleCatalog, slug: &str, limit: usize) -> Result<PostsReport> {
    if catalog.find_by_slug(slug).is_none() {
        bail!("article not found: {slug}");
    }
    Ok(PostsReport::from_articles(catalog.related(slug, limit)))
}

pub fn trending(catalog: &ArticleCatalog, limit: usize) -> PostsReport {
    PostsReport::from_articles(catalog.trending(limit))
}

pub fn featured(catalog: &ArticleCatalog) -> PostsReport {
    PostsReport::from_articles(catalog.featured())
}
