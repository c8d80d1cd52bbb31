//! Read-only query operations over the loaded article collection.
//!
//! Every operation is a pure function of the collection and its arguments.
//! The collection holds tens of articles, so related and trending views are
//! recomputed by a linear scan on every call instead of being cached.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{Article, CatalogError, Category, ALL_CATEGORIES_LABEL};

/// Category selection applied to a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering.
    All,
    Only(Category),
    /// A label outside the category set; matches nothing.
    Unknown(String),
}

impl CategoryFilter {
    /// Interpret a client-supplied category label.
    ///
    /// Absent, empty, `"Todos"` and `"All"` all mean no filter.
    pub fn parse(label: Option<&str>) -> Self {
        match label {
            None | Some("") => CategoryFilter::All,
            Some(label) if label == ALL_CATEGORIES_LABEL || label == "All" => CategoryFilter::All,
            Some(label) => label
                .parse::<Category>()
                .map(CategoryFilter::Only)
                .unwrap_or_else(|_| CategoryFilter::Unknown(label.to_string())),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => article.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

/// Article count per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub name: Category,
    pub count: usize,
}

/// Article count per tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    pub name: String,
    pub count: usize,
}

/// Case-insensitive substring match against title, excerpt or any tag.
///
/// `query_lower` must already be lowercased.
fn matches_lowered(article: &Article, query_lower: &str) -> bool {
    article.title.to_lowercase().contains(query_lower)
        || article.excerpt.to_lowercase().contains(query_lower)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
}

/// Keyword search over any sequence of articles, keeping input order.
///
/// An empty query matches nothing. Callers that want "everything when the
/// box is empty" must skip the call, see [`crate::listing::compose_listing`].
pub fn search<'a, I>(articles: I, query: &str) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();
    articles
        .into_iter()
        .filter(|article| matches_lowered(article, &query_lower))
        .collect()
}

/// Category filter over any sequence of articles, keeping input order.
pub fn filter_by_category<'a, I>(articles: I, filter: &CategoryFilter) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles
        .into_iter()
        .filter(|article| filter.matches(article))
        .collect()
}

/// Whether `candidate` shares the category or at least one tag with
/// `reference`. Tags compare by exact string equality.
pub fn is_related(reference: &Article, candidate: &Article) -> bool {
    candidate.category == reference.category
        || candidate.tags.iter().any(|tag| reference.tags.contains(tag))
}

/// The immutable article collection loaded at start-up.
#[derive(Debug, Clone, Default)]
pub struct ArticleCatalog {
    articles: Vec<Article>,
}

impl ArticleCatalog {
    /// Build a catalog, rejecting duplicate slugs.
    pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
        let mut seen: HashMap<&str, u32> = HashMap::with_capacity(articles.len());
        for article in &articles {
            if let Some(first_id) = seen.insert(article.slug.as_str(), article.id) {
                return Err(CatalogError::DuplicateSlug {
                    slug: article.slug.clone(),
                    first_id,
                    second_id: article.id,
                });
            }
        }
        Ok(Self { articles })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    pub fn search(&self, query: &str) -> Vec<&Article> {
        search(&self.articles, query)
    }

    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&Article> {
        filter_by_category(&self.articles, filter)
    }

    /// Up to `limit` articles related to `slug`, in collection order.
    ///
    /// An unknown slug has no related articles.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Article> {
        let Some(reference) = self.find_by_slug(slug) else {
            return Vec::new();
        };
        self.articles
            .iter()
            .filter(|candidate| candidate.slug != reference.slug)
            .filter(|candidate| is_related(reference, candidate))
            .take(limit)
            .collect()
    }

    /// The `limit` most viewed articles. Ties keep collection order.
    pub fn trending(&self, limit: usize) -> Vec<&Article> {
        let mut ranked: Vec<&Article> = self.articles.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        ranked.truncate(limit);
        ranked
    }

    pub fn featured(&self) -> Vec<&Article> {
        self.articles.iter().filter(|article| article.featured).collect()
    }

    /// Categories in order of first appearance, with article counts.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        let mut categories: Vec<CategoryInfo> = Vec::new();
        for article in &self.articles {
            match categories
                .iter_mut()
                .find(|info| info.name == article.category)
            {
                Some(info) => info.count += 1,
                None => categories.push(CategoryInfo {
                    name: article.category,
                    count: 1,
                }),
            }
        }
        categories
    }

    /// Distinct tags sorted by name, with article counts.
    pub fn tags(&self) -> Vec<TagInfo> {
        let mut tag_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for article in &self.articles {
            for tag in &article.tags {
                *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        tag_counts
            .into_iter()
            .map(|(name, count)| TagInfo {
                name: name.to_string(),
                count,
            })
            .collect()
    }
}
