//! Shared data model and article query engine for the BlogDev site.

use std::{fmt, str::FromStr, sync::Arc};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod comments_store;
pub mod contact_store;
pub mod error;
pub mod listing;
pub mod markdown;
pub mod newsletter_store;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{ArticleCatalog, CategoryFilter};
pub use error::{CatalogError, IntakeError};
pub use listing::{Page, PageRequest, PaginationMeta};

/// Label clients send to mean "no category filter".
pub const ALL_CATEGORIES_LABEL: &str = "Todos";
/// Page size of the blog listing page.
pub const POSTS_PER_PAGE: usize = 6;
/// Page size of the list API when `limit` is absent or invalid.
pub const DEFAULT_API_PAGE_SIZE: usize = 10;
/// Related articles shown next to an article.
pub const DEFAULT_RELATED_LIMIT: usize = 3;
/// Entries in the trending widget.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Closed set of article categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Frontend,
    Backend,
    Mobile,
    DevOps,
    Seguranca,
    Carreira,
    #[serde(rename = "Banco de Dados")]
    BancoDeDados,
    Arquitetura,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Frontend,
        Category::Backend,
        Category::Mobile,
        Category::DevOps,
        Category::Seguranca,
        Category::Carreira,
        Category::BancoDeDados,
        Category::Arquitetura,
    ];

    /// Display name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Mobile => "Mobile",
            Category::DevOps => "DevOps",
            Category::Seguranca => "Seguranca",
            Category::Carreira => "Carreira",
            Category::BancoDeDados => "Banco de Dados",
            Category::Arquitetura => "Arquitetura",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == value)
            .ok_or_else(|| CatalogError::UnknownCategory(value.to_string()))
    }
}

// 作者信息（所有文章共享同一份）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub role: String,
    pub bio: String,
    pub social: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

// 完整文章数据模型
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String, // HTML 或 Markdown，引擎不解析
    pub date: NaiveDate,
    pub read_time: String,
    pub category: Category,
    pub cover_image: String,
    pub views: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    pub author: Arc<Author>,
    pub featured: bool,
}

/// Article as stored in catalog data, before the shared author is attached.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: Category,
    pub cover_image: String,
    pub views: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ArticleRecord {
    pub fn into_article(self, author: Arc<Author>) -> Article {
        Article {
            id: self.id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            date: self.date,
            read_time: self.read_time,
            category: self.category,
            cover_image: self.cover_image,
            views: self.views,
            likes: self.likes,
            tags: self.tags,
            author,
            featured: self.featured,
        }
    }
}

// 列表项（去掉 content 的精简版）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListItem {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub category: Category,
    pub cover_image: String,
    pub views: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    pub author: Arc<Author>,
    pub featured: bool,
}

impl From<&Article> for ArticleListItem {
    fn from(a: &Article) -> Self {
        ArticleListItem {
            id: a.id,
            slug: a.slug.clone(),
            title: a.title.clone(),
            excerpt: a.excerpt.clone(),
            date: a.date,
            read_time: a.read_time.clone(),
            category: a.category,
            cover_image: a.cover_image.clone(),
            views: a.views,
            likes: a.likes,
            tags: a.tags.clone(),
            author: Arc::clone(&a.author),
            featured: a.featured,
        }
    }
}

/// Trim a form field, treating blank input as absent.
pub(crate) fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn category_parses_display_names() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>().ok(), Some(category));
        }
        assert!("banco de dados".parse::<Category>().is_err());
        assert!("Todos".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_with_spaces() {
        let json = serde_json::to_string(&Category::BancoDeDados).expect("serialize");
        assert_eq!(json, "\"Banco de Dados\"");
    }
}
