use std::sync::Arc;

use anyhow::{Context, Result};
use blogdev_shared::{
    comments_store::CommentStore, contact_store::ContactInbox, markdown,
    newsletter_store::NewsletterStore, seed, ArticleCatalog,
};

use crate::config::ServerConfig;

/// Everything the handlers share. The catalog is read-only; the intake
/// stores serialize their own appends.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ArticleCatalog>,
    pub comments: Arc<CommentStore>,
    pub newsletter: Arc<NewsletterStore>,
    pub contact: Arc<ContactInbox>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let catalog = match &config.content_dir {
            Some(dir) => markdown::load_catalog_dir(dir)
                .await
                .with_context(|| format!("failed to load articles from {}", dir.display()))?,
            None => seed::seed_catalog()?,
        };
        let comments = CommentStore::with_seed()?;
        Ok(Self::from_parts(catalog, comments, config))
    }

    pub fn from_parts(catalog: ArticleCatalog, comments: CommentStore, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            comments: Arc::new(comments),
            newsletter: Arc::new(NewsletterStore::new()),
            contact: Arc::new(ContactInbox::new()),
            config: Arc::new(config),
        }
    }

    pub fn article_count(&self) -> usize {
        self.catalog.len()
    }
}
