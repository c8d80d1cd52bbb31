use std::{num::NonZeroUsize, path::PathBuf};

use blogdev_shared::{DEFAULT_API_PAGE_SIZE, DEFAULT_RELATED_LIMIT, DEFAULT_TRENDING_LIMIT};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "Inspect the blog article catalog")]
pub struct Cli {
    /// Markdown content directory; the bundled catalog is used when omitted.
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List articles the way the listing page does.
    List {
        /// Case-insensitive search over title, excerpt and tags.
        #[arg(long, short)]
        query: Option<String>,
        /// Category label (`Todos` for every category).
        #[arg(long, short)]
        category: Option<String>,
        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: NonZeroUsize,
        /// Articles per page.
        #[arg(long, default_value_t = default_page_size())]
        limit: NonZeroUsize,
    },
    /// Print one article with its content.
    Show {
        slug: String,
    },
    /// Articles related to the given one.
    Related {
        slug: String,
        #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },
    /// Most viewed articles.
    Trending {
        #[arg(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
        limit: usize,
    },
    /// Articles flagged as featured.
    Featured,
    /// Article count per category.
    Categories,
    /// Article count per tag.
    Tags,
    /// Load the catalog and report totals; fails on integrity errors.
    Check,
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_API_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}
