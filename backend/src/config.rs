use std::{env, path::PathBuf};

use blogdev_shared::{DEFAULT_API_PAGE_SIZE, DEFAULT_RELATED_LIMIT, DEFAULT_TRENDING_LIMIT};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: String,
    /// Markdown catalog directory; the bundled catalog is used when unset.
    pub content_dir: Option<PathBuf>,
    pub page_size: usize,
    pub related_limit: usize,
    pub trending_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            content_dir: None,
            page_size: DEFAULT_API_PAGE_SIZE,
            related_limit: DEFAULT_RELATED_LIMIT,
            trending_limit: DEFAULT_TRENDING_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let port = parse_env(&lookup, "PORT", defaults.port, 1);
        let bind_addr = lookup("BIND_ADDR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.bind_addr);
        let content_dir = lookup("CONTENT_DIR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let page_size = parse_env(&lookup, "POSTS_PAGE_SIZE", defaults.page_size, 1);
        let related_limit = parse_env(&lookup, "RELATED_POSTS_LIMIT", defaults.related_limit, 0);
        let trending_limit = parse_env(&lookup, "TRENDING_POSTS_LIMIT", defaults.trending_limit, 0);

        Self {
            port,
            bind_addr,
            content_dir,
            page_size,
            related_limit,
            trending_limit,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T, min: T) -> T
where
    T: std::str::FromStr + PartialOrd + Copy + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value >= min => value,
        _ => {
            tracing::warn!("ignoring invalid {key}={raw:?}, using {default}");
            default
        },
    }
}
