use std::sync::Arc;

use chrono::NaiveDate;

use crate::{Article, Author, Category, SocialLinks};

pub(crate) fn author() -> Arc<Author> {
    Arc::new(Author {
        name: "Test Author".to_string(),
        avatar: "/assets/avatar.jpeg".to_string(),
        role: "Developer".to_string(),
        bio: "Writes tests.".to_string(),
        social: SocialLinks {
            github: "https://github.com/test".to_string(),
            linkedin: "https://linkedin.com/in/test".to_string(),
            twitter: "https://twitter.com/test".to_string(),
        },
    })
}

pub(crate) fn article(
    id: u32,
    slug: &str,
    title: &str,
    category: Category,
    tags: &[&str],
    views: u64,
) -> Article {
    Article {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: format!("Excerpt for {title}"),
        content: format!("<p>{title}</p>"),
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
        read_time: "5 min de leitura".to_string(),
        category,
        cover_image: String::new(),
        views,
        likes: 0,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        author: author(),
        featured: false,
    }
}

/// `count` articles cycling through the categories, ids starting at 1.
pub(crate) fn numbered(count: u32) -> Vec<Article> {
    (1..=count)
        .map(|id| {
            let category = Category::ALL[(id as usize) % Category::ALL.len()];
            article(id, &format!("post-{id}"), &format!("Post {id}"), category, &[], 100)
        })
        .collect()
}
