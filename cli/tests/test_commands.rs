#[cfg(test)]
mod tests {
    use std::path::Path;

    use anyhow::Result;
    use blogdev_cli::{
        cli::{Cli, Commands},
        commands,
    };
    use clap::Parser;
    use serde_json::Value;

    const RUST_MD: &str = r#"---
title: "Rust para devs backend"
excerpt: "Ownership sem medo"
date: "2025-01-10"
read_time: "9 min de leitura"
category: "Backend"
views: 900
tags:
  - Rust
  - Backend
---

Corpo do artigo.
"#;

    const AXUM_MD: &str = r#"---
title: "APIs com Axum"
excerpt: "Roteamento e extractors"
date: "2025-02-01"
read_time: "7 min de leitura"
category: "Backend"
views: 1500
featured: true
tags:
  - Rust
  - API
---

Outro corpo.
"#;

    async fn run(args: &[&str]) -> Result<Value> {
        let cli = Cli::try_parse_from(args)?;
        commands::execute(&cli).await
    }

    fn slugs(posts: &Value) -> Vec<String> {
        posts
            .as_array()
            .map(|posts| {
                posts
                    .iter()
                    .filter_map(|post| post["slug"].as_str().map(ToOwned::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn write_content(dir: &Path) -> Result<()> {
        std::fs::write(dir.join("rust-backend.md"), RUST_MD)?;
        std::fs::write(dir.join("apis-com-axum.md"), AXUM_MD)?;
        Ok(())
    }

    #[test]
    fn parses_list_flags_and_global_content_dir() {
        let cli = Cli::try_parse_from([
            "blog-cli",
            "list",
            "--query",
            "react",
            "--category",
            "Frontend",
            "--page",
            "2",
            "--content-dir",
            "./content",
        ])
        .expect("parse list");

        assert_eq!(cli.content_dir.as_deref(), Some(Path::new("./content")));
        match cli.command {
            Commands::List {
                query,
                category,
                page,
                limit,
            } => {
                assert_eq!(query.as_deref(), Some("react"));
                assert_eq!(category.as_deref(), Some("Frontend"));
                assert_eq!(page.get(), 2);
                assert_eq!(limit.get(), 10);
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_page() {
        assert!(Cli::try_parse_from(["blog-cli", "list", "--page", "0"]).is_err());
    }

    #[tokio::test]
    async fn list_landing_page_includes_featured() -> Result<()> {
        let output = run(&["blog-cli", "list"]).await?;
        assert_eq!(output["pagination"]["total"], 15);
        assert_eq!(output["featured"]["id"], 1);
        assert_eq!(output["trending"].as_array().map(Vec::len), Some(5));

        let filtered = run(&["blog-cli", "list", "--category", "DevOps"]).await?;
        assert!(filtered.get("featured").is_none());
        assert_eq!(filtered["pagination"]["total"], 3);
        Ok(())
    }

    #[tokio::test]
    async fn show_and_related_on_bundled_catalog() -> Result<()> {
        let post = run(&["blog-cli", "show", "react-hooks-guia-definitivo"]).await?;
        assert_eq!(post["id"], 10);
        assert!(post["content"].as_str().is_some());

        let related = run(&["blog-cli", "related", "react-hooks-guia-definitivo"]).await?;
        assert_eq!(
            slugs(&related["posts"]),
            vec![
                "tailwind-css-guia-completo",
                "typescript-por-que-usar",
                "testes-automatizados-jest-testing-library",
            ]
        );

        assert!(run(&["blog-cli", "show", "missing"]).await.is_err());
        assert!(run(&["blog-cli", "related", "missing"]).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn trending_and_featured_on_bundled_catalog() -> Result<()> {
        let trending = run(&["blog-cli", "trending", "--limit", "2"]).await?;
        assert_eq!(
            slugs(&trending["posts"]),
            vec!["react-hooks-guia-definitivo", "tailwind-css-guia-completo"]
        );

        let featured = run(&["blog-cli", "featured"]).await?;
        assert_eq!(featured["total"], 3);
        Ok(())
    }

    #[tokio::test]
    async fn reads_markdown_content_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_content(dir.path())?;
        let content_dir = dir.path().to_string_lossy().to_string();

        let listed = run(&["blog-cli", "--content-dir", &content_dir, "list"]).await?;
        assert_eq!(slugs(&listed["posts"]), vec!["apis-com-axum", "rust-backend"]);

        let categories = run(&["blog-cli", "categories", "--content-dir", &content_dir]).await?;
        assert_eq!(
            categories["categories"],
            serde_json::json!([{"name": "Backend", "count": 2}])
        );

        let tags = run(&["blog-cli", "tags", "--content-dir", &content_dir]).await?;
        assert_eq!(tags["total"], 3);
        assert_eq!(tags["tags"][0], serde_json::json!({"name": "API", "count": 1}));
        Ok(())
    }

    #[tokio::test]
    async fn check_reports_totals_and_warnings() -> Result<()> {
        let bundled = run(&["blog-cli", "check"]).await?;
        assert_eq!(bundled["articles"], 15);
        assert_eq!(bundled["featured"], 3);
        assert_eq!(bundled["categories"], 8);
        assert_eq!(bundled["warnings"], serde_json::json!([]));

        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("rust-backend.md"), RUST_MD)?;
        let content_dir = dir.path().to_string_lossy().to_string();
        let report = run(&["blog-cli", "check", "--content-dir", &content_dir]).await?;
        assert_eq!(report["articles"], 1);
        assert_eq!(report["warnings"], serde_json::json!(["no featured article"]));
        Ok(())
    }

    #[tokio::test]
    async fn check_fails_for_missing_content_dir() {
        let missing = std::env::temp_dir().join("blogdev-cli-missing-content-dir");
        let missing = missing.to_string_lossy().to_string();
        assert!(run(&["blog-cli", "check", "--content-dir", &missing]).await.is_err());
    }
}
