//! Generate the content data files

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;

use crate::config::HeadScript;
use crate::content::ContentLoader;
use crate::Site;

/// Load both collections and write the data files under the public dir
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(site);
    let now = Local::now();
    let articles = loader.load_articles(now)?;
    let notes = loader.load_notes(now)?;

    tracing::info!(
        "Loaded {} articles and {} notes",
        articles.len(),
        notes.len()
    );

    let data_dir = site.public_dir.join("data");
    fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    fs::write(
        data_dir.join("articles.json"),
        serde_json::to_string_pretty(&articles)?,
    )?;
    fs::write(
        data_dir.join("notes.json"),
        serde_json::to_string_pretty(&notes)?,
    )?;

    fs::write(
        site.public_dir.join("head.html"),
        render_head(&site.config.head_scripts()),
    )?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Render head script entries to an HTML snippet
fn render_head(scripts: &[HeadScript]) -> String {
    let mut out = String::new();
    for script in scripts {
        out.push_str(&script.to_html());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Article, Note};

    #[test]
    fn test_generate_writes_data_files() {
        let dir = tempfile::tempdir().unwrap();
        let articles_dir = dir.path().join("docs/articles/published");
        fs::create_dir_all(&articles_dir).unwrap();
        fs::write(
            articles_dir.join("hello.md"),
            "---\ntitle: Hello\ndate: 2024-02-01\n---\n\nHello world\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        run(&site).unwrap();

        let articles_json = fs::read_to_string(site.public_dir.join("data/articles.json")).unwrap();
        let articles: Vec<Article> = serde_json::from_str(&articles_json).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Hello");
        assert_eq!(articles[0].url, "/articles/published/hello");

        let notes_json = fs::read_to_string(site.public_dir.join("data/notes.json")).unwrap();
        let notes: Vec<Note> = serde_json::from_str(&notes_json).unwrap();
        assert!(notes.is_empty());

        let head = fs::read_to_string(site.public_dir.join("head.html")).unwrap();
        assert!(head.contains("googletagmanager.com/gtag/js?id=G-M1NW9DWX0F"));
        assert!(head.contains("gtag('config', 'G-M1NW9DWX0F')"));
    }

    #[test]
    fn test_render_head_empty() {
        assert_eq!(render_head(&[]), "");
    }
}
