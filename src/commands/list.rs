//! List site content

use anyhow::Result;
use chrono::Local;

use crate::content::ContentLoader;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(site);
    let now = Local::now();

    match content_type {
        "article" | "articles" => {
            let articles = loader.load_articles(now)?;
            println!("Articles ({}):", articles.len());
            for article in articles {
                println!(
                    "  {} - {} [{}]",
                    article.date, article.title, article.url
                );
            }
        }
        "note" | "notes" => {
            let notes = loader.load_notes(now)?;
            println!("Notes ({}):", notes.len());
            for note in notes {
                println!(
                    "  {} - {} ({})",
                    note.date, note.title, note.relative_date
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: articles, notes",
                content_type
            );
        }
    }

    Ok(())
}
