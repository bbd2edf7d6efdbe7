//! Content loaders for articles and notes
//!
//! Both loaders share one contract: collect the published documents,
//! sort them by date descending, and map each one to its output shape.
//! The transforms are pure functions over already-loaded documents so
//! the ordering contract is testable without a filesystem.

use anyhow::Result;
use chrono::{DateTime, Local};
use std::cmp::Ordering;

use super::{document, Article, Document, MarkdownRenderer, Note};
use crate::helpers::relative_date;
use crate::Site;

/// Marker emitted when a document's date is missing or unparseable
pub const INVALID_DATE: &str = "invalid date";

/// Loads published content from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all published articles, newest first
    pub fn load_articles(&self, now: DateTime<Local>) -> Result<Vec<Article>> {
        let docs = document::collect(
            &self.site.source_dir,
            &self.site.config.articles_glob,
            &self.site.config.root,
            &self.renderer,
        )?;
        Ok(articles_from_documents(docs, now))
    }

    /// Load all published notes, newest first
    pub fn load_notes(&self, now: DateTime<Local>) -> Result<Vec<Note>> {
        let docs = document::collect(
            &self.site.source_dir,
            &self.site.config.notes_glob,
            &self.site.config.root,
            &self.renderer,
        )?;
        Ok(notes_from_documents(docs, now))
    }
}

/// Map documents to article entries, one per document, newest first
pub fn articles_from_documents(mut docs: Vec<Document>, now: DateTime<Local>) -> Vec<Article> {
    sort_by_date_desc(&mut docs);
    docs.into_iter()
        .map(|doc| {
            let (date, relative_date) = item_dates(&doc, now);
            Article {
                title: doc.title.unwrap_or_default(),
                date,
                url: doc.url,
                relative_date,
                excerpt: doc.excerpt,
            }
        })
        .collect()
}

/// Map documents to note entries, one per document, newest first
pub fn notes_from_documents(mut docs: Vec<Document>, now: DateTime<Local>) -> Vec<Note> {
    sort_by_date_desc(&mut docs);
    docs.into_iter()
        .map(|doc| {
            let (date, relative_date) = item_dates(&doc, now);
            Note {
                title: doc.title.unwrap_or_default(),
                date,
                relative_date,
                html: doc.html,
            }
        })
        .collect()
}

/// Sort documents by date descending.
///
/// Documents without a parseable date sort after all dated ones, so the
/// comparator is a total order. The sort is stable; equal dates keep
/// input order.
fn sort_by_date_desc(docs: &mut [Document]) {
    docs.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

fn item_dates(doc: &Document, now: DateTime<Local>) -> (String, String) {
    let relative = match &doc.date {
        Some(date) => relative_date(date, now),
        None => INVALID_DATE.to_string(),
    };
    (doc.date_raw.clone().unwrap_or_default(), relative)
}
