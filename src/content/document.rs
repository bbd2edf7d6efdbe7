//! Document model and discovery

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

use super::{FrontMatter, MarkdownRenderer};
use crate::helpers::url_for;

/// A source document after front-matter parsing and rendering.
///
/// This is the input shape shared by the articles and notes loaders;
/// each loader picks the fields its output carries.
#[derive(Debug, Clone)]
pub struct Document {
    /// Title from front-matter
    pub title: Option<String>,

    /// Raw front-matter date string
    pub date_raw: Option<String>,

    /// Parsed date; None when missing or unparseable
    pub date: Option<DateTime<Local>>,

    /// Site-root-relative URL to the full document
    pub url: String,

    /// Rendered HTML of the excerpt
    pub excerpt: String,

    /// Rendered HTML of the full body
    pub html: String,

    /// Source path relative to the source dir
    pub source: String,
}

impl Document {
    /// Load a single document from a file under `source_dir`
    pub fn load(
        path: &Path,
        source_dir: &Path,
        root: &str,
        renderer: &MarkdownRenderer,
    ) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let (fm, body) = FrontMatter::parse(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let source = path
            .strip_prefix(source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let url = document_url(&source, root);
        let excerpt = renderer.render(MarkdownRenderer::split_excerpt(body));
        let html = renderer.render(body);
        let date = fm.parse_date();

        Ok(Self {
            title: fm.title,
            date_raw: fm.date,
            date,
            url,
            excerpt,
            html,
            source,
        })
    }
}

/// Discover and load all documents matching `pattern` under `source_dir`.
///
/// Matches are sorted by path so discovery order is deterministic; the
/// date sort downstream is stable, so equal dates keep this order. A
/// pattern with no matches (including a missing directory) yields an
/// empty collection.
pub fn collect(
    source_dir: &Path,
    pattern: &str,
    root: &str,
    renderer: &MarkdownRenderer,
) -> Result<Vec<Document>> {
    let full_pattern = source_dir.join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let mut paths = glob::glob(&full_pattern)
        .with_context(|| format!("invalid glob pattern {}", full_pattern))?
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        if path.is_file() {
            docs.push(Document::load(&path, source_dir, root, renderer)?);
        }
    }

    Ok(docs)
}

/// Derive the site-root-relative URL for a source path.
///
/// `articles/published/hello.md` -> `/articles/published/hello`
fn document_url(source: &str, root: &str) -> String {
    let without_ext = source
        .trim_end_matches(".md")
        .trim_end_matches(".markdown");
    url_for(root, without_ext)
}
