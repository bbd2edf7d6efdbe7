//! Create a new article or note

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a new published article or note with front-matter filled in
pub fn create_document(site: &Site, kind: &str, title: &str) -> Result<()> {
    let now = chrono::Local::now();

    let target_dir = match kind {
        "article" => site.source_dir.join("articles/published"),
        "note" => site.source_dir.join("notes/published"),
        _ => anyhow::bail!("Unknown kind: {}. Available: article, note", kind),
    };

    fs::create_dir_all(&target_dir)?;

    let slug = slug::slugify(title);
    let slug = if slug.is_empty() {
        "untitled"
    } else {
        slug.as_str()
    };
    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n\n",
        title,
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_document() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        create_document(&site, "note", "A quick thought").unwrap();

        let path = site.source_dir.join("notes/published/a-quick-thought.md");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\ntitle: A quick thought\ndate: "));

        // Refuses to overwrite
        assert!(create_document(&site, "note", "A quick thought").is_err());
    }

    #[test]
    fn test_create_document_unknown_kind() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(create_document(&site, "page", "Nope").is_err());
    }
}
