//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("docs/articles/published"))?;
    fs::create_dir_all(target_dir.join("docs/notes/published"))?;
    fs::create_dir_all(target_dir.join("docs/learn"))?;

    let config_content = r#"# Site
title: Tanya's Space
description: Vite & Vue powered static site generator.
language: en-US

# URL
url: https://example.com
root: /

# Directory
source_dir: docs
public_dir: public

# Content globs, relative to source_dir
articles_glob: articles/published/*.md
notes_glob: notes/published/*.md

# Google tag ID injected into the head snippet
google_analytics: G-M1NW9DWX0F

# Menus
nav:
  - text: Articles
    link: /articles/
  - text: Notes
    link: /notes/
  - text: Learn
    link: /learn/

sidebar:
  - items:
      - text: Example
        link: /example
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let now = chrono::Local::now();
    let sample_article = format!(
        r#"---
title: Hello World
date: {}
---

This is your first article.

<!-- more -->

Everything after the marker is kept out of the excerpt.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(
        target_dir.join("docs/articles/published/hello-world.md"),
        sample_article,
    )?;

    let sample_note = format!(
        r#"---
title: First note
date: {}
---

A short-form note.
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(
        target_dir.join("docs/notes/published/first-note.md"),
        sample_note,
    )?;

    Ok(())
}

/// Run the init command with an existing site instance
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}
