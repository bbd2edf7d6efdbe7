//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Content globs, relative to source_dir
    pub articles_glob: String,
    pub notes_glob: String,

    // Google tag ID injected into the head snippet
    pub google_analytics: Option<String>,

    // Menus
    pub nav: Vec<NavLink>,
    pub sidebar: Vec<SidebarGroup>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Tanya's Space".to_string(),
            description: "Vite & Vue powered static site generator.".to_string(),
            language: "en-US".to_string(),

            url: "https://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "docs".to_string(),
            public_dir: "public".to_string(),

            articles_glob: "articles/published/*.md".to_string(),
            notes_glob: "notes/published/*.md".to_string(),

            google_analytics: Some("G-M1NW9DWX0F".to_string()),

            nav: vec![
                NavLink::new("Articles", "/articles/"),
                NavLink::new("Notes", "/notes/"),
                NavLink::new("Learn", "/learn/"),
            ],
            sidebar: vec![SidebarGroup {
                text: None,
                items: vec![NavLink::new("Example", "/example")],
            }],

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Head script entries for this site.
    ///
    /// When an analytics tag ID is configured this is the async gtag.js
    /// loader plus the inline dataLayer bootstrap.
    pub fn head_scripts(&self) -> Vec<HeadScript> {
        let Some(tag_id) = &self.google_analytics else {
            return Vec::new();
        };

        vec![
            HeadScript {
                src: Some(format!(
                    "https://www.googletagmanager.com/gtag/js?id={}",
                    tag_id
                )),
                r#async: true,
                content: None,
            },
            HeadScript {
                src: None,
                r#async: false,
                content: Some(format!(
                    "window.dataLayer = window.dataLayer || [];\n\
                     function gtag(){{dataLayer.push(arguments);}}\n\
                     gtag('js', new Date());\n\
                     gtag('config', '{}');",
                    tag_id
                )),
            },
        ]
    }
}

/// A labelled link in the navigation or sidebar menus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

impl NavLink {
    pub fn new(text: &str, link: &str) -> Self {
        Self {
            text: text.to_string(),
            link: link.to_string(),
        }
    }
}

/// A group of sidebar links, optionally titled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub items: Vec<NavLink>,
}

/// A script tag injected into the document head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default)]
    pub r#async: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadScript {
    /// Render the entry as a `<script>` tag
    pub fn to_html(&self) -> String {
        let mut attrs = String::new();
        if self.r#async {
            attrs.push_str(" async");
        }
        if let Some(src) = &self.src {
            attrs.push_str(&format!(r#" src="{}""#, src));
        }
        format!(
            "<script{}>{}</script>",
            attrs,
            self.content.as_deref().unwrap_or("")
        )
    }
}
