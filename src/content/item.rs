//! Output item models
//!
//! These are the exact shapes shipped in the generated data files. Field
//! names follow the site's existing JSON contract, hence the camelCase
//! rename on `relative_date`.

use serde::{Deserialize, Serialize};

/// An article list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Title from front-matter; empty when absent
    pub title: String,

    /// Front-matter date string, shipped verbatim
    pub date: String,

    /// Site-root-relative path to the full document
    pub url: String,

    /// Humanized distance from `date` to now ("3 days ago")
    #[serde(rename = "relativeDate")]
    pub relative_date: String,

    /// Rendered HTML of the short preview
    pub excerpt: String,
}

/// A note list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Title from front-matter; empty when absent
    pub title: String,

    /// Front-matter date string, shipped verbatim
    pub date: String,

    /// Humanized distance from `date` to now ("3 days ago")
    #[serde(rename = "relativeDate")]
    pub relative_date: String,

    /// Rendered HTML of the full body
    pub html: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_json_field_names() {
        let article = Article {
            title: "Hello".to_string(),
            date: "2024-01-01".to_string(),
            url: "/articles/published/hello".to_string(),
            relative_date: "3 days ago".to_string(),
            excerpt: "<p>Hi</p>".to_string(),
        };
        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains(r#""relativeDate":"3 days ago""#));
        assert!(!json.contains("relative_date"));
    }

    #[test]
    fn test_note_has_no_url_field() {
        let note = Note {
            title: "N".to_string(),
            date: "2024-01-01".to_string(),
            relative_date: "a day ago".to_string(),
            html: "<p>Body</p>".to_string(),
        };
        let json = serde_json::to_string(&note).unwrap();
        assert!(!json.contains("url"));
        assert!(!json.contains("excerpt"));
        assert!(json.contains(r#""html":"<p>Body</p>""#));
    }
}
