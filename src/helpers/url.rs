//! URL helper functions

/// Join a path onto the site root.
///
/// # Examples
/// ```ignore
/// url_for("/space/", "articles/published/hello") // -> "/space/articles/published/hello"
/// ```
pub fn url_for(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}
