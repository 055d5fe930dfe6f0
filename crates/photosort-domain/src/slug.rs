//! Folder name slug derivation

/// Derive a filesystem-safe folder name from a category
///
/// Lowercases the category, collapses ampersands and whitespace runs into a
/// single hyphen, drops every other character outside `[a-z0-9-]`, collapses
/// repeated hyphens, and trims hyphens from both ends. A category that slugs
/// down to nothing falls back to `"uncategorized"`.
///
/// # Examples
/// ```
/// use photosort_domain::folder_slug;
///
/// assert_eq!(folder_slug("Street & Art!!"), "street-art");
/// assert_eq!(folder_slug("Nature"), "nature");
/// ```
pub fn folder_slug(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());

    for ch in category.to_lowercase().chars() {
        let mapped = if ch == '&' || ch.is_whitespace() {
            Some('-')
        } else if ch.is_ascii_alphanumeric() || ch == '-' {
            Some(ch)
        } else {
            None
        };

        if let Some(c) = mapped {
            // Collapse hyphen runs as they are produced
            if c == '-' && slug.ends_with('-') {
                continue;
            }
            slug.push(c);
        }
    }

    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "uncategorized".to_string()
    } else {
        slug.to_string()
    }
}
