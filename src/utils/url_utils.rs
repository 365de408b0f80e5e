use reqwest::Url;

/// Resolve an `href` against the audited page URL. `None` when it cannot be
/// turned into an absolute URL.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}

// Internal means the raw href contains the audited URL verbatim. Relative
// links therefore count as external.
pub fn is_internal(page_url: &str, href: &str) -> bool {
    href.contains(page_url)
}

pub fn is_https(page_url: &str) -> bool {
    page_url.starts_with("https://")
}

pub fn has_path_separator(page_url: &str) -> bool {
    page_url.contains('/')
}
