pub const HOME_PAGE: &str = "index.html";

/// Filename of the current page, taken from the last path segment.
pub fn current_page_from_path(pathname: &str) -> String {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => HOME_PAGE.to_string(),
    }
}

pub fn is_current_link(href: Option<&str>, current_page: &str) -> bool {
    href == Some(current_page)
}
