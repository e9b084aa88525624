use std::sync::Arc;

/// Parses the domains file: one domain per line, trimmed, blank lines dropped.
pub fn parse_domain_list(contents: &str) -> Vec<Arc<str>> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Arc::from)
        .collect()
}
