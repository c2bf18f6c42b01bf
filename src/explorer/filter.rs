// src/explorer/filter.rs
use crate::filesystem::Entry;

/// Entries whose name contains `query`, ignoring case. Order is preserved.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str) -> Vec<&'a Entry> {
    if query.is_empty() {
        return entries.iter().collect();
    }
    let query = query.to_lowercase();
    entries.iter().filter(|e| e.name.to_lowercase().contains(&query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(name: &str) -> Entry {
        Entry {
            path: PathBuf::from("/d").join(name),
            name: name.to_string(),
            is_dir: false,
            is_image: true,
            size: 0,
            mtime: None,
        }
    }

    #[test]
    fn test_filter_is_plain_substring() {
        // "image1" spells i-m-a, so it does not contain "img" even though it reads like it.
        let items = vec![entry("image1.png"), entry("photo.png"), entry("IMGur.jpg")];
        let names: Vec<&str> = filter_entries(&items, "img").iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["IMGur.jpg"]);
    }

    #[test]
    fn test_filter_substring_case_insensitive() {
        let items = vec![entry("image1.png"), entry("photo.png"), entry("IMGur.jpg")];
        let names: Vec<&str> = filter_entries(&items, "IM").iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["image1.png", "IMGur.jpg"]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let items = vec![entry("a.png"), entry("b.png")];
        assert_eq!(filter_entries(&items, "").len(), 2);
    }
}
