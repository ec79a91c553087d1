use crate::export::{Entry, KIND_SCHEME, POST_KIND};

/// True when the entry is a blog post. Comments, pages and settings records are not.
pub fn is_post(entry: &Entry) -> bool {
    entry
        .tags
        .iter()
        .any(|t| t.name == POST_KIND && t.scheme == KIND_SCHEME)
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::export::{parse_export, Author, Tag, LABEL_SCHEME};
    use crate::test_data::EXPORT_DATA;

    use super::*;

    fn entry_with(tags: Vec<Tag>) -> Entry {
        let date = DateTime::parse_from_rfc3339("2020-01-02T03:04:05+00:00").unwrap();
        Entry {
            id: "1".to_string(),
            published: date,
            updated: date,
            is_draft: false,
            title: "t".to_string(),
            content: "c".to_string(),
            tags,
            author: Author::default(),
            extra: None,
        }
    }

    #[test]
    fn test_post_kind_is_kept() {
        assert!(is_post(&entry_with(vec![Tag::new(POST_KIND, KIND_SCHEME)])));
        assert!(is_post(&entry_with(vec![
            Tag::new("golang", LABEL_SCHEME),
            Tag::new(POST_KIND, KIND_SCHEME),
        ])));
    }

    #[test]
    fn test_others_are_dropped() {
        assert!(!is_post(&entry_with(vec![Tag::new("golang", LABEL_SCHEME)])));
        assert!(!is_post(&entry_with(vec![])));
        // right term, wrong scheme
        assert!(!is_post(&entry_with(vec![Tag::new(POST_KIND, LABEL_SCHEME)])));
        assert!(!is_post(&entry_with(vec![Tag::new(
            "http://schemas.google.com/blogger/2008/kind#comment",
            KIND_SCHEME,
        )])));
    }

    #[test]
    fn test_filter_export() {
        let export = parse_export(EXPORT_DATA.as_bytes()).unwrap();
        let titles: Vec<&str> = export
            .entries
            .iter()
            .filter(|e| is_post(e))
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["Hello World", "Work in progress"]);
    }
}
