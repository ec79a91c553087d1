use chrono::{DateTime, FixedOffset};

pub mod parser;

pub use parser::{parse_draft, parse_export};

/// Scheme of the category that tells posts, comments, pages and settings apart.
pub const KIND_SCHEME: &str = "http://schemas.google.com/g/2005#kind";
/// Term of the kind category carried by blog posts.
pub const POST_KIND: &str = "http://schemas.google.com/blogger/2008/kind#post";
/// Scheme of user-facing labels.
pub const LABEL_SCHEME: &str = "http://www.blogger.com/atom/ns#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub scheme: String,
}

impl Tag {
    pub fn new(name: &str, scheme: &str) -> Tag {
        Tag {
            name: name.to_string(),
            scheme: scheme.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub uri: String,
}

/// One post candidate of a Blogger export.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: String,
    pub published: DateTime<FixedOffset>,
    pub updated: DateTime<FixedOffset>,
    pub is_draft: bool,
    pub title: String,
    pub content: String,
    pub tags: Vec<Tag>,
    pub author: Author,
    pub extra: Option<String>,
}

impl Entry {
    /// Names of the label tags, in document order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .filter(|t| t.scheme == LABEL_SCHEME)
            .map(|t| t.name.as_str())
    }
}

/// A fully decoded export, entries in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Export {
    pub entries: Vec<Entry>,
}
