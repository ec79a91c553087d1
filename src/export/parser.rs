use serde::Deserialize;

use crate::error::ParseError;
use crate::export::{Author, Entry, Export, Tag};
use crate::util::atom_date::parse_timestamp;

/* Example
<feed xmlns='http://www.w3.org/2005/Atom' xmlns:app='http://purl.org/atom/app#'>
  <entry>
    <id>tag:blogger.com,1999:blog-1.post-2</id>
    <published>2020-01-02T03:04:05.000+00:00</published>
    <updated>2020-01-03T03:04:05.000+00:00</updated>
    <app:control><app:draft>yes</app:draft></app:control>
    <category scheme='http://schemas.google.com/g/2005#kind' term='http://schemas.google.com/blogger/2008/kind#post'/>
    <category scheme='http://www.blogger.com/atom/ns#' term='go'/>
    <title type='text'>Hello World</title>
    <content type='html'>&lt;b&gt;hi&lt;/b&gt;</content>
    <author><name>Vicen</name><uri>https://www.blogger.com/profile/1</uri></author>
  </entry>
</feed>
*/

#[derive(Deserialize)]
struct FeedXml {
    #[serde(rename = "entry", default)]
    entries: Vec<EntryXml>,
}

#[derive(Deserialize)]
struct EntryXml {
    #[serde(default)]
    id: String,
    published: String,
    updated: String,
    #[serde(rename = "control", alias = "app:control", default)]
    control: ControlXml,
    #[serde(default)]
    title: TextXml,
    #[serde(default)]
    content: TextXml,
    #[serde(rename = "category", default)]
    tags: Vec<TagXml>,
    #[serde(default)]
    author: AuthorXml,
}

#[derive(Deserialize, Default)]
struct ControlXml {
    #[serde(rename = "draft", alias = "app:draft", default)]
    draft: Option<String>,
}

// Elements like <title type='text'> where only the text matters
#[derive(Deserialize, Default)]
struct TextXml {
    #[serde(rename = "$text", default)]
    text: String,
}

#[derive(Deserialize)]
struct TagXml {
    #[serde(rename = "@term", default)]
    term: String,
    #[serde(rename = "@scheme", default)]
    scheme: String,
}

#[derive(Deserialize, Default)]
struct AuthorXml {
    #[serde(default)]
    name: String,
    #[serde(default)]
    uri: String,
}

impl TryFrom<EntryXml> for Entry {
    type Error = ParseError;

    fn try_from(value: EntryXml) -> Result<Self, Self::Error> {
        let is_draft = match value.control.draft {
            Some(ref draft) => parse_draft(draft)?,
            None => false,
        };

        Ok(Entry {
            id: value.id,
            published: parse_timestamp(&value.published)?,
            updated: parse_timestamp(&value.updated)?,
            is_draft,
            title: value.title.text,
            content: value.content.text,
            tags: value
                .tags
                .into_iter()
                .map(|t| Tag {
                    name: t.term,
                    scheme: t.scheme,
                })
                .collect(),
            author: Author {
                name: value.author.name,
                uri: value.author.uri,
            },
            extra: None,
        })
    }
}

/// Blogger marks drafts with `yes` and published posts with `no`. Nothing else is accepted.
pub fn parse_draft(value: &str) -> Result<bool, ParseError> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(ParseError::DraftFlag(value.to_string())),
    }
}

/// Decodes a whole export. Entry order is the document order.
/// Bad timestamps and draft flags come out as their own variants, the rest as `Malformed`.
pub fn parse_export(raw: &[u8]) -> Result<Export, ParseError> {
    let feed: FeedXml = quick_xml::de::from_reader(raw)?;
    let entries = feed
        .entries
        .into_iter()
        .map(Entry::try_from)
        .collect::<Result<Vec<Entry>, ParseError>>()?;
    Ok(Export { entries })
}

#[cfg(test)]
mod tests {
    use crate::export::{KIND_SCHEME, LABEL_SCHEME, POST_KIND};
    use crate::test_data::{entry_xml, feed_xml, EXPORT_DATA};
    use crate::util::atom_date::format_timestamp;

    use super::*;

    #[test]
    fn test_parse_draft() {
        assert!(parse_draft("yes").unwrap());
        assert!(!parse_draft("no").unwrap());
        match parse_draft("maybe") {
            Err(ParseError::DraftFlag(v)) => assert_eq!(v, "maybe"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_draft("YES").is_err());
        assert!(parse_draft(" yes ").is_err());
        assert!(parse_draft("").is_err());
    }

    #[test]
    fn test_parse_export() {
        let export = parse_export(EXPORT_DATA.as_bytes()).unwrap();
        assert_eq!(export.entries.len(), 4);

        let post = &export.entries[1];
        assert_eq!(post.id, "tag:blogger.com,1999:blog-1.post-100");
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.content, "<b>hi</b>");
        assert_eq!(format_timestamp(&post.published), "2020-01-02T03:04:05Z");
        assert_eq!(format_timestamp(&post.updated), "2020-01-03T03:04:05Z");
        assert!(!post.is_draft);
        assert_eq!(post.tags, vec![Tag::new(POST_KIND, KIND_SCHEME), Tag::new("go", LABEL_SCHEME)]);
        assert_eq!(post.author, Author {
            name: "Vicen".to_string(),
            uri: "https://www.blogger.com/profile/1".to_string(),
        });
        assert_eq!(post.extra, None);

        let draft = &export.entries[2];
        assert_eq!(draft.title, "Work in progress");
        assert!(draft.is_draft);
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let export = parse_export(EXPORT_DATA.as_bytes()).unwrap();
        let ids: Vec<&str> = export.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, [
            "tag:blogger.com,1999:blog-1.settings.BLOG_NAME",
            "tag:blogger.com,1999:blog-1.post-100",
            "tag:blogger.com,1999:blog-1.post-200",
            "tag:blogger.com,1999:blog-1.post-100.comment-1",
        ]);
    }

    #[test]
    fn test_parse_rejects_unknown_draft_value() {
        let xml = feed_xml(&[entry_xml("1", "T", "maybe", "<p>x</p>", &[])]);
        match parse_export(xml.as_bytes()) {
            Err(ParseError::DraftFlag(v)) => assert_eq!(v, "maybe"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        let xml = EXPORT_DATA.replace("2020-01-02T03:04:05.000+00:00", "2020-01-02 03:04:05");
        match parse_export(xml.as_bytes()) {
            Err(ParseError::Timestamp { value, .. }) => assert_eq!(value, "2020-01-02 03:04:05"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_document() {
        assert!(matches!(parse_export(b"<feed><entry><id>1</id>"), Err(ParseError::Malformed(_))));
    }

    #[test]
    fn test_parse_unescapes_text() {
        let title = r#"Tom & Jerry's "<show>""#;
        let content = "<p>a &amp; b</p>";
        let xml = feed_xml(&[entry_xml("1", title, "no", content, &[])]);
        let export = parse_export(xml.as_bytes()).unwrap();
        assert_eq!(export.entries[0].title, title);
        assert_eq!(export.entries[0].content, content);
    }

    #[test]
    fn test_parse_empty_feed() {
        let export = parse_export(b"<feed xmlns='http://www.w3.org/2005/Atom'></feed>").unwrap();
        assert!(export.entries.is_empty());
    }
}
