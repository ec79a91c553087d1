use std::fmt::Write;

use ramhorns::Template;

use crate::export::Entry;
use crate::util::atom_date::format_timestamp;

/// Hugo TOML front matter. Values arrive already quoted, hence the triple braces.
const FRONT_MATTER_TPL: &str = "+++
title = {{{title}}}
date = '{{{date}}}'
updated = '{{{updated}}}'{{#has_tags}}
tags = [{{{tags}}}]{{/has_tags}}{{#draft}}
draft = true{{/draft}}{{#has_extra}}
{{{extra}}}{{/has_extra}}
+++";

#[derive(ramhorns::Content)]
struct FrontMatter<'a> {
    title: &'a str,
    date: &'a str,
    updated: &'a str,
    has_tags: bool,
    tags: &'a str,
    draft: bool,
    has_extra: bool,
    extra: &'a str,
}

/// Writes `value` as a TOML basic string, quotes included.
// toml::Value picks literal or multi-line strings by itself, a front matter entry must stay on one line
pub fn toml_quote(value: &str) -> String {
    let mut buf = String::with_capacity(value.len() + 2);
    buf.push('"');
    for c in value.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\u{8}' => buf.push_str("\\b"),
            '\u{c}' => buf.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(&mut buf, "\\u{:04X}", c as u32);
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
    buf
}

pub struct PostRenderer<'a> {
    pub template: Template<'a>,
}

impl PostRenderer<'static> {
    pub fn new() -> Result<PostRenderer<'static>, ramhorns::Error> {
        Ok(PostRenderer {
            template: Template::new(FRONT_MATTER_TPL)?,
        })
    }
}

impl PostRenderer<'_> {
    /// Front matter, a blank line, then the content untouched.
    pub fn render(&self, entry: &Entry) -> String {
        let title = toml_quote(&entry.title);
        let date = format_timestamp(&entry.published);
        let updated = format_timestamp(&entry.updated);
        let tags = entry
            .labels()
            .map(toml_quote)
            .collect::<Vec<String>>()
            .join(", ");
        let extra = entry.extra.as_deref().unwrap_or("");

        let front_matter = self.template.render(&FrontMatter {
            title: &title,
            date: &date,
            updated: &updated,
            has_tags: !tags.is_empty(),
            tags: &tags,
            draft: entry.is_draft,
            has_extra: !extra.is_empty(),
            extra,
        });

        format!("{}\n\n{}\n", front_matter, entry.content)
    }
}
