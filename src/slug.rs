fn is_slug_char(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == '_' || c == '-'
}

/// Turns a post title into a file name stem.
/// E.g. Social Media -> social-media
///
/// Characters other than letters, digits, `.`, `_` and `-` are dropped and every run of
/// whitespace becomes a single hyphen. A blank title gives an empty slug.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|&c| c.is_whitespace() || is_slug_char(c))
        .collect();

    kept.split_whitespace()
        .collect::<Vec<&str>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Social Media"), "social-media");
        assert_eq!(slugify("  C++ & Go!  "), "c-go");
        assert_eq!(slugify("Go 1.22 released_today"), "go-1.22-released_today");
        assert_eq!(slugify("Tabs\tand\n\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Ábaco Über Straße"), "ábaco-über-straße");
    }

    #[test]
    fn test_slugify_blank_title() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   \t "), "");
        assert_eq!(slugify("?!"), "");
    }
}
