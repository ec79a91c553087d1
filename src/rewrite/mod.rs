use async_trait::async_trait;

use crate::error::RewriteError;

pub mod groq;
pub mod ollama;

pub use groq::GroqClient;
pub use ollama::OllamaClient;

/// Instructions sent ahead of every post body.
pub const REWRITE_PROMPT: &str = r#"You are an expert in Markdown and HTML. You are well-versed in Hugo for creating GitHub Pages.

I have some files that are not 100% compatible with the syntax of Markdown files for Hugo. They need to be fixed following these guidelines:

- I would like to remove the HTML but preserve the formatting that the HTML has, making it compatible with Markdown.
- I would like to change the script embeds, such as the following example line where xxxxxxxx is a placeholder simulating numbers:

      <script src="https://gist.github.com/vicendominguez/xxxxxxxx.js"></script>

  and preserve the original url but changing it to this format:

      [Gist](https://gist.github.com/vicendominguez/xxxxxxxx.js)

- I would like to achieve good English writing. A bit informal but professional enough for a blog post.
- I would like it to be compatible with a Hugo template.
- Your response should only and exclusively be the raw code of the file so that it can be copied and pasted.
- No extra comments. No summary. Nothing else.
- Only in English.

The code is as follows:
"#;

/// Prompt plus post body, as one payload.
pub fn compose_request(content: &str) -> String {
    format!("{}\n{}", REWRITE_PROMPT, content)
}

/// A text rewriting service. Gets the raw body of a post and returns the full replacement.
#[async_trait]
pub trait Rewriter: Send + Sync {
    async fn rewrite(&self, content: &str) -> Result<String, RewriteError>;
}
