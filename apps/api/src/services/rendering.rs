// Markdown presentation of generated responses

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// Appended to the source of a response that is still streaming
pub const STREAMING_SUFFIX: &str = "...";

/// One fenced code block found in a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub index: usize,
    pub language: String,
    pub code: String,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options
}

pub fn markdown_to_html(input: &str) -> String {
    let parser = Parser::new_ext(input, options());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Renders a card's response, marking it as in progress while streaming
pub fn render_response(response: &str, streaming: bool) -> String {
    if streaming {
        markdown_to_html(&format!("{}{}", response, STREAMING_SUFFIX))
    } else {
        markdown_to_html(response)
    }
}

/// Fenced code blocks in document order
///
/// The language is the leading word of the info string (`text` when absent);
/// one trailing newline is removed from the code.
pub fn code_blocks(input: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(String, String)> = None;

    for event in Parser::new_ext(input, options()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                current = Some((language_of(&info), String::new()));
            }
            Event::Text(text) => {
                if let Some((_, code)) = current.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, mut code)) = current.take() {
                    if code.ends_with('\n') {
                        code.pop();
                    }
                    blocks.push(CodeBlock {
                        index: blocks.len(),
                        language,
                        code,
                    });
                }
            }
            _ => {}
        }
    }

    blocks
}

fn language_of(info: &str) -> String {
    let language: String = info
        .trim()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if language.is_empty() {
        "text".to_string()
    } else {
        language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tables_and_emphasis() {
        let html = markdown_to_html("**bold**\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn streaming_response_gets_suffix() {
        // Smart punctuation turns the suffix into an ellipsis
        let streaming = render_response("Hel", true);
        assert!(streaming.starts_with("<p>Hel"));
        assert_ne!(streaming, "<p>Hel</p>\n");
        assert_eq!(render_response("Hello", false), "<p>Hello</p>\n");
    }

    #[test]
    fn extracts_fenced_blocks_with_language() {
        let blocks = code_blocks(
            "Intro\n\n```json\n{\"@type\": \"LocalBusiness\"}\n```\n\nthen\n\n```\nplain\n```\n",
        );

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, "json");
        assert_eq!(blocks[0].code, "{\"@type\": \"LocalBusiness\"}");
        assert_eq!(blocks[1].index, 1);
        assert_eq!(blocks[1].language, "text");
        assert_eq!(blocks[1].code, "plain");
    }

    #[test]
    fn only_one_trailing_newline_is_removed() {
        let blocks = code_blocks("```html\n<p>a</p>\n\n```\n");
        assert_eq!(blocks[0].code, "<p>a</p>\n");
    }

    #[test]
    fn indented_code_is_not_listed() {
        assert!(code_blocks("    indented\n").is_empty());
    }

    #[test]
    fn info_string_attributes_are_ignored() {
        let blocks = code_blocks("```rust ignore\nfn main() {}\n```\n");
        assert_eq!(blocks[0].language, "rust");
    }
}
