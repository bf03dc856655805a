//! Article fetching and conversion.
//!
//! The only component that performs I/O: fetches the stub's URL, isolates
//! the readable article with `dom_smoothie`, converts it to markdown with a
//! fixed rendering configuration and synthesizes the final clipping.

use async_trait::async_trait;
use chrono::Local;
use dom_smoothie::Readability;
use htmd::options::{BulletListMarker, CodeBlockStyle, HeadingStyle, HrStyle, Options};
use htmd::HtmlToMarkdown;
use scraper::Html;

use clipper_core::{Article, Error, Result, ResultDocument};

use crate::frontmatter::{
    resolve_author, resolve_description, resolve_keywords, sanitize_yaml_string, synthesize,
};
use crate::links::normalize_links;

/// Turns a stub's URL (plus optional clipped date) into a rendered clipping.
///
/// The state machine only depends on this trait, so tests can drive it with
/// fakes instead of a network.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Fetch `url` and render it as a clipping dated `clipped`
    /// (today's date when absent).
    async fn fetch(&self, url: &str, clipped: Option<&str>) -> Result<ResultDocument>;
}

/// The real fetcher: `reqwest` for HTTP, `dom_smoothie` for readability,
/// `htmd` for markdown rendering.
pub struct HttpFetcher {
    client: reqwest::Client,
    converter: HtmlToMarkdown,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            converter: markdown_converter(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// ATX headings, `---` rules, `-` bullets, fenced code blocks.
fn markdown_converter() -> HtmlToMarkdown {
    let mut options = Options::default();
    options.heading_style = HeadingStyle::Atx;
    options.hr_style = HrStyle::Dashes;
    options.bullet_list_marker = BulletListMarker::Dash;
    options.code_block_style = CodeBlockStyle::Fenced;
    HtmlToMarkdown::builder().options(options).build()
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[async_trait]
impl ArticleFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, clipped: Option<&str>) -> Result<ResultDocument> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;

        let document = Html::parse_document(&html);

        let mut readability = Readability::new(html.as_str(), Some(url), None)
            .map_err(|e| Error::Parse(e.to_string()))?;
        let readable = readability
            .parse()
            .map_err(|e| Error::Extraction(e.to_string()))?;

        let article = Article {
            url: url.to_string(),
            title: readable.title.to_string(),
            html_content: readable.content.to_string(),
            author: resolve_author(&document),
            description: resolve_description(&document),
            keywords: resolve_keywords(&document),
        };

        let body = self
            .converter
            .convert(&article.html_content)
            .map_err(|e| Error::Render(e.to_string()))?;
        let body = normalize_links(&body);

        let clipped = clipped.map(str::to_string).unwrap_or_else(today);
        let sanitized_title = sanitize_yaml_string(&article.title);
        let file_content = synthesize(&article, &clipped, &body);

        Ok(ResultDocument {
            file_content,
            sanitized_title,
        })
    }
}
