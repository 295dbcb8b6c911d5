//! The article model: tags, kinds, and header-to-article construction.

use crate::frontmatter::{parse_front_matter, FrontMatterError};
use crate::paths;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::io::BufRead;
use std::path::PathBuf;
use thiserror::Error;

/// Human-readable fallback date format, as produced by IFTTT recipe
/// ingredients ("January 02, 2006 at 03:04PM"). The strict format is
/// RFC 3339, handled by chrono directly.
pub const HUMAN_DATE_FORMAT: &str = "%B %d, %Y at %I:%M%p";

/// Header keys carrying this prefix land in [`Article::meta`] with the
/// prefix stripped.
const META_PREFIX: &str = "meta-";

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error(transparent)]
    Header(#[from] FrontMatterError),

    #[error("unparseable date {0:?}")]
    DateParse(String),

    #[error("failed to read article body: {0}")]
    Io(#[from] std::io::Error),
}

/// What kind of document an article is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleKind {
    /// A regular blog article.
    #[default]
    Post,
    /// A site-wide page, published at the site root.
    Page,
    /// A short, title-less status update.
    Snippet,
}

impl ArticleKind {
    /// Map a header `type:` value. Unrecognized values get `None`; the
    /// caller defaults them to Post.
    pub fn from_header(value: &str) -> Option<Self> {
        match value {
            "Post" => Some(ArticleKind::Post),
            "Page" => Some(ArticleKind::Page),
            "Snippet" => Some(ArticleKind::Snippet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleKind::Post => "Post",
            ArticleKind::Page => "Page",
            ArticleKind::Snippet => "Snippet",
        }
    }
}

/// A normalized article tag.
///
/// Tag identity is the lowercased `name` alone; `original` keeps the
/// as-written token and `hidden` records the leading-dash convention.
#[derive(Debug, Clone)]
pub struct Tag {
    pub name: String,
    pub original: String,
    pub hidden: bool,
}

impl Tag {
    /// Normalize a raw tag token. A leading `-` marks the tag hidden and
    /// is stripped from the name; the rest is lowercased.
    pub fn new(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let name = lowered.strip_prefix('-').unwrap_or(&lowered).to_string();
        let hidden = name != lowered;

        Tag {
            name,
            original: raw.to_string(),
            hidden,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// One parsed source document.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub author: String,
    pub description: String,
    pub link: String,
    pub identifier: String,
    pub app_id: String,
    pub kind: ArticleKind,

    /// Publication timestamp. Always set: an article without a `date`
    /// header gets the wall-clock time at parse time.
    pub date_modified: DateTime<Utc>,
    pub date_updated: Option<DateTime<Utc>>,

    /// Tags in header order; duplicates are kept.
    pub tags: Vec<Tag>,
    pub draft: bool,

    /// Passthrough `meta-*` header fields, prefix stripped.
    pub meta: HashMap<String, String>,

    /// Body bytes after the header, untouched.
    pub raw_content: Vec<u8>,

    /// HTML produced by the markdown renderer; empty until rendered.
    pub rendered_content: String,

    /// Output file name, assigned by the publisher from the source name.
    pub filename: String,
}

impl Default for Article {
    fn default() -> Self {
        Article {
            title: String::new(),
            author: String::new(),
            description: String::new(),
            link: String::new(),
            identifier: String::new(),
            app_id: String::new(),
            kind: ArticleKind::default(),
            date_modified: DateTime::UNIX_EPOCH,
            date_updated: None,
            tags: Vec::new(),
            draft: false,
            meta: HashMap::new(),
            raw_content: Vec::new(),
            rendered_content: String::new(),
            filename: String::new(),
        }
    }
}

impl Article {
    /// Build an article from parsed header fields and the raw body.
    ///
    /// A present but unparseable `date`/`updated` value is an error rather
    /// than a silent default, which would quietly corrupt the corpus sort
    /// order.
    pub fn from_header(
        fields: HashMap<String, String>,
        raw_content: Vec<u8>,
    ) -> Result<Self, ArticleError> {
        let mut article = Article {
            raw_content,
            ..Article::default()
        };
        let mut date_modified = None;

        for (key, value) in fields {
            // The meta prefix wins over every named key.
            if let Some(name) = key.strip_prefix(META_PREFIX) {
                article.meta.insert(name.to_string(), value);
                continue;
            }

            match key.as_str() {
                "title" => article.title = value,
                "author" => article.author = value,
                "description" => article.description = value,
                "link" => article.link = value,
                "appid" => article.app_id = value,
                "draft" => article.draft = value == "true",
                "type" => article.kind = ArticleKind::from_header(&value).unwrap_or_default(),
                "date" => date_modified = Some(parse_date(&value)?),
                "updated" => article.date_updated = Some(parse_date(&value)?),
                "tags" => article.tags = parse_tags(&value),
                _ => {}
            }
        }

        // Undated articles sort as "now", i.e. most recent.
        article.date_modified = date_modified.unwrap_or_else(Utc::now);

        Ok(article)
    }

    /// Check whether the article carries a tag with the given name.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name == name)
    }

    /// Tag occurrences shown in the on-page tag list.
    pub fn visible_tags(&self) -> Vec<&Tag> {
        self.tags.iter().filter(|tag| !tag.hidden).collect()
    }

    /// Output path relative to the destination root.
    pub fn output_path(&self) -> PathBuf {
        paths::output_path(self.kind, self.draft, self.date_modified, &self.filename)
    }

    /// Render the article header back to front matter text.
    ///
    /// Used by the `template` command to print starter skeletons; snippets
    /// have no title line.
    pub fn front_matter(&self) -> String {
        let mut out = String::from("---\n");

        if self.kind != ArticleKind::Snippet {
            out.push_str(&format!("title: {}\n", self.title));
        }

        out.push_str(&format!("author: {}\n", self.author));
        out.push_str(&format!("type: {}\n", self.kind.as_str()));
        out.push_str("tags: \n");
        out.push_str(&format!("date: {}\n", self.date_modified.to_rfc3339()));

        if let Some(updated) = self.date_updated {
            out.push_str(&format!("updated: {}\n", updated.to_rfc3339()));
        }

        if !self.app_id.is_empty() {
            out.push_str(&format!("appid: {}\n", self.app_id));
        }

        if self.draft {
            out.push_str("draft: true\n");
        }

        out.push_str("---\n\n");
        out
    }
}

/// Read one article from a source stream: header first, then the raw body.
pub fn read_article<R: BufRead>(reader: &mut R) -> Result<Article, ArticleError> {
    let fields = parse_front_matter(reader)?;

    let mut raw_content = Vec::new();
    reader.read_to_end(&mut raw_content)?;

    Article::from_header(fields, raw_content)
}

/// Resolve a header date value: RFC 3339 first, then the human-readable
/// fallback, which carries no zone and is taken as UTC.
fn parse_date(value: &str) -> Result<DateTime<Utc>, ArticleError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, HUMAN_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ArticleError::DateParse(value.to_string()))
}

/// Tokenize a `tags:` value on runs of whitespace, commas, and semicolons.
fn parse_tags(value: &str) -> Vec<Tag> {
    value
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .map(Tag::new)
        .collect()
}
