//! Template context construction.
//!
//! Everything templates see is built here from the core model: plain
//! serializable structs, with dates as RFC 3339 strings that the engine's
//! date filters reformat for display.

use chrono::{DateTime, Utc};
use quill_core::{Article, Config, Tag};
use serde::Serialize;
use std::collections::HashMap;

/// An article as exposed to templates.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleContext {
    pub title: String,
    pub author: String,
    pub description: String,
    pub link: String,
    pub identifier: String,
    pub app_id: String,

    /// "Post", "Page", or "Snippet".
    pub kind: String,

    /// RFC 3339 modification date.
    pub date: String,
    pub updated: Option<String>,
    pub draft: bool,

    /// Rendered HTML body.
    pub content: String,

    /// Output path relative to the destination root.
    pub path: String,

    /// Every tag occurrence, hidden flag included.
    pub tags: Vec<TagContext>,

    /// Names shown in the on-page tag list: hidden occurrences excluded.
    pub visible_tags: Vec<String>,

    pub meta: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagContext {
    pub name: String,
    pub original: String,
    pub hidden: bool,
}

impl From<&Tag> for TagContext {
    fn from(tag: &Tag) -> Self {
        TagContext {
            name: tag.name.clone(),
            original: tag.original.clone(),
            hidden: tag.hidden,
        }
    }
}

impl From<&Article> for ArticleContext {
    fn from(article: &Article) -> Self {
        ArticleContext {
            title: article.title.clone(),
            author: article.author.clone(),
            description: article.description.clone(),
            link: article.link.clone(),
            identifier: article.identifier.clone(),
            app_id: article.app_id.clone(),
            kind: article.kind.as_str().to_string(),
            date: article.date_modified.to_rfc3339(),
            updated: article.date_updated.map(|d| d.to_rfc3339()),
            draft: article.draft,
            content: article.rendered_content.clone(),
            path: article.output_path().to_string_lossy().into_owned(),
            tags: article.tags.iter().map(TagContext::from).collect(),
            visible_tags: article
                .visible_tags()
                .iter()
                .map(|tag| tag.name.clone())
                .collect(),
            meta: article.meta.clone(),
        }
    }
}

/// Context for the main page template: the home index, a single article
/// page, or a tag index.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub title: String,
    pub blog_title: String,
    pub root: String,
    pub home: bool,

    /// Article list for index-style pages; empty on single-article pages.
    pub articles: Vec<ArticleContext>,

    /// Set on single-article pages only.
    pub article: Option<ArticleContext>,

    /// Generation timestamp, RFC 3339; empty except on the home index.
    pub created: String,
}

impl PageContext {
    /// Home index over the corpus index view.
    pub fn home(config: &Config, articles: &[&Article], created: DateTime<Utc>) -> Self {
        PageContext {
            title: config.site.title.clone(),
            blog_title: config.site.title.clone(),
            root: config.site.root.clone(),
            home: true,
            articles: contexts(articles),
            article: None,
            created: created.to_rfc3339(),
        }
    }

    /// One article's own page. No generation timestamp: article pages are
    /// a pure function of the article and the templates, so rerunning the
    /// pipeline over unchanged sources rewrites them byte-identical.
    pub fn article(config: &Config, article: &Article) -> Self {
        PageContext {
            title: format!("{} – {}", article.title, config.site.title),
            blog_title: config.site.title.clone(),
            root: config.site.root.clone(),
            home: false,
            articles: Vec::new(),
            article: Some(ArticleContext::from(article)),
            created: String::new(),
        }
    }

    /// Index page for one tag name. Like article pages, tag indexes carry
    /// no generation timestamp.
    pub fn tag(config: &Config, name: &str, articles: &[&Article]) -> Self {
        PageContext {
            title: format!("Tag: {} – {}", name, config.site.title),
            blog_title: config.site.title.clone(),
            root: config.site.root.clone(),
            home: false,
            articles: contexts(articles),
            article: None,
            created: String::new(),
        }
    }
}

/// Context for feed documents.
#[derive(Debug, Serialize)]
pub struct FeedContext {
    pub blog_title: String,
    pub root: String,

    /// Output file name of the feed itself, for self-links.
    pub file: String,

    pub articles: Vec<ArticleContext>,

    /// Generation timestamp, RFC 3339. Feeds embed this, so they are
    /// exempt from the rerun-identical guarantee article pages have.
    pub created: String,
}

impl FeedContext {
    pub fn new(
        config: &Config,
        file: &str,
        articles: &[&Article],
        created: DateTime<Utc>,
    ) -> Self {
        FeedContext {
            blog_title: config.site.title.clone(),
            root: config.site.root.clone(),
            file: file.to_string(),
            articles: contexts(articles),
            created: created.to_rfc3339(),
        }
    }
}

fn contexts(articles: &[&Article]) -> Vec<ArticleContext> {
    articles.iter().map(|a| ArticleContext::from(*a)).collect()
}
