//! The per-run article collection and its derived views.

use crate::article::{Article, ArticleKind};
use std::collections::BTreeSet;

/// All articles parsed during one publish run.
///
/// A corpus is created empty at the start of a run, filled with one
/// [`add`](Corpus::add) per source file, and discarded when the run ends.
/// The view methods recompute on every call; nothing carries over between
/// runs.
#[derive(Debug, Default)]
pub struct Corpus {
    articles: Vec<Article>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parsed article. Every article is accepted here; type and
    /// draft filtering happens in the views.
    pub fn add(&mut self, article: Article) {
        self.articles.push(article);
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Every article, pages and drafts included. Each of these gets its
    /// own rendered page.
    pub fn all(&self) -> Vec<&Article> {
        self.view(|_| true)
    }

    /// Home index view: non-draft posts and snippets.
    pub fn index(&self) -> Vec<&Article> {
        self.view(|a| a.kind != ArticleKind::Page && !a.draft)
    }

    /// Main feed view: non-draft posts only.
    pub fn feed(&self) -> Vec<&Article> {
        self.view(|a| a.kind == ArticleKind::Post && !a.draft)
    }

    /// Snippet feed view: non-draft snippets only.
    pub fn snippet_feed(&self) -> Vec<&Article> {
        self.view(|a| a.kind == ArticleKind::Snippet && !a.draft)
    }

    /// Index articles carrying the given tag name, in view order.
    pub fn by_tag(&self, name: &str) -> Vec<&Article> {
        self.index()
            .into_iter()
            .filter(|a| a.has_tag(name))
            .collect()
    }

    /// Distinct tag names across the index view. Tag identity is the name
    /// alone, so hidden and visible occurrences collapse to one entry.
    pub fn tag_names(&self) -> BTreeSet<String> {
        self.index()
            .iter()
            .flat_map(|a| &a.tags)
            .map(|tag| tag.name.clone())
            .collect()
    }

    /// True when every occurrence of the tag across the index view is
    /// hidden; such tags get a disguised index file name.
    pub fn tag_is_hidden(&self, name: &str) -> bool {
        self.index()
            .iter()
            .flat_map(|a| &a.tags)
            .filter(|tag| tag.name == name)
            .all(|tag| tag.hidden)
    }

    /// Filter and sort by modification date, most recent first. The sort
    /// is stable, so equal timestamps keep their scan order.
    fn view(&self, keep: impl Fn(&Article) -> bool) -> Vec<&Article> {
        let mut articles: Vec<&Article> = self.articles.iter().filter(|&a| keep(a)).collect();
        articles.sort_by(|a, b| b.date_modified.cmp(&a.date_modified));
        articles
    }
}
