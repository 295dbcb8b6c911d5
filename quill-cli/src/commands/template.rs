//! Print front matter skeletons for new articles.

use anyhow::Result;
use chrono::{Duration, Utc};
use quill_core::{Article, ArticleKind};

/// Print a starter header for a new article of the given kind.
///
/// The skeleton is dated a few minutes into the future and marked as a
/// draft, so saving it verbatim does not immediately publish a dated,
/// visible article.
pub fn print_template(kind: ArticleKind, author: Option<&str>) -> Result<()> {
    let mut article = Article {
        kind,
        draft: true,
        date_modified: Utc::now() + Duration::minutes(15),
        ..Article::default()
    };

    article.title = match kind {
        ArticleKind::Post => String::from("Blog post"),
        ArticleKind::Page => String::from("Hello world"),
        ArticleKind::Snippet => String::new(),
    };

    if let Some(author) = author {
        article.author = author.to_string();
    }

    print!("{}", article.front_matter());
    Ok(())
}
