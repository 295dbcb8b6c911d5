//! Build command implementation: one full publish run.

use anyhow::{Context, Result};
use chrono::Utc;
use quill_core::{paths, Config, Corpus, CorpusBuilder};
use quill_render::{FeedContext, PageContext, TemplateEngine, FEED_TEMPLATE, MAIN_TEMPLATE};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Home index file name, written at the destination root regardless of the
/// configured article extension.
const INDEX_FILE: &str = "index.html";

/// Main feed output file.
const FEED_FILE: &str = "index.xml";

/// Snippet feed output file.
const SNIPPET_FEED_FILE: &str = "snippets.xml";

/// Publish the site once from a config file.
pub fn build_site(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    publish(&config)
}

/// One full publish run: parse every source, then render and write the
/// whole site.
///
/// The two fatal checks (destination openable, templates compiling) come
/// before any per-file work. After that, failures are contained to the
/// artifact they occur in: a file that will not parse, render, or write is
/// logged and the rest of the corpus still publishes.
pub fn publish(config: &Config) -> Result<()> {
    tracing::info!("Publishing blog: {}", config.site.title);

    let destination = config.destination_dir();
    if !destination.is_dir() {
        anyhow::bail!("Destination directory {:?} could not be opened", destination);
    }

    // Templates reload every run so the watch loop sees template edits.
    let engine =
        TemplateEngine::load(&config.templates_dir()).context("Failed to compile templates")?;

    let corpus = CorpusBuilder::new(config.clone()).build();
    tracing::info!("Parsed {} articles", corpus.len());

    let created = Utc::now();

    // Home index and both feeds, from the classified views.
    let home = PageContext::home(config, &corpus.index(), created);
    emit(&engine, MAIN_TEMPLATE, &home, &destination.join(INDEX_FILE));

    let feed = FeedContext::new(config, FEED_FILE, &corpus.feed(), created);
    emit(&engine, FEED_TEMPLATE, &feed, &destination.join(FEED_FILE));

    let snippets = FeedContext::new(config, SNIPPET_FEED_FILE, &corpus.snippet_feed(), created);
    emit(
        &engine,
        FEED_TEMPLATE,
        &snippets,
        &destination.join(SNIPPET_FEED_FILE),
    );

    // Every parsed article gets its own page, drafts included.
    for article in corpus.all() {
        let context = PageContext::article(config, article);
        let path = destination.join(article.output_path());
        emit(&engine, MAIN_TEMPLATE, &context, &path);
    }

    let tag_count = write_tag_indexes(config, &engine, &corpus, &destination);

    tracing::info!(
        "✓ Published {} articles and {} tag indexes to {:?}",
        corpus.len(),
        tag_count,
        destination
    );

    Ok(())
}

/// One index page per distinct tag name in the index view. Tags hidden at
/// every occurrence get the disguised file name.
fn write_tag_indexes(
    config: &Config,
    engine: &TemplateEngine,
    corpus: &Corpus,
    destination: &Path,
) -> usize {
    let names = corpus.tag_names();

    for name in &names {
        let articles = corpus.by_tag(name);
        let context = PageContext::tag(config, name, &articles);
        let file = paths::tag_index_file_name(
            name,
            corpus.tag_is_hidden(name),
            &config.output_extension,
        );
        emit(engine, MAIN_TEMPLATE, &context, &destination.join(file));
    }

    names.len()
}

/// Render one artifact and write it out. Render and write failures are
/// logged and skipped; sibling artifacts are unaffected.
fn emit<T: Serialize>(engine: &TemplateEngine, template: &str, context: &T, path: &Path) {
    let bytes = match engine.render(template, context) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Could not render {}: {}", path.display(), err);
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            tracing::warn!("Could not create {}: {}", parent.display(), err);
            return;
        }
    }

    if let Err(err) = fs::write(path, &bytes) {
        tracing::warn!("Could not write {}: {}", path.display(), err);
    }
}
