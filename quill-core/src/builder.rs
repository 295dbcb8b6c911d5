//! Corpus building: source discovery, parsing, and markdown rendering.

use crate::article::{read_article, Article, ArticleError};
use crate::config::Config;
use crate::corpus::Corpus;
use crate::markdown::MarkdownRenderer;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions treated as article sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// A base name ending in this suffix forces draft status, whatever the
/// header says.
pub const DRAFT_SUFFIX: &str = "draft";

/// A discovered source document: the base name (source extensions
/// stripped) and where it lives.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub path: PathBuf,
}

/// Builds the corpus for one publish run.
pub struct CorpusBuilder {
    config: Config,
    renderer: MarkdownRenderer,
}

impl CorpusBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// One scan-parse-render pass over every posts directory.
    ///
    /// Files that cannot be opened or parsed are skipped with a warning;
    /// a single bad source never aborts the run.
    pub fn build(&self) -> Corpus {
        let sources = self.discover();
        tracing::info!("Found {} source files", sources.len());

        let mut corpus = Corpus::new();

        for source in &sources {
            match self.read_source(source) {
                Ok(article) => corpus.add(article),
                Err(err) => {
                    tracing::warn!("Skipping {}: {}", source.path.display(), err);
                }
            }
        }

        corpus
    }

    /// Enumerate article sources under the configured posts directories.
    fn discover(&self) -> Vec<SourceFile> {
        let mut sources = Vec::new();

        for dir in self.config.posts_dirs() {
            for entry in WalkDir::new(&dir) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::warn!("Cannot read {}: {}", dir.display(), err);
                        continue;
                    }
                };

                if !entry.file_type().is_file() {
                    continue;
                }

                if let Some(name) = source_name(entry.path()) {
                    sources.push(SourceFile {
                        name,
                        path: entry.path().to_path_buf(),
                    });
                }
            }
        }

        sources
    }

    /// Parse one source file into a fully populated article.
    fn read_source(&self, source: &SourceFile) -> Result<Article, ArticleError> {
        let file = File::open(&source.path)?;
        let mut reader = BufReader::new(file);
        let mut article = read_article(&mut reader)?;

        article.rendered_content = self.renderer.render(&article.raw_content);
        if article.description.is_empty() {
            // Body text doubles as the summary when the header leaves one out.
            article.description = article.rendered_content.clone();
        }

        article.identifier = source.name.clone();
        article.filename = format!("{}{}", source.name, self.config.output_extension);

        // Draft can come from the header or the file name; either wins.
        article.draft = article.draft || source.name.ends_with(DRAFT_SUFFIX);

        Ok(article)
    }
}

/// Base name with every trailing source extension stripped, or `None`
/// when the file is not an article source.
fn source_name(path: &Path) -> Option<String> {
    let filename = path.file_name()?.to_str()?;
    let (stem, ext) = filename.rsplit_once('.')?;
    if !SOURCE_EXTENSIONS.contains(&ext) {
        return None;
    }

    // Peel stacked extensions like `article.md.txt` down to the base name.
    let mut name = stem;
    while let Some((rest, ext)) = name.rsplit_once('.') {
        if !SOURCE_EXTENSIONS.contains(&ext) {
            break;
        }
        name = rest;
    }

    Some(name.to_string())
}
