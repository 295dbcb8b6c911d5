//! # quill-core
//!
//! Core library for the quill blog publisher.
//!
//! This crate provides the document model (articles, tags), front matter
//! parsing, corpus classification, output path resolution, and the
//! scan-parse-render builder that produces the corpus for one publish run.

pub mod article;
pub mod builder;
pub mod config;
pub mod corpus;
pub mod frontmatter;
pub mod markdown;
pub mod paths;

pub use article::{read_article, Article, ArticleError, ArticleKind, Tag};
pub use builder::{CorpusBuilder, SourceFile};
pub use config::{Config, ConfigError};
pub use corpus::Corpus;
pub use frontmatter::{parse_front_matter, FrontMatterError};
pub use markdown::MarkdownRenderer;
