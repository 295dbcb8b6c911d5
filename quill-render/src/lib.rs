//! # quill-render
//!
//! Template rendering library for quill.
//!
//! This crate wraps the Tera engine: templates load from the configured
//! templates directory at the start of every publish run, so the watch
//! loop picks up template edits without a process restart.

pub mod context;
pub mod engine;

pub use context::{ArticleContext, FeedContext, PageContext, TagContext};
pub use engine::{RenderError, TemplateEngine, FEED_TEMPLATE, MAIN_TEMPLATE};
