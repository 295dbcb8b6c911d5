//! # quill CLI
//!
//! Command-line interface for the quill blog publisher.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use quill_core::ArticleKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "quill.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new quill site
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Publish the site once
    Build,

    /// Publish, then republish whenever a source or template changes
    Watch,

    /// Print a front matter skeleton for a new article
    Template {
        /// Kind of article to scaffold
        #[arg(value_enum)]
        kind: TemplateKind,

        /// Author to pre-fill in the skeleton
        #[arg(long)]
        author: Option<String>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum TemplateKind {
    Post,
    Page,
    Snippet,
}

impl From<TemplateKind> for ArticleKind {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Post => ArticleKind::Post,
            TemplateKind::Page => ArticleKind::Page,
            TemplateKind::Snippet => ArticleKind::Snippet,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_site(path.as_deref()),
        Commands::Build => commands::build_site(&cli.config),
        Commands::Watch => commands::watch_site(&cli.config),
        Commands::Template { kind, author } => {
            commands::print_template(kind.into(), author.as_deref())
        }
    }
}
