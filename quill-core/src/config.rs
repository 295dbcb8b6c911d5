//! Site configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the quill.yml schema.
///
/// Loaded once and threaded by value into the builder and publish run;
/// there is no process-global configuration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    /// Extension appended to generated article files (e.g. ".html").
    #[serde(default)]
    pub output_extension: String,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,

    /// Default author for skeletons and templates.
    #[serde(default)]
    pub author: String,

    /// Site root prefix handed to templates for link construction.
    #[serde(default = "default_root")]
    pub root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Source directories; each is walked recursively.
    #[serde(default = "default_posts")]
    pub posts: Vec<PathBuf>,

    #[serde(default = "default_templates")]
    pub templates: PathBuf,

    #[serde(default = "default_destination")]
    pub destination: PathBuf,
}

fn default_root() -> String {
    String::from("/")
}

fn default_posts() -> Vec<PathBuf> {
    vec![PathBuf::from("posts")]
}

fn default_templates() -> PathBuf {
    PathBuf::from("templates")
}

fn default_destination() -> PathBuf {
    PathBuf::from("destination")
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Remember where the config lives for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Source directories, resolved relative to the config file.
    pub fn posts_dirs(&self) -> Vec<PathBuf> {
        self.paths.posts.iter().map(|p| self.resolve_path(p)).collect()
    }

    /// Templates directory, resolved relative to the config file.
    pub fn templates_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.templates)
    }

    /// Destination directory, resolved relative to the config file.
    pub fn destination_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.destination)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }

        match self.config_path.as_ref().and_then(|p| p.parent()) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteConfig {
                title: String::from("blog"),
                author: String::new(),
                root: default_root(),
            },
            paths: PathsConfig::default(),
            output_extension: String::new(),
            config_path: None,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            posts: default_posts(),
            templates: default_templates(),
            destination: default_destination(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: Config = serde_yaml::from_str("site:\n  title: My blog\n").unwrap();

        assert_eq!(config.site.title, "My blog");
        assert_eq!(config.site.root, "/");
        assert_eq!(config.paths.posts, vec![PathBuf::from("posts")]);
        assert_eq!(config.paths.templates, PathBuf::from("templates"));
        assert_eq!(config.paths.destination, PathBuf::from("destination"));
        assert_eq!(config.output_extension, "");
    }

    #[test]
    fn test_paths_resolve_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("quill.yml");
        std::fs::write(
            &config_path,
            "site:\n  title: t\npaths:\n  posts:\n    - essays\n    - notes\n",
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(
            config.posts_dirs(),
            vec![dir.path().join("essays"), dir.path().join("notes")]
        );
        assert_eq!(config.templates_dir(), dir.path().join("templates"));
    }

    #[test]
    fn test_absolute_paths_stay_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("quill.yml");
        std::fs::write(
            &config_path,
            "site:\n  title: t\npaths:\n  destination: /srv/www\n",
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.destination_dir(), PathBuf::from("/srv/www"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("quill.yml");
        std::fs::write(&config_path, "site: [unclosed\n").unwrap();

        assert!(matches!(
            Config::from_file(&config_path),
            Err(ConfigError::Parse(_))
        ));
    }
}
