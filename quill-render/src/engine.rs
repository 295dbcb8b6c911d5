//! Tera template engine wrapper.

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera, Value};
use thiserror::Error;

/// Main page template: home index, article pages, and tag indexes.
pub const MAIN_TEMPLATE: &str = "template.html";

/// Feed template: the main feed and the snippet feed.
pub const FEED_TEMPLATE: &str = "rsstemplate.html";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to compile templates in {dir}: {source}")]
    Compile { dir: String, source: tera::Error },

    #[error("missing required template {0:?}")]
    MissingTemplate(&'static str),

    #[error("failed to render {name:?}: {source}")]
    Render { name: String, source: tera::Error },
}

/// A loaded, compiled set of site templates.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Compile every `*.html` template in the directory.
    ///
    /// A template that fails to compile, or a missing required template,
    /// fails the whole publish run before any article work starts.
    pub fn load(dir: &Path) -> Result<Self, RenderError> {
        let pattern = format!("{}/*.html", dir.display());
        let mut tera = Tera::new(&pattern).map_err(|source| RenderError::Compile {
            dir: dir.display().to_string(),
            source,
        })?;
        register_date_filters(&mut tera);

        let engine = Self { tera };
        for required in [MAIN_TEMPLATE, FEED_TEMPLATE] {
            if !engine.has_template(required) {
                return Err(RenderError::MissingTemplate(required));
            }
        }

        Ok(engine)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Execute a named template against a serializable context, returning
    /// the output bytes.
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<Vec<u8>, RenderError> {
        let context = Context::from_serialize(context).map_err(|source| RenderError::Render {
            name: name.to_string(),
            source,
        })?;

        self.tera
            .render(name, &context)
            .map(String::into_bytes)
            .map_err(|source| RenderError::Render {
                name: name.to_string(),
                source,
            })
    }
}

/// Date display filters. Context dates are RFC 3339 strings; each filter
/// parses and reformats for one display style.
fn register_date_filters(tera: &mut Tera) {
    tera.register_filter("long_date", date_filter("%A, %e %B %Y, %H:%M"));
    tera.register_filter("short_date", date_filter("%b %e, %Y"));
    tera.register_filter("snippet_date", date_filter("%b %e %Y, %H:%M"));
    tera.register_filter("atom_date", date_filter("%Y-%m-%dT%H:%M:%S%:z"));
}

fn date_filter(format: &'static str) -> impl tera::Filter {
    move |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
        let raw = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("date filter expects a string value"))?;
        let parsed = chrono::DateTime::parse_from_rfc3339(raw)
            .map_err(|err| tera::Error::msg(format!("invalid date {raw:?}: {err}")))?;

        Ok(Value::String(parsed.format(format).to_string()))
    }
}
