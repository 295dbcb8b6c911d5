//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../quill.yml.example");

/// Main page template: renders the home index, single articles, and tag
/// indexes depending on which context fields are set.
const STARTER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
</head>
<body>
  <header><a href="{{ root }}">{{ blog_title }}</a></header>
  {% if article %}
  <article>
    {% if article.title %}<h1>{{ article.title }}</h1>{% endif %}
    <p class="date">{{ article.date | long_date }}</p>
    {{ article.content | safe }}
    {% if article.visible_tags %}
    <p class="tags">
      {% for tag in article.visible_tags %}<a href="{{ root }}tag-{{ tag }}.html">{{ tag }}</a> {% endfor %}
    </p>
    {% endif %}
  </article>
  {% else %}
  {% for entry in articles %}
  <section>
    {% if entry.title %}<h2><a href="{{ root }}{{ entry.path }}">{{ entry.title }}</a></h2>{% endif %}
    <p class="date">{{ entry.date | short_date }}</p>
    {{ entry.content | safe }}
  </section>
  {% endfor %}
  {% endif %}
</body>
</html>
"#;

/// Feed template, shared by the main and snippet feeds.
const STARTER_FEED_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>{{ blog_title }}</title>
  <link href="{{ root }}{{ file }}" rel="self"/>
  <id>{{ root }}</id>
  <updated>{{ created | atom_date }}</updated>
  {% for entry in articles %}
  <entry>
    <title>{{ entry.title }}</title>
    <link href="{{ root }}{{ entry.path }}"/>
    <id>{{ root }}{{ entry.path }}</id>
    <updated>{{ entry.date | atom_date }}</updated>
    <summary type="html">{{ entry.description }}</summary>
  </entry>
  {% endfor %}
</feed>
"#;

const SAMPLE_POST: &str = r#"---
title: Welcome to quill
author: quill
date: 2024-01-15T10:00:00Z
tags: quill, intro
---

# Welcome

This is your new blog. Edit `quill.yml` to update site metadata, then run:

```
quill build
quill watch
```

Drop markdown files with a front matter header into `posts/` and they
will be published on the next run.
"#;

/// Initialize a new quill site
pub fn init_site(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    scaffold_directories(root)?;

    println!("✓ quill initialized in {:?}", root);
    println!("  - Edit quill.yml to customize site metadata");
    println!("  - Write articles in posts/, then run `quill build`");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("quill.yml");
    if config_path.exists() {
        println!("quill.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn scaffold_directories(root: &Path) -> Result<()> {
    let posts = root.join("posts");
    let templates = root.join("templates");
    let destination = root.join("destination");

    for dir in [&posts, &templates, &destination] {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    for (path, contents) in [
        (templates.join("template.html"), STARTER_TEMPLATE),
        (templates.join("rsstemplate.html"), STARTER_FEED_TEMPLATE),
        (posts.join("welcome.md"), SAMPLE_POST),
    ] {
        if path.exists() {
            continue;
        }
        fs::write(&path, contents).with_context(|| format!("Failed to write {:?}", path))?;
        println!("Created {:?}", path);
    }

    Ok(())
}
