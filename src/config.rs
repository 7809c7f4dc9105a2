use std::path::{Path, PathBuf};

use globset::Glob;
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;
use tokio::fs;

use crate::data::PageEntry;

pub const CONFIG_FILE_NAME: &str = "portalgen.toml";

/// The site declaration as written in `portalgen.toml`.
///
/// Optional fields receive their defaults during resolution,
/// not during deserialization.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// site-wide display title
    pub title: String,

    /// navigation entries in declaration order
    #[serde(default)]
    pub pages: Vec<PageEntry>,

    /// directory the content pages live in
    pub root: Option<PathBuf>,

    /// stylesheet applied site-wide, relative to the content root
    pub style: Option<String>,

    /// raw HTML appended to every page head
    pub head: Option<String>,

    /// raw HTML injected into every page footer
    pub footer: Option<String>,

    /// icon referenced from every page head
    pub favicon: Option<String>,

    /// named theme applied site-wide
    pub theme: Option<String>,

    /// raw HTML shown in the page header
    pub header: Option<String>,

    /// whether the navigation sidebar starts expanded
    pub sidebar: Option<bool>,

    /// whether the table of contents is shown
    pub toc: Option<bool>,

    /// whether previous & next links are shown in the footer
    pub pager: Option<bool>,

    /// whether the generator builds a search index
    pub search: Option<bool>,

    /// output root the generator builds into
    pub output: Option<PathBuf>,

    pub analytics: Option<AnalyticsConfig>,

    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnalyticsConfig {
    /// module URL loaded and initialized on every page
    pub script: String,
}

/// Selects which files below the content root count as page sources
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContentConfig {
    /// files that are included as page sources
    #[serde(default)]
    pub include: Vec<Glob>,

    /// files that are explicitly excluded
    #[serde(default)]
    pub exclude: Vec<Glob>,
}

#[tracing::instrument(level = "trace")]
pub async fn read_config(dir: &Path) -> Result<Config> {
    let cfg_string = fs::read_to_string(dir.join(CONFIG_FILE_NAME))
        .await
        .into_diagnostic()
        .context("reading portalgen.toml")?;
    toml::from_str(&cfg_string).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PORTAL_CONFIG: &str = r#"
title = "GPU Performance & Pricing Data Portal"
root = "src"
style = "style.css"
favicon = "portal.png"
footer = 'Built with <a href="https://www.portaljs.com/" target="_blank" rel="noopener noreferrer">PortalJS</a>.'
sidebar = false

[[pages]]
name = "GPU Performance"
path = "/gpu-performance"

[[pages]]
name = "Price vs Performance"
path = "/price-performance"

[[pages]]
name = "NVIDIA Releases"
path = "/nvidia-releases"

[analytics]
script = "https://esm.sh/@vercel/analytics@1.5.0"

[content]
exclude = ["drafts/**"]
"#;

    #[test]
    fn parses_the_portal_declaration() {
        let cfg: Config = toml::from_str(PORTAL_CONFIG).unwrap();

        assert_eq!(cfg.title, "GPU Performance & Pricing Data Portal");
        assert_eq!(cfg.pages.len(), 3);
        assert_eq!(cfg.pages[0].name, "GPU Performance");
        assert_eq!(cfg.pages[0].path, "/gpu-performance");
        assert_eq!(cfg.pages[2].path, "/nvidia-releases");
        assert_eq!(cfg.root, Some(PathBuf::from("src")));
        assert_eq!(cfg.sidebar, Some(false));
        assert_eq!(
            cfg.analytics.unwrap().script,
            "https://esm.sh/@vercel/analytics@1.5.0"
        );
        assert_eq!(cfg.content.exclude.len(), 1);
    }

    #[test]
    fn optional_fields_stay_unset() {
        let cfg: Config = toml::from_str(r#"title = "Portal""#).unwrap();

        assert!(cfg.pages.is_empty());
        assert_eq!(cfg.root, None);
        assert_eq!(cfg.theme, None);
        assert_eq!(cfg.toc, None);
        assert!(cfg.analytics.is_none());
        assert!(cfg.content.include.is_empty());
    }

    #[test]
    fn title_is_required() {
        let res: std::result::Result<Config, _> = toml::from_str(r#"root = "src""#);

        assert!(res.is_err());
    }

    #[tokio::test]
    async fn reads_the_config_from_a_project_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), PORTAL_CONFIG).unwrap();

        let cfg = read_config(dir.path()).await.unwrap();

        assert_eq!(cfg.pages.len(), 3);
    }

    #[tokio::test]
    async fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let res = read_config(dir.path()).await;

        assert!(res.is_err());
    }
}
