use std::path::PathBuf;

use serde::Serialize;

use super::PageEntry;

/// The normalized site description consumed by the hosting generator.
///
/// Produced once at startup from the raw declaration; never mutated
/// afterwards. Serializes to the `site.json` manifest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    /// site-wide display title
    pub title: String,

    /// navigation entries in declaration order
    pub pages: Vec<PageEntry>,

    /// assembled HTML injected into every page head
    pub head: String,

    /// content root, resolved against the project directory
    pub root: PathBuf,

    /// stylesheet applied site-wide, relative to the content root
    pub style: Option<String>,

    /// raw HTML injected into every page footer
    pub footer: String,

    /// named theme applied site-wide
    pub theme: String,

    /// raw HTML shown in the page header
    pub header: String,

    /// whether the navigation sidebar starts expanded
    pub sidebar: bool,

    /// whether the table of contents is shown
    pub toc: bool,

    /// whether previous & next links are shown in the footer
    pub pager: bool,

    /// whether the generator builds a search index
    pub search: bool,

    /// output root the generator builds into
    pub output: PathBuf,
}
