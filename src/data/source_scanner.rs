use std::path::{Path, PathBuf};

use async_walkdir::WalkDir;
use futures::StreamExt;
use globset::{Glob, GlobSet, GlobSetBuilder};
use miette::{IntoDiagnostic, Result};

use crate::config::ContentConfig;

const DEFAULT_INCLUDE: &str = "**/*.md";

/// discovers page source files below the content root
pub struct SourceScanner {
    root: PathBuf,
    include: GlobSet,
    exclude: GlobSet,
}

impl SourceScanner {
    pub fn new(root: PathBuf, rules: &ContentConfig) -> Result<Self> {
        let include = if rules.include.is_empty() {
            vec![Glob::new(DEFAULT_INCLUDE).into_diagnostic()?]
        } else {
            rules.include.clone()
        };
        let include = build_glob_set(&include).build().into_diagnostic()?;
        let exclude = build_glob_set(&rules.exclude).build().into_diagnostic()?;

        Ok(Self {
            root,
            include,
            exclude,
        })
    }

    /// Asynchronously collects all page sources at the content root
    #[tracing::instrument(level = "trace", skip(self))]
    pub async fn read_sources(&self) -> Result<Vec<PathBuf>> {
        let mut entries = WalkDir::new(&self.root);
        let mut sources = Vec::new();

        while let Some(res) = entries.next().await {
            match res {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry_path.is_file() {
                        continue;
                    }
                    let rel_path = entry_path.strip_prefix(&self.root).into_diagnostic()?;

                    if self.include.is_match(rel_path) && !self.exclude.is_match(rel_path) {
                        sources.push(entry_path);
                    }
                }
                Err(e) => return Err(e).into_diagnostic(),
            }
        }
        sources.sort();

        Ok(sources)
    }

    /// Maps a source file to the route it is served under.
    ///
    /// `<root>/gpu-performance.md` becomes `/gpu-performance`,
    /// an `index` file stands for the directory it lives in.
    pub fn route_for(&self, source: &Path) -> Option<String> {
        let rel_path = source.strip_prefix(&self.root).ok()?;
        let stem = rel_path.file_stem()?.to_string_lossy();
        let parent = rel_path.parent().unwrap_or(Path::new(""));

        let mut segments = parent
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>();

        if stem != "index" {
            segments.push(stem.into_owned());
        }

        Some(format!("/{}", segments.join("/")))
    }
}

fn build_glob_set(globs: &Vec<Glob>) -> GlobSetBuilder {
    let mut builder = GlobSetBuilder::new();
    globs.iter().fold(&mut builder, |b, g| b.add(g.clone()));

    builder
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn portal_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("notes")).unwrap();
        std::fs::create_dir(dir.path().join("drafts")).unwrap();
        std::fs::write(dir.path().join("index.md"), "# Home").unwrap();
        std::fs::write(dir.path().join("gpu-performance.md"), "# GPUs").unwrap();
        std::fs::write(dir.path().join("notes/methodology.md"), "# Method").unwrap();
        std::fs::write(dir.path().join("drafts/wip.md"), "# WIP").unwrap();
        std::fs::write(dir.path().join("benchmarks.csv"), "gpu,fps").unwrap();

        dir
    }

    #[tokio::test]
    async fn finds_markdown_sources_only() {
        let dir = portal_root();
        let scanner = SourceScanner::new(dir.path().to_owned(), &ContentConfig::default()).unwrap();

        let sources = scanner.read_sources().await.unwrap();
        let names = sources
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect::<Vec<_>>();

        assert_eq!(
            names,
            vec![
                "drafts/wip.md".to_owned(),
                "gpu-performance.md".to_owned(),
                "index.md".to_owned(),
                "notes/methodology.md".to_owned(),
            ]
        );
    }

    #[tokio::test]
    async fn exclude_globs_drop_sources() {
        let dir = portal_root();
        let rules = ContentConfig {
            include: Vec::new(),
            exclude: vec![Glob::new("drafts/**").unwrap()],
        };
        let scanner = SourceScanner::new(dir.path().to_owned(), &rules).unwrap();

        let sources = scanner.read_sources().await.unwrap();

        assert_eq!(sources.len(), 3);
        assert!(sources.iter().all(|p| !p.ends_with("drafts/wip.md")));
    }

    #[test]
    fn maps_sources_to_routes() {
        let scanner =
            SourceScanner::new(PathBuf::from("/project/src"), &ContentConfig::default()).unwrap();

        assert_eq!(
            scanner.route_for(Path::new("/project/src/gpu-performance.md")),
            Some("/gpu-performance".to_owned())
        );
        assert_eq!(
            scanner.route_for(Path::new("/project/src/index.md")),
            Some("/".to_owned())
        );
        assert_eq!(
            scanner.route_for(Path::new("/project/src/notes/methodology.md")),
            Some("/notes/methodology".to_owned())
        );
        assert_eq!(
            scanner.route_for(Path::new("/project/src/notes/index.md")),
            Some("/notes".to_owned())
        );
        assert_eq!(scanner.route_for(Path::new("/elsewhere/page.md")), None);
    }
}
