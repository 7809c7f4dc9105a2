use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use miette::{IntoDiagnostic, Result};
use tokio::fs;

use crate::common::SaveFileParams;
use crate::config::Config;
use crate::context::Context;
use crate::data::{PageEntry, SiteConfig, SourceScanner};
use crate::error::ConfigurationError;
use crate::head;
use crate::pipeline::ProcessingStep;

pub const MANIFEST_FILE_NAME: &str = "site.json";

/// Validates the raw declaration and normalizes it into the canonical
/// shape the hosting generator consumes
pub struct ResolveSite {
    ctx: Arc<Context>,
}

impl ResolveSite {
    pub fn new(ctx: Arc<Context>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ProcessingStep for ResolveSite {
    type Input = Config;
    type Output = SiteConfig;

    #[tracing::instrument(name = "resolve site", level = "trace", skip_all)]
    async fn process(&self, cfg: Self::Input) -> Result<Self::Output> {
        if cfg.title.trim().is_empty() {
            return Err(ConfigurationError::EmptyTitle.into());
        }
        validate_pages(&cfg.pages)?;

        match fs::metadata(&self.ctx.root_dir).await {
            Ok(meta) if meta.is_dir() => {}
            _ => {
                return Err(ConfigurationError::RootNotFound {
                    path: self.ctx.root_dir.to_owned(),
                }
                .into())
            }
        }

        let scanner = SourceScanner::new(self.ctx.root_dir.to_owned(), &cfg.content)?;
        let sources = scanner.read_sources().await?;
        let routes = sources
            .iter()
            .filter_map(|s| scanner.route_for(s))
            .collect::<HashSet<_>>();
        tracing::debug!("{} page sources below the content root", sources.len());

        for page in &cfg.pages {
            if !routes.contains(&page.path) {
                tracing::warn!(
                    "navigation entry {:?} points at {:?} which has no source file",
                    page.name,
                    page.path
                );
            }
        }
        if let Some(style) = &cfg.style {
            if !self.ctx.root_dir.join(style).exists() {
                tracing::warn!("stylesheet {style:?} not found below the content root");
            }
        }

        let head = head::assemble(&cfg);

        Ok(SiteConfig {
            title: cfg.title,
            pages: cfg.pages,
            head,
            root: self.ctx.root_dir.to_owned(),
            style: cfg.style,
            footer: cfg.footer.unwrap_or_default(),
            theme: cfg.theme.unwrap_or("default".into()),
            header: cfg.header.unwrap_or_default(),
            sidebar: cfg.sidebar.unwrap_or(true),
            toc: cfg.toc.unwrap_or(true),
            pager: cfg.pager.unwrap_or(true),
            search: cfg.search.unwrap_or(false),
            output: self.ctx.output_dir.to_owned(),
        })
    }
}

fn validate_pages(pages: &[PageEntry]) -> Result<(), ConfigurationError> {
    let mut seen_routes = HashSet::new();
    let mut seen_names = HashSet::new();

    for page in pages {
        if page.name.trim().is_empty() {
            return Err(ConfigurationError::EmptyPageName {
                path: page.path.to_owned(),
            });
        }
        if !page.path.starts_with('/') {
            return Err(ConfigurationError::RouteMissingSlash {
                name: page.name.to_owned(),
                path: page.path.to_owned(),
            });
        }
        if page.path.len() > 1 && page.path.ends_with('/') {
            return Err(ConfigurationError::RouteTrailingSlash {
                name: page.name.to_owned(),
                path: page.path.to_owned(),
            });
        }
        if !seen_routes.insert(page.path.as_str()) {
            return Err(ConfigurationError::DuplicateRoute {
                name: page.name.to_owned(),
                path: page.path.to_owned(),
            });
        }
        if !seen_names.insert(page.name.as_str()) {
            return Err(ConfigurationError::DuplicateName {
                name: page.name.to_owned(),
            });
        }
    }

    Ok(())
}

/// Serializes the normalized site for the hosting generator
pub struct EmitManifest {
    ctx: Arc<Context>,
}

impl EmitManifest {
    pub fn new(ctx: Arc<Context>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ProcessingStep for EmitManifest {
    type Input = SiteConfig;
    type Output = SaveFileParams;

    #[tracing::instrument(name = "emit manifest", level = "trace", skip_all)]
    async fn process(&self, site: Self::Input) -> Result<Self::Output> {
        let contents = serde_json::to_vec_pretty(&site).into_diagnostic()?;

        Ok(SaveFileParams {
            path: self.ctx.output_dir.join(MANIFEST_FILE_NAME),
            contents,
        })
    }
}
