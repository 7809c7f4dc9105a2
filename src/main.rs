use std::sync::Arc;

use clap::Parser;
use config::read_config;
use context::Context;
use miette::Result;
use resolver::{EmitManifest, ResolveSite};
use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::args::{Args, ProjectArgs};
use crate::common::SaveFile;
use crate::pipeline::{ProcessingStep, ProcessingStepChain};

mod args;
mod common;
mod config;
mod context;
pub mod data;
mod error;
mod head;
mod pipeline;
mod resolver;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Args = Args::parse();
    init_tracing();

    match args.command {
        args::Command::Check(project_args) => check(project_args).await,
        args::Command::Resolve(project_args) => resolve(project_args).await,
    }
}

async fn check(args: ProjectArgs) -> Result<()> {
    let cfg = read_config(&args.directory).await?;
    let ctx = Arc::new(Context::new(&args.directory, &cfg));

    let site = ResolveSite::new(ctx).process(cfg).await?;
    tracing::info!(
        "configuration ok: {:?} with {} navigation entries",
        site.title,
        site.pages.len()
    );

    Ok(())
}

async fn resolve(args: ProjectArgs) -> Result<()> {
    let cfg = read_config(&args.directory).await?;
    let ctx = Arc::new(Context::new(&args.directory, &cfg));

    ResolveSite::new(ctx.clone())
        .chain(EmitManifest::new(ctx))
        .chain(SaveFile)
        .process(cfg)
        .await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_max_level(LevelFilter::TRACE)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .compact()
        .init();
}
