//! `sitegen [ROOT]` — build `index.html` for a site root.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sitegen_build::{pipeline, WriteResult};
use sitegen_core::SiteLayout;

/// Arguments for `sitegen`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory holding topics.json and template.html (default: current directory).
    pub root: Option<PathBuf>,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().context("could not determine current directory")?,
        };
        let layout = SiteLayout::at(&root);

        let summary = pipeline::build_site(&layout)
            .with_context(|| format!("build failed for site at {}", root.display()))?;

        if let WriteResult::Unchanged { path } = &summary.write {
            tracing::debug!("{} already up to date", path.display());
        }
        tracing::debug!(
            "{} of {} topics rendered",
            summary.rendered_topics,
            summary.total_topics
        );
        println!("{summary}");
        Ok(())
    }
}
