//! Build pipeline: load data → render topics → splice into template → write.
//!
//! Everything is assembled in memory first; the output file is only touched
//! once the full page exists, so any error leaves it as it was.

use std::fmt;
use std::path::{Path, PathBuf};

use sitegen_core::{data, SiteLayout};
use sitegen_renderer::{page, Renderer};

use crate::error::BuildError;
use crate::writer::{self, WriteResult};

/// Outcome of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Topics read from the data file, hidden ones included.
    pub total_topics: usize,
    /// Topics that made it onto the page.
    pub rendered_topics: usize,
    pub write: WriteResult,
}

impl BuildSummary {
    pub fn output(&self) -> &Path {
        self.write.path()
    }
}

impl fmt::Display for BuildSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .output()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output().display().to_string());
        write!(f, "Built {} with {} topics", name, self.total_topics)
    }
}

/// Build the site rooted at `root` using the fixed file layout.
pub fn run(root: &Path) -> Result<BuildSummary, BuildError> {
    build_site(&SiteLayout::at(root))
}

/// Build the page described by `layout`.
pub fn build_site(layout: &SiteLayout) -> Result<BuildSummary, BuildError> {
    let topics = data::load_topics_at(&layout.data)?;
    tracing::debug!("loaded {} topics from {}", topics.len(), layout.data.display());

    let template = read_template(&layout.template)?;
    match page::marker_count(&template, layout.marker) {
        1 => {}
        0 => tracing::warn!(
            "{} has no {} marker; output will equal the template",
            layout.template.display(),
            layout.marker
        ),
        n => tracing::warn!(
            "{} has {} {} markers; only the first is replaced",
            layout.template.display(),
            n,
            layout.marker
        ),
    }

    for topic in topics.iter().filter(|t| !t.is_visible()) {
        tracing::debug!("skipping hidden topic: {}", topic.title);
    }

    let renderer = Renderer::new()?;
    let block = page::render_topics_block(&renderer, &topics)?;
    let output = page::substitute_marker(&template, layout.marker, &block.html);

    let write = writer::atomic_write(&layout.output, &output)?;

    Ok(BuildSummary {
        total_topics: topics.len(),
        rendered_topics: block.rendered,
        write,
    })
}

fn read_template(path: &Path) -> Result<String, BuildError> {
    std::fs::read_to_string(path).map_err(|source| BuildError::TemplateMissing {
        path: PathBuf::from(path),
        source,
    })
}
