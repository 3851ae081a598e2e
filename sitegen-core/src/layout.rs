//! Fixed file layout of a site root.
//!
//! ```text
//! <root>/
//!   topics.json     (topic list, input)
//!   template.html   (page template holding the marker, input)
//!   index.html      (generated page, output)
//! ```

use std::path::PathBuf;

pub const DATA_FILE: &str = "topics.json";
pub const TEMPLATE_FILE: &str = "template.html";
pub const OUTPUT_FILE: &str = "index.html";

/// Literal token in the template replaced by the generated topics block.
pub const TOPICS_MARKER: &str = "<!-- TOPICS -->";

/// Resolved paths for one site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    pub root: PathBuf,
    pub data: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub marker: &'static str,
}

impl SiteLayout {
    /// Layout rooted at `root` — pure, no I/O.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data: root.join(DATA_FILE),
            template: root.join(TEMPLATE_FILE),
            output: root.join(OUTPUT_FILE),
            marker: TOPICS_MARKER,
            root,
        }
    }
}
