//! Page assembly — the topics block and marker substitution.
//!
//! The topics block is `<hr>`, topic, `<hr>`, topic, …, `<hr>`, with every
//! piece joined by a blank line. Hidden topics contribute nothing, not even
//! a separator.

use sitegen_core::types::Topic;

use crate::engine::Renderer;
use crate::error::RenderError;

pub const SEPARATOR: &str = "<hr>";
pub const PIECE_JOINER: &str = "\n\n";

/// Rendered topics block plus how many topics made it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicsBlock {
    pub html: String,
    pub rendered: usize,
}

/// Render all visible topics, in input order, into one block.
pub fn render_topics_block(
    renderer: &Renderer,
    topics: &[Topic],
) -> Result<TopicsBlock, RenderError> {
    let mut pieces = Vec::with_capacity(topics.len() * 2 + 1);
    let mut rendered = 0;
    for topic in topics.iter().filter(|t| t.is_visible()) {
        pieces.push(SEPARATOR.to_string());
        pieces.push(renderer.render_topic(topic)?);
        rendered += 1;
    }
    pieces.push(SEPARATOR.to_string());

    Ok(TopicsBlock { html: pieces.join(PIECE_JOINER), rendered })
}

/// Replace the first occurrence of `marker` in `template` with `block`.
/// A template without the marker is returned unchanged.
pub fn substitute_marker(template: &str, marker: &str, block: &str) -> String {
    template.replacen(marker, block, 1)
}

/// Number of times `marker` appears in `template`.
pub fn marker_count(template: &str, marker: &str) -> usize {
    template.matches(marker).count()
}
