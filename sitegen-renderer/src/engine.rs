//! Tera rendering engine — topic and link group fragments.
//!
//! # Fragment layout
//!
//! | Template                 | Renders                                    |
//! |--------------------------|--------------------------------------------|
//! | `topic.html.tera`        | one `<details>` block per visible topic    |
//! | `link_group.html.tera`   | one `<div class="link-group">` per group   |
//!
//! Autoescaping is off: field values are inserted exactly as written in the
//! data file, markup included.

use tera::Tera;

use sitegen_core::types::{LinkGroup, Topic};

use crate::context::{LinkGroupContext, TopicContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TOPIC_TEMPLATE: &str = "topic.html.tera";
const LINK_GROUP_TEMPLATE: &str = "link_group.html.tera";

const TPLS: &[(&str, &str)] = &[
    (TOPIC_TEMPLATE, include_str!("templates/topic.html.tera")),
    (LINK_GROUP_TEMPLATE, include_str!("templates/link_group.html.tera")),
];

/// Joins link group fragments inside a topic body.
pub const GROUP_JOINER: &str = "\n\n";

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(TPLS.iter().copied())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Fragment renderer. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render one topic as a collapsible `<details>` block.
    ///
    /// The caller is responsible for skipping hidden topics.
    pub fn render_topic(&self, topic: &Topic) -> Result<String, RenderError> {
        let groups = self.render_link_groups(&topic.link_groups)?;
        let ctx = TopicContext::from_topic(topic, groups);
        self.render(TOPIC_TEMPLATE, &ctx.to_tera_context()?)
    }

    /// Render every group in order, joined by a blank line.
    /// An empty slice renders as an empty string.
    pub fn render_link_groups(&self, groups: &[LinkGroup]) -> Result<String, RenderError> {
        let fragments = groups
            .iter()
            .map(|group| self.render_link_group(group))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(fragments.join(GROUP_JOINER))
    }

    fn render_link_group(&self, group: &LinkGroup) -> Result<String, RenderError> {
        let ctx = LinkGroupContext::from_group(group);
        self.render(LINK_GROUP_TEMPLATE, &ctx.to_tera_context()?)
    }

    fn render(&self, name: &str, ctx: &tera::Context) -> Result<String, RenderError> {
        let mut out = self.tera.render(name, ctx)?;
        // Template files end with a newline; fragments do not.
        out.truncate(out.trim_end().len());
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use sitegen_core::types::Link;

    fn group(title: &str, links: &[(&str, &str)]) -> LinkGroup {
        LinkGroup {
            title: title.to_string(),
            links: links.iter().map(|(u, t)| Link::new(*u, *t)).collect(),
        }
    }

    #[test]
    fn renderer_new_succeeds() {
        Renderer::new().expect("Renderer::new should succeed with embedded templates");
    }

    #[test]
    fn collapsed_topic_without_extras() {
        let renderer = Renderer::new().unwrap();
        let topic = Topic { date: Some("Jan 2025".to_string()), ..Topic::new("A", "d1") };
        let html = renderer.render_topic(&topic).unwrap();
        assert_eq!(
            html,
            "<details>\n\
             \x20 <summary>\n\
             \x20   <span class=\"summary-date\">Jan 2025</span>\n\
             \x20   <strong>A</strong>\n\
             \x20 </summary>\n\
             \x20 <p>d1</p>\n\
             </details>"
        );
    }

    #[test]
    fn current_topic_is_open() {
        let renderer = Renderer::new().unwrap();
        let topic = Topic { current: true, ..Topic::new("C", "d") };
        let html = renderer.render_topic(&topic).unwrap();
        assert!(html.starts_with("<details open>\n"), "{html}");
    }

    #[test]
    fn missing_date_renders_empty_label() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_topic(&Topic::new("A", "d")).unwrap();
        assert!(html.contains("<span class=\"summary-date\"></span>"), "{html}");
    }

    #[test]
    fn note_follows_description() {
        let renderer = Renderer::new().unwrap();
        let topic = Topic { note: Some("bring a laptop".to_string()), ..Topic::new("A", "d") };
        let html = renderer.render_topic(&topic).unwrap();
        assert!(
            html.contains("  <p>d</p>\n  <p><em>Note: bring a laptop</em></p>\n</details>"),
            "{html}"
        );
    }

    #[test]
    fn fields_are_not_escaped() {
        let renderer = Renderer::new().unwrap();
        let topic = Topic::new("A & B", "see <a href=\"/x\">this</a>");
        let html = renderer.render_topic(&topic).unwrap();
        assert!(html.contains("<strong>A & B</strong>"), "{html}");
        assert!(html.contains("<p>see <a href=\"/x\">this</a></p>"), "{html}");
    }

    #[test]
    fn empty_groups_render_empty_string() {
        let renderer = Renderer::new().unwrap();
        assert_eq!(renderer.render_link_groups(&[]).unwrap(), "");
    }

    #[test]
    fn single_group_layout() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_link_groups(&[group("Slides", &[("http://x", "X"), ("http://y", "Y")])])
            .unwrap();
        assert_eq!(
            html,
            "  <div class=\"link-group\">\n\
             \x20   <h3>Slides</h3>\n\
             \x20   <ul>\n\
             \x20     <li><a href=\"http://x\">X</a></li>\n\
             \x20     <li><a href=\"http://y\">Y</a></li>\n\
             \x20   </ul>\n\
             \x20 </div>"
        );
    }

    #[test]
    fn group_without_links_keeps_empty_list() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_link_groups(&[group("Empty", &[])]).unwrap();
        assert!(html.contains("<ul>\n    </ul>"), "{html}");
    }

    #[test]
    fn groups_joined_by_blank_line() {
        let renderer = Renderer::new().unwrap();
        let html = renderer
            .render_link_groups(&[group("G1", &[]), group("G2", &[])])
            .unwrap();
        assert!(html.contains("  </div>\n\n  <div class=\"link-group\">"), "{html}");
        assert!(html.find("G1").unwrap() < html.find("G2").unwrap());
    }

    #[test]
    fn no_crlf_in_rendered_output() {
        let renderer = Renderer::new().unwrap();
        let topic = Topic {
            note: Some("n".to_string()),
            link_groups: vec![group("G", &[("u", "t")])],
            ..Topic::new("A", "d")
        };
        let html = renderer.render_topic(&topic).unwrap();
        assert!(!html.contains('\r'), "rendered output contains CR char");
    }
}
