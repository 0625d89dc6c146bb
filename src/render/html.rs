//! Document-level HTML rendering.

use super::lists::map_list_boundaries;
use super::options::RenderOptions;
use super::style::{paragraph_css, style_attr};
use super::table::render_table;
use super::text::render_run;
use crate::error::Result;
use crate::model::{BodyNode, Document, NodeKind, Paragraph};

/// Convert a document to an HTML fragment.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// HTML renderer.
///
/// Walks the document body once, in order, dispatching each node to its
/// type-specific renderer and interleaving the list open/close tags
/// precomputed by the boundary mapper. Holds no per-document state, so a
/// renderer can be reused across conversions.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document body into a flat HTML fragment.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let boundaries = map_list_boundaries(&doc.body.content, &doc.lists)?;

        let mut output = String::new();
        for node in &doc.body.content {
            if let Some(tag) = boundaries.open_tag(node.start_index) {
                output.push_str(tag);
            }
            output.push_str(&self.render_node(node));
            if let Some(tag) = boundaries.close_tag(node.start_index) {
                output.push_str(tag);
            }
        }

        log::debug!(
            "rendered {} body nodes into {} bytes of html",
            doc.body.content.len(),
            output.len()
        );
        Ok(output)
    }

    fn render_node(&self, node: &BodyNode) -> String {
        match node.kind() {
            NodeKind::Paragraph(paragraph) => self.render_paragraph(node, paragraph),
            NodeKind::Table(table) => render_table(table, &self.options),
            NodeKind::SectionBreak | NodeKind::Unknown => String::new(),
        }
    }

    /// Render one paragraph node: `li` for list items, `p` otherwise, with
    /// a `div` run wrapper for single-element paragraphs and `span` for the
    /// rest. Elements other than text runs render nothing.
    fn render_paragraph(&self, node: &BodyNode, paragraph: &Paragraph) -> String {
        let wrapper = if paragraph.bullet.is_some() { "li" } else { "p" };
        let run_wrapper = if paragraph.elements.len() == 1 {
            "div"
        } else {
            "span"
        };
        let styles = paragraph_css(node.paragraph_style.as_ref(), self.options.indent_ratio);

        let content: String = paragraph
            .elements
            .iter()
            .filter_map(|element| element.text_run.as_ref())
            .filter_map(|run| render_run(run, Some(run_wrapper), &self.options))
            .collect();

        format!("<{wrapper}{}>{content}</{wrapper}>", style_attr(&styles))
    }
}
