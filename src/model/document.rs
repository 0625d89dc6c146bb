//! Document-level types.

use super::{Paragraph, ParagraphStyle, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A structured document as returned by the document API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// The document body
    #[serde(default)]
    pub body: Body,

    /// List definitions, keyed by list id
    #[serde(default)]
    pub lists: HashMap<String, ListDefinition>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the document body.
    pub fn add_node(&mut self, node: BodyNode) {
        self.body.content.push(node);
    }

    /// Register a list definition under the given id.
    pub fn add_list(&mut self, id: impl Into<String>, definition: ListDefinition) {
        self.lists.insert(id.into(), definition);
    }

    /// Check if the document body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.content.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.body
            .content
            .iter()
            .filter_map(|node| node.paragraph.as_ref())
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The ordered sequence of top-level body nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Body nodes in document order
    #[serde(default)]
    pub content: Vec<BodyNode>,
}

/// A single top-level node of the document body.
///
/// The wire format carries exactly one of the content variants per node,
/// alongside the node's document offset. [`BodyNode::kind`] exposes the
/// variant as a sum type for dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyNode {
    /// Document offset; unique per node, increasing in body order
    #[serde(default)]
    pub start_index: i64,

    /// Node-level paragraph style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,

    /// Paragraph content, if this node is a paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,

    /// Table content, if this node is a table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,

    /// Section break marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_break: Option<SectionBreak>,
}

impl BodyNode {
    /// Create a paragraph node at the given document offset.
    pub fn paragraph(start_index: i64, paragraph: Paragraph) -> Self {
        Self {
            start_index,
            paragraph: Some(paragraph),
            ..Self::default()
        }
    }

    /// Create a table node at the given document offset.
    pub fn table(start_index: i64, table: Table) -> Self {
        Self {
            start_index,
            table: Some(table),
            ..Self::default()
        }
    }

    /// Create a section break node at the given document offset.
    pub fn section_break(start_index: i64) -> Self {
        Self {
            start_index,
            section_break: Some(SectionBreak::default()),
            ..Self::default()
        }
    }

    /// Set the node-level paragraph style and return self.
    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.paragraph_style = Some(style);
        self
    }

    /// Resolve the node variant, honoring the fixed dispatch order
    /// (paragraph, table, sectionBreak).
    pub fn kind(&self) -> NodeKind<'_> {
        if let Some(ref p) = self.paragraph {
            NodeKind::Paragraph(p)
        } else if let Some(ref t) = self.table {
            NodeKind::Table(t)
        } else if self.section_break.is_some() {
            NodeKind::SectionBreak
        } else {
            NodeKind::Unknown
        }
    }

    /// The bullet of this node's paragraph, if any.
    pub fn bullet(&self) -> Option<&super::Bullet> {
        self.paragraph.as_ref().and_then(|p| p.bullet.as_ref())
    }
}

/// Borrowed view of a body node's content variant.
#[derive(Debug, Clone, Copy)]
pub enum NodeKind<'a> {
    /// A paragraph node
    Paragraph(&'a Paragraph),
    /// A table node
    Table(&'a Table),
    /// A section break (renders empty)
    SectionBreak,
    /// A node variant the converter does not recognize (renders empty)
    Unknown,
}

/// A section break. Carries no content the converter uses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SectionBreak {}

/// A list definition referenced by bulleted paragraphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDefinition {
    /// Per-level list properties
    #[serde(default)]
    pub list_properties: ListProperties,
}

impl ListDefinition {
    /// Create a definition from glyph types, index 0 = root level.
    pub fn with_glyphs(glyphs: impl IntoIterator<Item = GlyphType>) -> Self {
        Self {
            list_properties: ListProperties {
                nesting_levels: glyphs
                    .into_iter()
                    .map(|g| NestingLevel {
                        glyph_type: Some(g),
                    })
                    .collect(),
            },
        }
    }
}

/// Properties shared by all items of a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProperties {
    /// Nesting level definitions, index 0 = root level
    #[serde(default)]
    pub nesting_levels: Vec<NestingLevel>,
}

/// The definition of one nesting level of a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestingLevel {
    /// Glyph used for item markers at this level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_type: Option<GlyphType>,
}

/// List marker glyph, as named by the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlyphType {
    /// Unspecified glyph
    GlyphTypeUnspecified,
    /// No glyph
    None,
    /// 1, 2, 3, ...
    Decimal,
    /// 01, 02, 03, ...
    ZeroDecimal,
    /// A, B, C, ...
    UpperAlpha,
    /// a, b, c, ...
    Alpha,
    /// I, II, III, ...
    UpperRoman,
    /// i, ii, iii, ...
    Roman,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Table};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.lists.is_empty());
    }

    #[test]
    fn test_node_kind_dispatch_order() {
        let node = BodyNode::paragraph(1, Paragraph::with_text("hi"));
        assert!(matches!(node.kind(), NodeKind::Paragraph(_)));

        let node = BodyNode::table(1, Table::default());
        assert!(matches!(node.kind(), NodeKind::Table(_)));

        let node = BodyNode::section_break(1);
        assert!(matches!(node.kind(), NodeKind::SectionBreak));

        let node = BodyNode::default();
        assert!(matches!(node.kind(), NodeKind::Unknown));
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::new();
        doc.add_node(BodyNode::paragraph(1, Paragraph::with_text("one")));
        doc.add_node(BodyNode::section_break(5));
        doc.add_node(BodyNode::paragraph(6, Paragraph::with_text("two")));
        assert_eq!(doc.plain_text(), "one\ntwo");
    }

    #[test]
    fn test_deserialize_ignores_unknown_variants() {
        let json = r#"{
            "body": { "content": [
                { "startIndex": 1, "tableOfContents": { "content": [] } }
            ] }
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert!(matches!(doc.body.content[0].kind(), NodeKind::Unknown));
    }

    #[test]
    fn test_glyph_type_wire_names() {
        let glyph: GlyphType = serde_json::from_str(r#""UPPER_ALPHA""#).unwrap();
        assert_eq!(glyph, GlyphType::UpperAlpha);

        let glyph: GlyphType = serde_json::from_str(r#""GLYPH_TYPE_UNSPECIFIED""#).unwrap();
        assert_eq!(glyph, GlyphType::GlyphTypeUnspecified);
    }
}
