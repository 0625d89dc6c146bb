//! # undoc
//!
//! Convert structured word-processor document trees into embeddable HTML
//! fragments.
//!
//! The input is the JSON document tree returned by a cloud document API
//! (paragraphs, tables, section breaks, list definitions); the output is a
//! flat HTML fragment using only inline `style` attributes, safe to inject
//! into an existing page's DOM subtree. Fetching the tree (authentication,
//! pagination) is the caller's concern.
//!
//! ## Quick Start
//!
//! ```
//! use undoc::{parse_document, to_html};
//!
//! let doc = parse_document(r#"{
//!     "body": { "content": [
//!         { "startIndex": 1, "paragraph": { "elements": [
//!             { "textRun": { "content": "Hello world\n", "textStyle": {} } }
//!         ] } }
//!     ] }
//! }"#)?;
//!
//! assert_eq!(to_html(&doc)?, "<p>Hello world</p>");
//! # Ok::<(), undoc::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Text formatting**: bold, italic, underline, links, heading detection
//! - **Tables**: column widths, row/column spans, per-cell borders
//! - **Lists**: ordered/unordered boundaries reconstructed from bullets,
//!   including one level of nested sub-lists
//! - **Inline styles only**: no stylesheet dependency in the output

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Body, BodyNode, Bullet, Dimension, Document, Element, GlyphType, ListDefinition,
    NodeKind, Paragraph, ParagraphStyle, Table, TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{HtmlRenderer, RenderOptions};

/// Parse a JSON document tree into a [`Document`].
///
/// # Example
///
/// ```
/// let doc = undoc::parse_document(r#"{ "body": { "content": [] } }"#).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn parse_document(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Convert a document to an HTML fragment with default options.
pub fn to_html(doc: &Document) -> Result<String> {
    render::to_html(doc, &RenderOptions::default())
}

/// Convert a document to an HTML fragment with custom options.
///
/// # Example
///
/// ```no_run
/// use undoc::{to_html_with_options, Document, RenderOptions};
///
/// let doc = Document::new();
/// let options = RenderOptions::new().with_table_classes("doc-table-wrapper", "doc-table");
/// let html = to_html_with_options(&doc, &options)?;
/// # Ok::<(), undoc::Error>(())
/// ```
pub fn to_html_with_options(doc: &Document, options: &RenderOptions) -> Result<String> {
    render::to_html(doc, options)
}

/// Parse a JSON document tree and convert it to HTML in one step.
pub fn json_to_html(json: &str) -> Result<String> {
    let doc = parse_document(json)?;
    to_html(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_to_html() {
        let html = json_to_html(
            r#"{
                "body": { "content": [
                    { "startIndex": 1, "paragraph": { "elements": [
                        { "textRun": { "content": "hi\n", "textStyle": { "bold": true } } }
                    ] } }
                ] }
            }"#,
        )
        .unwrap();
        assert_eq!(html, "<p><strong>hi</strong> </p>");
    }

    #[test]
    fn test_parse_document_rejects_malformed_json() {
        let result = parse_document("{ not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_lists_key_defaults_empty() {
        let doc = parse_document(r#"{ "body": { "content": [] } }"#).unwrap();
        assert!(doc.lists.is_empty());
    }

    #[test]
    fn test_undefined_list_reference_is_an_error() {
        let result = json_to_html(
            r#"{
                "body": { "content": [
                    { "startIndex": 1, "paragraph": {
                        "elements": [ { "textRun": { "content": "item", "textStyle": {} } } ],
                        "bullet": { "listId": "kix.gone" }
                    } }
                ] }
            }"#,
        );
        assert!(matches!(result, Err(Error::UnknownList(id)) if id == "kix.gone"));
    }
}
