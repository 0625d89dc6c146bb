//! Document model types for the word-processor document tree.
//!
//! This module mirrors the JSON shape returned by the document API, so a
//! raw response body deserializes straight into [`Document`]. Unknown JSON
//! fields are ignored, which keeps the model tolerant of node variants the
//! converter does not render.

mod document;
mod paragraph;
mod table;

pub use document::{
    Body, BodyNode, Document, GlyphType, ListDefinition, ListProperties, NestingLevel, NodeKind,
    SectionBreak,
};
pub use paragraph::{
    Alignment, Bullet, Dimension, Element, Link, Paragraph, ParagraphStyle, TextRun, TextStyle,
    WeightedFontFamily,
};
pub use table::{
    Border, Color, ColumnProperties, OptionalColor, RgbColor, Table, TableCell, TableCellStyle,
    TableRow, TableStyle, WidthType,
};
