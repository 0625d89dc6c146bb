//! Table types.

use super::{BodyNode, Dimension, Paragraph};
use serde::{Deserialize, Serialize};

/// A table node: column declarations plus rows of cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Column declarations
    #[serde(default)]
    pub table_style: TableStyle,

    /// Rows in document order
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.table_rows.push(row);
    }

    /// Get the number of declared columns.
    pub fn column_count(&self) -> usize {
        self.table_style.table_column_properties.len()
    }

    /// Check if any cell spans multiple rows or columns.
    pub fn has_merged_cells(&self) -> bool {
        self.table_rows
            .iter()
            .flat_map(|r| &r.table_cells)
            .any(|c| c.table_cell_style.row_span > 1 || c.table_cell_style.column_span > 1)
    }
}

/// Table-level style: the declared columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStyle {
    /// Per-column width declarations
    #[serde(default)]
    pub table_column_properties: Vec<ColumnProperties>,
}

/// Width declaration for one table column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProperties {
    /// Declared width, present for fixed-width columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,

    /// How the column width is determined
    #[serde(default)]
    pub width_type: WidthType,
}

/// Column width policy, as named by the wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidthType {
    /// Unset width policy
    #[default]
    WidthTypeUnspecified,
    /// Width distributed evenly across columns
    EvenlyDistributed,
    /// Fixed width, declared in `width`
    FixedWidth,
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells in the row
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(table_cells: Vec<TableCell>) -> Self {
        Self { table_cells }
    }
}

/// A table cell: span/border style plus nested paragraph content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Cell span and border style
    #[serde(default)]
    pub table_cell_style: TableCellStyle,

    /// Nested content lines (paragraph-bearing body nodes)
    #[serde(default)]
    pub content: Vec<BodyNode>,
}

impl TableCell {
    /// Create a cell holding a single plain text paragraph.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![BodyNode::paragraph(0, Paragraph::with_text(text))],
            ..Self::default()
        }
    }

    /// Set colspan and return self.
    pub fn colspan(mut self, span: u32) -> Self {
        self.table_cell_style.column_span = span;
        self
    }

    /// Set rowspan and return self.
    pub fn rowspan(mut self, span: u32) -> Self {
        self.table_cell_style.row_span = span;
        self
    }

    /// Set the top border and return self.
    pub fn border_top(mut self, border: Border) -> Self {
        self.table_cell_style.border_top = Some(border);
        self
    }

    /// Set the bottom border and return self.
    pub fn border_bottom(mut self, border: Border) -> Self {
        self.table_cell_style.border_bottom = Some(border);
        self
    }
}

/// Span and border style of a table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellStyle {
    /// Number of rows this cell covers
    #[serde(default = "default_span")]
    pub row_span: u32,

    /// Number of columns this cell covers
    #[serde(default = "default_span")]
    pub column_span: u32,

    /// Top border, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<Border>,

    /// Bottom border, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
}

impl Default for TableCellStyle {
    fn default() -> Self {
        Self {
            row_span: 1,
            column_span: 1,
            border_top: None,
            border_bottom: None,
        }
    }
}

fn default_span() -> u32 {
    1
}

/// A cell border definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    /// Border width
    #[serde(default)]
    pub width: Dimension,

    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<OptionalColor>,
}

impl Border {
    /// Create a border with the given width and no color.
    pub fn with_width(width: Dimension) -> Self {
        Self {
            width,
            color: None,
        }
    }
}

/// A color attribute that may be unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    /// The color value, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl OptionalColor {
    /// Create a color attribute from RGB components.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            color: Some(Color {
                rgb_color: Some(RgbColor {
                    red: Some(red),
                    green: Some(green),
                    blue: Some(blue),
                }),
            }),
        }
    }
}

/// A color value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    /// RGB components, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<RgbColor>,
}

/// RGB components. The wire format omits components equal to zero, so an
/// absent component reads as 0; a record with no component at all counts
/// as empty for the color fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbColor {
    /// Red component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<f64>,

    /// Green component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,

    /// Blue component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue: Option<f64>,
}

impl RgbColor {
    /// Check if no component is present.
    pub fn is_empty(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }
}
