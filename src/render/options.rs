//! Rendering options and configuration.

/// Indentation divisor; the higher the number, the smaller the rendered
/// indentation gets. 1 maps indents as stored in the source node.
pub const DEFAULT_INDENT_RATIO: f64 = 4.0;

/// Font size treated as the document baseline; runs at this size emit no
/// font-size declaration.
pub const BASE_FONT_SIZE: &str = "10pt";

/// Font weight treated as the document baseline.
pub const BASE_FONT_WEIGHT: &str = "400";

/// Options for rendering a document to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Divisor applied to source indent magnitudes
    pub indent_ratio: f64,

    /// Font size that emits no inline declaration (e.g. "10pt")
    pub base_font_size: String,

    /// Font weight that emits no inline declaration (e.g. "400")
    pub base_font_weight: String,

    /// Class attribute for the div wrapping each table (empty = no attribute)
    pub table_wrapper_class: String,

    /// Class attribute for each table element (empty = no attribute)
    pub table_class: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation divisor.
    pub fn with_indent_ratio(mut self, ratio: f64) -> Self {
        self.indent_ratio = ratio;
        self
    }

    /// Set the baseline font size string.
    pub fn with_base_font_size(mut self, size: impl Into<String>) -> Self {
        self.base_font_size = size.into();
        self
    }

    /// Set the baseline font weight string.
    pub fn with_base_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.base_font_weight = weight.into();
        self
    }

    /// Set the class names used as styling hooks on the table wrapper div
    /// and the table element.
    pub fn with_table_classes(
        mut self,
        wrapper_class: impl Into<String>,
        table_class: impl Into<String>,
    ) -> Self {
        self.table_wrapper_class = wrapper_class.into();
        self.table_class = table_class.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_ratio: DEFAULT_INDENT_RATIO,
            base_font_size: BASE_FONT_SIZE.to_string(),
            base_font_weight: BASE_FONT_WEIGHT.to_string(),
            table_wrapper_class: String::new(),
            table_class: String::new(),
        }
    }
}
