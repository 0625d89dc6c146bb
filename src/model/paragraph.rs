//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph: an ordered sequence of elements, optionally a list item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Elements in the paragraph
    #[serde(default)]
    pub elements: Vec<Element>,

    /// List membership marker, if this paragraph is a list item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,

    /// Paragraph-level style (consulted when rendering table cell content)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyle>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Add a text run to the paragraph.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements.push(Element {
            text_run: Some(run),
        });
    }

    /// Mark this paragraph as an item of the given list.
    pub fn with_bullet(mut self, list_id: impl Into<String>, nesting_level: u32) -> Self {
        self.bullet = Some(Bullet {
            list_id: list_id.into(),
            nesting_level,
        });
        self
    }

    /// Set the paragraph-level style and return self.
    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.paragraph_style = Some(style);
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| e.text_run.as_ref())
            .map(|run| run.content.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if this paragraph is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }
}

/// An element within a paragraph. Only the `textRun` variant is rendered;
/// other wire variants deserialize to an element with no run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// The text run, if this element is one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// Raw text content; may contain literal newlines and vertical tabs
    #[serde(default)]
    pub content: String,

    /// Text styling
    #[serde(default)]
    pub text_style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic text run.
    pub fn italic(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Create a run with an explicit font size in points.
    pub fn sized(content: impl Into<String>, points: f64) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle {
                font_size: Some(Dimension::points(points)),
                ..Default::default()
            },
        }
    }
}

/// Text styling flags. Keys absent on the wire deserialize to their
/// falsy defaults and are skipped by the formatter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Underlined text
    #[serde(default)]
    pub underline: bool,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Hyperlink target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,

    /// Font family and weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_font_family: Option<WeightedFontFamily>,
}

impl TextStyle {
    /// Check if any wrapping format flag is set.
    pub fn has_formatting(&self) -> bool {
        self.bold || self.underline || self.italic || self.link.is_some() || self.font_size.is_some()
    }
}

/// A hyperlink target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Destination URL
    #[serde(default)]
    pub url: String,
}

/// A font family with an optional numeric weight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFontFamily {
    /// Font family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Numeric weight (400 = normal, 700 = bold)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// A magnitude with a unit (e.g. 18 PT). The wire format omits zero
/// magnitudes, so the default of 0 matches absent-means-zero semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    /// Magnitude in `unit`
    #[serde(default)]
    pub magnitude: f64,

    /// Unit name as carried on the wire (e.g. "PT")
    #[serde(default)]
    pub unit: String,
}

impl Dimension {
    /// Create a dimension in points.
    pub fn points(magnitude: f64) -> Self {
        Self {
            magnitude,
            unit: "PT".to_string(),
        }
    }

    /// The CSS rendering of this dimension, unit lower-cased.
    pub fn css(&self) -> String {
        format!("{}{}", self.magnitude, self.unit.to_lowercase())
    }
}

/// Paragraph-level styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphStyle {
    /// Leading indentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_start: Option<Dimension>,

    /// Text alignment
    #[serde(default)]
    pub alignment: Alignment,
}

impl ParagraphStyle {
    /// Create a style with the given alignment.
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Default::default()
        }
    }

    /// Create a style with the given leading indent.
    pub fn indented(indent: Dimension) -> Self {
        Self {
            indent_start: Some(indent),
            ..Default::default()
        }
    }
}

/// Text alignment, as named by the wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    /// Unset alignment
    #[default]
    AlignmentUnspecified,
    /// Aligned to the start of the line
    Start,
    /// Centered
    Center,
    /// Aligned to the end of the line
    End,
    /// Justified
    Justified,
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    /// Id of the list this paragraph belongs to
    #[serde(default)]
    pub list_id: String,

    /// Nesting depth; 0 (or absent) = root level
    #[serde(default)]
    pub nesting_level: u32,
}
