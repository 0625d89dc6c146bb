//! Inline CSS resolution for paragraph styles and colors.

use crate::model::{Alignment, OptionalColor, ParagraphStyle};

/// Compute the inline CSS declarations for a paragraph style.
///
/// Declarations carry no trailing semicolon; callers join with `;`.
/// The indent magnitude is divided by `indent_ratio` for `text-indent`
/// and by half of it for `padding-left`, so a ratio above 1 compresses
/// source indents for confined widths. A zero magnitude resolves both
/// quotients to 0.
pub(crate) fn paragraph_css(style: Option<&ParagraphStyle>, indent_ratio: f64) -> Vec<String> {
    let mut styles = Vec::new();
    let Some(style) = style else {
        return styles;
    };

    if let Some(ref indent) = style.indent_start {
        let unit = indent.unit.to_lowercase();
        styles.push(format!(
            "text-indent: -{}{}",
            indent.magnitude / indent_ratio,
            unit
        ));
        styles.push(format!(
            "padding-left: {}{}",
            indent.magnitude / (indent_ratio / 2.0),
            unit
        ));
    }

    match style.alignment {
        Alignment::End => styles.push("text-align: right".to_string()),
        Alignment::Center => styles.push("text-align: center".to_string()),
        _ => {}
    }

    styles
}

/// Render a `style="…"` attribute (with leading space) for the given
/// declarations, or an empty string when there are none.
pub(crate) fn style_attr(styles: &[String]) -> String {
    if styles.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", styles.join(";"))
    }
}

/// Translate a color attribute into a CSS color value.
///
/// A non-empty RGB component record renders as `rgb(r, g, b)` with the raw
/// numeric components (absent components read as 0); anything else falls
/// back to `#000`.
pub(crate) fn css_color(attr: Option<&OptionalColor>) -> String {
    if let Some(rgb) = attr
        .and_then(|a| a.color.as_ref())
        .and_then(|c| c.rgb_color.as_ref())
    {
        if !rgb.is_empty() {
            return format!(
                "rgb({}, {}, {})",
                rgb.red.unwrap_or(0.0),
                rgb.green.unwrap_or(0.0),
                rgb.blue.unwrap_or(0.0)
            );
        }
    }
    "#000".to_string()
}
