//! Text run rendering: format-flag wrapping and inline font styles.

use super::options::RenderOptions;
use crate::model::{TextRun, TextStyle};

/// Runs at exactly this font size render as a level-2 heading.
const HEADING_FONT_SIZE: f64 = 16.0;

/// Normalize raw run content: drop literal CR/LF, turn vertical tabs into
/// line-break tags, trim surrounding whitespace.
pub(crate) fn normalize_content(content: &str) -> String {
    content
        .replace(['\r', '\n'], "")
        .replace('\u{000b}', "<br />")
        .trim()
        .to_string()
}

/// Apply the wrapping transform of every truthy format flag, in the fixed
/// flag-table order: bold, underline, italic, link, fontSize.
fn apply_formats(mut content: String, style: &TextStyle) -> String {
    if style.bold {
        content = format!("<strong>{content}</strong> ");
    }
    if style.underline {
        content = format!("<u>{content}</u> ");
    }
    if style.italic {
        content = format!("<i>{content}</i> ");
    }
    if let Some(ref link) = style.link {
        content = format!(" <a href=\"{}\">{}</a> ", link.url, content);
    }
    if let Some(ref size) = style.font_size {
        if size.magnitude == HEADING_FONT_SIZE {
            content = format!("<h2>{content}</h2>");
        }
    }
    content
}

/// Render one text run.
///
/// Returns `None` when the normalized content is empty; callers treat this
/// as nothing to render, not an empty placeholder. With `wrapper` set to
/// `None` the cleaned content is returned without format flags or a
/// wrapping element. Otherwise the run is format-wrapped and, when its
/// font size or weight differs from the configured baseline, enclosed in
/// `<wrapper style="…">`.
pub(crate) fn render_run(
    run: &TextRun,
    wrapper: Option<&str>,
    options: &RenderOptions,
) -> Option<String> {
    let content = normalize_content(&run.content);
    if content.is_empty() {
        return None;
    }

    let Some(wrapper) = wrapper else {
        return Some(content);
    };

    let style = &run.text_style;
    let content = apply_formats(content, style);

    let mut styles = Vec::new();
    if let Some(ref size) = style.font_size {
        let css = size.css();
        if css != options.base_font_size {
            styles.push(format!("font-size: {css}"));
        }
    }
    if let Some(weight) = style.weighted_font_family.as_ref().and_then(|f| f.weight) {
        if weight.to_string() != options.base_font_weight {
            styles.push(format!("font-weight: {weight}"));
        }
    }

    if styles.is_empty() {
        Some(content)
    } else {
        Some(format!(
            "<{wrapper} style=\"{}\">{content}</{wrapper}>",
            styles.join(";")
        ))
    }
}
