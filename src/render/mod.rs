//! Rendering module for converting document trees to HTML.

mod html;
mod lists;
mod options;
mod style;
mod table;
mod text;

pub use html::{to_html, HtmlRenderer};
pub use options::{RenderOptions, BASE_FONT_SIZE, BASE_FONT_WEIGHT, DEFAULT_INDENT_RATIO};
