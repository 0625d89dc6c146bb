//! List boundary mapping.
//!
//! Rather than tracking open-list state while walking the body, the
//! renderer precomputes a position-indexed side table in one pass: for
//! every list actually referenced by a bullet, the document offsets where
//! the enclosing `<ul>`/`<ol>` opens and closes. The main walk then stays
//! a plain one-pass concatenation.

use crate::error::{Error, Result};
use crate::model::{BodyNode, Bullet, GlyphType, ListDefinition, NestingLevel};
use std::collections::HashMap;

/// Position-indexed open/close tags for list elements.
#[derive(Debug, Default)]
pub(crate) struct ListBoundaries {
    /// Tags opening a list, keyed by the owning node's start index
    pub open: HashMap<i64, String>,

    /// Tags closing a list, keyed by the owning node's start index
    pub close: HashMap<i64, String>,
}

impl ListBoundaries {
    /// Tag to emit before the node at the given position, if any.
    pub fn open_tag(&self, start_index: i64) -> Option<&str> {
        self.open.get(&start_index).map(String::as_str)
    }

    /// Tag to emit after the node at the given position, if any.
    pub fn close_tag(&self, start_index: i64) -> Option<&str> {
        self.close.get(&start_index).map(String::as_str)
    }
}

/// Scan the body once and map out where each referenced list opens and
/// closes. Only one level of nesting is modeled: entries with a non-zero
/// nesting level all collapse into a single sublevel group that uses the
/// list's level-1 glyph.
pub(crate) fn map_list_boundaries(
    content: &[BodyNode],
    lists: &HashMap<String, ListDefinition>,
) -> Result<ListBoundaries> {
    let bulleted: Vec<(i64, &Bullet)> = content
        .iter()
        .filter_map(|node| node.bullet().map(|b| (node.start_index, b)))
        .collect();

    // Used list ids in first-appearance order, for deterministic traversal.
    let mut used: Vec<&str> = Vec::new();
    for (_, bullet) in &bulleted {
        if !used.contains(&bullet.list_id.as_str()) {
            used.push(&bullet.list_id);
        }
    }

    let mut boundaries = ListBoundaries::default();
    for id in used {
        let definition = lists
            .get(id)
            .ok_or_else(|| Error::UnknownList(id.to_string()))?;
        let levels = &definition.list_properties.nesting_levels;

        let root: Vec<i64> = bulleted
            .iter()
            .filter(|(_, b)| b.list_id == id && b.nesting_level == 0)
            .map(|(index, _)| *index)
            .collect();
        let (Some(first), Some(last)) = (root.first(), root.last()) else {
            return Err(Error::ListWithoutRootEntries(id.to_string()));
        };
        let tag = list_tag(levels.first());
        boundaries.open.insert(*first, format!("<{tag}>"));
        boundaries.close.insert(*last, format!("</{tag}>"));

        let sub: Vec<i64> = bulleted
            .iter()
            .filter(|(_, b)| b.list_id == id && b.nesting_level > 0)
            .map(|(index, _)| *index)
            .collect();
        if let (Some(first), Some(last)) = (sub.first(), sub.last()) {
            let tag = list_tag(levels.get(1));
            boundaries.open.insert(*first, format!("<{tag}>"));
            boundaries.close.insert(*last, format!("</{tag}>"));
        }
    }

    log::debug!(
        "mapped {} list open tags, {} close tags",
        boundaries.open.len(),
        boundaries.close.len()
    );
    Ok(boundaries)
}

/// Element name for a list level: `ol` for upper-alpha glyphs, `ul` for
/// everything else (including a missing level definition).
fn list_tag(level: Option<&NestingLevel>) -> &'static str {
    match level.and_then(|l| l.glyph_type) {
        Some(GlyphType::UpperAlpha) => "ol",
        _ => "ul",
    }
}
