//! Guide (legend) descriptors.
//!
//! A guide explains an encoding: a color ramp, a set of shape glyphs, a
//! size scale. The engine never draws guides; it only needs enough of
//! their rendered appearance to deduplicate them across plots and to hand
//! the survivors back for rendering.
//!
//! Deduplication is by *appearance*, not by originating scale: two plots
//! that each map `species` to the same three colors produce one surviving
//! guide, while two guides that merely share a title but differ in entries
//! stay separate. The concrete key is the serialization produced by
//! [`GuideDescriptor::appearance_key`]: the title plus every entry's glyph
//! and label, in order, joined with `\u{1f}` (unit separator). Anything not
//! in the key — source columns, scale identity, training data — cannot
//! cause or prevent a merge.

/// One row of a guide: a glyph and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideEntry {
    glyph: String,
    label: String,
}

impl GuideEntry {
    /// Creates an entry from a glyph description and a label.
    pub fn new(glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            label: label.into(),
        }
    }

    /// Returns the glyph description.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Returns the entry label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The engine-side view of one legend or key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideDescriptor {
    title: String,
    entries: Vec<GuideEntry>,
}

impl GuideDescriptor {
    /// Creates a guide descriptor from a title and its entries.
    pub fn new(title: impl Into<String>, entries: Vec<GuideEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// Returns the guide title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the guide entries in display order.
    pub fn entries(&self) -> &[GuideEntry] {
        &self.entries
    }

    /// Serializes the rendered appearance into the deduplication key.
    ///
    /// Two guides are duplicates iff their keys are equal.
    pub fn appearance_key(&self) -> String {
        let mut key = self.title.clone();
        for entry in &self.entries {
            key.push('\u{1f}');
            key.push_str(&entry.glyph);
            key.push('\u{1f}');
            key.push_str(&entry.label);
        }
        key
    }
}
