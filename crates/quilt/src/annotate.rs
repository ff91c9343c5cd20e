//! Composition-level annotation: titles, caption, theme, and auto-tags.
//!
//! Annotation metadata attaches to the composition root, never to
//! individual plots; only tag assignment walks the tree. Tags are handed
//! out depth-first with one counter per nesting level: a subtree marked
//! as starting a new level (see
//! [`Node::mark_new_tag_level`](crate::structure::Node::mark_new_tag_level))
//! switches its descendants to the next configured style with a fresh
//! counter, without consuming a value from its parent's sequence.

use std::str::FromStr;

use quilt_core::tag::{TagStyle, TagStyleParseError};
use quilt_core::theme::Theme;

use crate::structure::Node;

/// Titles, caption, theme, and tag configuration for a composition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    title: Option<String>,
    subtitle: Option<String>,
    caption: Option<String>,
    theme: Option<Theme>,
    tag_levels: Vec<TagStyle>,
}

impl Annotation {
    /// Creates an empty annotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the composition title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the composition subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the composition caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the theme used to format the title block.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets the tag styles, outermost level first.
    pub fn with_tag_levels(mut self, levels: Vec<TagStyle>) -> Self {
        self.tag_levels = levels;
        self
    }

    /// Sets the tag styles from their textual tokens, e.g. `["I", "a"]`.
    ///
    /// # Errors
    ///
    /// Returns a [`TagStyleParseError`] for an unknown token.
    pub fn with_tag_tokens(self, tokens: &[&str]) -> Result<Self, TagStyleParseError> {
        let levels = tokens
            .iter()
            .map(|token| TagStyle::from_str(token))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_tag_levels(levels))
    }

    /// Returns the title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the subtitle, if set.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Returns the caption, if set.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Returns the title-block theme, if set.
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    /// Returns the tag styles, outermost level first.
    pub fn tag_levels(&self) -> &[TagStyle] {
        &self.tag_levels
    }

    /// Assigns tags across the tree.
    ///
    /// With no tag levels configured, existing tags are left untouched.
    pub fn apply_tags(&self, root: &mut Node) {
        if self.tag_levels.is_empty() {
            return;
        }
        let mut counters = vec![0usize; self.tag_levels.len()];
        assign(root, &self.tag_levels, 0, &mut counters);
    }
}

fn assign(node: &mut Node, levels: &[TagStyle], level: usize, counters: &mut [usize]) {
    match node {
        Node::Leaf(plot) => {
            if plot.is_guide_slot() {
                return;
            }
            let index = counters[level];
            counters[level] += 1;
            plot.set_tag(Some(levels[level].format(index)));
        }
        Node::Inset { host, overlay, .. } => {
            assign(host, levels, level, counters);
            assign(overlay, levels, level, counters);
        }
        composite => {
            // A mark with no deeper style configured is inert: the
            // parent-level sequence continues through the subtree.
            let starts_new = composite.opts().new_tag_level() && level + 1 < levels.len();
            if starts_new {
                let mut fresh = vec![0usize; levels.len()];
                for child in composite.children_mut() {
                    assign(child, levels, level + 1, &mut fresh);
                }
            } else {
                for child in composite.children_mut() {
                    assign(child, levels, level, counters);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quilt_core::geometry::Rect;
    use quilt_core::plot::Plot;

    fn plot() -> Plot {
        Plot::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(10.0, 10.0, 90.0, 90.0),
        )
    }

    fn tags(tree: &Node) -> Vec<Option<String>> {
        tree.plots()
            .iter()
            .map(|p| p.tag().map(String::from))
            .collect()
    }

    #[test]
    fn test_flat_latin_tags() {
        let mut tree = Node::leaf(plot())
            .combine(Node::leaf(plot()))
            .combine(Node::leaf(plot()));

        Annotation::new()
            .with_tag_levels(vec![TagStyle::LatinLower])
            .apply_tags(&mut tree);

        assert_eq!(
            tags(&tree),
            vec![
                Some("a".to_string()),
                Some("b".to_string()),
                Some("c".to_string())
            ]
        );
    }

    #[test]
    fn test_new_level_resets_and_parent_continues() {
        // Root children: leaf, marked subtree of two, leaf. The marked
        // subtree takes the second style without consuming a root-level
        // value.
        let sub = Node::leaf(plot())
            .combine(Node::leaf(plot()))
            .mark_new_tag_level();
        let mut tree = Node::leaf(plot())
            .combine(sub)
            .combine(Node::leaf(plot()));

        let annotation = Annotation::new().with_tag_tokens(&["I", "a"]).unwrap();
        annotation.apply_tags(&mut tree);

        assert_eq!(
            tags(&tree),
            vec![
                Some("I".to_string()),
                Some("a".to_string()),
                Some("b".to_string()),
                Some("II".to_string())
            ]
        );
    }

    #[test]
    fn test_mark_without_deeper_style_is_inert() {
        let sub = Node::leaf(plot())
            .combine(Node::leaf(plot()))
            .mark_new_tag_level();
        let mut tree = Node::leaf(plot()).combine(sub);

        Annotation::new()
            .with_tag_levels(vec![TagStyle::Arabic])
            .apply_tags(&mut tree);

        assert_eq!(
            tags(&tree),
            vec![
                Some("1".to_string()),
                Some("2".to_string()),
                Some("3".to_string())
            ]
        );
    }

    #[test]
    fn test_sibling_marked_subtrees_each_reset() {
        let first = Node::leaf(plot())
            .combine(Node::leaf(plot()))
            .mark_new_tag_level();
        let second = Node::leaf(plot())
            .combine(Node::leaf(plot()))
            .mark_new_tag_level();
        // Row keeps the two marked subtrees as separate children;
        // `combine` would append into the first one.
        let mut tree = first.beside(second);

        let annotation = Annotation::new().with_tag_tokens(&["1", "a"]).unwrap();
        annotation.apply_tags(&mut tree);

        assert_eq!(
            tags(&tree),
            vec![
                Some("a".to_string()),
                Some("b".to_string()),
                Some("a".to_string()),
                Some("b".to_string())
            ]
        );
    }

    #[test]
    fn test_guide_slot_is_never_tagged() {
        let mut tree = Node::leaf(plot())
            .combine(Node::guide_area())
            .combine(Node::leaf(plot()));

        Annotation::new()
            .with_tag_levels(vec![TagStyle::LatinLower])
            .apply_tags(&mut tree);

        assert_eq!(
            tags(&tree),
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }

    #[test]
    fn test_no_levels_leaves_tags_untouched() {
        let mut tagged = plot();
        tagged.set_tag(Some("x".to_string()));
        let mut tree = Node::leaf(tagged).combine(Node::leaf(plot()));

        Annotation::new().apply_tags(&mut tree);
        assert_eq!(tags(&tree), vec![Some("x".to_string()), None]);
    }

    #[test]
    fn test_unknown_token_is_error() {
        assert!(Annotation::new().with_tag_tokens(&["I", "q"]).is_err());
    }
}
