//! Text Substitution Engine - exact-match replacement over a subtree.
//!
//! The generic walker behind every region: visit all descendants of a
//! root, replace text leaves whose *whole trimmed content* matches a
//! [`SubstitutionMap`] entry, and do the same for the recognized
//! translatable attributes. Partial substrings never match, so runtime
//! strings that merely contain a key (counts, proper nouns) are safe.
//!
//! Pattern rules run after the exact match on the same text node and may
//! rewrite spans inside it; see [`patterns`](super::patterns).
//!
//! Everything here is idempotent and absence-tolerant: a missing or
//! already-translated node is simply nothing to do.

use std::collections::HashMap;

use crate::dom::{Document, Selector};
use crate::types::NodeId;

use super::patterns::{self, RuleSet};

/// Attributes the engine translates alongside text nodes.
pub const TRANSLATED_ATTRS: &[&str] = &["placeholder", "title", "aria-label"];

// =============================================================================
// Substitution Map
// =============================================================================

/// Immutable source-string to replacement-string table.
///
/// Lookup keys are the whitespace-trimmed whole content of a text node
/// or attribute value. Built once from static pair slices; the engine
/// itself carries no per-feature literals.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionMap {
    entries: HashMap<String, String>,
}

impl SubstitutionMap {
    /// Map with no entries; useful for regions that only run pattern
    /// rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(source, replacement)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Replacement for an exact (already trimmed) source string.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SubstitutionMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

// =============================================================================
// Walk Options
// =============================================================================

/// Per-region knobs for the subtree walk.
#[derive(Default)]
pub struct WalkOptions<'a> {
    /// Also translate `placeholder`/`title`/`aria-label` values.
    pub attrs: bool,
    /// Pattern rules applied after the exact match on each text node.
    pub rules: RuleSet,
    /// Subtrees to leave untouched.
    pub exclude: Option<&'a Selector>,
}

// =============================================================================
// Subtree Walk
// =============================================================================

/// Recursively translate every text leaf (and, optionally, recognized
/// attributes) under `root`, `root` included.
pub fn translate_subtree(
    doc: &Document,
    root: NodeId,
    map: &SubstitutionMap,
    opts: &WalkOptions<'_>,
) {
    if let Some(tag) = doc.tag(root) {
        // Non-content subtrees never get rewritten.
        if tag == "script" || tag == "style" {
            return;
        }
        if let Some(exclude) = opts.exclude {
            if doc.matches(root, exclude) {
                return;
            }
        }
        if opts.attrs {
            translate_attrs(doc, root, map);
        }
        for child in doc.children(root) {
            translate_subtree(doc, child, map, opts);
        }
    } else {
        translate_text_node(doc, root, map, opts.rules);
    }
}

fn translate_text_node(doc: &Document, node: NodeId, map: &SubstitutionMap, rules: RuleSet) {
    let Some(content) = doc.text(node) else {
        return;
    };
    if let Some(replacement) = map.get(content.trim()) {
        doc.set_text(node, replacement);
    }
    if rules.is_empty() {
        return;
    }
    let current = doc.text(node).unwrap_or_default();
    let rewritten = patterns::apply(rules, &current);
    if rewritten != current {
        doc.set_text(node, &rewritten);
    }
}

fn translate_attrs(doc: &Document, node: NodeId, map: &SubstitutionMap) {
    for attr in TRANSLATED_ATTRS {
        if let Some(value) = doc.attr(node, attr) {
            if let Some(replacement) = map.get(value.trim()) {
                doc.set_attr(node, attr, replacement);
            }
        }
    }
}

// =============================================================================
// Whole-Element Collapse
// =============================================================================

/// Replace an element's entire content when its full trimmed
/// `text_content` matches the map (or rewrites under `rules`). Used for
/// elements whose translation key is split across inline children.
///
/// Returns whether anything changed. Already-converged elements are left
/// completely untouched - no restructuring, no version bump.
pub fn collapse_whole_element(
    doc: &Document,
    node: NodeId,
    map: &SubstitutionMap,
    rules: RuleSet,
) -> bool {
    let content = doc.text_content(node);
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return false;
    }
    if let Some(replacement) = map.get(trimmed) {
        if replacement != trimmed {
            doc.set_text_content(node, replacement);
            return true;
        }
        return false;
    }
    if !rules.is_empty() {
        let rewritten = patterns::apply(rules, trimmed);
        if rewritten != trimmed {
            doc.set_text_content(node, &rewritten);
            return true;
        }
    }
    false
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> SubstitutionMap {
        SubstitutionMap::from_pairs(&[
            ("Notes", "ノート一覧"),
            ("Trash", "ゴミ箱"),
            ("Search...", "検索..."),
        ])
    }

    #[test]
    fn test_exact_match_replaces_whole_node() {
        let doc = Document::new();
        let div = doc.append_element(doc.root(), "div");
        let text = doc.append_text(div, "  Notes  ");

        translate_subtree(&doc, doc.root(), &map(), &WalkOptions::default());
        assert_eq!(doc.text(text).as_deref(), Some("ノート一覧"));
    }

    #[test]
    fn test_superstring_is_never_touched() {
        let doc = Document::new();
        let div = doc.append_element(doc.root(), "div");
        let text = doc.append_text(div, "Notestext");

        translate_subtree(&doc, doc.root(), &map(), &WalkOptions::default());
        assert_eq!(doc.text(text).as_deref(), Some("Notestext"));
    }

    #[test]
    fn test_script_and_style_skipped() {
        let doc = Document::new();
        let script = doc.append_element(doc.root(), "script");
        let code = doc.append_text(script, "Notes");
        let style = doc.append_element(doc.root(), "style");
        let css = doc.append_text(style, "Trash");

        translate_subtree(&doc, doc.root(), &map(), &WalkOptions::default());
        assert_eq!(doc.text(code).as_deref(), Some("Notes"));
        assert_eq!(doc.text(css).as_deref(), Some("Trash"));
    }

    #[test]
    fn test_excluded_subtree_skipped() {
        let doc = Document::new();
        let keep = doc.append_element(doc.root(), "span");
        doc.set_attr(keep, "class", "raw");
        let kept_text = doc.append_text(keep, "Notes");
        let other = doc.append_element(doc.root(), "span");
        let translated = doc.append_text(other, "Notes");

        let exclude = Selector::parse(".raw").unwrap();
        let opts = WalkOptions {
            exclude: Some(&exclude),
            ..Default::default()
        };
        translate_subtree(&doc, doc.root(), &map(), &opts);
        assert_eq!(doc.text(kept_text).as_deref(), Some("Notes"));
        assert_eq!(doc.text(translated).as_deref(), Some("ノート一覧"));
    }

    #[test]
    fn test_attr_translation() {
        let doc = Document::new();
        let input = doc.append_element(doc.root(), "input");
        doc.set_attr(input, "placeholder", "Search...");
        doc.set_attr(input, "title", "Notes");
        doc.set_attr(input, "aria-label", "Trash");
        doc.set_attr(input, "id", "Notes");

        let opts = WalkOptions {
            attrs: true,
            ..Default::default()
        };
        translate_subtree(&doc, doc.root(), &map(), &opts);
        assert_eq!(doc.attr(input, "placeholder").as_deref(), Some("検索..."));
        assert_eq!(doc.attr(input, "title").as_deref(), Some("ノート一覧"));
        assert_eq!(doc.attr(input, "aria-label").as_deref(), Some("ゴミ箱"));
        // Unrecognized attributes stay put even when their value is a key.
        assert_eq!(doc.attr(input, "id").as_deref(), Some("Notes"));
    }

    #[test]
    fn test_attrs_ignored_without_flag() {
        let doc = Document::new();
        let input = doc.append_element(doc.root(), "input");
        doc.set_attr(input, "placeholder", "Search...");

        translate_subtree(&doc, doc.root(), &map(), &WalkOptions::default());
        assert_eq!(doc.attr(input, "placeholder").as_deref(), Some("Search..."));
    }

    #[test]
    fn test_walk_idempotent() {
        let doc = Document::new();
        let div = doc.append_element(doc.root(), "div");
        doc.append_text(div, "Notes");
        doc.append_text(div, "5 minutes");

        let opts = WalkOptions {
            rules: RuleSet::DURATIONS,
            ..Default::default()
        };
        translate_subtree(&doc, doc.root(), &map(), &opts);
        let after_once = doc.text_content(div);
        let version = doc.character_data_version();

        translate_subtree(&doc, doc.root(), &map(), &opts);
        assert_eq!(doc.text_content(div), after_once);
        assert_eq!(doc.character_data_version(), version);
    }

    #[test]
    fn test_collapse_whole_element() {
        let doc = Document::new();
        let button = doc.append_element(doc.root(), "button");
        doc.append_text(button, "Empty ");
        let span = doc.append_element(button, "span");
        doc.append_text(span, "Trash");

        let map = SubstitutionMap::from_pairs(&[("Empty Trash", "ゴミ箱を空にする")]);
        assert!(collapse_whole_element(&doc, button, &map, RuleSet::empty()));
        assert_eq!(doc.text_content(button), "ゴミ箱を空にする");

        // Converged element is untouched on the next pass.
        let version = doc.structure_version();
        assert!(!collapse_whole_element(&doc, button, &map, RuleSet::empty()));
        assert_eq!(doc.structure_version(), version);
    }

    #[test]
    fn test_collapse_with_rules() {
        let doc = Document::new();
        let span = doc.append_element(doc.root(), "span");
        doc.append_text(span, "12 notes in Trash");

        assert!(collapse_whole_element(
            &doc,
            span,
            &SubstitutionMap::empty(),
            RuleSet::TRASH_COUNT,
        ));
        assert_eq!(doc.text_content(span), "12 件のノートがゴミ箱内にあります");
    }

    #[test]
    fn test_collapse_leaves_partial_matches() {
        let doc = Document::new();
        let div = doc.append_element(doc.root(), "div");
        doc.append_text(div, "Empty Trash now");

        let map = SubstitutionMap::from_pairs(&[("Empty Trash", "ゴミ箱を空にする")]);
        assert!(!collapse_whole_element(&doc, div, &map, RuleSet::empty()));
        assert_eq!(doc.text_content(div), "Empty Trash now");
    }
}
