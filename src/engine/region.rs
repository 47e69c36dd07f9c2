//! Region Records and the Observe Primitive.
//!
//! A [`Region`] is a declarative description of one UI area: where it
//! lives (selectors), what to substitute (map), how it is observed and
//! which pattern rules it runs. Every region in the catalog flows
//! through the single [`observe`] primitive - there is no hand-written
//! observer wiring anywhere else.
//!
//! A re-scan is "dumb" on purpose: it re-walks and re-matches from
//! scratch against the current document, never diffing mutation records.
//! Substitution is idempotent, so redundant re-scans are a cost, not a
//! bug; writes that change nothing do not bump version signals, so
//! cascades across overlapping regions converge.

use std::rc::Rc;

use spark_signals::effect;
use tracing::{debug, trace};

use crate::dom::{Document, Selector};
use crate::pipeline::tick;
use crate::types::{Cleanup, ObserveFlags};

use super::patterns::RuleSet;
use super::substitute::{
    collapse_whole_element, translate_subtree, SubstitutionMap, WalkOptions,
};

// =============================================================================
// Region Record
// =============================================================================

/// One named UI region with its substitution table and observation
/// configuration.
pub struct Region {
    pub name: &'static str,
    pub selectors: Vec<Selector>,
    pub map: SubstitutionMap,
    pub observe: ObserveFlags,
    /// Translate `placeholder`/`title`/`aria-label` attribute values.
    pub attrs: bool,
    /// Additionally try a whole-element collapse on each matched root.
    /// Pattern rules of such a region run against the element's composed
    /// text, not against individual leaves.
    pub whole_element: bool,
    /// Subtrees inside matched roots to leave untouched.
    pub exclude: Option<Selector>,
    pub rules: RuleSet,
    /// Re-scan one tick after the notification, for hosts that re-render
    /// asynchronously after the triggering event.
    pub deferred: bool,
}

impl Region {
    /// Declare a region. Selector strings are compiled-in configuration;
    /// malformed ones are a programmer error.
    pub fn new(name: &'static str, selectors: &[&str], map: SubstitutionMap) -> Self {
        Self {
            name,
            selectors: selectors
                .iter()
                .map(|s| Selector::parse(s).unwrap())
                .collect(),
            map,
            observe: ObserveFlags::default(),
            attrs: false,
            whole_element: false,
            exclude: None,
            rules: RuleSet::empty(),
            deferred: false,
        }
    }

    /// Also translate recognized attribute values.
    pub fn with_attrs(mut self) -> Self {
        self.attrs = true;
        self
    }

    /// Enable the whole-element collapse fallback.
    pub fn with_whole_element(mut self) -> Self {
        self.whole_element = true;
        self
    }

    /// Skip subtrees matching `selector`.
    pub fn with_exclude(mut self, selector: &str) -> Self {
        self.exclude = Some(Selector::parse(selector).unwrap());
        self
    }

    /// Enable pattern rules.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Additionally react to text-node rewrites.
    pub fn with_character_data(mut self) -> Self {
        self.observe |= ObserveFlags::CHARACTER_DATA;
        self
    }

    /// Defer each re-scan by one tick.
    pub fn with_deferred(mut self) -> Self {
        self.deferred = true;
        self
    }
}

// =============================================================================
// Re-scan
// =============================================================================

/// Apply a region's substitutions against the current document state.
/// Total and idempotent; a document without matching elements is simply
/// left alone.
pub fn rescan(doc: &Document, region: &Region) {
    trace!(region = region.name, "rescan");
    let walk_rules = if region.whole_element {
        RuleSet::empty()
    } else {
        region.rules
    };
    let opts = WalkOptions {
        attrs: region.attrs,
        rules: walk_rules,
        exclude: region.exclude.as_ref(),
    };
    for selector in &region.selectors {
        for node in doc.query_all(selector) {
            translate_subtree(doc, node, &region.map, &opts);
            if region.whole_element {
                collapse_whole_element(doc, node, &region.map, region.rules);
            }
        }
    }
}

// =============================================================================
// Observe Primitive
// =============================================================================

/// Register a long-lived observer for `region`: apply it once now, then
/// re-apply on every qualifying document mutation. Returns the stop
/// closure owning the subscription.
pub fn observe(doc: &Document, region: Region) -> Cleanup {
    debug!(region = region.name, deferred = region.deferred, "region registered");

    // Initial application, so the region is correct before the first
    // external mutation.
    rescan(doc, &region);

    let doc = doc.clone();
    let region = Rc::new(region);
    let stop = effect(move || {
        let _structure = doc.structure_version();
        if region.observe.contains(ObserveFlags::CHARACTER_DATA) {
            let _character_data = doc.character_data_version();
        }
        if region.deferred {
            let doc = doc.clone();
            let region = region.clone();
            tick::defer(move || rescan(&doc, &region));
        } else {
            rescan(&doc, &region);
        }
    });
    Box::new(stop)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn views_region() -> Region {
        Region::new(
            "views",
            &[".title"],
            SubstitutionMap::from_pairs(&[("Notes", "ノート一覧"), ("Trash", "ゴミ箱")]),
        )
    }

    #[test]
    fn test_initial_application() {
        let doc = Document::new();
        let title = doc.append_element(doc.root(), "div");
        doc.set_attr(title, "class", "title");
        doc.append_text(title, "Notes");

        let _stop = observe(&doc, views_region());
        assert_eq!(doc.text_content(title), "ノート一覧");
    }

    #[test]
    fn test_rescan_on_mutation() {
        let doc = Document::new();
        let _stop = observe(&doc, views_region());

        // Host renders the region after registration; every append is a
        // structural mutation and the last one carries the text into
        // view of the re-scan.
        let title = doc.append_element(doc.root(), "div");
        doc.set_attr(title, "class", "title");
        doc.append_text(title, "Trash");

        assert_eq!(doc.text_content(title), "ゴミ箱");
    }

    #[test]
    fn test_stop_ends_observation() {
        let doc = Document::new();
        let stop = observe(&doc, views_region());
        stop();

        let title = doc.append_element(doc.root(), "div");
        doc.set_attr(title, "class", "title");
        doc.append_text(title, "Notes");
        doc.append_element(doc.root(), "div");

        assert_eq!(doc.text_content(title), "Notes");
    }

    #[test]
    fn test_missing_elements_are_nothing_to_do() {
        let doc = Document::new();
        let _stop = observe(&doc, views_region());

        let before = doc.text_content(doc.root());
        doc.append_element(doc.root(), "section");
        assert_eq!(doc.text_content(doc.root()), before);
    }

    #[test]
    fn test_rescan_twice_equals_once() {
        let doc = Document::new();
        let title = doc.append_element(doc.root(), "div");
        doc.set_attr(title, "class", "title");
        doc.append_text(title, "Notes");

        let region = views_region();
        rescan(&doc, &region);
        let after_once = doc.text_content(doc.root());
        rescan(&doc, &region);
        assert_eq!(doc.text_content(doc.root()), after_once);
    }

    #[test]
    fn test_deferred_region_waits_for_tick() {
        tick::reset_tick_state();
        let doc = Document::new();
        let title = doc.append_element(doc.root(), "div");
        doc.set_attr(title, "class", "title");
        doc.append_text(title, "Notes");

        let region = views_region().with_deferred();
        let _stop = observe(&doc, region);
        // The registration-time application is synchronous even for
        // deferred regions.
        assert_eq!(doc.text_content(title), "ノート一覧");

        let other = doc.append_element(doc.root(), "div");
        doc.set_attr(other, "class", "title");
        doc.append_text(other, "Trash");
        doc.append_element(doc.root(), "span");
        tick::flush();

        assert_eq!(doc.text_content(other), "ゴミ箱");
    }

    #[test]
    fn test_character_data_observation() {
        tick::reset_tick_state();
        let doc = Document::new();
        let title = doc.append_element(doc.root(), "div");
        doc.set_attr(title, "class", "title");
        let text = doc.append_text(title, "Notes");

        let region = views_region().with_character_data().with_deferred();
        let _stop = observe(&doc, region);
        tick::flush();
        assert_eq!(doc.text(text).as_deref(), Some("ノート一覧"));

        // Host rewrites the text node in place - no structural change.
        doc.set_text(text, "Trash");
        tick::flush();
        assert_eq!(doc.text(text).as_deref(), Some("ゴミ箱"));
    }

    #[test]
    fn test_overlapping_regions_converge() {
        let doc = Document::new();
        let title = doc.append_element(doc.root(), "div");
        doc.set_attr(title, "class", "title");
        doc.append_text(title, "Notes");

        let _a = observe(&doc, views_region());
        let _b = observe(&doc, views_region());
        doc.append_element(doc.root(), "div");

        assert_eq!(doc.text_content(title), "ノート一覧");
    }
}
