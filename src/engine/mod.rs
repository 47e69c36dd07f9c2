//! Substitution Engine - observation-driven text replacement.
//!
//! - [`substitute`] - exact-match walker + whole-element collapse
//! - [`patterns`] - regex transforms (durations, dates, counts, prompts)
//! - [`region`] - declarative region records and the observe primitive

pub mod patterns;
pub mod region;
pub mod substitute;

pub use patterns::RuleSet;
pub use region::{observe, rescan, Region};
pub use substitute::{
    collapse_whole_element, translate_subtree, SubstitutionMap, WalkOptions, TRANSLATED_ATTRS,
};
