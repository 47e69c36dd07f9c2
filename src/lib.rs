//! # kotoha
//!
//! Reactive live-document localization retrofit engine.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! kotoha retrofits a third-party notes application it does not control:
//! it observes the app's document tree and rewrites English UI strings
//! to Japanese in place, and it repairs IME composition bugs around the
//! note-title input. The document is a capability value - an in-memory
//! tree with the same observable surface the real page offers - so the
//! whole system runs and tests without a browser.
//!
//! The reactive pipeline is deliberately simple:
//!
//! ```text
//! host mutation → version signal → region effect → idempotent re-scan
//! ```
//!
//! Re-scans are total - re-walk, re-match, rewrite - never incremental.
//! Substitution is idempotent and writes that change nothing bump no
//! signal, so overlapping observers converge regardless of firing order.
//!
//! ## Modules
//!
//! - [`types`] - node handles, observe flags, host environment
//! - [`dom`] - in-memory document, selectors, events
//! - [`engine`] - substitution maps, pattern rules, region observers
//! - [`input`] - IME composition session and input corrector
//! - [`pipeline`] - mount/unmount lifecycle and the tick queue
//! - [`catalog`] - per-panel region records (static configuration)

pub mod catalog;
pub mod dom;
pub mod engine;
pub mod input;
pub mod pipeline;
pub mod types;

// Re-export commonly used items
pub use types::{Cleanup, HostEnv, NodeId, ObserveFlags};

pub use dom::{Document, Event, EventKind, Selector, SelectorError};

pub use engine::{
    collapse_whole_element, observe, rescan, translate_subtree, Region, RuleSet, SubstitutionMap,
    WalkOptions,
};

pub use input::{CompositionSession, MARKER_ATTR, SUBMIT_EVENT};

pub use pipeline::{defer, flush, mount, unmount, MountHandle};
