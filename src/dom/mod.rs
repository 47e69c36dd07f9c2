//! Document Module - the in-memory host-page boundary.
//!
//! Everything the retrofit engine knows about "the page" goes through
//! this module:
//!
//! - [`Document`] - shared tree handle with mutation version signals
//! - [`Selector`] - the CSS-ish query slice the region catalog uses
//! - [`Event`] / [`EventKind`] - input + custom event dispatch

mod document;
mod events;
mod node;
mod selector;

pub use document::Document;
pub use events::{Event, EventHandler, EventKind};
pub use node::{ElementData, NodeKind};
pub use selector::{Selector, SelectorError};
