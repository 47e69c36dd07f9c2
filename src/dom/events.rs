//! Event types and the per-node listener registry.
//!
//! A narrow slice of the DOM event model: the five input events the
//! corrector needs plus application-defined custom events. Dispatch
//! itself lives on [`Document`](super::Document), which knows the
//! ancestor chain for bubbling.
//!
//! Handlers are `Rc` closures so the registry can snapshot the handler
//! list before calling out; a handler is then free to add or remove
//! listeners (or dispatch further events) without re-entrancy panics.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::types::NodeId;

// =============================================================================
// Event Kind
// =============================================================================

/// The event vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// IME composition began.
    CompositionStart,
    /// IME composition committed.
    CompositionEnd,
    /// Element gained focus. Does not bubble.
    Focus,
    /// Element lost focus. Does not bubble.
    Blur,
    /// Key pressed; the key name rides on [`Event::key`].
    Keydown,
    /// Application-defined event, identified by name.
    Custom(String),
}

// =============================================================================
// Event
// =============================================================================

/// A dispatched event.
///
/// `prevent_default` / `stop_propagation` use interior mutability so
/// handlers receive a shared reference, matching how listeners see DOM
/// events.
#[derive(Debug)]
pub struct Event {
    kind: EventKind,
    key: Option<String>,
    target: NodeId,
    bubbles: bool,
    cancelable: bool,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl Event {
    fn new(kind: EventKind, bubbles: bool, cancelable: bool) -> Self {
        Self {
            kind,
            key: None,
            target: NodeId(usize::MAX),
            bubbles,
            cancelable,
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn composition_start() -> Self {
        Self::new(EventKind::CompositionStart, true, true)
    }

    pub fn composition_end() -> Self {
        Self::new(EventKind::CompositionEnd, true, true)
    }

    pub fn focus() -> Self {
        Self::new(EventKind::Focus, false, false)
    }

    pub fn blur() -> Self {
        Self::new(EventKind::Blur, false, false)
    }

    /// Key press event, e.g. `Event::keydown("Enter")`.
    pub fn keydown(key: impl Into<String>) -> Self {
        let mut event = Self::new(EventKind::Keydown, true, true);
        event.key = Some(key.into());
        event
    }

    /// Bubbling, cancelable application-defined event.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(EventKind::Custom(name.into()), true, true)
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Key name for [`EventKind::Keydown`] events.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Node the event was dispatched from.
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub(crate) fn set_target(&mut self, target: NodeId) {
        self.target = target;
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Mark the host's default action as suppressed.
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Stop the event from reaching further ancestors.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

// =============================================================================
// Listener Registry
// =============================================================================

/// Event handler. Receives the live event; may call
/// [`Event::prevent_default`] / [`Event::stop_propagation`].
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// Per-(node, kind) handler lists with stable ids for removal.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    handlers: HashMap<(NodeId, EventKind), Vec<(usize, EventHandler)>>,
    next_id: usize,
}

impl ListenerRegistry {
    pub fn add(&mut self, node: NodeId, kind: EventKind, handler: EventHandler) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.entry((node, kind)).or_default().push((id, handler));
        id
    }

    pub fn remove(&mut self, node: NodeId, kind: &EventKind, id: usize) {
        if let Some(list) = self.handlers.get_mut(&(node, kind.clone())) {
            list.retain(|(handler_id, _)| *handler_id != id);
            if list.is_empty() {
                self.handlers.remove(&(node, kind.clone()));
            }
        }
    }

    /// Snapshot the handlers for one node so dispatch can call them
    /// without holding the registry borrow.
    pub fn snapshot(&self, node: NodeId, kind: &EventKind) -> Vec<EventHandler> {
        self.handlers
            .get(&(node, kind.clone()))
            .map(|list| list.iter().map(|(_, h)| h.clone()).collect())
            .unwrap_or_default()
    }
}

// =============================================================================
// Tests
// =============================================================================
