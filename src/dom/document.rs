//! In-memory document tree - the engine's host boundary.
//!
//! Stands in for the hosting page's live DOM: an arena of element/text
//! nodes plus the narrow set of capabilities the retrofit engine needs
//! (selector queries, text/attribute mutation, focus, input selection,
//! event dispatch). The host application owns the shape of the tree;
//! the engine only observes and rewrites it.
//!
//! Reactivity: two version signals, bumped only when a mutation actually
//! changes something.
//!
//! - `structure` - node insertions/removals anywhere in the tree
//! - `character_data` - text-node value changes
//!
//! Region observers are spark-signals effects that read one or both
//! versions and re-scan; because writes that change nothing do not bump,
//! re-scan cascades converge after a single extra pass.
//!
//! Attribute writes and input value/selection changes bump nothing -
//! mirroring the host observers, which are configured for child-list and
//! character-data mutations only.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::trace;

use crate::types::{Cleanup, NodeId};

use super::events::{Event, EventHandler, EventKind, ListenerRegistry};
use super::node::{NodeData, NodeKind};
use super::selector::{Combinator, ComplexSelector, Selector};

// =============================================================================
// Tree Storage
// =============================================================================

struct Tree {
    nodes: Vec<NodeData>,
    root: NodeId,
    focused: Option<NodeId>,
}

impl Tree {
    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }
}

// =============================================================================
// Document
// =============================================================================

/// Shared handle to one document tree.
///
/// Cloning is cheap and every clone refers to the same tree, listener
/// registry and version signals.
#[derive(Clone)]
pub struct Document {
    tree: Rc<RefCell<Tree>>,
    listeners: Rc<RefCell<ListenerRegistry>>,
    structure: Signal<u64>,
    character_data: Signal<u64>,
    structure_counter: Rc<Cell<u64>>,
    character_data_counter: Rc<Cell<u64>>,
}

impl Document {
    /// Create a document holding a single `body` root element.
    pub fn new() -> Self {
        let root = NodeId(0);
        let tree = Tree {
            nodes: vec![NodeData::element("body")],
            root,
            focused: None,
        };
        Self {
            tree: Rc::new(RefCell::new(tree)),
            listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
            structure: signal(0),
            character_data: signal(0),
            structure_counter: Rc::new(Cell::new(0)),
            character_data_counter: Rc::new(Cell::new(0)),
        }
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.tree.borrow().root
    }

    // =========================================================================
    // Version Signals
    // =========================================================================

    /// Current structural version. Reading from inside an effect creates
    /// a reactive dependency on child-list mutations.
    pub fn structure_version(&self) -> u64 {
        self.structure.get()
    }

    /// Current character-data version. Reading from inside an effect
    /// creates a reactive dependency on text-node rewrites.
    pub fn character_data_version(&self) -> u64 {
        self.character_data.get()
    }

    // Counters are mirrored in plain cells so mutators never have to
    // read a signal (a read from inside an effect would register an
    // unwanted dependency).
    fn bump_structure(&self) {
        let next = self.structure_counter.get() + 1;
        self.structure_counter.set(next);
        self.structure.set(next);
    }

    fn bump_character_data(&self) {
        let next = self.character_data_counter.get() + 1;
        self.character_data_counter.set(next);
        self.character_data.set(next);
    }

    // =========================================================================
    // Construction & Structure
    // =========================================================================

    /// Create a detached element node.
    pub fn create_element(&self, tag: impl Into<String>) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(NodeData::element(tag));
        id
    }

    /// Create a detached text node.
    pub fn create_text(&self, content: impl Into<String>) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(NodeData::text(content));
        id
    }

    /// Append `child` under `parent`, detaching it from any previous
    /// parent first.
    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        {
            let mut tree = self.tree.borrow_mut();
            if let Some(old_parent) = tree.node(child).parent {
                tree.node_mut(old_parent).children.retain(|&c| c != child);
            }
            tree.node_mut(child).parent = Some(parent);
            tree.node_mut(parent).children.push(child);
        }
        self.bump_structure();
    }

    /// Create an element and append it in one step.
    pub fn append_element(&self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Create a text node and append it in one step.
    pub fn append_text(&self, parent: NodeId, content: impl Into<String>) -> NodeId {
        let id = self.create_text(content);
        self.append_child(parent, id);
        id
    }

    /// Detach `child` from `parent`. No-op if it is not a child.
    pub fn remove_child(&self, parent: NodeId, child: NodeId) {
        let removed = {
            let mut tree = self.tree.borrow_mut();
            let children = &mut tree.node_mut(parent).children;
            let before = children.len();
            children.retain(|&c| c != child);
            let removed = children.len() != before;
            if removed {
                tree.node_mut(child).parent = None;
            }
            removed
        };
        if removed {
            self.bump_structure();
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.borrow().node(node).parent
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.borrow().node(node).children.clone()
    }

    // =========================================================================
    // Node Inspection & Text
    // =========================================================================

    pub fn is_element(&self, node: NodeId) -> bool {
        self.tree.borrow().node(node).as_element().is_some()
    }

    pub fn is_text(&self, node: NodeId) -> bool {
        self.tree.borrow().node(node).as_text().is_some()
    }

    /// Tag name, for element nodes.
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.tree
            .borrow()
            .node(node)
            .as_element()
            .map(|el| el.tag.clone())
    }

    /// Character data of a text node.
    pub fn text(&self, node: NodeId) -> Option<String> {
        self.tree.borrow().node(node).as_text().map(str::to_string)
    }

    /// Rewrite a text node's character data. No-op (and no version bump)
    /// when the new value equals the current one.
    pub fn set_text(&self, node: NodeId, content: &str) {
        let changed = {
            let mut tree = self.tree.borrow_mut();
            match &mut tree.node_mut(node).kind {
                NodeKind::Text(current) if *current != content => {
                    trace!(node = node.0, "text rewrite");
                    *current = content.to_string();
                    true
                }
                _ => false,
            }
        };
        if changed {
            self.bump_character_data();
        }
    }

    /// Concatenated text of the node and all its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let tree = self.tree.borrow();
        let mut out = String::new();
        collect_text(&tree, node, &mut out);
        out
    }

    /// Replace an element's children with a single text node, the way a
    /// `textContent` assignment does. No-op when the element already
    /// holds exactly that text; text nodes delegate to [`set_text`].
    ///
    /// [`set_text`]: Document::set_text
    pub fn set_text_content(&self, node: NodeId, content: &str) {
        if self.is_text(node) {
            self.set_text(node, content);
            return;
        }
        let changed = {
            let mut tree = self.tree.borrow_mut();
            let children = tree.node(node).children.clone();
            let already = children.len() == 1
                && tree.node(children[0]).as_text() == Some(content);
            if already {
                false
            } else {
                for child in &children {
                    tree.node_mut(*child).parent = None;
                }
                let text_id = NodeId(tree.nodes.len());
                tree.nodes.push(NodeData::text(content));
                tree.node_mut(text_id).parent = Some(node);
                tree.node_mut(node).children = vec![text_id];
                trace!(node = node.0, "text content collapse");
                true
            }
        };
        if changed {
            self.bump_structure();
        }
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree
            .borrow()
            .node(node)
            .as_element()
            .and_then(|el| el.attrs.get(name).cloned())
    }

    /// Set an attribute on an element node. Attribute mutations are not
    /// observed, so no version bump happens.
    pub fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        let mut tree = self.tree.borrow_mut();
        if let Some(el) = tree.node_mut(node).as_element_mut() {
            el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&self, node: NodeId, name: &str) {
        let mut tree = self.tree.borrow_mut();
        if let Some(el) = tree.node_mut(node).as_element_mut() {
            el.attrs.remove(name);
        }
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    // =========================================================================
    // Input Value & Selection
    // =========================================================================

    /// Editable value of an input-like element.
    pub fn value(&self, node: NodeId) -> String {
        self.tree.borrow().node(node).value.clone()
    }

    /// Set the editable value. Like the host's input property, this is
    /// invisible to mutation observers.
    pub fn set_value(&self, node: NodeId, value: &str) {
        self.tree.borrow_mut().node_mut(node).value = value.to_string();
    }

    /// Current selection range in character offsets.
    pub fn selection(&self, node: NodeId) -> (usize, usize) {
        self.tree.borrow().node(node).selection
    }

    pub fn set_selection(&self, node: NodeId, start: usize, end: usize) {
        self.tree.borrow_mut().node_mut(node).selection = (start, end);
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Currently focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.tree.borrow().focused
    }

    /// Move focus to `node`, firing `Blur` on the old holder and `Focus`
    /// on the new one.
    pub fn focus_node(&self, node: NodeId) {
        self.set_focus(Some(node));
    }

    /// Clear focus, firing `Blur` on the old holder.
    pub fn blur(&self) {
        self.set_focus(None);
    }

    fn set_focus(&self, node: Option<NodeId>) {
        let old = {
            let mut tree = self.tree.borrow_mut();
            let old = tree.focused;
            if old == node {
                return;
            }
            tree.focused = node;
            old
        };
        if let Some(old) = old {
            self.dispatch(old, Event::blur());
        }
        if let Some(new) = node {
            self.dispatch(new, Event::focus());
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All elements matching the selector, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        let mut out = Vec::new();
        let mut stack = vec![tree.root];
        while let Some(node) = stack.pop() {
            if matches_in_tree(&tree, node, selector) {
                out.push(node);
            }
            // Reverse so the stack pops children in document order.
            for &child in tree.node(node).children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// First element matching the selector, in document order.
    pub fn query_first(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Does `node` match the selector (ancestor context included)?
    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        matches_in_tree(&self.tree.borrow(), node, selector)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Subscribe to events of `kind` on `node`. Returns a cleanup that
    /// removes the listener.
    pub fn add_event_listener(
        &self,
        node: NodeId,
        kind: EventKind,
        handler: impl Fn(&Event) + 'static,
    ) -> Cleanup {
        let id = self
            .listeners
            .borrow_mut()
            .add(node, kind.clone(), Rc::new(handler) as EventHandler);
        let listeners = self.listeners.clone();
        Box::new(move || {
            listeners.borrow_mut().remove(node, &kind, id);
        })
    }

    /// Dispatch an event from `target`, bubbling through its ancestors
    /// when the event bubbles. Returns `true` unless some handler called
    /// [`Event::prevent_default`].
    pub fn dispatch(&self, target: NodeId, mut event: Event) -> bool {
        event.set_target(target);

        let chain: Vec<NodeId> = if event.bubbles() {
            let tree = self.tree.borrow();
            let mut chain = vec![target];
            let mut current = target;
            while let Some(parent) = tree.node(current).parent {
                chain.push(parent);
                current = parent;
            }
            chain
        } else {
            vec![target]
        };

        'chain: for node in chain {
            let handlers = self.listeners.borrow().snapshot(node, event.kind());
            for handler in handlers {
                handler(&event);
            }
            if event.propagation_stopped() {
                break 'chain;
            }
        }

        !event.default_prevented()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Matching Internals
// =============================================================================

fn collect_text(tree: &Tree, node: NodeId, out: &mut String) {
    match &tree.node(node).kind {
        NodeKind::Text(t) => out.push_str(t),
        NodeKind::Element(_) => {
            for &child in &tree.node(node).children {
                collect_text(tree, child, out);
            }
        }
    }
}

fn matches_in_tree(tree: &Tree, node: NodeId, selector: &Selector) -> bool {
    selector
        .alternatives
        .iter()
        .any(|complex| complex_matches(tree, node, complex))
}

fn complex_matches(tree: &Tree, node: NodeId, complex: &ComplexSelector) -> bool {
    let Some(el) = tree.node(node).as_element() else {
        return false;
    };
    let last = complex.parts.len() - 1;
    if !complex.parts[last].1.matches(el) {
        return false;
    }
    matches_upward(tree, node, complex, last)
}

/// `complex.parts[idx]` matched at `node`; check the remaining parts
/// against its ancestors, backtracking across descendant combinators.
fn matches_upward(tree: &Tree, node: NodeId, complex: &ComplexSelector, idx: usize) -> bool {
    if idx == 0 {
        return true;
    }
    let combinator = complex.parts[idx].0;
    let prev = &complex.parts[idx - 1].1;
    match combinator {
        Combinator::Child => {
            let Some(parent) = tree.node(node).parent else {
                return false;
            };
            tree.node(parent)
                .as_element()
                .is_some_and(|el| prev.matches(el))
                && matches_upward(tree, parent, complex, idx - 1)
        }
        Combinator::Descendant => {
            let mut current = tree.node(node).parent;
            while let Some(ancestor) = current {
                if tree
                    .node(ancestor)
                    .as_element()
                    .is_some_and(|el| prev.matches(el))
                    && matches_upward(tree, ancestor, complex, idx - 1)
                {
                    return true;
                }
                current = tree.node(ancestor).parent;
            }
            false
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
