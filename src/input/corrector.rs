//! Composition-Aware Input Corrector.
//!
//! Attaches to the note-title input and repairs two behaviors the
//! affected browser breaks around IME composition:
//!
//! - the spurious blur fired right after a composition commits, which
//!   would move focus and caret away - re-focus and restore the
//!   captured selection range one tick later;
//! - Enter during composition falling through to the host's key handler
//!   and triggering an unintended submit - Enter is always consumed, and
//!   only outside composition does it surface as a synthesized,
//!   cancelable [`SUBMIT_EVENT`] the host may listen for.
//!
//! Attachment is retried on every structural mutation and guarded by a
//! marker attribute so listeners bind once. A document without the
//! input is simply not applicable yet.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::effect;
use tracing::debug;

use crate::dom::{Document, Event, EventKind, Selector};
use crate::pipeline::tick;
use crate::types::{Cleanup, HostEnv, NodeId};

use super::composition::CompositionSession;

/// Name of the synthesized submit notification dispatched on a
/// confirmed (non-composing) Enter press. Bubbling and cancelable.
pub const SUBMIT_EVENT: &str = "submit-request";

/// Marker attribute preventing double-binding across re-attach attempts.
pub const MARKER_ATTR: &str = "data-enter-handled";

/// The input the corrector manages.
const TITLE_INPUT_SELECTOR: &str = "#note-title-editor";

// =============================================================================
// Installation
// =============================================================================

/// Install the corrector: attach to the title input now if present, and
/// re-attempt on every structural mutation. The returned cleanup stops
/// the observer, unbinds all listeners and clears the marker.
pub fn install(doc: &Document, env: HostEnv) -> Cleanup {
    let selector = Selector::parse(TITLE_INPUT_SELECTOR).unwrap();
    let bound: Rc<RefCell<Vec<Cleanup>>> = Rc::new(RefCell::new(Vec::new()));

    let doc_for_effect = doc.clone();
    let selector_for_effect = selector.clone();
    let bound_for_effect = bound.clone();
    let stop = effect(move || {
        let _structure = doc_for_effect.structure_version();
        try_attach(&doc_for_effect, env, &selector_for_effect, &bound_for_effect);
    });

    let doc = doc.clone();
    Box::new(move || {
        stop();
        for cleanup in bound.borrow_mut().drain(..) {
            cleanup();
        }
        if let Some(input) = doc.query_first(&selector) {
            doc.remove_attr(input, MARKER_ATTR);
        }
    })
}

fn try_attach(
    doc: &Document,
    env: HostEnv,
    selector: &Selector,
    bound: &Rc<RefCell<Vec<Cleanup>>>,
) {
    let Some(input) = doc.query_first(selector) else {
        return;
    };
    if doc.has_attr(input, MARKER_ATTR) {
        return;
    }
    doc.set_attr(input, MARKER_ATTR, "true");
    debug!(node = input.index(), "corrector attached");

    let session = Rc::new(RefCell::new(CompositionSession::new()));
    let mut cleanups = bound.borrow_mut();

    cleanups.push(on_composition_start(doc, input, &session));
    cleanups.push(on_composition_end(doc, input, &session, env));
    cleanups.push(on_blur(doc, input, &session));
    cleanups.push(on_keydown(doc, input, &session));
}

// =============================================================================
// Listeners
// =============================================================================

fn on_composition_start(
    doc: &Document,
    input: NodeId,
    session: &Rc<RefCell<CompositionSession>>,
) -> Cleanup {
    let session = session.clone();
    doc.add_event_listener(input, EventKind::CompositionStart, move |_| {
        session.borrow_mut().start_composition();
    })
}

fn on_composition_end(
    doc: &Document,
    input: NodeId,
    session: &Rc<RefCell<CompositionSession>>,
    env: HostEnv,
) -> Cleanup {
    let session = session.clone();
    let doc = doc.clone();
    doc.clone().add_event_listener(input, EventKind::CompositionEnd, move |_| {
        let arm_capture = session.borrow_mut().end_composition(env.affected_browser);
        if arm_capture {
            // The browser commits the composed text and moves the caret
            // after this event; the restore point is only valid one tick
            // later.
            let session = session.clone();
            let doc = doc.clone();
            tick::defer(move || {
                let (start, end) = doc.selection(input);
                session.borrow_mut().save_selection(start, end);
            });
        }
    })
}

fn on_blur(doc: &Document, input: NodeId, session: &Rc<RefCell<CompositionSession>>) -> Cleanup {
    let session = session.clone();
    let doc = doc.clone();
    doc.clone().add_event_listener(input, EventKind::Blur, move |_| {
        let restore = session.borrow_mut().take_blur_restore();
        if restore {
            let session = session.clone();
            let doc = doc.clone();
            tick::defer(move || {
                let (start, end) = session.borrow().saved_range();
                debug!(start, end, "restoring focus after spurious blur");
                doc.focus_node(input);
                doc.set_selection(input, start, end);
            });
        }
    })
}

fn on_keydown(doc: &Document, input: NodeId, session: &Rc<RefCell<CompositionSession>>) -> Cleanup {
    let session = session.clone();
    let doc = doc.clone();
    doc.clone().add_event_listener(input, EventKind::Keydown, move |event| {
        if event.key() != Some("Enter") {
            return;
        }
        // Never let Enter fall through to the host's default handler.
        event.prevent_default();
        event.stop_propagation();

        let composing = session.borrow().is_composing();
        if composing {
            // Enter confirms the composition; swallow it entirely.
            return;
        }
        doc.dispatch(input, Event::custom(SUBMIT_EVENT));
    })
}

// =============================================================================
// Tests
// =============================================================================
