//! Mount API - retrofit lifecycle over one document.
//!
//! The composition root: registers every catalog region, installs the
//! composition corrector and the editor font patch, and hands back a
//! [`MountHandle`] owning all of the resulting subscriptions. The whole
//! system activates in this one call - there are no flags and no
//! persisted state - and disposes together through the handle.
//!
//! # Example
//!
//! ```ignore
//! use kotoha::dom::Document;
//! use kotoha::pipeline::mount;
//! use kotoha::types::HostEnv;
//!
//! let doc = Document::new();
//! let handle = mount(&doc, HostEnv::from_user_agent(user_agent));
//!
//! // ... host mutates the document; regions keep it localized ...
//!
//! handle.unmount();
//! ```

use spark_signals::effect;
use tracing::debug;

use crate::catalog;
use crate::dom::{Document, Selector};
use crate::engine::region;
use crate::input::corrector;
use crate::types::{Cleanup, HostEnv};

// =============================================================================
// Editor Font Patch
// =============================================================================

/// System sans-serif stack pinned onto the plaintext editor, which the
/// host styles with a font that renders Japanese poorly.
const EDITOR_FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, \"Noto Sans\", sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\"";

const EDITOR_SELECTOR: &str = "#note-text-editor";

fn apply_editor_font(doc: &Document, selector: &Selector) {
    let Some(editor) = doc.query_first(selector) else {
        return;
    };
    let style = format!("font-family: {EDITOR_FONT_STACK}");
    if doc.attr(editor, "style").as_deref() != Some(style.as_str()) {
        doc.set_attr(editor, "style", &style);
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that owns every live subscription:
/// region observers, the corrector and the font patch.
pub struct MountHandle {
    cleanups: Vec<Cleanup>,
}

impl MountHandle {
    /// Stop all observers and unbind all listeners.
    pub fn unmount(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        if !self.cleanups.is_empty() {
            debug!(subscriptions = self.cleanups.len(), "unmounting");
        }
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Activate the retrofit over `doc`: apply and observe every catalog
/// region, install the composition corrector and keep the editor font
/// patched. Returns a handle for teardown.
pub fn mount(doc: &Document, env: HostEnv) -> MountHandle {
    let regions = catalog::all_regions();
    debug!(regions = regions.len(), affected = env.affected_browser, "mounting");

    let mut cleanups: Vec<Cleanup> = Vec::with_capacity(regions.len() + 2);
    for r in regions {
        cleanups.push(region::observe(doc, r));
    }

    cleanups.push(corrector::install(doc, env));

    let editor_selector = Selector::parse(EDITOR_SELECTOR).unwrap();
    let doc_for_font = doc.clone();
    apply_editor_font(doc, &editor_selector);
    let stop_font = effect(move || {
        let _structure = doc_for_font.structure_version();
        apply_editor_font(&doc_for_font, &editor_selector);
    });
    cleanups.push(Box::new(stop_font));

    MountHandle { cleanups }
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Event, EventKind};
    use crate::input::SUBMIT_EVENT;
    use crate::pipeline::tick;
    use crate::types::NodeId;
    use std::cell::Cell;
    use std::rc::Rc;

    /// A miniature rendition of the hosting page.
    fn render_page(doc: &Document) -> (NodeId, NodeId, NodeId) {
        let bar = doc.append_element(doc.root(), "div");
        doc.set_attr(bar, "class", "section-title-bar");
        let title = doc.append_element(bar, "div");
        doc.set_attr(title, "class", "title");
        doc.append_text(title, "Notes");

        let input = doc.append_element(doc.root(), "input");
        doc.set_attr(input, "id", "note-title-editor");

        let editor = doc.append_element(doc.root(), "textarea");
        doc.set_attr(editor, "id", "note-text-editor");

        (title, input, editor)
    }

    #[test]
    fn test_mount_localizes_and_patches() {
        tick::reset_tick_state();
        let doc = Document::new();
        let (title, input, editor) = render_page(&doc);

        let _handle = mount(&doc, HostEnv::unaffected());
        tick::flush();

        assert_eq!(doc.text_content(title), "ノート一覧");
        assert!(doc.has_attr(input, "data-enter-handled"));
        assert!(
            doc.attr(editor, "style")
                .is_some_and(|s| s.contains("Noto Sans"))
        );
    }

    #[test]
    fn test_mount_on_empty_document_is_harmless() {
        tick::reset_tick_state();
        let doc = Document::new();
        let _handle = mount(&doc, HostEnv::unaffected());
        tick::flush();

        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn test_host_rerender_is_caught() {
        tick::reset_tick_state();
        let doc = Document::new();
        let _handle = mount(&doc, HostEnv::unaffected());

        // Host renders after activation.
        let (title, _, _) = render_page(&doc);
        tick::flush();
        assert_eq!(doc.text_content(title), "ノート一覧");

        // Host replaces the list header, as it does on every view change.
        let bar = doc.parent(title).unwrap();
        doc.remove_child(bar, title);
        let fresh = doc.append_element(bar, "div");
        doc.set_attr(fresh, "class", "title");
        doc.append_text(fresh, "Trash");
        tick::flush();
        assert_eq!(doc.text_content(fresh), "ゴミ箱");
    }

    #[test]
    fn test_submit_event_reaches_root_listener() {
        tick::reset_tick_state();
        let doc = Document::new();
        let (_, input, _) = render_page(&doc);
        let _handle = mount(&doc, HostEnv::affected());

        let submits = Rc::new(Cell::new(0));
        let submits_clone = submits.clone();
        let _cleanup = doc.add_event_listener(
            doc.root(),
            EventKind::Custom(SUBMIT_EVENT.to_string()),
            move |_| submits_clone.set(submits_clone.get() + 1),
        );

        doc.dispatch(input, Event::composition_start());
        doc.dispatch(input, Event::keydown("Enter"));
        assert_eq!(submits.get(), 0, "no submit while composing");

        doc.dispatch(input, Event::composition_end());
        tick::flush();
        doc.dispatch(input, Event::keydown("Enter"));
        assert_eq!(submits.get(), 1);
    }

    #[test]
    fn test_unmount_stops_everything() {
        tick::reset_tick_state();
        let doc = Document::new();
        let handle = mount(&doc, HostEnv::unaffected());
        handle.unmount();

        let (title, input, _) = render_page(&doc);
        tick::flush();

        assert_eq!(doc.text_content(title), "Notes");
        assert!(!doc.has_attr(input, "data-enter-handled"));
    }

    #[test]
    fn test_double_mount_converges() {
        tick::reset_tick_state();
        let doc = Document::new();
        let (title, _, _) = render_page(&doc);

        let _a = mount(&doc, HostEnv::unaffected());
        let _b = mount(&doc, HostEnv::unaffected());
        tick::flush();

        assert_eq!(doc.text_content(title), "ノート一覧");
    }
}
