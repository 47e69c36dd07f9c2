//! Composition Session - IME lifecycle state for one input.
//!
//! Pure state: `Idle -> Composing -> Idle` plus the orthogonal
//! blur-restore arm. The corrector owns one session per attached input
//! and drives it from events; nothing here touches the document.

/// Ephemeral IME state attached to one input element.
#[derive(Debug, Default)]
pub struct CompositionSession {
    composing: bool,
    pending_blur_restore: bool,
    saved_start: usize,
    saved_end: usize,
}

impl CompositionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// `compositionstart`: Idle -> Composing.
    pub fn start_composition(&mut self) {
        self.composing = true;
    }

    /// `compositionend`: Composing -> Idle. Under the affected browser
    /// this also arms the blur restore; the return value tells the
    /// caller to capture the selection range on the next tick (after the
    /// browser has committed the composed text and moved the caret).
    pub fn end_composition(&mut self, affected_browser: bool) -> bool {
        self.composing = false;
        if affected_browser {
            self.pending_blur_restore = true;
        }
        affected_browser
    }

    /// Record the post-commit selection range as the restore point.
    pub fn save_selection(&mut self, start: usize, end: usize) {
        self.saved_start = start;
        self.saved_end = end;
    }

    pub fn saved_range(&self) -> (usize, usize) {
        (self.saved_start, self.saved_end)
    }

    /// `blur`: consume the arm. Returns whether focus and selection
    /// should be restored on the next tick.
    pub fn take_blur_restore(&mut self) -> bool {
        let armed = self.pending_blur_restore;
        self.pending_blur_restore = false;
        armed
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_lifecycle() {
        let mut session = CompositionSession::new();
        assert!(!session.is_composing());

        session.start_composition();
        assert!(session.is_composing());

        session.end_composition(false);
        assert!(!session.is_composing());
    }

    #[test]
    fn test_blur_restore_armed_only_under_affected_browser() {
        let mut session = CompositionSession::new();
        session.start_composition();
        assert!(!session.end_composition(false));
        assert!(!session.take_blur_restore());

        session.start_composition();
        assert!(session.end_composition(true));
        assert!(session.take_blur_restore());
        // The arm is consumed.
        assert!(!session.take_blur_restore());
    }

    #[test]
    fn test_saved_range() {
        let mut session = CompositionSession::new();
        assert_eq!(session.saved_range(), (0, 0));
        session.save_selection(4, 7);
        assert_eq!(session.saved_range(), (4, 7));
    }
}
