//! Core types for kotoha.
//!
//! Small foundation types that flow through every other module: node
//! handles, observation flags, the host-environment record, and the
//! cleanup closure returned by every long-lived subscription.

use bitflags::bitflags;

// =============================================================================
// Node Handle
// =============================================================================

/// Handle to a node inside a [`Document`](crate::dom::Document) arena.
///
/// Plain index newtype. Handles stay valid for the lifetime of the
/// document; detached nodes keep their handle but become unreachable
/// from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by subscriptions.
///
/// Call this to stop the observer / remove the listeners it stands for.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Observation Flags
// =============================================================================

bitflags! {
    /// What kinds of document mutation a region observer reacts to.
    ///
    /// `CHILD_LIST | SUBTREE` is the baseline every region uses;
    /// `CHARACTER_DATA` is opted into by regions whose host rewrites
    /// text in place without restructuring.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ObserveFlags: u8 {
        /// Node insertions/removals below the observed root.
        const CHILD_LIST = 1 << 0;
        /// Observe the full subtree, not just direct children.
        const SUBTREE = 1 << 1;
        /// Text-node value changes.
        const CHARACTER_DATA = 1 << 2;
    }
}

impl Default for ObserveFlags {
    fn default() -> Self {
        ObserveFlags::CHILD_LIST | ObserveFlags::SUBTREE
    }
}

// =============================================================================
// Host Environment
// =============================================================================

/// Facts about the hosting environment that change runtime behavior.
///
/// The composition corrector only needs one bit today: whether we are
/// running under the browser whose composition event ordering is broken
/// (a spurious blur fires right after the IME commits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostEnv {
    /// True when the post-composition blur/caret bug is present.
    pub affected_browser: bool,
}

impl HostEnv {
    /// Detect the environment from a user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        Self {
            affected_browser: user_agent.to_lowercase().contains("firefox"),
        }
    }

    /// Environment with the composition bug present.
    pub fn affected() -> Self {
        Self {
            affected_browser: true,
        }
    }

    /// Environment without the composition bug.
    pub fn unaffected() -> Self {
        Self::default()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_observe_flags() {
        let flags = ObserveFlags::default();
        assert!(flags.contains(ObserveFlags::CHILD_LIST));
        assert!(flags.contains(ObserveFlags::SUBTREE));
        assert!(!flags.contains(ObserveFlags::CHARACTER_DATA));
    }

    #[test]
    fn test_user_agent_detection() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:126.0) Gecko/20100101 Firefox/126.0";
        assert!(HostEnv::from_user_agent(ua).affected_browser);

        let ua = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/125.0 Safari/537.36";
        assert!(!HostEnv::from_user_agent(ua).affected_browser);
    }
}
