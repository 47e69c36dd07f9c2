//! Input Module - IME composition state and the input corrector.
//!
//! - [`composition`] - pure per-input composition state machine
//! - [`corrector`] - attach-on-mutation listeners fixing the affected
//!   browser's post-composition blur and Enter-during-IME behavior

pub mod composition;
pub mod corrector;

pub use composition::CompositionSession;
pub use corrector::{install as install_corrector, MARKER_ATTR, SUBMIT_EVENT};
