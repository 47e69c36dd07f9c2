//! Pipeline Module - activation lifecycle and tick scheduling.
//!
//! - [`mount`] - composition root owning all subscriptions
//! - [`tick`] - deferred "after the host's turn" queue

pub mod mount;
pub mod tick;

pub use mount::{mount, unmount, MountHandle};
pub use tick::{defer, flush, pending, reset_tick_state};
