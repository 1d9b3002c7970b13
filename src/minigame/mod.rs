//! The reel minigame simulation core.
//!
//! Pure data transitions only: the modules here know nothing about
//! terminals or rendering. The host calls [`logic::process_tick`] once per
//! frame (or drives a [`crate::session::ReelSession`], which does it for
//! them) and reads the state back out.

pub mod bar;
pub mod fish;
pub mod logic;
pub mod types;

// Re-exported for library consumers; the binary target addresses these
// through `types::` directly, so silence the unused-import deny there.
#[allow(unused_imports)]
pub use types::{Phase, ReelState};
