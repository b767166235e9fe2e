//! Browser collaborator seams.
//!
//! # Responsibilities
//! - Define the traits for every process-wide browser surface the engine
//!   touches: session history, document title, the fragment container,
//!   global popstate/click events, and task spawning
//! - Model click events as plain values so the engine never inspects a DOM
//!
//! # Design Decisions
//! - Traits instead of bindings: the engine runs unchanged under a real
//!   browser glue layer, a simulator, or a test double
//! - Listener registration returns an id; teardown removes exactly the id
//!   that was registered, so a torn-down router leaves nothing behind
//! - Single-threaded: futures are local, nothing requires `Send`

pub mod dom;
pub mod events;
pub mod history;

pub use dom::{DocumentChrome, FragmentHost};
pub use events::{ClickDisposition, ClickEvent, ClickNode, EventSurface, ListenerId};
pub use history::BrowserHistory;

use futures_util::future::LocalBoxFuture;

/// Spawns engine tasks onto the host's event loop.
///
/// Mount tasks suspend while fragment code loads, so they run as spawned
/// tasks rather than blocking the caller of a navigation.
pub trait Spawner {
    /// Queue `task` for execution on the current thread's event loop.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

/// Umbrella over every browser surface the engine needs.
///
/// A host implements the four component traits on one type and hands the
/// engine a single shared handle.
pub trait Platform: BrowserHistory + DocumentChrome + EventSurface + Spawner {}

impl<T> Platform for T where T: BrowserHistory + DocumentChrome + EventSurface + Spawner {}
