//! Fragment mounting subsystem.
//!
//! # Responsibilities
//! - Run a route's loader to pull in the fragment's code
//! - Swap the container content to a freshly created fragment element
//! - Keep the document title in sync with the mounted fragment
//!
//! # Design Decisions
//! - A failed load changes nothing: the previous fragment stays visible
//!   and the active route is not replaced
//! - DOM mutation happens synchronously in one event-loop turn once the
//!   load resolves; the load await is the only suspension point

pub mod mounter;

pub use mounter::{FragmentMounter, MountError, ResolvedFragment};
