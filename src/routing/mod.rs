//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation trigger (navigate call, popstate, intercepted link click)
//!     → router.rs (public facade, listener wiring)
//!     → navigator.rs (push history, resolve pathname, dispatch)
//!     → matcher.rs (first matching route + captured params)
//!     → redirect: re-enter dispatch with the redirect target
//!     → fragment: mount task (load, swap container, set title)
//!     → navigator.rs records the new active route
//! ```
//!
//! # Design Decisions
//! - Routes are registered programmatically and matched in registration
//!   order; first match wins, with no specificity re-ranking
//! - Explicit no-match leaves the current view in place
//! - Matching is synchronous; only fragment loading suspends

pub mod links;
pub mod matcher;
pub mod navigator;
pub mod route;
pub mod router;
