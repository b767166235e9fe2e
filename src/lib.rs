//! Client-side navigation engine for single-page applications built from
//! independently loaded UI fragments.
//!
//! The engine watches the browser URL, resolves it against an ordered route
//! table, lazily loads the matching fragment's code, and swaps the fragment
//! into a host-provided container while keeping history and the document
//! title in sync. Every browser surface it touches (history, DOM container,
//! document chrome, global events, task spawning) is a trait in [`host`],
//! so the engine itself stays free of platform bindings.

// Core engine
pub mod routing;

// Fragment loading and container updates
pub mod mount;

// Browser collaborator seams
pub mod host;

pub use mount::MountError;
pub use routing::links::ROUTER_IGNORE_ATTR;
pub use routing::navigator::ActiveRoute;
pub use routing::route::{LoadError, Route, RouteTable, RouteTarget};
pub use routing::router::Router;
