//! Route definitions and the ordered route table.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use thiserror::Error;

/// Failure reported by a fragment loader.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct LoadError(pub String);

/// Async function that makes a fragment's code available as a side effect.
///
/// Typically wraps a dynamic import in the host environment. The engine
/// never inspects what was loaded; it only waits for completion.
pub type FragmentLoader = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<(), LoadError>>>;

/// What a matched route resolves to.
///
/// A route either mounts a fragment or redirects elsewhere; the enum rules
/// out registering a route that does both or neither.
#[derive(Clone)]
pub enum RouteTarget {
    /// Run `loader`, then mount a fresh `tag` element in the container.
    Fragment { tag: String, loader: FragmentLoader },
    /// Re-navigate to `to` instead of mounting anything.
    Redirect { to: String },
}

impl fmt::Debug for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTarget::Fragment { tag, .. } => f.debug_struct("Fragment").field("tag", tag).finish(),
            RouteTarget::Redirect { to } => f.debug_struct("Redirect").field("to", to).finish(),
        }
    }
}

/// A registered mapping from a path pattern to a fragment or a redirect.
///
/// Patterns are plain path templates: literal segments, `:name` for a
/// single dynamic segment, and a trailing `*` for a catch-all.
#[derive(Clone)]
pub struct Route {
    pub(crate) pattern: String,
    pub(crate) target: RouteTarget,
    pub(crate) title: Option<String>,
    pub(crate) seed_params: Vec<(String, String)>,
}

impl Route {
    /// Route that loads and mounts a fragment.
    pub fn fragment<F, Fut>(path: impl Into<String>, tag: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), LoadError>> + 'static,
    {
        let loader: FragmentLoader = Rc::new(move || loader().boxed_local());
        Self {
            pattern: path.into(),
            target: RouteTarget::Fragment {
                tag: tag.into(),
                loader,
            },
            title: None,
            seed_params: Vec::new(),
        }
    }

    /// Route that immediately re-navigates to `to`. The target is a full
    /// path, base URL included.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            pattern: path.into(),
            target: RouteTarget::Redirect { to: to.into() },
            title: None,
            seed_params: Vec::new(),
        }
    }

    /// Document title to set when this route mounts. Falls back to the
    /// fragment tag when absent.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Static parameter made visible on the active route alongside the
    /// values captured from the pathname.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.seed_params.push((name.into(), value.into()));
        self
    }

    /// The route's pattern as registered.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Same route with `base` prepended to the pattern. Applied once, at
    /// registration time.
    pub(crate) fn prefixed(mut self, base: &str) -> Self {
        self.pattern = format!("{base}{}", self.pattern);
        self
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("target", &self.target)
            .field("title", &self.title)
            .finish()
    }
}

/// Ordered route registry.
///
/// Registration order defines match priority: the earliest matching route
/// always wins. Duplicate patterns are legal; later duplicates are simply
/// never reached.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Append a route, preserving registration order.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
