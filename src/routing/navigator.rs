//! Navigation state machine.
//!
//! # Responsibilities
//! - Own the route table, the base URL, and the active route
//! - Resolve navigated paths to pathnames and run the matcher
//! - Follow redirect routes through the full dispatch cycle
//! - Hand fragment routes to the mounter and commit the result
//!
//! # Design Decisions
//! - Matching and redirects run synchronously; the only suspension point
//!   is the loader await inside the spawned mount task
//! - Failures never escape a navigation: unmatched paths and failed loads
//!   log and leave the current view and active route unchanged
//! - Overlapping navigations are not serialized or cancelled; the
//!   container ends up showing whichever load completes last
//! - Redirect chains are not cycle-checked; a cycle of redirect routes
//!   keeps navigating forever and is the application's responsibility

use std::cell::RefCell;
use std::rc::Rc;

use url::Url;

use crate::host::{FragmentHost, Platform};
use crate::mount::{FragmentMounter, ResolvedFragment};
use crate::routing::matcher;
use crate::routing::route::{Route, RouteTable, RouteTarget};

/// Snapshot of the currently mounted route.
///
/// Exactly one exists at a time; it is replaced atomically when a mount
/// succeeds and never changed by a failed one.
#[derive(Debug, Clone)]
pub struct ActiveRoute {
    /// Full pattern of the matched route, base URL included.
    pub path: String,
    /// Tag name of the mounted fragment element.
    pub component: String,
    /// Registered title, when one was given.
    pub title: Option<String>,
    /// Static parameters followed by captured parameters, in order.
    pub params: Vec<(String, String)>,
}

impl ActiveRoute {
    /// Look up a parameter by name. Values captured from the pathname
    /// shadow static ones registered under the same name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of resolving one path against the table, detached from the
/// table borrow so dispatch can continue without holding it.
enum Resolution {
    Redirect { to: String },
    Fragment { active: ActiveRoute, fragment: ResolvedFragment },
}

pub(crate) struct Navigator {
    platform: Rc<dyn Platform>,
    mounter: FragmentMounter,
    table: RouteTable,
    base_url: String,
    active: Option<ActiveRoute>,
}

impl Navigator {
    pub(crate) fn new(platform: Rc<dyn Platform>, container: Rc<dyn FragmentHost>) -> Self {
        let mounter = FragmentMounter::new(container, Rc::clone(&platform));
        Self {
            platform,
            mounter,
            table: RouteTable::default(),
            base_url: String::new(),
            active: None,
        }
    }

    pub(crate) fn set_base_url(&mut self, base: impl Into<String>) {
        self.base_url = base.into();
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn active(&self) -> Option<ActiveRoute> {
        self.active.clone()
    }

    /// Register a route. The base URL is prepended here, at registration
    /// time; changing it later only affects later registrations.
    ///
    /// Duplicate patterns are legal and the earliest one always wins, so
    /// specific routes must be registered before parameterized or
    /// catch-all routes that would also match.
    pub(crate) fn add_route(&mut self, route: Route) {
        let route = route.prefixed(&self.base_url);
        tracing::debug!(pattern = %route.pattern(), "Route registered");
        self.table.push(route);
    }

    /// Programmatic navigation: push `path` onto the session history
    /// verbatim, then dispatch.
    pub(crate) fn navigate(this: &Rc<RefCell<Self>>, path: &str) {
        tracing::debug!(path, "Navigating");
        this.borrow().platform.push_url(path);
        Self::handle_route_change(this, path);
    }

    /// Browser-driven navigation (back/forward): dispatch from the
    /// browser's current location without pushing new history.
    pub(crate) fn handle_popstate(this: &Rc<RefCell<Self>>) {
        let pathname = this.borrow().platform.current_pathname();
        tracing::debug!(%pathname, "History state changed");
        Self::handle_route_change(this, &pathname);
    }

    /// Resolve `path` and dispatch on the result.
    ///
    /// Redirect routes push their target and re-enter resolution; there
    /// is no cycle detection. A fragment route spawns the mount task and
    /// returns immediately; the task commits the active route once the
    /// load succeeds.
    pub(crate) fn handle_route_change(this: &Rc<RefCell<Self>>, path: &str) {
        let platform = Rc::clone(&this.borrow().platform);
        let mut path = path.to_string();
        loop {
            let resolution = {
                let nav = this.borrow();
                let pathname = nav.resolve_pathname(&path);
                match matcher::find_match(&pathname, &nav.table) {
                    Some(found) => nav.resolve(found),
                    None => {
                        tracing::warn!(%pathname, "No route matched; keeping current view");
                        return;
                    }
                }
            };

            match resolution {
                Resolution::Redirect { to } => {
                    tracing::debug!(from = %path, to = %to, "Following redirect");
                    platform.push_url(&to);
                    path = to;
                }
                Resolution::Fragment { active, fragment } => {
                    let mounter = this.borrow().mounter.clone();
                    let nav = Rc::clone(this);
                    platform.spawn_local(Box::pin(async move {
                        match mounter.mount(&fragment).await {
                            Ok(()) => {
                                tracing::info!(
                                    path = %active.path,
                                    component = %active.component,
                                    "Route activated"
                                );
                                nav.borrow_mut().active = Some(active);
                            }
                            Err(err) => {
                                tracing::error!(error = %err, "Keeping previous view");
                            }
                        }
                    }));
                    return;
                }
            }
        }
    }

    /// Detach a matched route from the table borrow.
    fn resolve(&self, found: matcher::RouteMatch<'_>) -> Resolution {
        let route = found.route;
        match &route.target {
            RouteTarget::Redirect { to } => Resolution::Redirect { to: to.clone() },
            RouteTarget::Fragment { tag, loader } => {
                let mut params = route.seed_params.clone();
                params.extend(found.params);
                Resolution::Fragment {
                    active: ActiveRoute {
                        path: route.pattern.clone(),
                        component: tag.clone(),
                        title: route.title.clone(),
                        params,
                    },
                    fragment: ResolvedFragment {
                        tag: tag.clone(),
                        title: route.title.clone(),
                        loader: Rc::clone(loader),
                    },
                }
            }
        }
    }

    /// Extract the pathname used for matching. The query string and hash
    /// stay in the pushed URL but never participate in matching.
    fn resolve_pathname(&self, path: &str) -> String {
        let resolved = Url::parse(&self.platform.origin()).and_then(|origin| origin.join(path));
        match resolved {
            Ok(url) => url.path().to_string(),
            Err(err) => {
                tracing::warn!(path, error = %err, "Could not resolve path against origin");
                let end = path.find(['?', '#']).unwrap_or(path.len());
                path[..end].to_string()
            }
        }
    }
}
