//! Public router facade and global listener wiring.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::host::{ClickDisposition, FragmentHost, ListenerId, Platform};
use crate::routing::links;
use crate::routing::navigator::{ActiveRoute, Navigator};
use crate::routing::route::Route;

/// Client-side router for a fragment-based single-page application.
///
/// Construction immediately attaches the global popstate and click
/// listeners; [`Router::destroy`] (also run on drop) detaches them. The
/// listeners hold only weak references to the navigation state, so a
/// torn-down router is never called back into.
pub struct Router {
    nav: Rc<RefCell<Navigator>>,
    platform: Rc<dyn Platform>,
    popstate_listener: Cell<Option<ListenerId>>,
    click_listener: Cell<Option<ListenerId>>,
}

impl Router {
    /// Create a router mounting fragments into `container` and attach the
    /// global listeners.
    pub fn new(platform: Rc<dyn Platform>, container: Rc<dyn FragmentHost>) -> Self {
        let nav = Rc::new(RefCell::new(Navigator::new(Rc::clone(&platform), container)));

        let weak = Rc::downgrade(&nav);
        let popstate_listener = platform.add_popstate_listener(Box::new(move || {
            if let Some(nav) = weak.upgrade() {
                Navigator::handle_popstate(&nav);
            }
        }));

        let weak = Rc::downgrade(&nav);
        let click_listener = platform.add_click_listener(Box::new(move |event| {
            let Some(nav) = weak.upgrade() else {
                return ClickDisposition::PassThrough;
            };
            match links::navigable_href(event) {
                Some(href) => {
                    tracing::debug!(href = %href, "Intercepted link click");
                    Navigator::navigate(&nav, &href);
                    ClickDisposition::Intercepted
                }
                None => ClickDisposition::PassThrough,
            }
        }));

        tracing::debug!("Router attached");
        Self {
            nav,
            platform,
            popstate_listener: Cell::new(Some(popstate_listener)),
            click_listener: Cell::new(Some(click_listener)),
        }
    }

    /// Set the prefix prepended to the patterns of routes registered from
    /// now on. Set it before the `add_route` calls that should inherit it.
    pub fn set_base_url(&self, base: impl Into<String>) {
        self.nav.borrow_mut().set_base_url(base);
    }

    /// The currently configured base URL.
    pub fn base_url(&self) -> String {
        self.nav.borrow().base_url().to_string()
    }

    /// Register a route. Its pattern is stored with the base URL already
    /// prepended.
    ///
    /// Routes match in registration order and the first match wins, so
    /// register specific routes before parameterized or catch-all ones.
    pub fn add_route(&self, route: Route) {
        self.nav.borrow_mut().add_route(route);
    }

    /// Navigate to `path` (the full path, base URL included).
    ///
    /// Never fails from the caller's point of view: an unmatched path or
    /// a failed fragment load is logged and the current view stays put.
    pub fn navigate(&self, path: &str) {
        Navigator::navigate(&self.nav, path);
    }

    /// Snapshot of the currently mounted route.
    pub fn active_route(&self) -> Option<ActiveRoute> {
        self.nav.borrow().active()
    }

    /// Detach the global listeners. Idempotent. In-flight fragment loads
    /// still run to completion; there is no cancellation.
    pub fn destroy(&self) {
        if let Some(id) = self.popstate_listener.take() {
            self.platform.remove_popstate_listener(id);
        }
        if let Some(id) = self.click_listener.take() {
            self.platform.remove_click_listener(id);
        }
    }
}

impl Drop for Router {
    fn drop(&mut self) {
        self.destroy();
    }
}
