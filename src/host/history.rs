//! Session history access.

/// Read and write the visible browser location.
pub trait BrowserHistory {
    /// Push a new entry onto the session history without a page reload
    /// (the `pushState` equivalent). The URL is stored verbatim, query
    /// string and hash included.
    fn push_url(&self, url: &str);

    /// Pathname currently shown in the address bar. Consulted when the
    /// browser itself moved through history (back/forward).
    fn current_pathname(&self) -> String;

    /// Origin that navigated paths are resolved against when splitting a
    /// path from its query string and hash.
    fn origin(&self) -> String;
}
