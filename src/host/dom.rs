//! Container and document chrome access.

/// Mount point for fragments.
///
/// The container is borrowed from the host: the engine replaces its
/// children but never tears the container itself down.
pub trait FragmentHost {
    /// Remove every child of the container's content root.
    fn clear_content(&self);

    /// Create a fresh element with the given tag name and append it under
    /// the container's content root.
    fn append_fragment(&self, tag: &str);
}

/// Document-level chrome the engine updates alongside the container.
pub trait DocumentChrome {
    /// Set the document title.
    fn set_title(&self, title: &str);
}
