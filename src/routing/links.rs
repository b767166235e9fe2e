//! Link click interception.
//!
//! Turns document-wide clicks on navigable anchors into programmatic
//! navigations instead of full page loads. Only the clicked node and its
//! immediate parent are examined; deeper ancestors are never walked.

use crate::host::events::{ClickEvent, ClickNode};

/// Attribute that opts an anchor out of interception. Clicks on such
/// anchors keep their default browser navigation.
pub const ROUTER_IGNORE_ATTR: &str = "router-ignore";

/// The href to navigate to for this click, if it landed on a navigable
/// anchor.
///
/// The nearest anchor is the clicked node itself or its immediate parent.
/// An anchor carrying [`ROUTER_IGNORE_ATTR`] or missing an `href` is not
/// navigable, and no further ancestor is considered in its place.
pub(crate) fn navigable_href(event: &ClickEvent) -> Option<String> {
    let anchor = nearest_anchor(&event.target)?;
    if anchor.has_attribute(ROUTER_IGNORE_ATTR) {
        return None;
    }
    anchor.attribute("href").map(str::to_string)
}

fn nearest_anchor(target: &ClickNode) -> Option<&ClickNode> {
    if target.is_anchor() {
        return Some(target);
    }
    match target.parent.as_deref() {
        Some(parent) if parent.is_anchor() => Some(parent),
        _ => None,
    }
}
