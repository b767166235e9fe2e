//! Global event surface.
//!
//! The host forwards document-wide clicks and history (popstate) changes
//! to whoever registered a listener. Registration hands back an id so the
//! exact listener can be removed later; the engine stores its ids at
//! construction and removes the same ids on teardown.

use std::collections::HashMap;
use std::rc::Rc;

/// Identity of a registered listener.
pub type ListenerId = u64;

/// Minimal view of a node on a click event's composed dispatch path.
///
/// Hosts build one of these from the originally clicked DOM node; the
/// engine only ever looks at the tag name, the attributes, and the
/// immediate parent.
#[derive(Debug, Clone, Default)]
pub struct ClickNode {
    /// Element tag name as the DOM reports it (usually upper-cased).
    pub tag_name: String,
    /// Attributes present on the element.
    pub attributes: HashMap<String, String>,
    /// The node's parent element, if any.
    pub parent: Option<Rc<ClickNode>>,
}

impl ClickNode {
    /// Node with the given tag and no attributes or parent.
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag_name: tag.into(),
            ..Self::default()
        }
    }

    /// Add an attribute. An opt-out marker is just an attribute with an
    /// empty value, as in the DOM.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Attach a parent element.
    pub fn with_parent(mut self, parent: ClickNode) -> Self {
        self.parent = Some(Rc::new(parent));
        self
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Whether the attribute is present at all, regardless of value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Whether this node is an anchor element. Tag names compare
    /// case-insensitively because the DOM upper-cases HTML tags.
    pub fn is_anchor(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("a")
    }
}

/// A document-wide click as reported by the host.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    /// First node on the event's composed path: the originally clicked node.
    pub target: Rc<ClickNode>,
}

impl ClickEvent {
    /// Click whose composed path starts at `target`.
    pub fn new(target: ClickNode) -> Self {
        Self {
            target: Rc::new(target),
        }
    }
}

/// What a click listener decided to do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    /// Default browser navigation was suppressed; the engine took over.
    Intercepted,
    /// Not a navigable click; the host lets default behavior proceed.
    PassThrough,
}

/// Registry for the global listeners the engine depends on.
pub trait EventSurface {
    /// Register a listener for history (back/forward) changes.
    fn add_popstate_listener(&self, handler: Box<dyn Fn()>) -> ListenerId;

    /// Register a listener for document-wide clicks. The returned
    /// disposition tells the host whether to suppress the default action.
    fn add_click_listener(
        &self,
        handler: Box<dyn Fn(&ClickEvent) -> ClickDisposition>,
    ) -> ListenerId;

    /// Remove a previously registered popstate listener. Unknown ids are
    /// ignored.
    fn remove_popstate_listener(&self, id: ListenerId);

    /// Remove a previously registered click listener. Unknown ids are
    /// ignored.
    fn remove_click_listener(&self, id: ListenerId);
}
