//! Loads fragment code and swaps the container content.

use std::rc::Rc;

use thiserror::Error;

use crate::host::{FragmentHost, Platform};
use crate::routing::route::{FragmentLoader, LoadError};

/// Errors from mounting a fragment.
#[derive(Debug, Error)]
pub enum MountError {
    /// The fragment's loader failed. The container was left untouched.
    #[error("failed to load code for fragment '{component}': {source}")]
    Load {
        component: String,
        source: LoadError,
    },
}

/// Everything the mounter needs about a resolved fragment route.
#[derive(Clone)]
pub struct ResolvedFragment {
    /// Tag name of the element to create.
    pub tag: String,
    /// Registered title, when one was given.
    pub title: Option<String>,
    /// Loader that makes the fragment's code available.
    pub loader: FragmentLoader,
}

/// Mounts resolved fragments into the host container.
#[derive(Clone)]
pub struct FragmentMounter {
    container: Rc<dyn FragmentHost>,
    platform: Rc<dyn Platform>,
}

impl FragmentMounter {
    pub fn new(container: Rc<dyn FragmentHost>, platform: Rc<dyn Platform>) -> Self {
        Self {
            container,
            platform,
        }
    }

    /// Load the fragment's code, then replace the container content and
    /// update the document title.
    ///
    /// Suspends until the loader resolves. On loader failure nothing is
    /// mutated; the previously mounted fragment stays on screen.
    pub async fn mount(&self, fragment: &ResolvedFragment) -> Result<(), MountError> {
        (fragment.loader)().await.map_err(|source| MountError::Load {
            component: fragment.tag.clone(),
            source,
        })?;

        self.container.clear_content();
        self.container.append_fragment(&fragment.tag);

        let title = fragment.title.as_deref().unwrap_or(&fragment.tag);
        self.platform.set_title(title);

        tracing::debug!(component = %fragment.tag, title, "Fragment mounted");
        Ok(())
    }
}
