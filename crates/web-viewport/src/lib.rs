//! Web Viewport Utilities
//!
//! Platform glue for watching when page regions enter the viewport and for
//! smooth-scrolling to them. The traits keep callers independent of the
//! browser so they can be driven by fakes in native tests.

mod observer;
mod scroll;

pub use observer::{is_supported, IntersectionWatcher};
pub use scroll::SmoothScroller;

/// Default fraction of a region that must be on screen to count as visible
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// A single intersection-state change reported for a watched element
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionChange {
    /// DOM id of the element that crossed the threshold
    pub target_id: String,
    pub is_intersecting: bool,
}

impl IntersectionChange {
    pub fn new(target_id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting,
        }
    }
}

/// Viewport observation facility.
///
/// Changes are delivered through the handler the observer was built with;
/// each target's changes arrive in order, targets interleave arbitrarily.
pub trait ViewportObserver {
    /// Start reporting intersection changes for the element with this id
    fn watch(&mut self, target_id: &str) -> Result<(), ViewportError>;

    /// Stop reporting changes for this element. Unknown ids are ignored.
    fn unwatch(&mut self, target_id: &str);

    /// Stop reporting everything and release platform resources
    fn disconnect(&mut self);
}

/// Scroll-to-element facility
pub trait Scroller {
    /// Begin an animated scroll to the element. Returns once the scroll is
    /// requested, not when it finishes.
    fn scroll_to(&self, target_id: &str) -> Result<(), ViewportError>;
}

/// Viewport-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// The platform has no IntersectionObserver
    Unsupported,
    /// No window or document is reachable
    NoDocument,
    ElementNotFound(String),
    Js(String),
}

impl ViewportError {
    pub(crate) fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        ViewportError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl std::fmt::Display for ViewportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewportError::Unsupported => write!(f, "IntersectionObserver is not supported"),
            ViewportError::NoDocument => write!(f, "No document available"),
            ViewportError::ElementNotFound(id) => write!(f, "Element not found: #{}", id),
            ViewportError::Js(msg) => write!(f, "JS error: {}", msg),
        }
    }
}

impl std::error::Error for ViewportError {}
