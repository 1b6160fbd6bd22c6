//! Smooth scrolling via `Element.scrollIntoView`

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{Scroller, ViewportError};

/// Scrolls the window so the target element comes into view, animated.
///
/// Stateless: looks the element up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScroller;

impl Scroller for SmoothScroller {
    fn scroll_to(&self, target_id: &str) -> Result<(), ViewportError> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or(ViewportError::NoDocument)?;
        let element = document
            .get_element_by_id(target_id)
            .ok_or_else(|| ViewportError::ElementNotFound(target_id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}
