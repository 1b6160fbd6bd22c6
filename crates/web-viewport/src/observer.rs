//! IntersectionObserver-backed viewport watcher

use std::collections::HashMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{IntersectionChange, ViewportError, ViewportObserver};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Whether the current window exposes `IntersectionObserver`
pub fn is_supported() -> bool {
    web_sys::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Browser implementation of [`ViewportObserver`].
///
/// Owns the JS callback for as long as the observer lives, so the watcher
/// must outlive every element it observes. Dropping it disconnects.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    document: web_sys::Document,
    targets: HashMap<String, Element>,
    connected: bool,
    _callback: EntriesCallback,
}

impl IntersectionWatcher {
    /// Create an observer that reports threshold crossings to `on_change`
    pub fn connect<F>(threshold: f64, mut on_change: F) -> Result<Self, ViewportError>
    where
        F: FnMut(IntersectionChange) + 'static,
    {
        if !is_supported() {
            return Err(ViewportError::Unsupported);
        }
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or(ViewportError::NoDocument)?;

        let callback = EntriesCallback::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target_id = entry.target().id();
                // Anonymous elements can't be keyed
                if target_id.is_empty() {
                    continue;
                }
                on_change(IntersectionChange::new(target_id, entry.is_intersecting()));
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.clamp(0.0, 1.0)));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| ViewportError::from_js(&e))?;

        Ok(Self {
            observer,
            document,
            targets: HashMap::new(),
            connected: true,
            _callback: callback,
        })
    }
}

impl ViewportObserver for IntersectionWatcher {
    fn watch(&mut self, target_id: &str) -> Result<(), ViewportError> {
        if self.targets.contains_key(target_id) {
            return Ok(());
        }
        let element = self
            .document
            .get_element_by_id(target_id)
            .ok_or_else(|| ViewportError::ElementNotFound(target_id.to_string()))?;
        self.observer.observe(&element);
        self.targets.insert(target_id.to_string(), element);
        Ok(())
    }

    fn unwatch(&mut self, target_id: &str) {
        if let Some(element) = self.targets.remove(target_id) {
            self.observer.unobserve(&element);
        }
    }

    fn disconnect(&mut self) {
        if self.connected {
            self.observer.disconnect();
            self.targets.clear();
            self.connected = false;
        }
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        // The callback is freed right after this; the browser must not call it again
        self.disconnect();
    }
}
