//! Navigation Controller
//!
//! Reactive wrapper around [`NavState`]. Owns the injected scroll facility
//! and attaches a viewport observer whose lifetime is tied to a guard.

use leptos::prelude::*;
use web_viewport::{IntersectionChange, Scroller, ViewportError, ViewportObserver};

use crate::models::SectionId;
use crate::nav::NavState;

/// Handler an observer calls for every intersection change
pub type ChangeHandler = Box<dyn FnMut(IntersectionChange)>;

/// Copyable handle to the navigation state
pub struct NavController<S: 'static> {
    state: RwSignal<NavState>,
    scroller: StoredValue<S>,
}

impl<S: 'static> Clone for NavController<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for NavController<S> {}

impl<S> NavController<S>
where
    S: Scroller + Send + Sync + 'static,
{
    pub fn new(state: NavState, scroller: S) -> Self {
        Self {
            state: RwSignal::new(state),
            scroller: StoredValue::new(scroller),
        }
    }

    /// Scroll to a section and highlight it right away.
    ///
    /// The active section is updated without waiting for the scroll to
    /// finish. Ids outside the configured sections are ignored.
    pub fn navigate_to(&self, raw: &str) -> bool {
        let Some(target) = self.state.with_untracked(|s| s.resolve(raw)) else {
            log::debug!("[NAV] ignoring navigation to unknown section '{}'", raw);
            return false;
        };

        if let Err(err) = self.scroller.with_value(|s| s.scroll_to(target.as_str())) {
            log::warn!("[NAV] scroll to '{}' failed: {}", target, err);
        }
        self.state.maybe_update(|s| s.activate(target));
        log::debug!("[NAV] active section -> {}", target);
        true
    }

    /// Apply one intersection report. Only real changes notify subscribers.
    pub fn record_intersection(&self, raw: &str, visible: bool) -> bool {
        let mut changed = false;
        self.state.maybe_update(|s| {
            changed = s.record_intersection(raw, visible);
            changed
        });
        changed
    }

    /// Active section (tracked)
    pub fn active_section(&self) -> SectionId {
        self.state.with(|s| s.active())
    }

    /// Whether a section should be revealed (tracked)
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.state.with(|s| s.is_visible(id))
    }

    /// Configured sections (untracked, fixed at startup)
    pub fn sections(&self) -> Vec<SectionId> {
        self.state.with_untracked(|s| s.sections().to_vec())
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> NavState {
        self.state.get_untracked()
    }

    /// Treat every section as visible
    pub fn fail_open(&self) {
        self.state.update(NavState::fail_open);
    }

    /// Build an observer with `connect` and watch every configured section.
    ///
    /// If no observer can be built the controller fails open and `None` is
    /// returned. A section that can't be watched is revealed on its own.
    pub fn observe<O, F>(&self, connect: F) -> Option<ObserverGuard<O>>
    where
        O: ViewportObserver,
        F: FnOnce(ChangeHandler) -> Result<O, ViewportError>,
    {
        let nav = *self;
        let handler: ChangeHandler = Box::new(move |change: IntersectionChange| {
            nav.record_intersection(&change.target_id, change.is_intersecting);
        });

        let mut observer = match connect(handler) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("[NAV] viewport observation unavailable ({}), revealing all sections", err);
                self.fail_open();
                return None;
            }
        };

        let mut watched = Vec::new();
        for id in self.sections() {
            match observer.watch(id.as_str()) {
                Ok(()) => watched.push(id),
                Err(err) => {
                    log::warn!("[NAV] cannot watch '{}' ({}), revealing it", id, err);
                    self.state.update(|s| {
                        s.set_visibility(id, true);
                    });
                }
            }
        }
        log::info!("[NAV] observing {} sections", watched.len());

        Some(ObserverGuard { observer, watched })
    }

    /// Fill an empty slot with a freshly observed guard.
    ///
    /// Returns `false` without connecting when the slot already holds one.
    pub fn attach<O, F>(&self, slot: ObserverSlot<O>, connect: F) -> bool
    where
        O: ViewportObserver + 'static,
        F: FnOnce(ChangeHandler) -> Result<O, ViewportError>,
    {
        if slot.with_value(Option::is_some) {
            return false;
        }
        let guard = self.observe(connect);
        slot.update_value(|held| *held = guard);
        true
    }

    /// Observe sections once the first render has put them in the DOM.
    ///
    /// The observer is released when the current owner is cleaned up.
    pub fn attach_on_mount<O, F>(&self, connect: F) -> ObserverSlot<O>
    where
        O: ViewportObserver + 'static,
        F: Fn(ChangeHandler) -> Result<O, ViewportError> + 'static,
    {
        let nav = *self;
        let slot = observer_slot();
        Effect::new(move |_| {
            nav.attach(slot, &connect);
        });
        slot
    }
}

/// Holds the page's observer guard on the current owner
pub type ObserverSlot<O> = StoredValue<Option<ObserverGuard<O>>, LocalStorage>;

/// Create an empty slot that releases its guard when the current owner is
/// cleaned up.
pub fn observer_slot<O: ViewportObserver + 'static>() -> ObserverSlot<O> {
    let slot = StoredValue::new_local(None);
    on_cleanup(move || {
        drop(slot.try_update_value(Option::take));
    });
    slot
}

/// Keeps an observer attached. Dropping it unwatches every section and
/// disconnects the observer.
pub struct ObserverGuard<O: ViewportObserver> {
    observer: O,
    watched: Vec<SectionId>,
}

impl<O: ViewportObserver> ObserverGuard<O> {
    #[cfg(test)]
    pub fn watched(&self) -> &[SectionId] {
        &self.watched
    }
}

impl<O: ViewportObserver> Drop for ObserverGuard<O> {
    fn drop(&mut self) {
        for id in self.watched.drain(..) {
            self.observer.unwatch(id.as_str());
        }
        self.observer.disconnect();
        log::debug!("[NAV] viewport observer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingScroller {
        requests: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl RecordingScroller {
        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Scroller for RecordingScroller {
        fn scroll_to(&self, target_id: &str) -> Result<(), ViewportError> {
            self.requests.lock().unwrap().push(target_id.to_string());
            if self.fail {
                return Err(ViewportError::ElementNotFound(target_id.to_string()));
            }
            Ok(())
        }
    }

    type Emitter = Rc<RefCell<Option<ChangeHandler>>>;

    struct FakeObserver {
        calls: Rc<RefCell<Vec<String>>>,
        missing: Vec<&'static str>,
    }

    impl ViewportObserver for FakeObserver {
        fn watch(&mut self, target_id: &str) -> Result<(), ViewportError> {
            if self.missing.iter().any(|m| *m == target_id) {
                return Err(ViewportError::ElementNotFound(target_id.to_string()));
            }
            self.calls.borrow_mut().push(format!("watch:{}", target_id));
            Ok(())
        }

        fn unwatch(&mut self, target_id: &str) {
            self.calls.borrow_mut().push(format!("unwatch:{}", target_id));
        }

        fn disconnect(&mut self) {
            self.calls.borrow_mut().push("disconnect".to_string());
        }
    }

    fn emit(emitter: &Emitter, id: &str, visible: bool) {
        let mut slot = emitter.borrow_mut();
        let handler = slot.as_mut().expect("observer connected");
        handler(IntersectionChange::new(id, visible));
    }

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(f)
    }

    fn controller(scroller: RecordingScroller) -> NavController<RecordingScroller> {
        NavController::new(NavState::default(), scroller)
    }

    fn attach(
        nav: NavController<RecordingScroller>,
        missing: Vec<&'static str>,
    ) -> (Option<ObserverGuard<FakeObserver>>, Emitter, Rc<RefCell<Vec<String>>>) {
        let emitter: Emitter = Rc::new(RefCell::new(None));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let guard = nav.observe(|handler| {
            *emitter.borrow_mut() = Some(handler);
            Ok(FakeObserver {
                calls: calls.clone(),
                missing,
            })
        });
        (guard, emitter, calls)
    }

    #[test]
    fn test_initial_state() {
        with_owner(|| {
            let nav = controller(RecordingScroller::default());
            let state = nav.snapshot();
            assert_eq!(state.active(), SectionId::Home);
            assert_eq!(state.observed(), 0);
        });
    }

    #[test]
    fn test_navigate_every_section() {
        with_owner(|| {
            for id in SectionId::ALL {
                let scroller = RecordingScroller::default();
                let nav = controller(scroller.clone());
                assert!(nav.navigate_to(id.as_str()));
                assert_eq!(nav.snapshot().active(), id);
                assert_eq!(scroller.requests(), vec![id.as_str().to_string()]);
            }
        });
    }

    #[test]
    fn test_navigate_to_projects() {
        with_owner(|| {
            let scroller = RecordingScroller::default();
            let nav = controller(scroller.clone());
            nav.navigate_to("projects");
            assert_eq!(nav.snapshot().active(), SectionId::Projects);
            assert_eq!(scroller.requests(), vec!["projects".to_string()]);
        });
    }

    #[test]
    fn test_unknown_section_is_noop() {
        with_owner(|| {
            let scroller = RecordingScroller::default();
            let nav = controller(scroller.clone());
            nav.navigate_to("about");
            let before = nav.snapshot();

            assert!(!nav.navigate_to("nonexistent"));
            assert_eq!(nav.snapshot(), before);
            assert_eq!(scroller.requests(), vec!["about".to_string()]);
        });
    }

    #[test]
    fn test_scroll_failure_still_activates() {
        with_owner(|| {
            let scroller = RecordingScroller {
                fail: true,
                ..RecordingScroller::default()
            };
            let nav = controller(scroller.clone());
            assert!(nav.navigate_to("experience"));
            assert_eq!(nav.snapshot().active(), SectionId::Experience);
            assert_eq!(scroller.requests().len(), 1);
        });
    }

    #[test]
    fn test_observe_watches_configured_sections() {
        with_owner(|| {
            let nav = NavController::new(
                NavState::new(vec![SectionId::Home, SectionId::Skills], SectionId::Home),
                RecordingScroller::default(),
            );
            let (guard, _emitter, calls) = attach(nav, vec![]);
            let guard = guard.unwrap();
            assert_eq!(guard.watched(), &[SectionId::Home, SectionId::Skills]);
            assert_eq!(*calls.borrow(), vec!["watch:home", "watch:skills"]);
        });
    }

    #[test]
    fn test_reports_update_visibility() {
        with_owner(|| {
            let nav = controller(RecordingScroller::default());
            let (_guard, emitter, _calls) = attach(nav, vec![]);

            emit(&emitter, "skills", true);
            assert_eq!(nav.snapshot().visibility(SectionId::Skills), Some(true));

            emit(&emitter, "skills", false);
            assert_eq!(nav.snapshot().visibility(SectionId::Skills), Some(false));

            // ids from elements we never asked about are dropped
            emit(&emitter, "sidebar", true);
            assert_eq!(nav.snapshot().observed(), 1);
        });
    }

    #[test]
    fn test_repeated_report_changes_nothing() {
        with_owner(|| {
            let nav = controller(RecordingScroller::default());
            assert!(nav.record_intersection("about", true));
            let before = nav.snapshot();
            assert!(!nav.record_intersection("about", true));
            assert_eq!(nav.snapshot(), before);
        });
    }

    #[test]
    fn test_drop_guard_releases_observer() {
        with_owner(|| {
            let nav = NavController::new(
                NavState::new(vec![SectionId::About, SectionId::Contact], SectionId::About),
                RecordingScroller::default(),
            );
            let (guard, _emitter, calls) = attach(nav, vec![]);
            drop(guard);
            assert_eq!(
                *calls.borrow(),
                vec![
                    "watch:about",
                    "watch:contact",
                    "unwatch:about",
                    "unwatch:contact",
                    "disconnect"
                ]
            );
        });
    }

    #[test]
    fn test_connect_failure_fails_open() {
        with_owner(|| {
            let nav = controller(RecordingScroller::default());
            let guard: Option<ObserverGuard<FakeObserver>> = nav.observe(|_| Err(ViewportError::Unsupported));
            assert!(guard.is_none());
            assert!(SectionId::ALL.iter().all(|id| nav.snapshot().is_visible(*id)));
        });
    }

    #[test]
    fn test_missing_element_is_revealed() {
        with_owner(|| {
            let nav = controller(RecordingScroller::default());
            let (guard, _emitter, _calls) = attach(nav, vec!["experience"]);
            let guard = guard.unwrap();
            assert!(!guard.watched().contains(&SectionId::Experience));
            assert_eq!(guard.watched().len(), SectionId::ALL.len() - 1);

            let state = nav.snapshot();
            assert!(state.is_visible(SectionId::Experience));
            assert!(!state.is_visible(SectionId::Skills));
        });
    }

    #[test]
    fn test_navigate_to_active_section_notifies_nobody() {
        with_owner(|| {
            let scroller = RecordingScroller::default();
            let nav = controller(scroller.clone());
            let runs = Arc::new(AtomicUsize::new(0));
            let counted = runs.clone();
            let active = Memo::new(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
                nav.active_section()
            });
            assert_eq!(active.get_untracked(), SectionId::Home);

            assert!(nav.navigate_to("home"));
            assert_eq!(active.get_untracked(), SectionId::Home);
            assert_eq!(runs.load(Ordering::SeqCst), 1);
            // the scroll is still issued
            assert_eq!(scroller.requests(), vec!["home".to_string()]);

            nav.navigate_to("skills");
            assert_eq!(active.get_untracked(), SectionId::Skills);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_owner_cleanup_releases_observer() {
        let owner = Owner::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        owner.with(|| {
            let nav = NavController::new(
                NavState::new(vec![SectionId::About, SectionId::Contact], SectionId::About),
                RecordingScroller::default(),
            );
            let slot = observer_slot();
            assert!(nav.attach(slot, |_| {
                Ok(FakeObserver {
                    calls: calls.clone(),
                    missing: vec![],
                })
            }));
            assert!(slot.with_value(Option::is_some));
        });
        assert_eq!(*calls.borrow(), vec!["watch:about", "watch:contact"]);

        owner.cleanup();
        assert_eq!(
            *calls.borrow(),
            vec![
                "watch:about",
                "watch:contact",
                "unwatch:about",
                "unwatch:contact",
                "disconnect"
            ]
        );
    }

    #[test]
    fn test_full_slot_does_not_reconnect() {
        with_owner(|| {
            let nav = controller(RecordingScroller::default());
            let calls = Rc::new(RefCell::new(Vec::new()));
            let connects = Cell::new(0);
            let connect = |_: ChangeHandler| {
                connects.set(connects.get() + 1);
                Ok(FakeObserver {
                    calls: calls.clone(),
                    missing: vec![],
                })
            };
            let slot = observer_slot();

            assert!(nav.attach(slot, connect));
            assert!(!nav.attach(slot, connect));
            assert_eq!(connects.get(), 1);
            assert_eq!(calls.borrow().len(), SectionId::ALL.len());
        });
    }

    #[test]
    fn test_failed_connect_leaves_slot_empty() {
        with_owner(|| {
            let nav = controller(RecordingScroller::default());
            let slot: ObserverSlot<FakeObserver> = observer_slot();
            assert!(nav.attach(slot, |_| Err(ViewportError::Unsupported)));
            assert!(slot.with_value(Option::is_none));
            assert!(nav.snapshot().is_fail_open());
        });
    }
}
