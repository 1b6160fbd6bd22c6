//! Navigation State
//!
//! The active section and the per-section visibility map. Pure data; the
//! reactive wrapper lives in `controller`.

use std::collections::HashMap;

use crate::models::SectionId;

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    sections: Vec<SectionId>,
    active: SectionId,
    visibility: HashMap<SectionId, bool>,
    /// Set when the viewport can't be observed; every section counts as visible
    fail_open: bool,
}

impl NavState {
    pub fn new(sections: Vec<SectionId>, default_section: SectionId) -> Self {
        Self {
            sections,
            active: default_section,
            visibility: HashMap::new(),
            fail_open: false,
        }
    }

    /// Sections that can be navigated to and observed, in page order
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Map a raw id to a configured section
    pub fn resolve(&self, raw: &str) -> Option<SectionId> {
        raw.parse::<SectionId>()
            .ok()
            .filter(|id| self.sections.contains(id))
    }

    /// Make `id` the active section. Returns whether it changed.
    pub fn activate(&mut self, id: SectionId) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id;
        true
    }

    /// Record the latest intersection report for a raw DOM id.
    /// Returns whether the stored value changed.
    pub fn record_intersection(&mut self, raw: &str, visible: bool) -> bool {
        match self.resolve(raw) {
            Some(id) => self.set_visibility(id, visible),
            None => false,
        }
    }

    pub fn set_visibility(&mut self, id: SectionId, visible: bool) -> bool {
        self.visibility.insert(id, visible) != Some(visible)
    }

    /// Last reported value, `None` before the first report
    pub fn visibility(&self, id: SectionId) -> Option<bool> {
        self.visibility.get(&id).copied()
    }

    /// Number of sections with at least one report
    #[cfg(test)]
    pub fn observed(&self) -> usize {
        self.visibility.len()
    }

    /// Whether a section should be shown revealed
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.fail_open || self.visibility(id).unwrap_or(false)
    }

    /// Stop gating on visibility; used when the viewport can't be observed
    pub fn fail_open(&mut self) {
        self.fail_open = true;
    }

    #[cfg(test)]
    pub fn is_fail_open(&self) -> bool {
        self.fail_open
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec(), SectionId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::default();
        assert_eq!(state.active(), SectionId::Home);
        assert_eq!(state.observed(), 0);
        for id in SectionId::ALL {
            assert_eq!(state.visibility(id), None);
            assert!(!state.is_visible(id));
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let state = NavState::default();
        assert_eq!(state.resolve("projects"), Some(SectionId::Projects));
        assert_eq!(state.resolve("nonexistent"), None);
        assert_eq!(state.resolve("PROJECTS"), None);
        assert_eq!(state.resolve(""), None);
    }

    #[test]
    fn test_activate_reports_change() {
        let mut state = NavState::default();
        assert!(state.activate(SectionId::Projects));
        assert_eq!(state.active(), SectionId::Projects);

        let before = state.clone();
        assert!(!state.activate(SectionId::Projects));
        assert_eq!(state, before);
    }

    #[test]
    fn test_ids_outside_configured_sections() {
        let mut state = NavState::new(vec![SectionId::Home, SectionId::About], SectionId::Home);
        assert_eq!(state.resolve("experience"), None);
        assert_eq!(state.active(), SectionId::Home);
        assert!(!state.record_intersection("experience", true));
        assert_eq!(state.observed(), 0);
    }

    #[test]
    fn test_last_write_wins() {
        let mut state = NavState::default();
        assert!(state.record_intersection("skills", true));
        assert_eq!(state.visibility(SectionId::Skills), Some(true));
        assert!(state.record_intersection("skills", false));
        assert_eq!(state.visibility(SectionId::Skills), Some(false));
        assert!(!state.is_visible(SectionId::Skills));
    }

    #[test]
    fn test_repeated_report_is_idempotent() {
        let mut state = NavState::default();
        assert!(state.record_intersection("about", true));
        let snapshot = state.clone();
        assert!(!state.record_intersection("about", true));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_first_false_report_creates_entry() {
        let mut state = NavState::default();
        assert!(state.record_intersection("contact", false));
        assert_eq!(state.visibility(SectionId::Contact), Some(false));
        assert_eq!(state.observed(), 1);
    }

    #[test]
    fn test_sections_interleave_independently() {
        let mut state = NavState::default();
        state.record_intersection("about", true);
        state.record_intersection("skills", true);
        state.record_intersection("about", false);
        assert_eq!(state.visibility(SectionId::About), Some(false));
        assert_eq!(state.visibility(SectionId::Skills), Some(true));
        assert_eq!(state.active(), SectionId::Home);
    }

    #[test]
    fn test_fail_open_reveals_everything() {
        let mut state = NavState::default();
        state.record_intersection("skills", false);
        state.fail_open();
        assert!(state.is_fail_open());
        assert!(SectionId::ALL.iter().all(|id| state.is_visible(*id)));
        // recorded values are kept as reported
        assert_eq!(state.visibility(SectionId::Skills), Some(false));
    }
}
