use crate::config::PageConfig;
use crate::error::SetupError;
use crate::ui::{IntersectionEntry, UiBinding};

/// Intersection watcher settings: fire once `threshold` of the element is
/// visible, with the viewport shrunk by `root_margin` (CSS margin syntax).
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// Remembers which sections have already been revealed.
///
/// Revealing is one-way: an entry that stops intersecting is ignored, so a
/// section keeps its revealed class for the rest of the page's life.
#[derive(Debug)]
pub struct RevealTracker<E> {
    revealed: Vec<E>,
}

impl<E> Default for RevealTracker<E> {
    fn default() -> Self {
        Self {
            revealed: Vec::new(),
        }
    }
}

impl<E: Clone + PartialEq> RevealTracker<E> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_revealed(&self, element: &E) -> bool {
        self.revealed.contains(element)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Record a batch of entries; returns the elements revealed for the first time.
    pub fn apply(&mut self, entries: &[IntersectionEntry<E>]) -> Vec<E> {
        let mut fresh = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.is_revealed(&entry.target) {
                self.revealed.push(entry.target.clone());
                fresh.push(entry.target.clone());
            }
        }
        fresh
    }
}

/// Watch `sections`; each one that intersects gains the revealed class.
/// Returns `None` when there is nothing to watch.
pub fn bind<U: UiBinding>(
    ui: &U,
    sections: &[U::Element],
    cfg: &PageConfig,
) -> Result<Option<U::Listener>, SetupError> {
    if sections.is_empty() {
        log::debug!("[reveal] no sections to watch");
        return Ok(None);
    }
    let ui_r = ui.clone();
    let class = cfg.revealed_class.clone();
    let mut tracker = RevealTracker::new();
    let listener = ui.observe_intersections(
        sections,
        &cfg.reveal_options(),
        Box::new(move |entries| {
            for el in tracker.apply(&entries) {
                ui_r.set_class(&el, &class, true);
            }
            log::debug!(
                "[reveal] {} entries, {} revealed so far",
                entries.len(),
                tracker.revealed_count()
            );
        }),
    )?;
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(target: u32, is_intersecting: bool) -> IntersectionEntry<u32> {
        IntersectionEntry {
            target,
            is_intersecting,
            ratio: if is_intersecting { 0.5 } else { 0.0 },
        }
    }

    #[test]
    fn only_intersecting_entries_are_revealed() {
        let mut t = RevealTracker::new();
        let fresh = t.apply(&[entry(1, true), entry(2, false), entry(3, true)]);
        assert_eq!(fresh, vec![1, 3]);
        assert!(t.is_revealed(&1));
        assert!(!t.is_revealed(&2));
    }

    #[test]
    fn reveal_is_one_way_and_reported_once() {
        let mut t = RevealTracker::new();
        assert_eq!(t.apply(&[entry(7, true)]), vec![7]);
        assert!(t.apply(&[entry(7, false)]).is_empty());
        assert!(t.is_revealed(&7));
        assert!(t.apply(&[entry(7, true)]).is_empty());
        assert_eq!(t.revealed_count(), 1);
    }
}
