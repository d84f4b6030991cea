//! In-memory [`UiBinding`] for host-side tests and headless use.
//!
//! Elements are registered up front with the selectors they answer to.
//! Events are fired by hand: [`MemoryUi::activate`], [`MemoryUi::scroll_to`]
//! and [`MemoryUi::set_visibility`], which mimics an intersection observer
//! by reporting an entry only when the visible ratio crosses the threshold.

use crate::error::SetupError;
use crate::reveal::RevealOptions;
use crate::ui::{IntersectionEntry, IntersectionHandler, UiBinding};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Default)]
struct Node {
    selectors: Vec<String>,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    content: String,
}

type Shared<T> = Rc<RefCell<T>>;

struct Observer {
    id: u64,
    targets: Vec<ElementId>,
    options: RevealOptions,
    last_ratio: BTreeMap<ElementId, f64>,
    handler: Shared<IntersectionHandler<ElementId>>,
}

#[derive(Default)]
struct MemoryDom {
    nodes: Vec<Node>,
    stylesheets: Vec<String>,
    scroll_y: f64,
    next_listener: u64,
    activate: Vec<(u64, ElementId, Shared<Box<dyn FnMut()>>)>,
    scroll: Vec<(u64, Shared<Box<dyn FnMut(f64)>>)>,
    observers: Vec<Observer>,
    fail_stylesheets: bool,
}

impl MemoryDom {
    fn node(&self, id: ElementId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: ElementId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn next_id(&mut self) -> u64 {
        self.next_listener += 1;
        self.next_listener
    }

    fn remove_listener(&mut self, id: u64) {
        self.activate.retain(|(l, _, _)| *l != id);
        self.scroll.retain(|(l, _)| *l != id);
        self.observers.retain(|o| o.id != id);
    }

    fn listener_count(&self) -> usize {
        self.activate.len() + self.scroll.len() + self.observers.len()
    }
}

#[derive(Clone, Default)]
pub struct MemoryUi {
    dom: Shared<MemoryDom>,
}

/// Detaches its callback from the [`MemoryUi`] when dropped.
pub struct MemoryListener {
    dom: Weak<RefCell<MemoryDom>>,
    id: u64,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        if let Some(dom) = self.dom.upgrade() {
            if let Ok(mut dom) = dom.try_borrow_mut() {
                dom.remove_listener(self.id);
            }
        }
    }
}

impl MemoryUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element matched by each of `selectors`, with initial markup.
    pub fn add_element(&self, selectors: &[&str], content: &str) -> ElementId {
        let mut dom = self.dom.borrow_mut();
        dom.nodes.push(Node {
            selectors: selectors.iter().map(|s| (*s).to_owned()).collect(),
            content: content.to_owned(),
            ..Node::default()
        });
        ElementId(dom.nodes.len() - 1)
    }

    /// Make every later `append_stylesheet` fail, to exercise setup errors.
    pub fn reject_stylesheets(&self) {
        self.dom.borrow_mut().fail_stylesheets = true;
    }

    pub fn style(&self, element: ElementId, property: &str) -> Option<String> {
        self.dom.borrow().node(element).styles.get(property).cloned()
    }

    pub fn stylesheets(&self) -> Vec<String> {
        self.dom.borrow().stylesheets.clone()
    }

    pub fn scroll_y(&self) -> f64 {
        self.dom.borrow().scroll_y
    }

    pub fn listener_count(&self) -> usize {
        self.dom.borrow().listener_count()
    }

    fn listener(&self, id: u64) -> MemoryListener {
        MemoryListener {
            dom: Rc::downgrade(&self.dom),
            id,
        }
    }

    /// Fire the activation handlers of `element` (a click).
    pub fn activate(&self, element: ElementId) {
        let handlers: Vec<_> = self
            .dom
            .borrow()
            .activate
            .iter()
            .filter(|(_, target, _)| *target == element)
            .map(|(_, _, h)| h.clone())
            .collect();
        for h in handlers {
            (*h.borrow_mut())();
        }
    }

    /// Set the scroll offset and fire every scroll handler.
    pub fn scroll_to(&self, scroll_y: f64) {
        let handlers: Vec<_> = {
            let mut dom = self.dom.borrow_mut();
            dom.scroll_y = scroll_y;
            dom.scroll.iter().map(|(_, h)| h.clone()).collect()
        };
        for h in handlers {
            (*h.borrow_mut())(scroll_y);
        }
    }

    /// Report that `ratio` of `element` is now visible. Each observer watching
    /// it gets an entry on first report and whenever the ratio crosses its
    /// threshold; the entry intersects when `ratio >= threshold`.
    pub fn set_visibility(&self, element: ElementId, ratio: f64) {
        let mut calls = Vec::new();
        {
            let mut dom = self.dom.borrow_mut();
            for obs in dom.observers.iter_mut().filter(|o| o.targets.contains(&element)) {
                let threshold = obs.options.threshold;
                let now_in = ratio >= threshold;
                let crossed = obs
                    .last_ratio
                    .insert(element, ratio)
                    .map_or(true, |prev| (prev >= threshold) != now_in);
                if crossed {
                    let entry = IntersectionEntry {
                        target: element,
                        is_intersecting: now_in,
                        ratio,
                    };
                    calls.push((obs.handler.clone(), entry));
                }
            }
        }
        for (h, entry) in calls {
            (*h.borrow_mut())(vec![entry]);
        }
    }

    pub fn observed(&self, element: ElementId) -> bool {
        self.dom
            .borrow()
            .observers
            .iter()
            .any(|o| o.targets.contains(&element))
    }

    pub fn observer_options(&self) -> Vec<RevealOptions> {
        self.dom
            .borrow()
            .observers
            .iter()
            .map(|o| o.options.clone())
            .collect()
    }
}

impl UiBinding for MemoryUi {
    type Element = ElementId;
    type Listener = MemoryListener;

    fn query(&self, selector: &str) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.dom
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.selectors.iter().any(|s| s == selector))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn on_activate(
        &self,
        element: &ElementId,
        handler: Box<dyn FnMut()>,
    ) -> Result<MemoryListener, SetupError> {
        let id = {
            let mut dom = self.dom.borrow_mut();
            let id = dom.next_id();
            dom.activate
                .push((id, *element, Rc::new(RefCell::new(handler))));
            id
        };
        Ok(self.listener(id))
    }

    fn on_scroll(&self, handler: Box<dyn FnMut(f64)>) -> Result<MemoryListener, SetupError> {
        let id = {
            let mut dom = self.dom.borrow_mut();
            let id = dom.next_id();
            dom.scroll.push((id, Rc::new(RefCell::new(handler))));
            id
        };
        Ok(self.listener(id))
    }

    fn observe_intersections(
        &self,
        elements: &[ElementId],
        options: &RevealOptions,
        handler: IntersectionHandler<ElementId>,
    ) -> Result<MemoryListener, SetupError> {
        let id = {
            let mut dom = self.dom.borrow_mut();
            let id = dom.next_id();
            dom.observers.push(Observer {
                id,
                targets: elements.to_vec(),
                options: options.clone(),
                last_ratio: BTreeMap::new(),
                handler: Rc::new(RefCell::new(handler)),
            });
            id
        };
        Ok(self.listener(id))
    }

    fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.dom.borrow().node(*element).classes.contains(class)
    }

    fn set_class(&self, element: &ElementId, class: &str, present: bool) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.node_mut(*element).classes;
        if present {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }

    fn set_style_property(&self, element: &ElementId, property: &str, value: &str) {
        self.dom
            .borrow_mut()
            .node_mut(*element)
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    fn content(&self, element: &ElementId) -> String {
        self.dom.borrow().node(*element).content.clone()
    }

    fn set_content(&self, element: &ElementId, markup: &str) {
        self.dom.borrow_mut().node_mut(*element).content = markup.to_owned();
    }

    fn append_stylesheet(&self, css: &str) -> Result<(), SetupError> {
        let mut dom = self.dom.borrow_mut();
        if dom.fail_stylesheets {
            return Err(SetupError::Dom("stylesheet rejected".into()));
        }
        dom.stylesheets.push(css.to_owned());
        Ok(())
    }
}
