//! The document capability every page behavior is written against.
//!
//! The web front-end implements [`UiBinding`] over `web-sys`; host tests use
//! [`crate::memory::MemoryUi`]. Behaviors never touch a global document, they
//! receive the binding explicitly and hand back the listener handles they
//! registered.

use crate::error::SetupError;
use crate::reveal::RevealOptions;

/// One visibility change reported by an intersection watcher.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
    pub ratio: f64,
}

pub type ActivateHandler = Box<dyn FnMut()>;
pub type ScrollHandler = Box<dyn FnMut(f64)>;
pub type IntersectionHandler<E> = Box<dyn FnMut(Vec<IntersectionEntry<E>>)>;

pub trait UiBinding: Clone + 'static {
    /// Handle to a single element. Cheap to clone, compared by identity.
    type Element: Clone + PartialEq + 'static;
    /// Registration handle; dropping it detaches the callback.
    type Listener: 'static;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn on_activate(
        &self,
        element: &Self::Element,
        handler: ActivateHandler,
    ) -> Result<Self::Listener, SetupError>;

    /// `handler` receives the vertical scroll offset of the page.
    fn on_scroll(&self, handler: ScrollHandler) -> Result<Self::Listener, SetupError>;

    fn observe_intersections(
        &self,
        elements: &[Self::Element],
        options: &RevealOptions,
        handler: IntersectionHandler<Self::Element>,
    ) -> Result<Self::Listener, SetupError>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn set_class(&self, element: &Self::Element, class: &str, present: bool);
    fn set_style_property(&self, element: &Self::Element, property: &str, value: &str);

    /// Markup currently rendered inside `element`.
    fn content(&self, element: &Self::Element) -> String;
    fn set_content(&self, element: &Self::Element, markup: &str);

    fn append_stylesheet(&self, css: &str) -> Result<(), SetupError>;
}
