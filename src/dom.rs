use crate::constants::{CLICK_EVENT, SCROLL_EVENT, STYLE_TAG};
use portfolio_core::ui::{ActivateHandler, IntersectionHandler, ScrollHandler};
use portfolio_core::{IntersectionEntry, RevealOptions, SetupError, UiBinding};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
fn dom_err(e: JsValue) -> SetupError {
    SetupError::Dom(format!("{:?}", e))
}

/// Registered callback; removes itself from the page when dropped.
pub enum DomListener {
    Event {
        target: web::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut()>,
    },
    Observer {
        observer: web::IntersectionObserver,
        _closure: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
    },
}

impl Drop for DomListener {
    fn drop(&mut self) {
        match self {
            DomListener::Event {
                target,
                event,
                closure,
            } => {
                let _ = target
                    .remove_event_listener_with_callback(*event, closure.as_ref().unchecked_ref());
            }
            DomListener::Observer { observer, .. } => observer.disconnect(),
        }
    }
}

/// [`UiBinding`] over the live browser document.
#[derive(Clone)]
pub struct DomUi {
    window: web::Window,
    document: web::Document,
}

impl DomUi {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    #[inline]
    pub fn window(&self) -> &web::Window {
        &self.window
    }

    #[inline]
    pub fn document(&self) -> &web::Document {
        &self.document
    }

    fn listen(
        &self,
        target: web::EventTarget,
        event: &'static str,
        handler: Box<dyn FnMut()>,
    ) -> Result<DomListener, SetupError> {
        let closure = Closure::wrap(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        Ok(DomListener::Event {
            target,
            event,
            closure,
        })
    }
}

impl UiBinding for DomUi {
    type Element = web::Element;
    type Listener = DomListener;

    fn query(&self, selector: &str) -> Option<web::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<web::Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::warn!("[dom] invalid selector {selector}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect()
    }

    fn on_activate(
        &self,
        element: &web::Element,
        handler: ActivateHandler,
    ) -> Result<DomListener, SetupError> {
        self.listen(element.clone().into(), CLICK_EVENT, handler)
    }

    fn on_scroll(&self, mut handler: ScrollHandler) -> Result<DomListener, SetupError> {
        let window = self.window.clone();
        self.listen(
            self.window.clone().into(),
            SCROLL_EVENT,
            Box::new(move || handler(window.scroll_y().unwrap_or(0.0))),
        )
    }

    fn observe_intersections(
        &self,
        elements: &[web::Element],
        options: &RevealOptions,
        mut handler: IntersectionHandler<web::Element>,
    ) -> Result<DomListener, SetupError> {
        let closure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let entries: Vec<_> = entries
                    .iter()
                    .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .map(|e| IntersectionEntry {
                        target: e.target(),
                        is_intersecting: e.is_intersecting(),
                        ratio: e.intersection_ratio(),
                    })
                    .collect();
                handler(entries);
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
                .map_err(dom_err)?;
        for el in elements {
            observer.observe(el);
        }
        Ok(DomListener::Observer {
            observer,
            _closure: closure,
        })
    }

    fn has_class(&self, element: &web::Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&self, element: &web::Element, class: &str, present: bool) {
        let list = element.class_list();
        let res = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(e) = res {
            log::warn!("[dom] class {class}: {:?}", e);
        }
    }

    fn set_style_property(&self, element: &web::Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<web::HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn content(&self, element: &web::Element) -> String {
        element.inner_html()
    }

    fn set_content(&self, element: &web::Element, markup: &str) {
        element.set_inner_html(markup);
    }

    fn append_stylesheet(&self, css: &str) -> Result<(), SetupError> {
        let style = self.document.create_element(STYLE_TAG).map_err(dom_err)?;
        style.set_text_content(Some(css));
        let head = self
            .document
            .head()
            .ok_or_else(|| SetupError::Dom("document has no <head>".into()))?;
        head.append_child(&style).map_err(dom_err)?;
        Ok(())
    }
}
