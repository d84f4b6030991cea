use crate::config::PageConfig;
use crate::error::SetupError;
use crate::scheduler::Scheduler;
use crate::typing::{self, TypingHandle};
use crate::ui::UiBinding;
use crate::{nav, navbar, reveal, styles};

/// Everything registered by [`bind_page`]. Dropping it (or calling
/// [`PageHandle::dispose`]) detaches every event listener and observer.
/// A running typing animation is not cancelled.
pub struct PageHandle<U: UiBinding> {
    listeners: Vec<U::Listener>,
    typing: TypingHandle,
}

impl<U: UiBinding> PageHandle<U> {
    #[inline]
    pub fn typing(&self) -> &TypingHandle {
        &self.typing
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn dispose(self) {
        log::debug!("[page] disposing {} listeners", self.listeners.len());
        drop(self);
    }
}

fn require<U: UiBinding>(
    ui: &U,
    role: &'static str,
    selector: &str,
) -> Result<U::Element, SetupError> {
    ui.query(selector)
        .ok_or_else(|| SetupError::missing(role, selector))
}

/// Wire all five page behaviors against `ui`.
///
/// The toggle control, menu and navbar must exist; the code block is optional.
pub fn bind_page<U: UiBinding, S: Scheduler>(
    ui: &U,
    scheduler: &S,
    cfg: &PageConfig,
) -> Result<PageHandle<U>, SetupError> {
    let toggle = require(ui, "nav toggle", &cfg.toggle_selector)?;
    let menu = require(ui, "nav menu", &cfg.menu_selector)?;
    let navbar_el = require(ui, "navbar", &cfg.navbar_selector)?;
    let links = ui.query_all(&cfg.link_selector);
    let sections = ui.query_all(&cfg.section_selector);

    let mut listeners = nav::bind(ui, &toggle, &menu, &links, cfg)?;
    listeners.push(navbar::bind(ui, &navbar_el, cfg)?);
    listeners.extend(reveal::bind(ui, &sections, cfg)?);
    styles::inject(ui, cfg)?;
    let typing = typing::start(ui, scheduler, ui.query(&cfg.code_selector), cfg);

    log::info!(
        "portfolio loaded: {} links, {} sections, typing {:?}",
        links.len(),
        sections.len(),
        typing.phase()
    );
    Ok(PageHandle { listeners, typing })
}
