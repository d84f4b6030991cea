#![cfg(target_arch = "wasm32")]
use portfolio_core::{bind_page, PageConfig, PageHandle};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod timer;

use dom::DomUi;
use timer::TimeoutScheduler;

thread_local! {
    static PAGE: RefCell<Option<PageHandle<DomUi>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Detach every listener registered by `start`. A typing animation already
/// in flight finishes on its own.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(handle) = PAGE.with(|p| p.borrow_mut().take()) {
        handle.dispose();
        log::info!("portfolio-web torn down");
    }
}

// Resolves once the parser has built the document (immediately if it already has).
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != constants::DOCUMENT_LOADING_STATE {
        return Ok(());
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        if let Err(e) = document.add_event_listener_with_callback_and_add_event_listener_options(
            constants::DOM_READY_EVENT,
            &resolve,
            &opts,
        ) {
            log::error!("ready listener: {:?}", e);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let ui = DomUi::new(window, document);
    dom_ready(ui.document()).await?;

    let scheduler = TimeoutScheduler::new(ui.window().clone());
    let handle = bind_page(&ui, &scheduler, &PageConfig::default())?;

    // a second start (hot reload) replaces and detaches the previous wiring
    PAGE.with(|p| p.borrow_mut().replace(handle));
    Ok(())
}
