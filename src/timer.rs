use crate::constants::timeout_millis;
use portfolio_core::{Scheduler, Task};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Scheduler`] backed by `window.setTimeout`.
#[derive(Clone)]
pub struct TimeoutScheduler {
    window: web::Window,
}

impl TimeoutScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        // freed by wasm-bindgen after its single invocation
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout_millis(delay),
            )
        {
            log::error!("setTimeout failed: {:?}", e);
        }
    }
}
