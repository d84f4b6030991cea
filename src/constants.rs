use std::time::Duration;

// DOM event names
pub const CLICK_EVENT: &str = "click";
pub const SCROLL_EVENT: &str = "scroll";
pub const DOM_READY_EVENT: &str = "DOMContentLoaded";

// document.readyState while the parser is still running
pub const DOCUMENT_LOADING_STATE: &str = "loading";

pub const STYLE_TAG: &str = "style";

/// `setTimeout` takes a signed 32-bit millisecond count; longer delays clamp.
#[inline]
pub fn timeout_millis(delay: Duration) -> i32 {
    delay.as_millis().min(i32::MAX as u128) as i32
}
