use crate::constants::*;
use crate::reveal::RevealOptions;
use std::time::Duration;

/// Everything the page behaviors read at setup time.
///
/// `Default` reproduces the stock portfolio markup and timings; callers only
/// need to override the fields that differ for their page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub link_selector: String,
    pub navbar_selector: String,
    pub section_selector: String,
    pub code_selector: String,

    pub open_class: String,
    pub revealed_class: String,

    pub scroll_threshold_px: f64,
    pub navbar_light: String,
    pub navbar_dark: String,

    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_offset_px: u32,
    pub reveal_transition_secs: f32,

    pub typing_start_delay: Duration,
    pub typing_step_delay: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            toggle_selector: NAV_TOGGLE_SELECTOR.to_owned(),
            menu_selector: NAV_MENU_SELECTOR.to_owned(),
            link_selector: NAV_LINK_SELECTOR.to_owned(),
            navbar_selector: NAVBAR_SELECTOR.to_owned(),
            section_selector: SECTION_SELECTOR.to_owned(),
            code_selector: CODE_BLOCK_SELECTOR.to_owned(),
            open_class: MENU_OPEN_CLASS.to_owned(),
            revealed_class: REVEALED_CLASS.to_owned(),
            scroll_threshold_px: NAVBAR_SCROLL_THRESHOLD_PX,
            navbar_light: NAVBAR_LIGHT_BACKGROUND.to_owned(),
            navbar_dark: NAVBAR_DARK_BACKGROUND.to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            reveal_offset_px: REVEAL_OFFSET_PX,
            reveal_transition_secs: REVEAL_TRANSITION_SECS,
            typing_start_delay: TYPING_START_DELAY,
            typing_step_delay: TYPING_STEP_DELAY,
        }
    }
}

impl PageConfig {
    #[inline]
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.reveal_threshold,
            root_margin: self.reveal_root_margin.clone(),
        }
    }
}
