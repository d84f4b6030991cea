use crate::config::PageConfig;
use crate::error::SetupError;
use crate::ui::UiBinding;

/// Transition rules for the reveal animation: hidden and shifted down by
/// default, fully visible in place once the revealed class lands.
pub fn reveal_stylesheet(cfg: &PageConfig) -> String {
    let section = &cfg.section_selector;
    let revealed = &cfg.revealed_class;
    let offset = cfg.reveal_offset_px;
    let secs = cfg.reveal_transition_secs;
    format!(
        "
    {section} {{
        opacity: 0;
        transform: translateY({offset}px);
        transition: opacity {secs}s ease, transform {secs}s ease;
    }}
    {section}.{revealed} {{
        opacity: 1;
        transform: translateY(0);
    }}
"
    )
}

#[inline]
pub fn inject<U: UiBinding>(ui: &U, cfg: &PageConfig) -> Result<(), SetupError> {
    ui.append_stylesheet(&reveal_stylesheet(cfg))
}
