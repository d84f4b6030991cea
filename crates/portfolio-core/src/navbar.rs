use crate::config::PageConfig;
use crate::constants::NAVBAR_BACKGROUND_PROPERTY;
use crate::error::SetupError;
use crate::ui::UiBinding;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarShade {
    Light,
    Dark,
}

impl NavbarShade {
    /// Dark only once the page has scrolled strictly past `threshold_px`.
    #[inline]
    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[inline]
    pub fn color(self, cfg: &PageConfig) -> &str {
        match self {
            Self::Light => &cfg.navbar_light,
            Self::Dark => &cfg.navbar_dark,
        }
    }
}

pub fn apply_scroll<U: UiBinding>(
    ui: &U,
    navbar: &U::Element,
    scroll_y: f64,
    cfg: &PageConfig,
) -> NavbarShade {
    let shade = NavbarShade::for_scroll(scroll_y, cfg.scroll_threshold_px);
    ui.set_style_property(navbar, NAVBAR_BACKGROUND_PROPERTY, shade.color(cfg));
    shade
}

/// Re-evaluated on every scroll event; one style write per call, no throttling.
pub fn bind<U: UiBinding>(
    ui: &U,
    navbar: &U::Element,
    cfg: &PageConfig,
) -> Result<U::Listener, SetupError> {
    let (ui_s, navbar_s, cfg_s) = (ui.clone(), navbar.clone(), cfg.clone());
    ui.on_scroll(Box::new(move |scroll_y| {
        apply_scroll(&ui_s, &navbar_s, scroll_y, &cfg_s);
    }))
}
