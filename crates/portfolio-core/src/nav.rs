use crate::config::PageConfig;
use crate::error::SetupError;
use crate::ui::UiBinding;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

impl MenuState {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[inline]
pub fn menu_state<U: UiBinding>(ui: &U, menu: &U::Element, open_class: &str) -> MenuState {
    if ui.has_class(menu, open_class) {
        MenuState::Open
    } else {
        MenuState::Closed
    }
}

pub fn toggle_menu<U: UiBinding>(ui: &U, menu: &U::Element, open_class: &str) -> MenuState {
    let next = menu_state(ui, menu, open_class).toggled();
    ui.set_class(menu, open_class, next.is_open());
    next
}

#[inline]
pub fn close_menu<U: UiBinding>(ui: &U, menu: &U::Element, open_class: &str) {
    ui.set_class(menu, open_class, false);
}

/// Toggle control flips the menu; every link inside the menu closes it.
pub fn bind<U: UiBinding>(
    ui: &U,
    toggle: &U::Element,
    menu: &U::Element,
    links: &[U::Element],
    cfg: &PageConfig,
) -> Result<Vec<U::Listener>, SetupError> {
    let mut listeners = Vec::with_capacity(links.len() + 1);

    let (ui_t, menu_t, class_t) = (ui.clone(), menu.clone(), cfg.open_class.clone());
    listeners.push(ui.on_activate(
        toggle,
        Box::new(move || {
            toggle_menu(&ui_t, &menu_t, &class_t);
        }),
    )?);

    for link in links {
        let (ui_l, menu_l, class_l) = (ui.clone(), menu.clone(), cfg.open_class.clone());
        listeners.push(ui.on_activate(
            link,
            Box::new(move || close_menu(&ui_l, &menu_l, &class_l)),
        )?);
    }
    log::debug!("[nav] toggle bound, {} menu links", links.len());
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_twice_is_identity() {
        for s in [MenuState::Open, MenuState::Closed] {
            assert_eq!(s.toggled().toggled(), s);
            assert_ne!(s.toggled(), s);
        }
    }
}
