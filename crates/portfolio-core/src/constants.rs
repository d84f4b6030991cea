use std::time::Duration;

// Page structure markers
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-menu a";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const SECTION_SELECTOR: &str = ".section";
pub const CODE_BLOCK_SELECTOR: &str = ".card-content code";

// Marker classes
pub const MENU_OPEN_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "animate-in";

// Navbar
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0; // strictly greater switches to dark
pub const NAVBAR_BACKGROUND_PROPERTY: &str = "background";
pub const NAVBAR_LIGHT_BACKGROUND: &str = "rgba(10, 15, 26, 0.8)";
pub const NAVBAR_DARK_BACKGROUND: &str = "rgba(10, 15, 26, 0.95)";

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element's area
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: u32 = 30;
pub const REVEAL_TRANSITION_SECS: f32 = 0.6;

// Typing effect
pub const TYPING_START_DELAY: Duration = Duration::from_millis(1000);
pub const TYPING_STEP_DELAY: Duration = Duration::from_millis(15);
