pub mod config;
pub mod constants;
pub mod error;
pub mod memory;
pub mod nav;
pub mod navbar;
pub mod page;
pub mod reveal;
pub mod scheduler;
pub mod styles;
pub mod typing;
pub mod ui;

pub use config::PageConfig;
pub use constants::*;
pub use error::SetupError;
pub use memory::{ElementId, MemoryListener, MemoryUi};
pub use nav::MenuState;
pub use navbar::NavbarShade;
pub use page::{bind_page, PageHandle};
pub use reveal::{RevealOptions, RevealTracker};
pub use scheduler::{LogicalClock, Scheduler, Task};
pub use typing::{TypingAnimator, TypingHandle, TypingPhase, TypingPlayback};
pub use ui::{IntersectionEntry, UiBinding};
