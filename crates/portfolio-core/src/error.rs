use thiserror::Error;

/// Failures that can stop the page behaviors from being wired up.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A required structural element is absent from the document.
    #[error("missing {role} element (selector `{selector}`)")]
    MissingElement {
        role: &'static str,
        selector: String,
    },
    /// The host rejected a DOM operation (listener registration, stylesheet append, ...).
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl SetupError {
    pub fn missing(role: &'static str, selector: &str) -> Self {
        Self::MissingElement {
            role,
            selector: selector.to_owned(),
        }
    }
}
