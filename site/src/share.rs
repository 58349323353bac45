//! Share button fallback chain.
//!
//! ```text
//! native share --ok/cancelled--> done
//!      | failed or unavailable
//!      v
//! clipboard ----ok--> "copied"
//!      | failed or unavailable
//!      v
//! hidden textarea copy --ok--> "copied"
//!      | failed
//!      v
//! show the raw link
//! ```
//!
//! Each step is a pure transition; the browser binding performs the step and
//! feeds the result back in.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// What the native share sheet receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// A failed share or copy attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    #[error("share cancelled")]
    Aborted,
    #[error("share failed: {0}")]
    Failed(String),
}

impl ShareError {
    /// Classify a DOM exception by its `name`.
    #[must_use]
    pub fn from_dom(name: &str, message: &str) -> Self {
        if name == "AbortError" { Self::Aborted } else { Self::Failed(format!("{name}: {message}")) }
    }
}

/// Message shown to the user once the chain ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareNotice {
    Copied,
    ManualLink(String),
}

impl ShareNotice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Copied => "Link copied to clipboard!".to_owned(),
            Self::ManualLink(url) => format!("Please copy this link: {url}"),
        }
    }
}

/// Next thing the binding should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareStep {
    Native(ShareData),
    Clipboard(String),
    TextareaCopy(String),
    Done(Option<ShareNotice>),
}

/// Capabilities detected on the current browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareSupport {
    pub native: bool,
    pub clipboard: bool,
}

impl ShareSupport {
    /// First step for `data`.
    #[must_use]
    pub fn start(self, data: ShareData) -> ShareStep {
        if self.native { ShareStep::Native(data) } else { self.copy(data.url) }
    }

    /// After the native share sheet settles.
    #[must_use]
    pub fn after_native(self, url: String, result: Result<(), ShareError>) -> ShareStep {
        match result {
            Ok(()) | Err(ShareError::Aborted) => ShareStep::Done(None),
            Err(e) => {
                log::error!("{e}");
                self.copy(url)
            }
        }
    }

    /// After the clipboard write settles.
    #[must_use]
    pub fn after_clipboard(self, url: String, result: Result<(), ShareError>) -> ShareStep {
        match result {
            Ok(()) => ShareStep::Done(Some(ShareNotice::Copied)),
            Err(_) => ShareStep::TextareaCopy(url),
        }
    }

    /// After the hidden-textarea copy command.
    #[must_use]
    pub fn after_textarea_copy(self, url: String, copied: bool) -> ShareStep {
        if copied {
            ShareStep::Done(Some(ShareNotice::Copied))
        } else {
            ShareStep::Done(Some(ShareNotice::ManualLink(url)))
        }
    }

    fn copy(self, url: String) -> ShareStep {
        if self.clipboard { ShareStep::Clipboard(url) } else { ShareStep::TextareaCopy(url) }
    }
}
