//! Contact form submission stub.
//!
//! There is no backend: a submit shows a sending state, and after a short
//! delay reports success, resets the form, and restores the button. The status
//! line hides itself a few seconds later.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent. (This is a demo - configure form submission in the code)";

/// Class list for the `#form-status` element once the message is sent.
pub const SUCCESS_STATUS_CLASS: &str = "form-status success";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    sending: bool,
    /// Bumped every time a status is shown, so an older auto-hide timer does
    /// not hide a newer message.
    status_seq: u64,
}

impl ContactForm {
    /// Start a submission. `false` while one is already in flight.
    pub fn submit(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    /// Finish the in-flight submission. Returns the status sequence to pass
    /// back to [`ContactForm::status_expired`].
    pub fn sent(&mut self) -> Option<u64> {
        if !self.sending {
            return None;
        }
        self.sending = false;
        self.status_seq += 1;
        Some(self.status_seq)
    }

    /// Whether the auto-hide for status `seq` should still hide it.
    #[must_use]
    pub fn status_expired(&self, seq: u64) -> bool {
        seq == self.status_seq
    }
}
