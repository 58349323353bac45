//! Cookie consent state machine.
//!
//! DESIGN
//! ======
//! A consent record is two storage keys: the choice and the consent schema
//! version it was recorded under. A record only counts when its version equals
//! [`SiteConfig::consent_version`]; bumping the version re-prompts everyone.
//!
//! ```text
//! Unknown --(valid record)--------------------------> Applied
//! Unknown --(no/stale record)--> ModalShown --choose--> Applied
//! Applied --reset--> Unknown
//! ```
//!
//! Granting sends a `consent update` with all four flags granted. Denying
//! sends nothing: the head script already issued a default-deny command.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::analytics::{Analytics, ConsentFlags, FlagState, GtagCommand};
use crate::config::SiteConfig;
use crate::storage::{KeyValueStore, StorageError, persist};

/// The user's answer to the consent prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    Granted,
    Denied,
}

impl ConsentChoice {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for ConsentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            other => Err(format!("unknown consent choice `{other}`")),
        }
    }
}

/// A persisted consent decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentRecord {
    pub choice: ConsentChoice,
    pub version: String,
}

/// Where the manager is in the consent lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsentPhase {
    #[default]
    Unknown,
    ModalShown,
    Applied(ConsentChoice),
}

/// Outcome of [`ConsentManager::init`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentDecision {
    /// A valid record was found and applied; no UI.
    Applied(ConsentChoice),
    /// No valid record; the modal must be shown.
    ShowModal,
}

/// Snapshot of what storage holds, for the consent diagnostics panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsentStatus {
    pub stored_choice: Option<String>,
    pub stored_version: Option<String>,
    pub current: bool,
}

impl fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stored_choice {
            Some(choice) => {
                let version = self.stored_version.as_deref().unwrap_or("N/A");
                let state = if self.current { "current" } else { "outdated, modal will show" };
                write!(f, "Consent: {choice}; Version: {version}; Status: stored ({state})")
            }
            None => f.write_str("Status: no consent stored (modal should show)"),
        }
    }
}

/// Reads, applies, and records consent.
pub struct ConsentManager<S, A> {
    store: S,
    analytics: A,
    config: SiteConfig,
    phase: ConsentPhase,
}

impl<S: KeyValueStore, A: Analytics> ConsentManager<S, A> {
    pub fn new(store: S, analytics: A, config: SiteConfig) -> Self {
        Self { store, analytics, config, phase: ConsentPhase::Unknown }
    }

    #[must_use]
    pub fn phase(&self) -> ConsentPhase {
        self.phase
    }

    /// The stored record, if both keys are present and the choice parses.
    /// The version is not checked here.
    #[must_use]
    pub fn stored_record(&self) -> Option<ConsentRecord> {
        let choice = self.store.get(&self.config.keys.consent)?;
        let version = self.store.get(&self.config.keys.consent_version)?;
        let choice = match choice.parse() {
            Ok(choice) => choice,
            Err(e) => {
                log::warn!("ignoring stored consent: {e}");
                return None;
            }
        };
        Some(ConsentRecord { choice, version })
    }

    /// The stored record when it matches the current consent version.
    #[must_use]
    pub fn valid_record(&self) -> Option<ConsentRecord> {
        self.stored_record()
            .filter(|record| record.version == self.config.consent_version)
    }

    /// Page-load entry point.
    pub fn init(&mut self) -> ConsentDecision {
        if let Some(record) = self.valid_record() {
            self.apply(record.choice);
            self.phase = ConsentPhase::Applied(record.choice);
            return ConsentDecision::Applied(record.choice);
        }
        self.phase = ConsentPhase::ModalShown;
        ConsentDecision::ShowModal
    }

    /// Record the user's choice from the modal. Returns how long the modal
    /// fades before it is removed and page scroll restored.
    pub fn choose(&mut self, choice: ConsentChoice) -> Duration {
        persist(&self.store, &self.config.keys.consent, choice.as_str());
        persist(&self.store, &self.config.keys.consent_version, &self.config.consent_version);
        self.apply(choice);
        self.phase = ConsentPhase::Applied(choice);
        log::info!("consent {choice} recorded (version {})", self.config.consent_version);
        self.config.consent_fade()
    }

    /// Forget the stored record. The browser binding reloads the page after.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either key could not be removed; the phase
    /// is still reset.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.phase = ConsentPhase::Unknown;
        let first = self.store.remove(&self.config.keys.consent);
        let second = self.store.remove(&self.config.keys.consent_version);
        first.and(second)
    }

    #[must_use]
    pub fn status(&self) -> ConsentStatus {
        let stored_choice = self.store.get(&self.config.keys.consent);
        let stored_version = self.store.get(&self.config.keys.consent_version);
        ConsentStatus { current: self.valid_record().is_some(), stored_choice, stored_version }
    }

    fn apply(&self, choice: ConsentChoice) {
        if choice == ConsentChoice::Granted {
            self.analytics
                .command(&GtagCommand::ConsentUpdate(ConsentFlags::all(FlagState::Granted)));
        }
    }
}
