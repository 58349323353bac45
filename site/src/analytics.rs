//! Analytics stub contract.
//!
//! Pages load a tiny head script that defines a global `gtag(command, ...)`
//! queue. The consent manager only ever talks to it through [`Analytics`], so
//! tests record commands with [`RecordingAnalytics`] and the browser build
//! forwards them with `GtagAnalytics`.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

/// Value of a single consent flag on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagState {
    Granted,
    Denied,
}

/// The four consent flags sent with every consent command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ConsentFlags {
    pub analytics_storage: FlagState,
    pub ad_storage: FlagState,
    pub ad_user_data: FlagState,
    pub ad_personalization: FlagState,
}

impl ConsentFlags {
    #[must_use]
    pub fn all(state: FlagState) -> Self {
        Self { analytics_storage: state, ad_storage: state, ad_user_data: state, ad_personalization: state }
    }
}

/// A `gtag` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GtagCommand {
    /// `gtag('consent', 'default', flags)`, issued once per page load.
    ConsentDefault(ConsentFlags),
    /// `gtag('consent', 'update', flags)`.
    ConsentUpdate(ConsentFlags),
}

impl GtagCommand {
    /// The `(command, action)` pair passed as the first two `gtag` arguments.
    #[must_use]
    pub fn verb(&self) -> (&'static str, &'static str) {
        match self {
            Self::ConsentDefault(_) => ("consent", "default"),
            Self::ConsentUpdate(_) => ("consent", "update"),
        }
    }

    #[must_use]
    pub fn flags(&self) -> &ConsentFlags {
        match self {
            Self::ConsentDefault(flags) | Self::ConsentUpdate(flags) => flags,
        }
    }
}

/// The default-deny command every page issues before the consent manager runs.
#[must_use]
pub fn default_denied_command() -> GtagCommand {
    GtagCommand::ConsentDefault(ConsentFlags::all(FlagState::Denied))
}

/// Receiver of analytics commands.
pub trait Analytics {
    fn command(&self, cmd: &GtagCommand);
}

/// Records every command; clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingAnalytics {
    log: Rc<RefCell<Vec<GtagCommand>>>,
}

impl RecordingAnalytics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> Vec<GtagCommand> {
        self.log.borrow().clone()
    }
}

impl Analytics for RecordingAnalytics {
    fn command(&self, cmd: &GtagCommand) {
        self.log.borrow_mut().push(cmd.clone());
    }
}

/// Forwards commands to the page's global `gtag` function, if one exists.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GtagAnalytics;

#[cfg(feature = "hydrate")]
impl GtagAnalytics {
    fn flags_object(flags: &ConsentFlags) -> js_sys::Object {
        let obj = js_sys::Object::new();
        let entries = [
            ("analytics_storage", flags.analytics_storage),
            ("ad_storage", flags.ad_storage),
            ("ad_user_data", flags.ad_user_data),
            ("ad_personalization", flags.ad_personalization),
        ];
        for (name, state) in entries {
            let value = match state {
                FlagState::Granted => "granted",
                FlagState::Denied => "denied",
            };
            let _ = js_sys::Reflect::set(&obj, &name.into(), &value.into());
        }
        obj
    }
}

#[cfg(feature = "hydrate")]
impl Analytics for GtagAnalytics {
    fn command(&self, cmd: &GtagCommand) {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(gtag) = js_sys::Reflect::get(&window, &"gtag".into()) else {
            return;
        };
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            log::debug!("gtag not present; skipping {:?}", cmd.verb());
            return;
        };
        let (command, action) = cmd.verb();
        if let Err(e) = gtag.call3(
            &wasm_bindgen::JsValue::NULL,
            &command.into(),
            &action.into(),
            &Self::flags_object(cmd.flags()),
        ) {
            log::warn!("gtag {command} {action} failed: {e:?}");
        }
    }
}
