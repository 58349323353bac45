//! Cookie consent dialog.

use leptos::prelude::*;

pub const OVERLAY_CLASS: &str = "cookie-consent-overlay";
pub const ACCEPT_BUTTON_ID: &str = "cookie-accept-btn";
pub const REJECT_BUTTON_ID: &str = "cookie-reject-btn";

/// Full-page overlay asking for analytics consent. The binding wires the two
/// buttons by id after mounting.
#[component]
pub fn ConsentModal() -> impl IntoView {
    view! {
        <div
            class=OVERLAY_CLASS
            role="dialog"
            aria-labelledby="cookie-consent-title"
            aria-describedby="cookie-consent-description"
        >
            <div class="cookie-consent-modal">
                <div class="cookie-consent-icon">"🍪"</div>
                <h2 id="cookie-consent-title">"Zgoda na pliki cookie"</h2>
                <p id="cookie-consent-description">
                    "Ta witryna używa plików cookie i Google Analytics do analizy ruchu oraz poprawy jakości usług. "
                    "Czy zgadzasz się na wykorzystanie plików cookie?"
                </p>
                <div class="cookie-consent-buttons">
                    <button class="cookie-consent-accept" id=ACCEPT_BUTTON_ID>
                        "✓ Tak, zgadzam się"
                    </button>
                    <button class="cookie-consent-reject" id=REJECT_BUTTON_ID>
                        "✗ Nie, dzięki"
                    </button>
                </div>
            </div>
        </div>
    }
}
