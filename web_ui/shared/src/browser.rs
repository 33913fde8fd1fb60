//! The blocking bits of the browser a page talks to: alerts, confirmations and navigation.

use gloo::console;

use crate::utils::window;

pub trait Browser {
    /// Blocking modal with a single OK button.
    fn alert(&self, message: &str);
    /// Blocking OK/Cancel modal, `true` on OK.
    fn confirm(&self, message: &str) -> bool;
    /// Leave the current document for `href`.
    fn navigate(&self, href: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            console::error!(format!("alert failed -> {:?}", e).as_str());
        }
    }

    fn confirm(&self, message: &str) -> bool {
        match window().confirm_with_message(message) {
            Ok(v) => v,
            Err(e) => {
                console::error!(format!("confirm failed -> {:?}", e).as_str());
                false
            }
        }
    }

    fn navigate(&self, href: &str) {
        #[cfg(debug_assertions)]
        console::debug!(format!("browser::navigate -> {}", href).as_str());
        if let Err(e) = window().location().set_href(href) {
            console::error!(format!("failed to navigate to {} -> {:?}", href, e).as_str());
        }
    }
}
