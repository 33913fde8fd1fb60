//! The sentiment feedback web ui. Each host page loads the same bundle and calls
//! [run_app], which works out which page it's on and mounts it.

#![recursion_limit = "256"]
#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

#[cfg(debug_assertions)]
use gloo::console;
use sentiment_web_ui_shared::api::SentimentClientBuilder;
use sentiment_web_ui_shared::browser::{Browser, WebBrowser};
use sentiment_web_ui_shared::models::{BrowserStorage, Session};
use sentiment_web_ui_shared::utils;
use wasm_bindgen::prelude::*;

mod admin;
mod feedback;
mod login;
mod manager;
mod register;
mod welcome;

#[cfg(test)]
mod mock;

use manager::{dispatch, AppContext, Dispatch, ManagerApp, ManagerProps};

/// This is the entry point of the web front end. Admins landing on the feedback page are
/// sent to the dashboard before anything renders.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_app() -> Result<(), JsValue> {
    let path = utils::current_path();
    let role = Session::new(BrowserStorage).role();

    match dispatch(&path, role) {
        Dispatch::Redirect(page) => {
            WebBrowser.navigate(page.href());
        }
        Dispatch::Render(page) => {
            let api = SentimentClientBuilder::new()
                .address_from_document()
                .build()
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            #[cfg(debug_assertions)]
            console::debug!(format!("run_app -> {:?} against {}", page, api.origin()).as_str());

            yew::Renderer::<ManagerApp>::with_props(ManagerProps {
                page,
                app: AppContext::new(api),
            })
            .render();
        }
        Dispatch::Nothing => {
            #[cfg(debug_assertions)]
            console::debug!(format!("run_app -> nothing to render at {}", path).as_str());
        }
    }
    Ok(())
}
