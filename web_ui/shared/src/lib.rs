//! Pieces every page of the feedback web ui needs: the session, the backend client,
//! the browser seam and a handful of markup helpers.

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

use std::fmt;

use error::FetchError;
#[cfg(debug_assertions)]
use gloo::console;
use sentiment_proto::constants::{APPLICATION_JSON, CONTENT_TYPE};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub mod api;
pub mod browser;
pub mod chart;
pub mod constants;
pub mod error;
#[macro_use]
pub mod macros;
pub mod models;
pub mod ui;
pub mod utils;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RequestMethod {
    GET,
    POST,
    DELETE,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestMethod::GET => f.write_str("GET"),
            RequestMethod::POST => f.write_str("POST"),
            RequestMethod::DELETE => f.write_str("DELETE"),
        }
    }
}

/// Build and send a request to the backend, with the JSON content type when there's a body,
/// and pull back (status, body text)
pub async fn do_request(
    uri: &str,
    method: RequestMethod,
    body: Option<JsValue>,
) -> Result<(u16, String), FetchError> {
    let opts = RequestInit::new();
    opts.set_method(&method.to_string());
    // the backend lives on its own origin
    opts.set_mode(RequestMode::Cors);

    let has_body = body.is_some();
    if let Some(body) = body {
        #[cfg(debug_assertions)]
        if method == RequestMethod::GET {
            console::debug!("This seems odd, you've supplied a body with a GET request?")
        }
        opts.set_body(&body);
    }

    let request = Request::new_with_str_and_init(uri, &opts)?;
    if has_body {
        request.headers().set(CONTENT_TYPE, APPLICATION_JSON)?;
    }

    let window = utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    let status = resp.status();

    let text = JsFuture::from(resp.text()?).await?;
    let body = text.as_string().unwrap_or_default();

    #[cfg(debug_assertions)]
    console::debug!(format!("do_request {} {} -> {}", method, uri, status).as_str());

    Ok((status, body))
}
