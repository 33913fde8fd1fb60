//! Typed access to the sentiment backend.
//!
//! Every response body is decoded into an explicit schema here, so a page never sees a
//! half-shaped JSON value: it gets the record, or a [ClientError].

use std::fmt::{Display, Formatter};

use async_trait::async_trait;
#[cfg(debug_assertions)]
use gloo::console;
use sentiment_proto::constants::{
    api_admin_feedback_delete, api_admin_user_delete, API_ADMIN_FEEDBACKS, API_ADMIN_USERS,
    API_FEEDBACK, API_FEEDBACKS, API_LOGIN, API_REGISTER, API_SUMMARY, DEFAULT_SERVER_ADDRESS,
};
use sentiment_proto::v1::{
    ErrorResponse, Feedback, FeedbackRequest, FeedbackResult, LoginRequest, LoginResponse,
    MessageResponse, RegisterRequest, Summary, User,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use wasm_bindgen::JsValue;

use crate::constants::META_API_ADDRESS;
use crate::error::ClientError;
use crate::{do_request, utils, RequestMethod};

/// Everything the pages ask of the backend. One attempt per call, no retries.
#[async_trait(?Send)]
pub trait SentimentApi {
    async fn register_user(&self, request: &RegisterRequest)
        -> Result<MessageResponse, ClientError>;

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;

    async fn post_feedback(&self, request: &FeedbackRequest)
        -> Result<FeedbackResult, ClientError>;

    async fn get_summary(&self) -> Result<Summary, ClientError>;

    /// Newest first, in the order the server returned them.
    async fn get_recent_feedback(&self) -> Result<Vec<Feedback>, ClientError>;

    async fn admin_list_users(&self) -> Result<Vec<User>, ClientError>;

    async fn admin_list_feedback(&self) -> Result<Vec<Feedback>, ClientError>;

    async fn admin_delete_feedback(&self, id: i64) -> Result<(), ClientError>;

    async fn admin_delete_user(&self, id: i64) -> Result<(), ClientError>;
}

/// Turn a finished response into `T`, or the reason it can't be one.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ClientError::JsonDecode(e.to_string()))
}

/// Success or failure only, the body of a 2xx is not inspected.
pub fn check_status(status: u16, body: &str) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        let emsg = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.error);
        Err(ClientError::Http(status, emsg))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentClientBuilder {
    address: Option<String>,
}

impl Display for SentimentClientBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.address {
            Some(value) => write!(f, "address: {}", value),
            None => write!(f, "address: unset"),
        }
    }
}

impl SentimentClientBuilder {
    pub fn new() -> Self {
        SentimentClientBuilder { address: None }
    }

    pub fn address(self, address: String) -> Self {
        SentimentClientBuilder {
            address: Some(address),
        }
    }

    /// Use the host page's `<meta name="sentiment-api">` if it has one.
    pub fn address_from_document(self) -> Self {
        match utils::meta_content(META_API_ADDRESS) {
            Some(address) => self.address(address),
            None => self,
        }
    }

    pub fn build(self) -> Result<SentimentClient, ClientError> {
        let address = self
            .address
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let origin = Url::parse(address.trim())
            .map_err(|e| ClientError::ConfigParseIssue(format!("{} -> {:?}", address, e)))?;

        match origin.scheme() {
            "http" | "https" => Ok(SentimentClient { origin }),
            scheme => Err(ClientError::ConfigParseIssue(format!(
                "unsupported scheme {} in {}",
                scheme, address
            ))),
        }
    }
}

/// Talks to the backend with `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentClient {
    origin: Url,
}

impl SentimentClient {
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn make_url(&self, path: &str) -> Result<Url, ClientError> {
        self.origin
            .join(path)
            .map_err(|e| ClientError::ConfigParseIssue(format!("{} -> {:?}", path, e)))
    }

    async fn perform(
        &self,
        path: &str,
        method: RequestMethod,
        body: Option<JsValue>,
    ) -> Result<(u16, String), ClientError> {
        let url = self.make_url(path)?;
        #[cfg(debug_assertions)]
        console::debug!(format!("api::perform -> {} {}", method, url).as_str());
        do_request(url.as_str(), method, body)
            .await
            .map_err(ClientError::from)
    }

    async fn perform_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let (status, body) = self.perform(path, RequestMethod::GET, None).await?;
        decode_response(status, &body)
    }

    async fn perform_post<R: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        request: &R,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_string(request)
            .map(|s| JsValue::from_str(&s))
            .map_err(|e| ClientError::JsonEncode(e.to_string()))?;
        let (status, body) = self
            .perform(path, RequestMethod::POST, Some(body))
            .await?;
        decode_response(status, &body)
    }

    async fn perform_delete(&self, path: &str) -> Result<(), ClientError> {
        let (status, body) = self.perform(path, RequestMethod::DELETE, None).await?;
        check_status(status, &body)
    }
}

#[async_trait(?Send)]
impl SentimentApi for SentimentClient {
    async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.perform_post(API_REGISTER, request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.perform_post(API_LOGIN, request).await
    }

    async fn post_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResult, ClientError> {
        self.perform_post(API_FEEDBACK, request).await
    }

    async fn get_summary(&self) -> Result<Summary, ClientError> {
        self.perform_get(API_SUMMARY).await
    }

    async fn get_recent_feedback(&self) -> Result<Vec<Feedback>, ClientError> {
        self.perform_get(API_FEEDBACKS).await
    }

    async fn admin_list_users(&self) -> Result<Vec<User>, ClientError> {
        self.perform_get(API_ADMIN_USERS).await
    }

    async fn admin_list_feedback(&self) -> Result<Vec<Feedback>, ClientError> {
        self.perform_get(API_ADMIN_FEEDBACKS).await
    }

    async fn admin_delete_feedback(&self, id: i64) -> Result<(), ClientError> {
        self.perform_delete(&api_admin_feedback_delete(id)).await
    }

    async fn admin_delete_user(&self, id: i64) -> Result<(), ClientError> {
        self.perform_delete(&api_admin_user_delete(id)).await
    }
}
