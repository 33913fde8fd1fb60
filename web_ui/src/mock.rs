//! Test doubles for the backend and the browser.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use sentiment_proto::v1::{
    Feedback, FeedbackRequest, FeedbackResult, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, Summary, User,
};
use sentiment_web_ui_shared::api::SentimentApi;
use sentiment_web_ui_shared::browser::Browser;
use sentiment_web_ui_shared::error::ClientError;
use sentiment_web_ui_shared::models::{MemoryStorage, Session};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Register(RegisterRequest),
    Login(LoginRequest),
    PostFeedback(FeedbackRequest),
    GetSummary,
    GetRecent,
    ListUsers,
    ListFeedback,
    DeleteFeedback(i64),
    DeleteUser(i64),
}

fn unset<T>() -> Result<T, ClientError> {
    Err(ClientError::Transport("no canned response".to_string()))
}

/// Answers every call with a canned response and remembers what it was asked.
pub(crate) struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    pub register: Result<MessageResponse, ClientError>,
    pub login: Result<LoginResponse, ClientError>,
    pub feedback: Result<FeedbackResult, ClientError>,
    pub summary: Result<Summary, ClientError>,
    pub recent: Result<Vec<Feedback>, ClientError>,
    pub users: Result<Vec<User>, ClientError>,
    pub all_feedback: Result<Vec<Feedback>, ClientError>,
    pub delete: Result<(), ClientError>,
}

impl Default for MockApi {
    fn default() -> Self {
        MockApi {
            calls: RefCell::new(Vec::new()),
            register: unset(),
            login: unset(),
            feedback: unset(),
            summary: unset(),
            recent: unset(),
            users: unset(),
            all_feedback: unset(),
            delete: unset(),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl SentimentApi for MockApi {
    async fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.record(Call::Register(request.clone()));
        self.register.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.record(Call::Login(request.clone()));
        self.login.clone()
    }

    async fn post_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<FeedbackResult, ClientError> {
        self.record(Call::PostFeedback(request.clone()));
        self.feedback.clone()
    }

    async fn get_summary(&self) -> Result<Summary, ClientError> {
        self.record(Call::GetSummary);
        self.summary.clone()
    }

    async fn get_recent_feedback(&self) -> Result<Vec<Feedback>, ClientError> {
        self.record(Call::GetRecent);
        self.recent.clone()
    }

    async fn admin_list_users(&self) -> Result<Vec<User>, ClientError> {
        self.record(Call::ListUsers);
        self.users.clone()
    }

    async fn admin_list_feedback(&self) -> Result<Vec<Feedback>, ClientError> {
        self.record(Call::ListFeedback);
        self.all_feedback.clone()
    }

    async fn admin_delete_feedback(&self, id: i64) -> Result<(), ClientError> {
        self.record(Call::DeleteFeedback(id));
        self.delete.clone()
    }

    async fn admin_delete_user(&self, id: i64) -> Result<(), ClientError> {
        self.record(Call::DeleteUser(id));
        self.delete.clone()
    }
}

/// Records alerts, confirmations and navigations instead of showing them.
#[derive(Default)]
pub(crate) struct RecordingBrowser {
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
    pub refuse_confirm: Cell<bool>,
}

impl RecordingBrowser {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Browser for RecordingBrowser {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        !self.refuse_confirm.get()
    }

    fn navigate(&self, href: &str) {
        self.navigations.borrow_mut().push(href.to_string());
    }
}

pub(crate) fn session_as(email: &str, role: &str) -> Session<MemoryStorage> {
    let session = Session::new(MemoryStorage::default());
    session.record_login(email, role);
    session
}

pub(crate) fn feedback(id: i64, message: &str) -> Feedback {
    Feedback {
        id,
        name: None,
        message: message.to_string(),
        sentiment: None,
        score: None,
        timestamp: None,
    }
}
