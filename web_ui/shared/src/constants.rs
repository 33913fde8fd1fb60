//! Constants

// Pages, each one is its own host document
pub const URL_FEEDBACK: &str = "index.html";
pub const URL_WELCOME: &str = "analysis.html";
pub const URL_LOGIN: &str = "login.html";
pub const URL_REGISTER: &str = "register.html";
pub const URL_ADMIN: &str = "admin.html";

/// `<meta name="sentiment-api" content="https://...">` in a host page overrides the backend address
pub const META_API_ADDRESS: &str = "sentiment-api";

/// Compared on the client only, the backend decides who is really an admin.
pub const ADMIN_PASSKEY: &str = "SuperSecret123";

/// How many recent feedback entries the feedback page shows
pub const RECENT_LIMIT: usize = 10;

// login page
pub const ID_LOGIN_FORM: &str = "loginForm";
pub const ID_LOGIN_EMAIL: &str = "loginEmail";
pub const ID_LOGIN_PASSWORD: &str = "loginPassword";

// register page
pub const ID_REGISTER_FORM: &str = "registerForm";
pub const ID_REGISTER_NAME: &str = "regName";
pub const ID_REGISTER_EMAIL: &str = "regEmail";
pub const ID_REGISTER_PASSWORD: &str = "regPassword";
pub const ID_REGISTER_ROLE: &str = "regRole";
pub const ID_ADMIN_PASSKEY: &str = "adminPasskey";

// feedback page
pub const ID_FEEDBACK_FORM: &str = "feedbackForm";
pub const ID_FEEDBACK_NAME: &str = "name";
pub const ID_FEEDBACK_MESSAGE: &str = "message";
pub const ID_SENTIMENT_CHART: &str = "sentimentChart";

// admin page
pub const ID_USERS_TABLE: &str = "usersTable";
pub const ID_FEEDBACK_TABLE: &str = "feedbackTable";

// CSS classes that get applied to full-page forms
pub const CSS_CLASSES_BODY_FORM: &[&str] = &["flex-column", "d-flex", "h-100"];

pub const CSS_ALERT_DANGER: &str = "alert alert-danger";
pub const CSS_PAGE_HEADER: &str =
    "d-flex flex-wrap flex-md-nowrap align-items-center pt-3 pb-2 mb-3 border-bottom";
pub const CSS_TABLE: &str = "table table-striped table-hover";
pub const CSS_CELL: &str = "p-1";
pub const CSS_HIDDEN: &str = "hidden";

pub const CLASS_BUTTON_DARK: &str = "btn btn-dark";
pub const CLASS_BUTTON_DANGER: &str = "btn btn-sm btn-danger";
pub const CLASS_DIV_LOGIN_FIELD: &str = "input-group mb-3";
pub const CLASS_DIV_LOGIN_BUTTON: &str = "d-flex justify-content-center mb-3";
