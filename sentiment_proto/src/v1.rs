use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/* ===== roles ===== */

/// The role a session claims. Only [`Role::Admin`] unlocks anything.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict: the stored value must already be lower case. Anything else is not a role.
impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Role::Guest),
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/* ===== records ===== */

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub message: String,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    /// ISO-8601 without an offset, as the backend stores UTC.
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    /// Left as the server sent it, so "Admin" and "admin" both survive here.
    #[serde(default)]
    pub role: Option<String>,
}

/// Counts the backend sent as `null` or left out read as 0.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub positive: u64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub negative: u64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub neutral: u64,
}

impl Summary {
    pub const LABELS: [&'static str; 3] = ["Positive", "Negative", "Neutral"];

    /// Counts in the same order as [`Summary::LABELS`].
    pub fn counts(&self) -> [u64; 3] {
        [self.positive, self.negative, self.neutral]
    }
}

/* ===== requests ===== */

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub name: String,
    pub message: String,
}

/* ===== responses ===== */

/// Plain acknowledgement, returned by register and the delete endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// The body of any non-2xx response from the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// The account a login answers with. Every field is optional, only the role is used.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

impl LoginResponse {
    /// The role to keep in the session: lower-cased, `user` when the server sent none.
    pub fn session_role(&self) -> String {
        self.user
            .as_ref()
            .and_then(|u| u.role.as_deref())
            .map(str::to_lowercase)
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| Role::User.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedbackResult {
    #[serde(default)]
    pub saved: bool,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<Feedback>,
}

impl FeedbackResult {
    pub fn display_label(&self) -> &str {
        self.sentiment
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or("Unknown")
    }
}
