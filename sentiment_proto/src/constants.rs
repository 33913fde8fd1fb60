//! Shared URIs and storage keys
//!
//! The API paths are relative to the backend address the client was built with.

pub const APPLICATION_JSON: &str = "application/json";
pub const CONTENT_TYPE: &str = "content-type";

/// The backend the client talks to when nothing else is configured.
pub const DEFAULT_SERVER_ADDRESS: &str = "http://127.0.0.1:5000";

pub const API_REGISTER: &str = "/api/register";
pub const API_LOGIN: &str = "/api/login";
pub const API_FEEDBACK: &str = "/api/feedback";
pub const API_SUMMARY: &str = "/api/summary";
pub const API_FEEDBACKS: &str = "/api/feedbacks";
pub const API_ADMIN_USERS: &str = "/api/admin/users";
pub const API_ADMIN_FEEDBACKS: &str = "/api/admin/feedbacks";

/// `/api/admin/feedbacks/{id}/delete`
pub fn api_admin_feedback_delete(id: i64) -> String {
    format!("{}/{}/delete", API_ADMIN_FEEDBACKS, id)
}

/// `/api/admin/users/{id}/delete`
pub fn api_admin_user_delete(id: i64) -> String {
    format!("{}/{}/delete", API_ADMIN_USERS, id)
}

/// Local storage key holding the signed-in email.
pub const STORAGE_USER_EMAIL: &str = "userEmail";
/// Local storage key holding the signed-in role.
pub const STORAGE_USER_ROLE: &str = "userRole";

/// The display name used for sessions that never logged in.
pub const GUEST_NAME: &str = "Guest";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_paths_carry_the_id() {
        assert_eq!(
            api_admin_feedback_delete(42),
            "/api/admin/feedbacks/42/delete"
        );
        assert_eq!(api_admin_user_delete(7), "/api/admin/users/7/delete");
    }
}
