//! Users and feedback tables for admins, each with a delete button per row.

use gloo::console;
use sentiment_proto::v1::{Feedback, User};
use sentiment_web_ui_shared::api::SentimentApi;
use sentiment_web_ui_shared::browser::Browser;
use sentiment_web_ui_shared::constants::{
    CLASS_BUTTON_DANGER, CLASS_BUTTON_DARK, CSS_CELL, CSS_TABLE, ID_FEEDBACK_TABLE,
    ID_USERS_TABLE, URL_LOGIN,
};
use sentiment_web_ui_shared::error::ClientError;
use sentiment_web_ui_shared::models::{Session, SessionStore};
use sentiment_web_ui_shared::ui::{do_alert_error, do_footer, do_page_header, loading_spinner};
use sentiment_web_ui_shared::utils::format_timestamp;
use yew::prelude::*;

use crate::manager::PageProps;

/// Sends anyone who isn't an admin back to the login page. Returns true when they may stay.
pub fn admin_guard<S: SessionStore, B: Browser>(session: &Session<S>, browser: &B) -> bool {
    if session.is_admin() {
        true
    } else {
        browser.alert("Access denied. Admins only.");
        browser.navigate(URL_LOGIN);
        false
    }
}

pub fn logout<S: SessionStore, B: Browser>(session: &Session<S>, browser: &B) {
    session.clear();
    browser.navigate(URL_LOGIN);
}

/// Anything shown as a table row that can be deleted by id.
pub trait Row {
    fn row_id(&self) -> i64;
}

impl Row for Feedback {
    fn row_id(&self) -> i64 {
        self.id
    }
}

impl Row for User {
    fn row_id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed { emsg: String },
}

impl<T: Row> TableState<T> {
    pub fn from_response(res: Result<Vec<T>, ClientError>) -> Self {
        match res {
            Ok(rows) => TableState::Loaded(rows),
            Err(e) => TableState::Failed {
                emsg: e.to_string(),
            },
        }
    }

    /// Drop exactly the row with this id, if the table has loaded.
    pub fn remove(&mut self, id: i64) {
        if let TableState::Loaded(rows) = self {
            rows.retain(|row| row.row_id() != id);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Feedback(i64),
    User(i64),
}

impl DeleteTarget {
    fn confirm_prompt(&self) -> String {
        match self {
            DeleteTarget::Feedback(id) => {
                format!("Are you sure you want to delete feedback ID {}?", id)
            }
            DeleteTarget::User(id) => format!("Are you sure you want to delete user ID {}?", id),
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            DeleteTarget::Feedback(_) => "Feedback deleted!",
            DeleteTarget::User(_) => "User deleted!",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            DeleteTarget::Feedback(_) => "Failed to delete feedback.",
            DeleteTarget::User(_) => "Failed to delete user.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted(DeleteTarget),
    Failed(DeleteTarget, ClientError),
}

/// Ask, delete, and report back to the user.
pub async fn delete_entry<A, B>(api: &A, browser: &B, target: DeleteTarget) -> DeleteOutcome
where
    A: SentimentApi + ?Sized,
    B: Browser,
{
    if !browser.confirm(&target.confirm_prompt()) {
        return DeleteOutcome::Cancelled;
    }

    let res = match target {
        DeleteTarget::Feedback(id) => api.admin_delete_feedback(id).await,
        DeleteTarget::User(id) => api.admin_delete_user(id).await,
    };

    match res {
        Ok(()) => {
            browser.alert(target.success_message());
            DeleteOutcome::Deleted(target)
        }
        Err(e) => {
            browser.alert(target.failure_message());
            DeleteOutcome::Failed(target, e)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminTables {
    pub users: TableState<User>,
    pub feedback: TableState<Feedback>,
}

impl Default for AdminTables {
    fn default() -> Self {
        AdminTables {
            users: TableState::Loading,
            feedback: TableState::Loading,
        }
    }
}

impl AdminTables {
    /// Returns true when a row went away.
    pub fn apply(&mut self, outcome: &DeleteOutcome) -> bool {
        match outcome {
            DeleteOutcome::Deleted(DeleteTarget::Feedback(id)) => {
                self.feedback.remove(*id);
                true
            }
            DeleteOutcome::Deleted(DeleteTarget::User(id)) => {
                self.users.remove(*id);
                true
            }
            DeleteOutcome::Cancelled | DeleteOutcome::Failed(..) => false,
        }
    }
}

pub struct AdminApp {
    allowed: bool,
    tables: AdminTables,
}

pub enum AdminAppMsg {
    UsersLoaded(Result<Vec<User>, ClientError>),
    FeedbackLoaded(Result<Vec<Feedback>, ClientError>),
    Delete(DeleteTarget),
    Deleted(DeleteOutcome),
    Logout,
}

impl Component for AdminApp {
    type Message = AdminAppMsg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("admin::create");

        let app = ctx.props().app.clone();
        let allowed = admin_guard(&*app.session, &app.browser);
        if allowed {
            let users_app = app.clone();
            ctx.link().send_future(async move {
                AdminAppMsg::UsersLoaded(users_app.api.admin_list_users().await)
            });
            ctx.link().send_future(async move {
                AdminAppMsg::FeedbackLoaded(app.api.admin_list_feedback().await)
            });
        }

        AdminApp {
            allowed,
            tables: AdminTables::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdminAppMsg::UsersLoaded(res) => {
                if let Err(e) = &res {
                    console::error!(format!("failed to load users -> {}", e).as_str());
                }
                self.tables.users = TableState::from_response(res);
                true
            }
            AdminAppMsg::FeedbackLoaded(res) => {
                if let Err(e) = &res {
                    console::error!(format!("failed to load feedbacks -> {}", e).as_str());
                }
                self.tables.feedback = TableState::from_response(res);
                true
            }
            AdminAppMsg::Delete(target) => {
                let app = ctx.props().app.clone();
                ctx.link().send_future(async move {
                    AdminAppMsg::Deleted(delete_entry(&*app.api, &app.browser, target).await)
                });
                false
            }
            AdminAppMsg::Deleted(outcome) => {
                if let DeleteOutcome::Failed(target, e) = &outcome {
                    console::error!(format!("failed to delete {:?} -> {}", target, e).as_str());
                }
                self.tables.apply(&outcome)
            }
            AdminAppMsg::Logout => {
                let app = &ctx.props().app;
                logout(&*app.session, &app.browser);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.allowed {
            return html! {};
        }

        let who = ctx
            .props()
            .app
            .session
            .email()
            .unwrap_or_else(|| "Admin".to_string());

        html! {
            <>
            <main class="container">
                { do_page_header("Admin Dashboard") }
                <div class="d-flex justify-content-between mb-3">
                    <span id="adminName">{ who }</span>
                    <button id="logoutBtn" type="button" class={CLASS_BUTTON_DARK}
                        onclick={ ctx.link().callback(|_| AdminAppMsg::Logout) }
                    >{ "Logout" }</button>
                </div>

                <h4>{ "Users" }</h4>
                { self.view_users(ctx) }

                <h4>{ "Feedback" }</h4>
                { self.view_feedback(ctx) }
            </main>
            { do_footer() }
            </>
        }
    }
}

impl AdminApp {
    fn view_users(&self, ctx: &Context<Self>) -> Html {
        let rows = match &self.tables.users {
            TableState::Loading => return loading_spinner("Loading users..."),
            TableState::Failed { emsg } => {
                return do_alert_error("Failed to load users.", Some(emsg.as_str()))
            }
            TableState::Loaded(rows) => rows,
        };
        let scope_col = "col";

        html! {
            <table id={ID_USERS_TABLE} class={CSS_TABLE}>
                <thead>
                    <tr>
                        <th scope={scope_col}>{ "ID" }</th>
                        <th scope={scope_col}>{ "Name" }</th>
                        <th scope={scope_col}>{ "Email" }</th>
                        <th scope={scope_col}>{ "Role" }</th>
                        <th scope={scope_col}></th>
                    </tr>
                </thead>
                <tbody>
                { for rows.iter().map(|user| {
                    let target = DeleteTarget::User(user.id);
                    html! {
                        <tr key={user.id.to_string()}>
                            <td class={CSS_CELL}>{ user.id.to_string() }</td>
                            <td class={CSS_CELL}>{ user.name.clone().unwrap_or_default() }</td>
                            <td class={CSS_CELL}>{ user.email.clone() }</td>
                            <td class={CSS_CELL}>{ user.role.clone().unwrap_or_default() }</td>
                            <td class={CSS_CELL}>
                                <button type="button" class={CLASS_BUTTON_DANGER}
                                    onclick={ ctx.link().callback(move |_| AdminAppMsg::Delete(target)) }
                                >{ "Delete" }</button>
                            </td>
                        </tr>
                    }
                }) }
                </tbody>
            </table>
        }
    }

    fn view_feedback(&self, ctx: &Context<Self>) -> Html {
        let rows = match &self.tables.feedback {
            TableState::Loading => return loading_spinner("Loading feedbacks..."),
            TableState::Failed { emsg } => {
                return do_alert_error("Failed to load feedbacks.", Some(emsg.as_str()))
            }
            TableState::Loaded(rows) => rows,
        };
        let scope_col = "col";

        html! {
            <table id={ID_FEEDBACK_TABLE} class={CSS_TABLE}>
                <thead>
                    <tr>
                        <th scope={scope_col}>{ "ID" }</th>
                        <th scope={scope_col}>{ "Name" }</th>
                        <th scope={scope_col}>{ "Message" }</th>
                        <th scope={scope_col}>{ "Sentiment" }</th>
                        <th scope={scope_col}>{ "Score" }</th>
                        <th scope={scope_col}>{ "Timestamp" }</th>
                        <th scope={scope_col}></th>
                    </tr>
                </thead>
                <tbody>
                { for rows.iter().map(|fb| {
                    let target = DeleteTarget::Feedback(fb.id);
                    let name = fb
                        .name
                        .clone()
                        .filter(|n| !n.is_empty())
                        .unwrap_or_else(|| "Anonymous".to_string());
                    let score = fb.score.map(|s| s.to_string()).unwrap_or_default();
                    let when = fb.timestamp.as_deref().map(format_timestamp).unwrap_or_default();
                    html! {
                        <tr key={fb.id.to_string()}>
                            <td class={CSS_CELL}>{ fb.id.to_string() }</td>
                            <td class={CSS_CELL}>{ name }</td>
                            <td class={CSS_CELL}>{ fb.message.clone() }</td>
                            <td class={CSS_CELL}>{ fb.sentiment.clone().unwrap_or_default() }</td>
                            <td class={CSS_CELL}>{ score }</td>
                            <td class={CSS_CELL}>{ when }</td>
                            <td class={CSS_CELL}>
                                <button type="button" class={CLASS_BUTTON_DANGER}
                                    onclick={ ctx.link().callback(move |_| AdminAppMsg::Delete(target)) }
                                >{ "Delete" }</button>
                            </td>
                        </tr>
                    }
                }) }
                </tbody>
            </table>
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use sentiment_proto::v1::User;
    use sentiment_web_ui_shared::error::ClientError;
    use sentiment_web_ui_shared::models::{MemoryStorage, Session};

    use super::*;
    use crate::mock::{feedback, session_as, Call, MockApi, RecordingBrowser};

    fn loaded_tables() -> AdminTables {
        AdminTables {
            users: TableState::Loaded(vec![User {
                id: 7,
                name: Some("Ada".to_string()),
                email: "ada@example.com".to_string(),
                role: Some("user".to_string()),
            }]),
            feedback: TableState::Loaded(vec![
                feedback(1, "one"),
                feedback(2, "two"),
                feedback(3, "three"),
            ]),
        }
    }

    #[allow(clippy::panic)]
    fn feedback_ids(tables: &AdminTables) -> Vec<i64> {
        match &tables.feedback {
            TableState::Loaded(rows) => rows.iter().map(|r| r.id).collect(),
            other => panic!("table not loaded {:?}", other),
        }
    }

    #[test]
    fn non_admins_are_turned_away() {
        for role in ["user", "guest", "Admin"] {
            let session = session_as("someone@example.com", role);
            let browser = RecordingBrowser::default();

            assert!(!admin_guard(&session, &browser));
            assert_eq!(browser.alerts(), vec!["Access denied. Admins only.".to_string()]);
            assert_eq!(browser.navigations(), vec!["login.html".to_string()]);
        }

        let empty = Session::new(MemoryStorage::default());
        assert!(!admin_guard(&empty, &RecordingBrowser::default()));
    }

    #[test]
    fn admins_may_stay() {
        let session = session_as("boss@example.com", "admin");
        let browser = RecordingBrowser::default();

        assert!(admin_guard(&session, &browser));
        assert!(browser.alerts().is_empty());
        assert!(browser.navigations().is_empty());
    }

    #[test]
    fn deleting_removes_exactly_that_row() {
        let api = MockApi {
            delete: Ok(()),
            ..Default::default()
        };
        let browser = RecordingBrowser::default();
        let mut tables = loaded_tables();

        let outcome = block_on(delete_entry(&api, &browser, DeleteTarget::Feedback(2)));

        assert_eq!(outcome, DeleteOutcome::Deleted(DeleteTarget::Feedback(2)));
        assert!(tables.apply(&outcome));
        assert_eq!(feedback_ids(&tables), vec![1, 3]);
        assert_eq!(api.calls(), vec![Call::DeleteFeedback(2)]);
        assert_eq!(
            *browser.confirms.borrow(),
            vec!["Are you sure you want to delete feedback ID 2?".to_string()]
        );
        assert_eq!(browser.alerts(), vec!["Feedback deleted!".to_string()]);
    }

    #[test]
    fn failed_delete_keeps_the_row() {
        let api = MockApi {
            delete: Err(ClientError::Http(404, Some("Feedback not found".to_string()))),
            ..Default::default()
        };
        let browser = RecordingBrowser::default();
        let mut tables = loaded_tables();

        let outcome = block_on(delete_entry(&api, &browser, DeleteTarget::Feedback(2)));

        assert!(matches!(outcome, DeleteOutcome::Failed(DeleteTarget::Feedback(2), _)));
        assert!(!tables.apply(&outcome));
        assert_eq!(feedback_ids(&tables), vec![1, 2, 3]);
        assert_eq!(browser.alerts(), vec!["Failed to delete feedback.".to_string()]);
    }

    #[test]
    fn cancelled_delete_never_calls_the_server() {
        let api = MockApi {
            delete: Ok(()),
            ..Default::default()
        };
        let browser = RecordingBrowser::default();
        browser.refuse_confirm.set(true);

        let outcome = block_on(delete_entry(&api, &browser, DeleteTarget::Feedback(1)));

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(api.calls().is_empty());
        assert!(browser.alerts().is_empty());
    }

    #[test]
    fn users_are_deleted_the_same_way() {
        let api = MockApi {
            delete: Ok(()),
            ..Default::default()
        };
        let browser = RecordingBrowser::default();
        let mut tables = loaded_tables();

        let outcome = block_on(delete_entry(&api, &browser, DeleteTarget::User(7)));

        assert!(tables.apply(&outcome));
        assert_eq!(tables.users, TableState::Loaded(vec![]));
        assert_eq!(feedback_ids(&tables), vec![1, 2, 3]);
        assert_eq!(api.calls(), vec![Call::DeleteUser(7)]);
        assert_eq!(
            *browser.confirms.borrow(),
            vec!["Are you sure you want to delete user ID 7?".to_string()]
        );
        assert_eq!(browser.alerts(), vec!["User deleted!".to_string()]);
    }

    #[test]
    fn load_failures_are_kept_per_table() {
        let users: TableState<User> =
            TableState::from_response(Err(ClientError::Transport("offline".to_string())));
        assert!(matches!(users, TableState::Failed { .. }));

        let mut fb = TableState::from_response(Ok(vec![feedback(1, "x")]));
        fb.remove(1);
        assert_eq!(fb, TableState::Loaded(vec![]));

        let mut loading: TableState<User> = TableState::Loading;
        loading.remove(1);
        assert_eq!(loading, TableState::Loading);
    }

    #[test]
    fn logout_clears_the_session() {
        let session = session_as("boss@example.com", "admin");
        let browser = RecordingBrowser::default();

        logout(&session, &browser);

        assert_eq!(session.email(), None);
        assert_eq!(session.raw_role(), None);
        assert_eq!(browser.navigations(), vec!["login.html".to_string()]);
    }
}
