//! Email and password in, a stored session and a redirect out.

use gloo::console;
use sentiment_proto::v1::{LoginRequest, Role};
use sentiment_web_ui_shared::add_body_form_classes;
use sentiment_web_ui_shared::api::SentimentApi;
use sentiment_web_ui_shared::browser::Browser;
use sentiment_web_ui_shared::constants::{
    CLASS_BUTTON_DARK, CLASS_DIV_LOGIN_BUTTON, CLASS_DIV_LOGIN_FIELD, ID_LOGIN_EMAIL,
    ID_LOGIN_FORM, ID_LOGIN_PASSWORD, URL_ADMIN, URL_FEEDBACK, URL_REGISTER,
};
use sentiment_web_ui_shared::error::{ClientError, FormError};
use sentiment_web_ui_shared::models::{Session, SessionStore};
use sentiment_web_ui_shared::ui::do_footer;
use sentiment_web_ui_shared::utils::{autofocus, get_trimmed_value};
use yew::prelude::*;

use crate::manager::PageProps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    Form(FormError),
    Rejected(ClientError),
}

impl LoginError {
    /// Never says which of the two fields was wrong.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginError::Form(fe) => fe.user_message(),
            LoginError::Rejected(_) => "Invalid email or password.",
        }
    }
}

/// Where to go when the server didn't say.
fn default_landing(role: &str) -> &'static str {
    if role == Role::Admin.as_str() {
        URL_ADMIN
    } else {
        URL_FEEDBACK
    }
}

/// Log in, remember who we are, and follow the server's redirect.
///
/// Every failure is reported to the user before returning, the error is only handed back
/// for logging.
pub async fn login_flow<A, S, B>(
    api: &A,
    session: &Session<S>,
    browser: &B,
    email: &str,
    password: &str,
) -> Result<String, LoginError>
where
    A: SentimentApi + ?Sized,
    S: SessionStore,
    B: Browser,
{
    let email = email.trim();
    let password = password.trim();

    if email.is_empty() || password.is_empty() {
        let e = LoginError::Form(FormError::MissingFields);
        browser.alert(e.user_message());
        return Err(e);
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    match api.login(&request).await {
        Ok(response) => {
            let role = response.session_role();
            session.record_login(email, &role);

            let target = response
                .redirect
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| default_landing(&role).to_string());
            browser.navigate(&target);
            Ok(target)
        }
        Err(ce) => {
            let e = LoginError::Rejected(ce);
            browser.alert(e.user_message());
            Err(e)
        }
    }
}

pub struct LoginApp {
    enable: bool,
}

pub enum LoginAppMsg {
    Submit,
    Done(Result<String, LoginError>),
}

impl Component for LoginApp {
    type Message = LoginAppMsg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("login::create");
        LoginApp { enable: true }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginAppMsg::Submit => {
                if !self.enable {
                    return false;
                }
                self.enable = false;

                let email = get_trimmed_value(ID_LOGIN_EMAIL);
                let password = get_trimmed_value(ID_LOGIN_PASSWORD);
                let app = ctx.props().app.clone();
                ctx.link().send_future(async move {
                    let res =
                        login_flow(&*app.api, &*app.session, &app.browser, &email, &password)
                            .await;
                    LoginAppMsg::Done(res)
                });
                true
            }
            LoginAppMsg::Done(res) => {
                match res {
                    Ok(_target) => {
                        #[cfg(debug_assertions)]
                        console::debug!(format!("login::update -> redirecting to {}", _target).as_str());
                    }
                    Err(LoginError::Rejected(e)) => {
                        console::error!(format!("login failed -> {}", e).as_str());
                    }
                    Err(LoginError::Form(_)) => {}
                }
                self.enable = true;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            autofocus(ID_LOGIN_EMAIL);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        add_body_form_classes!();

        html! {
            <>
            <main class="flex-shrink-0 form-signin">
                <h2 class="text-center">{ "Login" }</h2>
                <form id={ID_LOGIN_FORM}
                    onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                        #[cfg(debug_assertions)]
                        console::debug!("login::view -> prevent_default()");
                        e.prevent_default();
                        LoginAppMsg::Submit
                    } ) }
                >
                    <label for={ID_LOGIN_EMAIL} class="form-label">{ "Email" }</label>
                    <div class={CLASS_DIV_LOGIN_FIELD}>
                        <input
                            class="autofocus form-control"
                            disabled={ !self.enable }
                            id={ID_LOGIN_EMAIL}
                            name="email"
                            type="email"
                            autocomplete="username"
                            required=true
                        />
                    </div>
                    <label for={ID_LOGIN_PASSWORD} class="form-label">{ "Password" }</label>
                    <div class={CLASS_DIV_LOGIN_FIELD}>
                        <input
                            class="form-control"
                            disabled={ !self.enable }
                            id={ID_LOGIN_PASSWORD}
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required=true
                        />
                    </div>
                    <div class={CLASS_DIV_LOGIN_BUTTON}>
                        <button type="submit" class={CLASS_BUTTON_DARK} disabled={ !self.enable }>{ "Login" }</button>
                    </div>
                </form>
                <p class="text-center">
                    { "No account yet? " }<a href={URL_REGISTER}>{ "Register" }</a>
                </p>
            </main>
            { do_footer() }
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use sentiment_proto::v1::{LoginRequest, LoginResponse, LoginUser};
    use sentiment_web_ui_shared::api::decode_response;
    use sentiment_web_ui_shared::error::{ClientError, FormError};
    use sentiment_web_ui_shared::models::{MemoryStorage, Session};

    use super::{login_flow, LoginError};
    use crate::mock::{Call, MockApi, RecordingBrowser};

    fn login_as(role: Option<&str>, redirect: Option<&str>) -> LoginResponse {
        LoginResponse {
            message: Some("Login successful!".to_string()),
            redirect: redirect.map(str::to_string),
            user: Some(LoginUser {
                id: Some(1),
                name: Some("A".to_string()),
                email: Some("a@b.com".to_string()),
                role: role.map(str::to_string),
            }),
        }
    }

    #[test]
    fn login_stores_lowercased_role_and_follows_redirect() {
        let api = MockApi {
            login: Ok(login_as(Some("Admin"), Some("index.html"))),
            ..Default::default()
        };
        let session = Session::new(MemoryStorage::default());
        let browser = RecordingBrowser::default();

        let res = block_on(login_flow(&api, &session, &browser, "a@b.com", "x"));

        assert_eq!(res, Ok("index.html".to_string()));
        assert_eq!(session.raw_role().as_deref(), Some("admin"));
        assert_eq!(session.email().as_deref(), Some("a@b.com"));
        assert_eq!(browser.navigations(), vec!["index.html".to_string()]);
        assert!(browser.alerts().is_empty());
        assert_eq!(
            api.calls(),
            vec![Call::Login(LoginRequest {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })]
        );
    }

    #[test]
    fn bare_role_login_body_is_enough() {
        let login = decode_response::<LoginResponse>(
            200,
            r#"{"user":{"role":"Admin"},"redirect":"index.html"}"#,
        );
        assert!(login.is_ok());
        let api = MockApi {
            login,
            ..Default::default()
        };
        let session = Session::new(MemoryStorage::default());
        let browser = RecordingBrowser::default();

        let res = block_on(login_flow(&api, &session, &browser, "a@b.com", "x"));

        assert_eq!(res, Ok("index.html".to_string()));
        assert_eq!(session.raw_role().as_deref(), Some("admin"));
        assert_eq!(session.email().as_deref(), Some("a@b.com"));
        assert_eq!(browser.navigations(), vec!["index.html".to_string()]);
        assert!(browser.alerts().is_empty());
    }

    #[test]
    fn missing_role_defaults_to_user() {
        let api = MockApi {
            login: Ok(login_as(None, Some("index.html"))),
            ..Default::default()
        };
        let session = Session::new(MemoryStorage::default());
        let browser = RecordingBrowser::default();

        block_on(login_flow(&api, &session, &browser, " a@b.com ", "x")).expect("login");

        assert_eq!(session.raw_role().as_deref(), Some("user"));
        assert_eq!(session.email().as_deref(), Some("a@b.com"));
    }

    #[test]
    fn missing_redirect_lands_by_role() {
        let api = MockApi {
            login: Ok(login_as(Some("admin"), None)),
            ..Default::default()
        };
        let session = Session::new(MemoryStorage::default());
        let browser = RecordingBrowser::default();

        let res = block_on(login_flow(&api, &session, &browser, "a@b.com", "x"));
        assert_eq!(res, Ok("admin.html".to_string()));

        let api = MockApi {
            login: Ok(login_as(Some("user"), Some(""))),
            ..Default::default()
        };
        let res = block_on(login_flow(&api, &session, &browser, "a@b.com", "x"));
        assert_eq!(res, Ok("index.html".to_string()));
    }

    #[test]
    fn empty_fields_never_reach_the_server() {
        let api = MockApi::default();
        let session = Session::new(MemoryStorage::default());
        let browser = RecordingBrowser::default();

        let res = block_on(login_flow(&api, &session, &browser, "a@b.com", "   "));

        assert_eq!(res, Err(LoginError::Form(FormError::MissingFields)));
        assert!(api.calls().is_empty());
        assert_eq!(browser.alerts(), vec!["Please fill all fields.".to_string()]);
        assert_eq!(session.raw_role(), None);
    }

    #[test]
    fn server_rejection_is_generic() {
        let api = MockApi {
            login: Err(ClientError::Http(
                401,
                Some("Invalid credentials".to_string()),
            )),
            ..Default::default()
        };
        let session = Session::new(MemoryStorage::default());
        let browser = RecordingBrowser::default();

        let res = block_on(login_flow(&api, &session, &browser, "a@b.com", "wrong"));

        assert!(matches!(res, Err(LoginError::Rejected(_))));
        assert_eq!(
            browser.alerts(),
            vec!["Invalid email or password.".to_string()]
        );
        assert!(browser.navigations().is_empty());
        assert_eq!(session.email(), None);
    }

    #[test]
    fn malformed_responses_are_rejected_the_same_way() {
        let api = MockApi {
            login: Err(ClientError::JsonDecode("expected value".to_string())),
            ..Default::default()
        };
        let session = Session::new(MemoryStorage::default());
        let browser = RecordingBrowser::default();

        let res = block_on(login_flow(&api, &session, &browser, "a@b.com", "x"));

        assert!(matches!(res, Err(LoginError::Rejected(ClientError::JsonDecode(_)))));
        assert_eq!(
            browser.alerts(),
            vec!["Invalid email or password.".to_string()]
        );
    }
}
