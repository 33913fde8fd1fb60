//! This is the top level router of the web ui. Each page is its own host document, so the
//! decision is made once per load: look at the path and the stored role, then either send
//! the browser elsewhere, render exactly one page, or do nothing at all.

use std::rc::Rc;

use enum_iterator::{all, Sequence};
#[cfg(debug_assertions)]
use gloo::console;
use sentiment_proto::v1::Role;
use sentiment_web_ui_shared::api::SentimentClient;
use sentiment_web_ui_shared::browser::WebBrowser;
use sentiment_web_ui_shared::constants::{
    URL_ADMIN, URL_FEEDBACK, URL_LOGIN, URL_REGISTER, URL_WELCOME,
};
use sentiment_web_ui_shared::models::{BrowserStorage, Session};
use yew::prelude::*;

use crate::admin::AdminApp;
use crate::feedback::FeedbackApp;
use crate::login::LoginApp;
use crate::register::RegisterApp;
use crate::welcome::WelcomeApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Page {
    Feedback,
    Welcome,
    Login,
    Register,
    Admin,
}

impl Page {
    pub fn href(&self) -> &'static str {
        match self {
            Page::Feedback => URL_FEEDBACK,
            Page::Welcome => URL_WELCOME,
            Page::Login => URL_LOGIN,
            Page::Register => URL_REGISTER,
            Page::Admin => URL_ADMIN,
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Page::Feedback => path.is_empty() || path == "/" || path.ends_with(URL_FEEDBACK),
            page => path.ends_with(page.href()),
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        all::<Page>().find(|page| page.matches(path))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Redirect(Page),
    Render(Page),
    Nothing,
}

/// Admins never see the public feedback page, everyone else gets what the path asks for.
pub fn dispatch(path: &str, role: Option<Role>) -> Dispatch {
    match Page::from_path(path) {
        Some(Page::Feedback) if role == Some(Role::Admin) => Dispatch::Redirect(Page::Admin),
        Some(page) => Dispatch::Render(page),
        None => Dispatch::Nothing,
    }
}

/// What every page is handed: the backend, the session and the browser.
#[derive(Clone)]
pub struct AppContext {
    pub api: Rc<SentimentClient>,
    pub session: Rc<Session<BrowserStorage>>,
    pub browser: WebBrowser,
}

impl AppContext {
    pub fn new(api: SentimentClient) -> Self {
        AppContext {
            api: Rc::new(api),
            session: Rc::new(Session::new(BrowserStorage)),
            browser: WebBrowser,
        }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, rhs: &AppContext) -> bool {
        Rc::ptr_eq(&self.api, &rhs.api) && Rc::ptr_eq(&self.session, &rhs.session)
    }
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub app: AppContext,
}

#[derive(Properties, PartialEq)]
pub struct ManagerProps {
    pub page: Page,
    pub app: AppContext,
}

pub struct ManagerApp {}

impl Component for ManagerApp {
    type Message = ();
    type Properties = ManagerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("manager::create");
        ManagerApp {}
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        #[cfg(debug_assertions)]
        console::debug!("manager::change");
        false
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        #[cfg(debug_assertions)]
        console::debug!("manager::rendered");
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let app = ctx.props().app.clone();
        #[cfg(debug_assertions)]
        console::debug!(format!("manager::view -> {:?}", ctx.props().page).as_str());
        match ctx.props().page {
            Page::Welcome => html! { <WelcomeApp app={app} /> },
            Page::Login => html! { <LoginApp app={app} /> },
            Page::Register => html! { <RegisterApp app={app} /> },
            Page::Feedback => html! { <FeedbackApp app={app} /> },
            Page::Admin => html! { <AdminApp app={app} /> },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_on_home_is_redirected() {
        for path in ["", "/", "/index.html", "/app/index.html"] {
            assert_eq!(
                dispatch(path, Some(Role::Admin)),
                Dispatch::Redirect(Page::Admin),
                "{}",
                path
            );
        }
    }

    #[test]
    fn non_admins_get_the_feedback_page() {
        for role in [None, Some(Role::Guest), Some(Role::User)] {
            assert_eq!(dispatch("/", role), Dispatch::Render(Page::Feedback));
            assert_eq!(dispatch("/index.html", role), Dispatch::Render(Page::Feedback));
        }
    }

    #[test]
    fn admins_reach_every_other_page() {
        assert_eq!(dispatch("/login.html", Some(Role::Admin)), Dispatch::Render(Page::Login));
        assert_eq!(dispatch("/admin.html", Some(Role::Admin)), Dispatch::Render(Page::Admin));
        assert_eq!(
            dispatch("/analysis.html", Some(Role::Admin)),
            Dispatch::Render(Page::Welcome)
        );
    }

    #[test]
    fn path_suffixes_pick_pages() {
        assert_eq!(Page::from_path("/analysis.html"), Some(Page::Welcome));
        assert_eq!(Page::from_path("/static/login.html"), Some(Page::Login));
        assert_eq!(Page::from_path("register.html"), Some(Page::Register));
        assert_eq!(Page::from_path("/admin.html"), Some(Page::Admin));
    }

    #[test]
    fn unknown_paths_render_nothing() {
        assert_eq!(dispatch("/about.html", None), Dispatch::Nothing);
        assert_eq!(dispatch("/admin", Some(Role::Admin)), Dispatch::Nothing);
    }

    #[test]
    fn every_page_routes_back_to_itself() {
        for page in all::<Page>() {
            assert_eq!(Page::from_path(&format!("/{}", page.href())), Some(page));
        }
    }
}
