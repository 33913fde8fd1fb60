//! The landing page: log in, register, or carry on as a guest.

use sentiment_web_ui_shared::add_body_form_classes;
use sentiment_web_ui_shared::browser::Browser;
use sentiment_web_ui_shared::constants::{
    CLASS_BUTTON_DARK, CLASS_DIV_LOGIN_BUTTON, URL_FEEDBACK, URL_LOGIN, URL_REGISTER,
};
use sentiment_web_ui_shared::models::{Session, SessionStore};
use sentiment_web_ui_shared::ui::do_footer;
use yew::prelude::*;

use crate::manager::PageProps;

/// Remember the visitor as a guest before sending them to the feedback form.
pub fn continue_as_guest<S: SessionStore, B: Browser>(session: &Session<S>, browser: &B) {
    session.enter_as_guest();
    browser.navigate(URL_FEEDBACK);
}

pub enum WelcomeMsg {
    Login,
    Register,
    Guest,
}

pub struct WelcomeApp {}

impl Component for WelcomeApp {
    type Message = WelcomeMsg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WelcomeApp {}
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let app = &ctx.props().app;
        match msg {
            WelcomeMsg::Login => app.browser.navigate(URL_LOGIN),
            WelcomeMsg::Register => app.browser.navigate(URL_REGISTER),
            WelcomeMsg::Guest => continue_as_guest(&*app.session, &app.browser),
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        add_body_form_classes!();

        html! {
            <>
            <main class="flex-shrink-0 form-signin text-center">
                <h2>{ "Sentiment Feedback" }</h2>
                <p>{ "Tell us what you think, we'll tell you how it sounds." }</p>
                <div class={CLASS_DIV_LOGIN_BUTTON}>
                    <button id="loginBtn" type="button" class={CLASS_BUTTON_DARK}
                        onclick={ ctx.link().callback(|_| WelcomeMsg::Login) }
                    >{ "Login" }</button>
                </div>
                <div class={CLASS_DIV_LOGIN_BUTTON}>
                    <button id="registerBtn" type="button" class={CLASS_BUTTON_DARK}
                        onclick={ ctx.link().callback(|_| WelcomeMsg::Register) }
                    >{ "Register" }</button>
                </div>
                <div class={CLASS_DIV_LOGIN_BUTTON}>
                    <button id="guestBtn" type="button" class="btn btn-secondary"
                        onclick={ ctx.link().callback(|_| WelcomeMsg::Guest) }
                    >{ "Continue as guest" }</button>
                </div>
            </main>
            { do_footer() }
            </>
        }
    }
}
