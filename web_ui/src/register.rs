//! New accounts. Anyone can ask to be an admin, only the passkey keeps it honest.

use gloo::console;
use sentiment_proto::v1::{RegisterRequest, Role};
use sentiment_web_ui_shared::add_body_form_classes;
use sentiment_web_ui_shared::api::SentimentApi;
use sentiment_web_ui_shared::browser::Browser;
use sentiment_web_ui_shared::constants::{
    ADMIN_PASSKEY, CLASS_BUTTON_DARK, CLASS_DIV_LOGIN_BUTTON, CLASS_DIV_LOGIN_FIELD, CSS_HIDDEN,
    ID_ADMIN_PASSKEY, ID_REGISTER_EMAIL, ID_REGISTER_FORM, ID_REGISTER_NAME, ID_REGISTER_PASSWORD,
    ID_REGISTER_ROLE, URL_LOGIN,
};
use sentiment_web_ui_shared::error::{ClientError, FormError};
use sentiment_web_ui_shared::ui::do_footer;
use sentiment_web_ui_shared::utils::{autofocus, get_trimmed_value};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::manager::PageProps;

const MSG_BAD_PASSKEY: &str = "Incorrect Admin Passkey! You will be registered as a User instead.";
const MSG_REGISTER_FAILED: &str = "Failed to register. Please try again.";

/// What the register form holds when it's submitted, already trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub passkey: String,
}

impl RegisterForm {
    /// Validate and build the request. The flag is set when an admin request was
    /// downgraded because the passkey didn't match.
    pub fn into_request(self) -> Result<(RegisterRequest, bool), FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        let role: Role = self.role.parse().map_err(|_| FormError::MissingFields)?;

        let (role, downgraded) = if role == Role::Admin && self.passkey != ADMIN_PASSKEY {
            (Role::User, true)
        } else {
            (role, false)
        };

        Ok((
            RegisterRequest {
                name: self.name,
                email: self.email,
                password: self.password,
                role,
            },
            downgraded,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    Form(FormError),
    Rejected(ClientError),
}

/// Submit a registration and tell the user how it went. Returns the role actually requested.
pub async fn register_flow<A, B>(
    api: &A,
    browser: &B,
    form: RegisterForm,
) -> Result<Role, RegisterError>
where
    A: SentimentApi + ?Sized,
    B: Browser,
{
    let (request, downgraded) = match form.into_request() {
        Ok(r) => r,
        Err(fe) => {
            browser.alert(fe.user_message());
            return Err(RegisterError::Form(fe));
        }
    };

    if downgraded {
        browser.alert(MSG_BAD_PASSKEY);
    }

    match api.register_user(&request).await {
        Ok(_) => {
            browser.alert(&format!(
                "Registration successful! You are registered as {}.",
                request.role
            ));
            browser.navigate(URL_LOGIN);
            Ok(request.role)
        }
        Err(ce) => {
            browser.alert(MSG_REGISTER_FAILED);
            Err(RegisterError::Rejected(ce))
        }
    }
}

pub struct RegisterApp {
    enable: bool,
    show_passkey: bool,
    passkey: String,
}

pub enum RegisterAppMsg {
    RoleChanged(String),
    PasskeyInput(String),
    Submit,
    Done(Result<Role, RegisterError>),
}

impl Component for RegisterApp {
    type Message = RegisterAppMsg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("register::create");
        RegisterApp {
            enable: true,
            show_passkey: false,
            passkey: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegisterAppMsg::RoleChanged(role) => {
                self.show_passkey = role == Role::Admin.as_str();
                if !self.show_passkey {
                    self.passkey.clear();
                }
                true
            }
            RegisterAppMsg::PasskeyInput(value) => {
                self.passkey = value;
                false
            }
            RegisterAppMsg::Submit => {
                if !self.enable {
                    return false;
                }
                self.enable = false;

                let form = RegisterForm {
                    name: get_trimmed_value(ID_REGISTER_NAME),
                    email: get_trimmed_value(ID_REGISTER_EMAIL),
                    password: get_trimmed_value(ID_REGISTER_PASSWORD),
                    role: get_trimmed_value(ID_REGISTER_ROLE),
                    passkey: self.passkey.trim().to_string(),
                };
                let app = ctx.props().app.clone();
                ctx.link().send_future(async move {
                    RegisterAppMsg::Done(register_flow(&*app.api, &app.browser, form).await)
                });
                true
            }
            RegisterAppMsg::Done(res) => {
                match res {
                    Ok(_role) => {
                        #[cfg(debug_assertions)]
                        console::debug!(format!("register::update -> registered as {}", _role).as_str());
                    }
                    Err(RegisterError::Rejected(e)) => {
                        console::error!(format!("registration failed -> {}", e).as_str());
                    }
                    Err(RegisterError::Form(fe)) => {
                        console::warn!(format!("registration form rejected -> {}", fe).as_str());
                    }
                }
                self.enable = true;
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            autofocus(ID_REGISTER_NAME);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        add_body_form_classes!();

        let passkey_class = if self.show_passkey {
            classes!(CLASS_DIV_LOGIN_FIELD)
        } else {
            classes!(CLASS_DIV_LOGIN_FIELD, CSS_HIDDEN)
        };

        html! {
            <>
            <main class="flex-shrink-0 form-signin">
                <h2 class="text-center">{ "Register" }</h2>
                <form id={ID_REGISTER_FORM}
                    onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        RegisterAppMsg::Submit
                    } ) }
                >
                    <label for={ID_REGISTER_NAME} class="form-label">{ "Name" }</label>
                    <div class={CLASS_DIV_LOGIN_FIELD}>
                        <input class="form-control" id={ID_REGISTER_NAME} name="name" type="text"
                            disabled={ !self.enable } />
                    </div>
                    <label for={ID_REGISTER_EMAIL} class="form-label">{ "Email" }</label>
                    <div class={CLASS_DIV_LOGIN_FIELD}>
                        <input class="form-control" id={ID_REGISTER_EMAIL} name="email" type="email"
                            autocomplete="username" disabled={ !self.enable } />
                    </div>
                    <label for={ID_REGISTER_PASSWORD} class="form-label">{ "Password" }</label>
                    <div class={CLASS_DIV_LOGIN_FIELD}>
                        <input class="form-control" id={ID_REGISTER_PASSWORD} name="password"
                            type="password" autocomplete="new-password" disabled={ !self.enable } />
                    </div>
                    <label for={ID_REGISTER_ROLE} class="form-label">{ "Role" }</label>
                    <div class={CLASS_DIV_LOGIN_FIELD}>
                        <select class="form-select" id={ID_REGISTER_ROLE} name="role"
                            disabled={ !self.enable }
                            onchange={ ctx.link().callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                RegisterAppMsg::RoleChanged(select.value())
                            }) }
                        >
                            <option value={Role::User.as_str()} selected=true>{ "User" }</option>
                            <option value={Role::Admin.as_str()}>{ "Admin" }</option>
                        </select>
                    </div>
                    <div class={passkey_class}>
                        <input class="form-control" id={ID_ADMIN_PASSKEY} name="adminPasskey"
                            type="password" placeholder="Admin passkey"
                            value={ self.passkey.clone() }
                            disabled={ !self.enable }
                            oninput={ ctx.link().callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                RegisterAppMsg::PasskeyInput(input.value())
                            }) }
                        />
                    </div>
                    <div class={CLASS_DIV_LOGIN_BUTTON}>
                        <button type="submit" class={CLASS_BUTTON_DARK} disabled={ !self.enable }>{ "Register" }</button>
                    </div>
                </form>
                <p class="text-center">
                    { "Already registered? " }<a href={URL_LOGIN}>{ "Login" }</a>
                </p>
            </main>
            { do_footer() }
            </>
        }
    }
}
