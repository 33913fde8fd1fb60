//! The feedback form, the result of the last submission, the sentiment pie chart and, for
//! admins, the most recent feedback.

use gloo::console;
use sentiment_proto::v1::{Feedback, FeedbackRequest, FeedbackResult, Summary};
use sentiment_web_ui_shared::api::SentimentApi;
use sentiment_web_ui_shared::browser::Browser;
use sentiment_web_ui_shared::chart::SentimentChart;
use sentiment_web_ui_shared::constants::{
    CLASS_BUTTON_DARK, CSS_HIDDEN, ID_FEEDBACK_FORM, ID_FEEDBACK_MESSAGE, ID_FEEDBACK_NAME,
    ID_SENTIMENT_CHART, URL_WELCOME,
};
use sentiment_web_ui_shared::error::{ClientError, FormError};
use sentiment_web_ui_shared::models::{Session, SessionStore};
use sentiment_web_ui_shared::ui::{do_footer, do_page_header, Tone};
use sentiment_web_ui_shared::utils::{get_value_from_element_id, reset_form_by_id};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::manager::PageProps;

mod recent;

pub use recent::{recent_entries, RecentEntry};

const MSG_SUBMIT_FAILED: &str = "Failed to submit feedback. Check console and backend.";

/// Build the request from the raw form values. A blank name falls back to the session.
pub fn prepare_feedback<S: SessionStore>(
    session: &Session<S>,
    name: &str,
    message: &str,
) -> Result<FeedbackRequest, FormError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(FormError::EmptyMessage);
    }

    let name = match name.trim() {
        "" => session.display_name(),
        n => n.to_string(),
    };

    Ok(FeedbackRequest {
        name,
        message: message.to_string(),
    })
}

/// Keeps a second submission out while the first one is in flight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Returns false when a submission is already running.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_enabled(&self) -> bool {
        !self.in_flight
    }

    pub fn label(&self) -> &'static str {
        if self.in_flight {
            "Submitting..."
        } else {
            "Submit"
        }
    }
}

/// Validate the form and claim the guard. `None` means nothing should be sent.
pub fn begin_submit<S: SessionStore, B: Browser>(
    guard: &mut SubmitGuard,
    session: &Session<S>,
    browser: &B,
    name: &str,
    message: &str,
) -> Option<FeedbackRequest> {
    if !guard.is_enabled() {
        return None;
    }
    match prepare_feedback(session, name, message) {
        Ok(request) => {
            guard.begin();
            Some(request)
        }
        Err(fe) => {
            browser.alert(fe.user_message());
            None
        }
    }
}

/// A successful submission, and what the refreshes after it returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub result: FeedbackResult,
    pub summary: Result<Summary, ClientError>,
    pub recent: Result<Vec<Feedback>, ClientError>,
}

/// Post the feedback, then refresh the summary, then the recent list.
///
/// Only the post itself can fail the submission, the refreshes are carried back as-is.
pub async fn submit_feedback<A, B>(
    api: &A,
    browser: &B,
    request: &FeedbackRequest,
) -> Result<SubmitOutcome, ClientError>
where
    A: SentimentApi + ?Sized,
    B: Browser,
{
    let result = match api.post_feedback(request).await {
        Ok(r) => r,
        Err(e) => {
            browser.alert(MSG_SUBMIT_FAILED);
            return Err(e);
        }
    };
    let summary = api.get_summary().await;
    let recent = api.get_recent_feedback().await;

    Ok(SubmitOutcome {
        result,
        summary,
        recent,
    })
}

/// The console line for a refresh that didn't come back.
fn load_failure(what: &str, e: &ClientError) -> String {
    format!("could not load {} -> {}", what, e)
}

/// How the result box presents a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentView {
    pub label: String,
    pub tone: Tone,
    pub score_text: String,
}

impl From<&FeedbackResult> for SentimentView {
    fn from(result: &FeedbackResult) -> Self {
        let label = result.display_label().to_string();
        let score_text = match result.score {
            Some(score) if score != 0.0 && !score.is_nan() => format!("Score: {}", score),
            _ => String::new(),
        };
        SentimentView {
            tone: Tone::from_label(&label),
            label,
            score_text,
        }
    }
}

pub struct FeedbackApp {
    canvas: NodeRef,
    chart: Option<SentimentChart>,
    summary: Summary,
    recent: Option<Vec<RecentEntry>>,
    result: Option<SentimentView>,
    guard: SubmitGuard,
}

pub enum FeedbackAppMsg {
    SummaryLoaded(Result<Summary, ClientError>),
    RecentLoaded(Result<Vec<Feedback>, ClientError>),
    Submit,
    Submitted(Result<SubmitOutcome, ClientError>),
    Clear,
}

impl FeedbackApp {
    fn apply_summary(&mut self, res: Result<Summary, ClientError>) {
        match res {
            Ok(summary) => {
                self.summary = summary;
                if let Some(chart) = &self.chart {
                    if let Err(e) = chart.set_summary(&summary) {
                        console::error!(format!("failed to update chart -> {:?}", e).as_str());
                    }
                }
            }
            Err(e) => console::warn!(load_failure("summary", &e).as_str()),
        }
    }

    fn apply_recent(&mut self, ctx: &Context<Self>, res: Result<Vec<Feedback>, ClientError>) {
        match res {
            Ok(list) => {
                let is_admin = ctx.props().app.session.is_admin();
                if let Some(entries) = recent_entries(&list, is_admin) {
                    self.recent = Some(entries);
                }
            }
            Err(e) => console::warn!(load_failure("recent feedback", &e).as_str()),
        }
    }

    fn view_result(&self) -> Html {
        let (class, label, color, score) = match &self.result {
            Some(view) => (
                classes!("result"),
                view.label.clone(),
                format!("color: {}", view.tone.css_color()),
                view.score_text.clone(),
            ),
            None => (classes!("result", CSS_HIDDEN), String::new(), String::new(), String::new()),
        };
        html! {
            <div id="result" class={class}>
                <p>{ "Sentiment: " }<strong id="sentimentLabel" style={color}>{ label }</strong></p>
                <p id="confidence">{ score }</p>
            </div>
        }
    }
}

impl Component for FeedbackApp {
    type Message = FeedbackAppMsg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!("feedback::create");

        let app = ctx.props().app.clone();
        ctx.link().send_future(async move {
            FeedbackAppMsg::SummaryLoaded(app.api.get_summary().await)
        });
        let app = ctx.props().app.clone();
        ctx.link().send_future(async move {
            FeedbackAppMsg::RecentLoaded(app.api.get_recent_feedback().await)
        });

        FeedbackApp {
            canvas: NodeRef::default(),
            chart: None,
            summary: Summary::default(),
            recent: None,
            result: None,
            guard: SubmitGuard::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FeedbackAppMsg::SummaryLoaded(res) => {
                self.apply_summary(res);
                false
            }
            FeedbackAppMsg::RecentLoaded(res) => {
                self.apply_recent(ctx, res);
                true
            }
            FeedbackAppMsg::Submit => {
                let app = ctx.props().app.clone();
                let name = get_value_from_element_id(ID_FEEDBACK_NAME).unwrap_or_default();
                let message = get_value_from_element_id(ID_FEEDBACK_MESSAGE).unwrap_or_default();

                let request =
                    match begin_submit(&mut self.guard, &*app.session, &app.browser, &name, &message)
                    {
                        Some(r) => r,
                        None => return false,
                    };

                ctx.link().send_future(async move {
                    FeedbackAppMsg::Submitted(submit_feedback(&*app.api, &app.browser, &request).await)
                });
                true
            }
            FeedbackAppMsg::Submitted(res) => {
                match res {
                    Ok(outcome) => {
                        self.result = Some(SentimentView::from(&outcome.result));
                        self.apply_summary(outcome.summary);
                        self.apply_recent(ctx, outcome.recent);
                        reset_form_by_id(ID_FEEDBACK_FORM);
                    }
                    Err(e) => {
                        console::error!(format!("failed to submit feedback -> {}", e).as_str());
                    }
                }
                self.guard.finish();
                true
            }
            FeedbackAppMsg::Clear => {
                reset_form_by_id(ID_FEEDBACK_FORM);
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        match self.canvas.cast::<HtmlCanvasElement>() {
            Some(canvas) => match SentimentChart::new(&canvas, &self.summary) {
                Ok(chart) => self.chart = Some(chart),
                Err(e) => console::error!(format!("failed to create chart -> {:?}", e).as_str()),
            },
            None => console::error!("feedback::rendered -> no canvas to draw the chart on"),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.chart = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
            <main class="container">
                { do_page_header("Share your feedback") }
                <p>
                    { format!("Signed in as {}. ", ctx.props().app.session.display_name()) }
                    <a href={URL_WELCOME}>{ "Switch account" }</a>
                </p>
                <form id={ID_FEEDBACK_FORM}
                    onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        FeedbackAppMsg::Submit
                    }) }
                >
                    <div class="mb-3">
                        <label for={ID_FEEDBACK_NAME} class="form-label">{ "Name (optional)" }</label>
                        <input class="form-control" id={ID_FEEDBACK_NAME} name="name" type="text" />
                    </div>
                    <div class="mb-3">
                        <label for={ID_FEEDBACK_MESSAGE} class="form-label">{ "Feedback" }</label>
                        <textarea class="form-control" id={ID_FEEDBACK_MESSAGE} name="message" rows="4" />
                    </div>
                    <button id="submitBtn" type="submit" class={CLASS_BUTTON_DARK}
                        disabled={ !self.guard.is_enabled() }
                    >{ self.guard.label() }</button>
                    <button id="clearBtn" type="button" class="btn btn-secondary ms-2"
                        onclick={ ctx.link().callback(|_| FeedbackAppMsg::Clear) }
                    >{ "Clear" }</button>
                </form>

                { self.view_result() }

                <div class="chart-container" style="position: relative; height: 300px;">
                    <canvas id={ID_SENTIMENT_CHART} ref={self.canvas.clone()}></canvas>
                </div>

                if let Some(entries) = &self.recent {
                    <h4>{ "Recent feedback" }</h4>
                    { recent::render_recent(entries) }
                }
            </main>
            { do_footer() }
            </>
        }
    }
}
