//! UI things
//!

use yew::{html, Html};

use crate::constants::{CSS_ALERT_DANGER, CSS_PAGE_HEADER};

/// How a sentiment label should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Neutral,
}

impl Tone {
    /// Case-insensitive substring match, `pos` wins over `neg`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("pos") {
            Tone::Success
        } else if label.contains("neg") {
            Tone::Danger
        } else {
            Tone::Neutral
        }
    }

    pub fn css_color(&self) -> &'static str {
        match self {
            Tone::Success => "var(--success)",
            Tone::Danger => "var(--danger)",
            Tone::Neutral => "var(--neutral)",
        }
    }
}

pub fn loading_spinner(label: &str) -> Html {
    html! {
        <div class="vert-center">
          <div class="spinner-border text-dark" role="status">
            <span class="visually-hidden">{ label.to_string() }</span>
          </div>
          <span class="ms-2">{ label.to_string() }</span>
        </div>
    }
}

pub fn do_alert_error(alert_title: &str, alert_message: Option<&str>) -> Html {
    html! {
    <div class="container">
        <div class="row justify-content-md-center">
            <div class={CSS_ALERT_DANGER} role="alert">
                <p><strong>{ alert_title }</strong></p>
                if let Some(value) = alert_message {
                    <p>{ value }</p>
                }
            </div>
        </div>
    </div>
    }
}

pub fn do_page_header(page_title: &str) -> Html {
    html! {
        <div class={CSS_PAGE_HEADER}>
            <h2>{ page_title }</h2>
        </div>
    }
}

/// Returns the footer node for the UI
pub fn do_footer() -> Html {
    html! {
        <footer class="footer mt-auto py-3 bg-light text-end">
            <div class="container">
                <span class="text-muted">{ "Sentiment Feedback" }</span>
            </div>
        </footer>
    }
}
