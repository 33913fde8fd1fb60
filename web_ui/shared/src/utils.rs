use gloo::console;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{
    Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

/// Gets the equivalent of `window()` in javascript
pub fn window() -> Window {
    web_sys::window().expect_throw("Unable to retrieve window")
}

/// Gets the equivalent of `window().document()` in javascript
pub fn document() -> Document {
    window()
        .document()
        .expect_throw("Unable to retrieve document")
}

/// Gets the equivalent of `document().body()` in javascript
pub fn body() -> HtmlElement {
    document().body().expect_throw("Unable to retrieve body")
}

/// The path of the current document, `""` if the browser won't say.
pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}

/// Value of a form control by element id. Works for inputs, textareas and selects.
pub fn get_value_from_element_id(id: &str) -> Option<String> {
    let element = document().get_element_by_id(id)?;
    let element = match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Some(input.value()),
        Err(element) => element,
    };
    let element = match element.dyn_into::<HtmlTextAreaElement>() {
        Ok(textarea) => return Some(textarea.value()),
        Err(element) => element,
    };
    element
        .dyn_into::<HtmlSelectElement>()
        .ok()
        .map(|select| select.value())
}

/// Same as [get_value_from_element_id] but trimmed, and empty when the element is missing.
pub fn get_trimmed_value(id: &str) -> String {
    get_value_from_element_id(id)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

pub fn reset_form_by_id(id: &str) {
    match document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    {
        Some(form) => form.reset(),
        None => {
            console::warn!(format!("unable to reset form, couldn't find target with id '{}'", id).as_str());
        }
    }
}

/// If an element with an id attribute matching 'target' exists, focus it.
pub fn autofocus(target: &str) {
    if let Some(element) = document().get_element_by_id(target) {
        if let Ok(htmlelement) = element.dyn_into::<HtmlElement>() {
            if htmlelement.focus().is_err() {
                console::warn!(format!(
                    "unable to autofocus element, couldn't find target with id '{}'",
                    target
                )
                .as_str());
            }
        }
    }
}

/// The `content` of `<meta name="{name}">`, if the host page has one.
pub fn meta_content(name: &str) -> Option<String> {
    document()
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
        .filter(|content| !content.trim().is_empty())
}

/// Renders a backend timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// The backend sends naive ISO-8601 (`2024-05-01T10:20:30.123456`), but anything RFC 3339
/// is accepted too. Unparseable input is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    let display = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return dt.format(display).unwrap_or_else(|_| raw.to_string());
    }

    let whole_seconds = raw.split('.').next().unwrap_or(raw);
    match PrimitiveDateTime::parse(
        whole_seconds,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        Ok(dt) => dt.format(display).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn naive_iso_timestamps() {
        assert_eq!(
            format_timestamp("2024-05-01T10:20:30.123456"),
            "2024-05-01 10:20:30"
        );
        assert_eq!(format_timestamp("2024-05-01T10:20:30"), "2024-05-01 10:20:30");
    }

    #[test]
    fn rfc3339_timestamps() {
        assert_eq!(
            format_timestamp("2024-05-01T10:20:30+02:00"),
            "2024-05-01 10:20:30"
        );
        assert_eq!(format_timestamp("2024-05-01T10:20:30Z"), "2024-05-01 10:20:30");
    }

    #[test]
    fn garbage_is_passed_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }
}
