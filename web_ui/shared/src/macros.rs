//! Macros for the web UI

/// Adds a set of CSS classes to the body element when we're presenting a full-page form
#[macro_export]
macro_rules! add_body_form_classes {
    () => {
        for x in $crate::constants::CSS_CLASSES_BODY_FORM {
            if let Err(e) = $crate::utils::body().class_list().add_1(x) {
                gloo::console::error!(format!("class_list add error -> {:?}", e).as_str());
            };
        }
    };
}
