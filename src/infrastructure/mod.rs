pub mod http;
pub mod services;

/// UI interaction services (separate from domain logic)
pub mod ui {
    use crate::domain::logging::{LogComponent, get_logger};

    /// Blocking user-facing alert for failed fetches
    ///
    /// Outside a browser window the alert degrades to the error log entry.
    pub fn show_error_alert(message: &str) {
        get_logger().error(LogComponent::Infrastructure("UI"), &format!("Alert: {}", message));

        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    /// Update an auxiliary status element by id; a missing element is a no-op
    pub fn update_status_element(id: &str, text: &str) {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(element) = document.get_element_by_id(id) {
                    element.set_text_content(Some(text));
                } else {
                    get_logger().debug(
                        LogComponent::Infrastructure("UI"),
                        &format!("Status element '{}' not found (optional)", id),
                    );
                }
            }
        }
    }
}
