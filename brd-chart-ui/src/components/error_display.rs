//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Whether the dashboard could not start at all
    #[props(default = false)]
    pub fatal: bool,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "त्रुटि: " }
            "{props.message}"
            if props.fatal {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: #8E2424;",
                    "डैशबोर्ड डेटा लोड नहीं हो सका, इसलिए कोई चार्ट नहीं दिखाया गया।"
                }
            }
        }
    }
}
