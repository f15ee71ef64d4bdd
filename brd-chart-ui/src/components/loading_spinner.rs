//! Loading indicator shown while both documents are in flight.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            role: "status",
            style: "display: flex; justify-content: center; align-items: center; padding: 24px; color: #666;",
            "वर्षा डेटा लोड हो रहा है..."
        }
    }
}
