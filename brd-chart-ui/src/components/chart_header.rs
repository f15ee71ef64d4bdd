//! Section header with an anchor id, title and short caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Anchor id that nav links scroll to
    pub anchor: String,
    /// Section title
    pub title: String,
    /// One-line explanation under the title
    #[props(default = String::new())]
    pub caption: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            id: "{props.anchor}",
            style: "margin: 32px 0 8px 0; scroll-margin-top: 16px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px; color: #1e4d4b;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.caption}"
                }
            }
        }
    }
}
