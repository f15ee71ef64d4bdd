//! Page hero. Element ids match the entrance sequence in `brd_dashboard::reveal`.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    /// Call-to-action links
    pub children: Element,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    rsx! {
        header {
            style: "padding: 48px 16px 32px 16px; text-align: center; background: linear-gradient(135deg, #1e4d4b, #4a90a4); color: #fff; border-radius: 0 0 12px 12px;",
            h1 {
                id: "hero-title",
                style: "margin: 0; font-size: 32px;",
                "{props.title}"
            }
            p {
                id: "hero-subtitle",
                style: "margin: 12px 0 20px 0; font-size: 16px; opacity: 0.9;",
                "{props.subtitle}"
            }
            div {
                id: "hero-buttons",
                {props.children}
            }
        }
    }
}
