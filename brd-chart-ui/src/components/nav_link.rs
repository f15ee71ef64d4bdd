//! In-page anchor links with smooth scrolling.

use brd_dashboard::navigation::anchor_target;
use dioxus::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Smooth-scroll to the section an `#id` href names. Unknown targets are ignored.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    let Some(target) = target else {
        log::debug!("Anchor target #{} not on page", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    pub href: String,
    pub label: String,
    /// Render as a filled button rather than a plain link
    #[props(default = false)]
    pub primary: bool,
}

#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    let href = props.href.clone();
    let style = if props.primary {
        "display: inline-block; padding: 10px 18px; margin: 4px; border-radius: 6px; background: #1e4d4b; color: #fff; text-decoration: none;"
    } else {
        "display: inline-block; padding: 6px 12px; margin: 2px; color: #1e4d4b; text-decoration: none;"
    };

    rsx! {
        a {
            href: "{props.href}",
            style: "{style}",
            onclick: move |evt: MouseEvent| {
                if anchor_target(&href).is_some() {
                    evt.prevent_default();
                    scroll_to_anchor(&href);
                }
            },
            "{props.label}"
        }
    }
}
