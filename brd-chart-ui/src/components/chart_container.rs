//! Chart container component with loading state.

use brd_dashboard::ViewKind;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Which view renders into this container
    pub view: ViewKind,
    /// Whether the data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Chart height in pixels
    #[props(default = 400)]
    pub height: u32,
}

/// A `.chart-container` card holding one ECharts surface.
///
/// The inner div always exists so the view can mount as soon as data arrives.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            class: "chart-container",
            style: "position: relative; margin: 16px 0; padding: 12px; background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "चार्ट लोड हो रहा है..."
                }
            }
            div {
                id: "{props.view.container_id()}",
                style: "{style}",
            }
        }
    }
}
