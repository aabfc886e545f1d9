//! Canvas container for Chart.js charts.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartCanvasProps {
    /// The DOM id for the canvas (Chart.js draws into this)
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A canvas for Chart.js with a loading overlay. Chart.js handles resizing.
#[component]
pub fn ChartCanvas(props: ChartCanvasProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            canvas {
                id: "{props.id}",
            }
        }
    }
}
