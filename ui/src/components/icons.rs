//! Small inline SVG glyphs for the cards and panels.
//!
//! Hand-drawn 24x24 outline shapes stroked with `currentColor`, so the
//! accent classes in the theme decide the color.

use dioxus::prelude::*;

#[component]
pub fn ChartBarsIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            "aria-hidden": "true",
            rect { x: "4", y: "13", width: "3.5", height: "7", rx: "1" }
            rect { x: "10.2", y: "8", width: "3.5", height: "12", rx: "1" }
            rect { x: "16.5", y: "4", width: "3.5", height: "16", rx: "1" }
        }
    }
}

#[component]
pub fn BriefcaseIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            "aria-hidden": "true",
            rect { x: "3.5", y: "8", width: "17", height: "11", rx: "2" }
            path { d: "M 9 8 V 6.5 A 1.5 1.5 0 0 1 10.5 5 H 13.5 A 1.5 1.5 0 0 1 15 6.5 V 8" }
            path { d: "M 3.5 12.5 H 20.5" }
        }
    }
}

#[component]
pub fn BuildingIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            "aria-hidden": "true",
            rect { x: "5", y: "4", width: "14", height: "16", rx: "1.5" }
            path { d: "M 9.5 20 V 16 H 14.5 V 20" }
            path { d: "M 9 8 H 11 M 13 8 H 15 M 9 12 H 11 M 13 12 H 15" }
        }
    }
}

#[component]
pub fn MapPinIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            "aria-hidden": "true",
            path {
                d: "M 12 21 C 12 21 5.5 14.9 5.5 10.5 A 6.5 6.5 0 0 1 18.5 10.5 C 18.5 14.9 12 21 12 21 Z"
            }
            circle { cx: "12", cy: "10.5", r: "2.5" }
        }
    }
}

#[component]
pub fn SpeechIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            "aria-hidden": "true",
            rect { x: "4", y: "4", width: "16", height: "12", rx: "2.5" }
            path { d: "M 8 16 L 8 20 L 12 16" }
        }
    }
}
