#![allow(non_snake_case)]

use super::*;

use crate::view::{Side, TimelineEntryView};

#[component]
pub fn Roadmap(entries: Vec<TimelineEntryView>) -> Element {
    rsx! {
        div {
            id: "roadmap",
            padding: "60px 40px",
            display: "flex",
            flex_direction: "column",
            align_items: "center",

            h2 { "Roadmap" }
            div {
                position: "relative",
                width: "100%",
                max_width: "900px",

                // axis
                div {
                    position: "absolute",
                    left: "50%",
                    top: "0",
                    bottom: "0",
                    width: "2px",
                    background_color: "#ccc",
                }

                for (idx, entry) in entries.into_iter().enumerate() {
                    TimelineEntry { key: "{idx}", entry: entry }
                }
            }
        }
    }
}

#[component]
fn TimelineEntry(entry: TimelineEntryView) -> Element {
    let class = entry.side.class();
    let justify = match entry.side {
        Side::Left => "flex-start",
        Side::Right => "flex-end",
    };

    rsx! {
        div {
            class: class,
            display: "flex",
            justify_content: justify,
            margin_bottom: "30px",

            div {
                width: "45%",
                padding: "16px",
                border: "1px solid #ddd",
                border_radius: "8px",
                background_color: "white",

                div { color: "#2e7d32", font_weight: "bold", "{entry.quarter}" }
                h3 { margin: "6px 0", "{entry.title}" }
                p { color: "#666", margin: "0", "{entry.description}" }
            }
        }
    }
}
