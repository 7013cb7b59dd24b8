#![allow(non_snake_case)]

use super::*;

use crate::view::StatTileView;

#[component]
pub fn StatSection(stats: Vec<StatTileView>) -> Element {
    rsx! {
        div {
            display: "flex",
            flex_direction: "row",
            flex_wrap: "wrap",
            justify_content: "center",
            gap: "40px",
            padding: "40px",
            background_color: "#f5f7f6",

            for (idx, stat) in stats.into_iter().enumerate() {
                StatTile { key: "{idx}", view: stat }
            }
        }
    }
}

#[component]
pub fn StatTile(view: StatTileView) -> Element {
    rsx! {
        div {
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            min_width: "160px",

            div {
                font_size: "2.4em",
                font_weight: "bold",
                color: "#2e7d32",
                "{view.stat}"
            }
            div {
                color: "#666",
                "{view.label}"
            }
        }
    }
}
