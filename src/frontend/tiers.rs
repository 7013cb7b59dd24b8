#![allow(non_snake_case)]

use super::*;

use crate::view::TierCardView;
use crate::viewport::{self, WebViewport, CONTACT_ANCHOR};

#[component]
pub fn TierSection(tiers: Vec<TierCardView>) -> Element {
    rsx! {
        div {
            id: "tiers",
            padding: "60px 40px",
            display: "flex",
            flex_direction: "column",
            align_items: "center",

            h2 { "Investment Opportunities" }
            div {
                display: "flex",
                flex_direction: "row",
                flex_wrap: "wrap",
                justify_content: "center",
                gap: "24px",

                for (idx, tier) in tiers.into_iter().enumerate() {
                    TierCard { key: "{idx}", view: tier }
                }
            }
        }
    }
}

#[component]
pub fn TierCard(view: TierCardView) -> Element {
    let p = view.presentation;
    let label = p.label;
    let label_color = p.color.hex();
    let label_class = p.color.class();
    let cta = p.cta_style;
    let cta_text = p.cta_text;
    let enabled = p.cta_enabled;

    rsx! {
        div {
            class: "tier-card",
            display: "flex",
            flex_direction: "column",
            justify_content: "space-between",
            width: "300px",
            padding: "20px",
            border: "1px solid #ddd",
            border_radius: "12px",

            div {
                h3 { "{view.title}" }
                p { color: "#666", "{view.description}" }
                p {
                    "Minimum investment: "
                    strong { "{view.min_investment}" }
                }
                ul {
                    padding_left: "20px",
                    for (idx, benefit) in view.benefits.iter().enumerate() {
                        li { key: "{idx}", "{benefit}" }
                    }
                }
            }

            div {
                display: "flex",
                flex_direction: "row",
                justify_content: "space-between",
                align_items: "center",
                margin_top: "20px",

                span {
                    class: label_class,
                    color: label_color,
                    font_weight: "bold",
                    "{label}"
                }
                button {
                    class: cta.class(),
                    background: cta.background(),
                    color: cta.text_color(),
                    border: cta.border(),
                    border_radius: "8px",
                    padding: "8px 16px",
                    disabled: !enabled,
                    onclick: move |_| {
                        if enabled {
                            viewport::scroll_to_section(&WebViewport, CONTACT_ANCHOR);
                        }
                    },
                    "{cta_text}"
                }
            }
        }
    }
}
