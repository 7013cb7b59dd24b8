#![allow(non_snake_case)]

use super::*;

use crate::view::CtaStyle;
use crate::viewport::{self, WebViewport, CONTACT_ANCHOR};

#[component]
pub fn Hero() -> Element {
    let solid = CtaStyle::Solid;
    let outline = CtaStyle::Outline;

    rsx! {
        div {
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            text_align: "center",
            padding: "100px 40px",

            h1 {
                font_size: "3em",
                margin_bottom: "10px",
                "Invest in the Future of Everyday Wellness"
            }
            p {
                color: "#666",
                max_width: "640px",
                "Vitalis helps people build healthier habits with personalised coaching, "
                "mood tracking and sleep insights. Join us as we grow."
            }
            div {
                display: "flex",
                flex_direction: "row",
                gap: "16px",
                margin_top: "30px",

                button {
                    class: solid.class(),
                    background: solid.background(),
                    color: solid.text_color(),
                    border: solid.border(),
                    border_radius: "8px",
                    padding: "10px 20px",
                    onclick: move |_| {
                        viewport::scroll_to_section(&WebViewport, CONTACT_ANCHOR);
                    },
                    "Contact Us"
                }
                button {
                    class: outline.class(),
                    background: outline.background(),
                    color: outline.text_color(),
                    border: outline.border(),
                    border_radius: "8px",
                    padding: "10px 20px",
                    "Schedule a Meeting"
                }
            }
        }
    }
}
