#![allow(non_snake_case)]

use super::*;

use crate::view::TeamCardView;

#[component]
pub fn TeamSection(team: Vec<TeamCardView>) -> Element {
    rsx! {
        div {
            id: "team",
            padding: "60px 40px",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            background_color: "#f5f7f6",

            h2 { "Leadership Team" }
            div {
                display: "flex",
                flex_direction: "row",
                flex_wrap: "wrap",
                justify_content: "center",
                gap: "24px",

                for (idx, member) in team.into_iter().enumerate() {
                    div {
                        key: "{idx}",
                        display: "flex",
                        flex_direction: "column",
                        align_items: "center",
                        width: "240px",
                        text_align: "center",

                        img {
                            width: "96px",
                            height: "96px",
                            border_radius: "50%",
                            src: "{member.avatar_url}",
                            alt: "{member.name}",
                        }
                        h3 { margin_bottom: "4px", "{member.name}" }
                        div { color: "#2e7d32", "{member.role}" }
                        p { color: "#666", "{member.bio}" }
                    }
                }
            }
        }
    }
}
