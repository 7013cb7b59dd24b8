#![allow(non_snake_case)]

use super::*;

use crate::view::ContactView;
use crate::viewport::CONTACT_ANCHOR;

#[component]
pub fn ContactSection(contact: ContactView) -> Element {
    rsx! {
        div {
            id: CONTACT_ANCHOR,
            padding: "60px 40px",
            display: "flex",
            flex_direction: "column",
            align_items: "center",

            h2 { "Get in Touch" }
            p {
                color: "#666",
                "Our investor relations team is happy to walk you through the numbers."
            }
            div {
                display: "flex",
                flex_direction: "row",
                gap: "30px",

                a { href: "{contact.email_href}", "{contact.email}" }
                a { href: "{contact.phone_href}", "{contact.phone}" }
            }
        }
    }
}
