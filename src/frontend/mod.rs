#![allow(non_snake_case)]

use crate::content::PageContent;
use dioxus::prelude::*;

mod contact;
mod hero;
mod investors;
mod roadmap;
mod stats;
mod team;
mod tiers;

use investors::Investors;

pub fn App() -> Element {
    use_context_provider(PageContent::load);
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Wrapper)]
    #[route("/")]
    Investors {},
}

/// Pages owned by the surrounding site. Only their paths are known here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Login,
    FundingSchedule,
}

impl NavTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::FundingSchedule => "/funding-schedule",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Log in",
            Self::FundingSchedule => "Funding schedule",
        }
    }
}

#[component]
fn Wrapper() -> Element {
    rsx! {
        div {
            display: "flex",
            flex_direction: "column",
            min_height: "100vh",
            width: "100%",

            { header() }

            div {
                flex_grow: "1",
                Outlet::<Route> {}
            }

            { footer() }
        }
    }
}

fn nav_link(target: NavTarget, margin: &str) -> Element {
    let title = target.title();
    rsx! {
        a {
            margin_left: "{margin}",
            href: target.path(),
            "{title}"
        }
    }
}

pub fn header() -> Element {
    rsx! {
        div {
            display: "flex",
            flex_direction: "row",
            justify_content: "space-between",
            align_items: "center",
            padding: "20px 40px",

            a {
                href: NavTarget::Home.path(),
                font_weight: "bold",
                font_size: "1.4em",
                "Vitalis"
            }
            div {
                { nav_link(NavTarget::Home, "0px") }
                { nav_link(NavTarget::FundingSchedule, "20px") }
                { nav_link(NavTarget::Login, "20px") }
            }
        }
    }
}

pub fn footer() -> Element {
    rsx! {
        div {
            display: "flex",
            flex_direction: "row",
            justify_content: "space-between",
            padding: "30px 40px",
            color: "#666",

            p { "© 2025 Vitalis Health, Inc. All rights reserved." }
            div {
                { nav_link(NavTarget::Home, "0px") }
                { nav_link(NavTarget::FundingSchedule, "20px") }
            }
        }
    }
}
