#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;

mod content;
mod frontend;
mod utils;
mod view;
mod viewport;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    tracing::info!("starting investor page");
    launch(frontend::App);
}
