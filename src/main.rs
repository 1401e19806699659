#![allow(warnings)]
//! Project Board Frontend Entry Point

mod models;
mod config;
mod error;
mod logging;
mod page;
mod component;
mod tooltip;
mod project;
mod board;
mod analytics;
mod components;
mod app;

use std::rc::Rc;

use app::App;
use board::Board;
use config::BoardConfig;
use leptos::prelude::*;
use page::DomPage;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = start() {
        error::raise(err);
    }
}

fn start() -> error::Result<()> {
    let config = BoardConfig::load()?;
    if logging::init(config.log_level_filter()).is_err() {
        web_sys::console::warn_1(&"[BOARD] logger already installed".into());
    }

    let view_config = config.clone();
    mount_to_body(move || view! { <App config=view_config /> });

    let page = Rc::new(DomPage::new(&config));
    let board = Board::init(page)?;
    let analytics = analytics::bind_start_button(&config)?;

    // Both live as long as the page.
    std::mem::forget(board);
    std::mem::forget(analytics);
    Ok(())
}
