#![allow(warnings)]
//! NUI Phone Frontend Entry Point

mod models;
mod config;
mod logging;
mod commands;
mod clock;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
