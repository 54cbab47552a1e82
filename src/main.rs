#![allow(warnings)]
//! Recipe Shelf Frontend Entry Point

mod models;
mod data;
mod storage;
mod query;
mod steps;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
