//! BizCard - Leptos Frontend
//!
//! A single-screen business card rendered client-side with Leptos.
//! All data is hardcoded; the only state is the portfolio toggle.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use bizcard_types as _;
use leptos_meta as _;

use bizcard_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("BizCard (Leptos) starting...");

    // Mount the app
    mount_to_body(App);
}
