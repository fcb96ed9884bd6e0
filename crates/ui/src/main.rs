#![allow(non_snake_case)]

use std::sync::Arc;

use ui::{App, UiApp, build_app_context};

/// Bare-bones composition for `cargo run -p ui`. The real entry point with
/// flags and environment handling lives in `crates/app`.
struct DevApp;

impl UiApp for DevApp {
    fn app_name(&self) -> String {
        "Timebox (dev)".to_string()
    }

    fn limit_checked_on_launch(&self) -> bool {
        false
    }
}

fn main() {
    let app: Arc<dyn UiApp> = Arc::new(DevApp);
    dioxus::LaunchBuilder::desktop()
        .with_context(build_app_context(&app))
        .launch(App);
}
