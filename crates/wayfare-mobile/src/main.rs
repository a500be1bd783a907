//! Wayfare Mobile Application
//!
//! Android shell entrypoint for the Dioxus mobile app.

#[cfg(target_os = "android")]
mod app;
#[cfg(target_os = "android")]
mod calendar_grid;
#[cfg(any(target_os = "android", test))]
mod config;
#[cfg(any(target_os = "android", test))]
mod format;
#[cfg(target_os = "android")]
mod screens;
#[cfg(any(target_os = "android", test))]
mod trip_store;
#[cfg(target_os = "android")]
mod ui;

#[cfg(target_os = "android")]
fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wayfare=info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Wayfare mobile shell...");
    dioxus::LaunchBuilder::mobile().launch(app::App);
}

#[cfg(not(target_os = "android"))]
fn main() {
    println!(
        "wayfare-mobile is intended for Android targets. Try: cargo build -p wayfare-mobile --target aarch64-linux-android"
    );
}
