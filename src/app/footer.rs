use chrono::{DateTime, Datelike};
use leptos::prelude::*;

// Stamped by build.rs
const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_year() -> String {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|dt| dt.year().to_string())
        .unwrap_or_else(|_| "2025".to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-muted/20 py-6 md:py-0">
            <div class="container flex flex-col items-center justify-between gap-4 md:h-24 md:flex-row m-auto px-4">
                <p class="text-center text-sm leading-loose text-muted md:text-left mx-auto">
                    "All Rights Reserved © " {build_year()}
                    <span class="mx-2 text-muted/60">"·"</span>
                    <span class="text-muted/60">"v" {env!("CARGO_PKG_VERSION")}</span>
                </p>
            </div>
        </footer>
    }
}
