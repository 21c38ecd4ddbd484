use leptos::prelude::*;

/// Slowly rotating blurred gradient blob behind all content. The gradient
/// itself lives in the stylesheet and swaps with `data-theme`.
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden opacity-45 pointer-events-none">
            <div class="gradient-blob"></div>
        </div>
    }
}
