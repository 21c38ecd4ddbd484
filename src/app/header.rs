use leptos::prelude::*;
use leptos_router::components::A;

use super::theme::ThemeToggle;

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/contact", "Contact"),
];

/// Sticky translucent header: site name, desktop nav, theme toggle, and an
/// animated hamburger that slides the nav down on small screens.
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let bar = move |open_class: &'static str| {
        move || {
            format!(
                "w-5 h-0.5 bg-current transform origin-center transition-all duration-200 {}",
                if menu_open.get() { open_class } else { "" },
            )
        }
    };

    view! {
        <header class="sticky top-0 z-50 w-full border-b border-muted/20 bg-background/30 backdrop-blur-md">
            <div class="container flex h-14 max-w-screen-2xl items-center justify-between m-auto px-4">
                <div class="flex items-center">
                    <A href="/" attr:class="mr-6 flex items-center font-bold">
                        "John Doe"
                    </A>
                    <nav class="hidden md:flex items-center gap-1">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <A
                                        href=*href
                                        attr:class="inline-flex h-9 items-center rounded-md px-4 py-2 text-sm font-medium transition-colors hover:bg-background/30"
                                    >
                                        {*label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        class="md:hidden relative inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-background/30"
                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                        aria-label="Toggle menu"
                    >
                        <div class="w-6 h-6 flex flex-col items-center justify-center gap-1">
                            <div class=bar("rotate-45 translate-y-1.5")></div>
                            <div class=move || {
                                format!(
                                    "w-5 h-0.5 bg-current transition-opacity duration-200 {}",
                                    if menu_open.get() { "opacity-0" } else { "opacity-100" },
                                )
                            }></div>
                            <div class=bar("-rotate-45 -translate-y-1.5")></div>
                        </div>
                    </button>
                </div>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <nav class="md:hidden bg-background/90 backdrop-blur-md border-b border-muted/20 overflow-hidden menu-slide">
                                <div class="space-y-1 px-4 py-3 pb-4">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|(href, label)| {
                                            view! {
                                                <a
                                                    href=*href
                                                    class="flex w-full items-center rounded-md px-3 py-2 text-sm font-medium hover:bg-background/30"
                                                    on:click=move |_| set_menu_open(false)
                                                >
                                                    {*label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
