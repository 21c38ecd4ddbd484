use leptos::{ev::MouseEvent, prelude::*};

const CARD_GLOW_RADIUS: u32 = 100;
const BUTTON_GLOW_RADIUS: u32 = 80;

/// Radial-gradient spot centered on the pointer, the hover-glow backdrop.
fn glow_background(x: i32, y: i32, radius: u32, color: &str) -> String {
    format!("background: radial-gradient(circle {radius}px at {x}px {y}px, {color}, transparent);")
}

/// Card with a pointer-tracking glow. The spot follows the mouse while
/// hovering and disappears on leave.
#[component]
pub fn MagicCard(
    #[prop(default = String::from("rgba(76, 0, 255, 0.5)"))] glow_color: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (position, set_position) = signal((0, 0));
    let (hovering, set_hovering) = signal(false);

    view! {
        <div
            class=format!(
                "relative overflow-hidden rounded-lg border border-muted/40 bg-background/60 transition-all duration-300 group {class}",
            )
            on:mouseenter=move |_| set_hovering(true)
            on:mouseleave=move |_| set_hovering(false)
            on:mousemove=move |ev: MouseEvent| set_position((ev.offset_x(), ev.offset_y()))
        >
            {move || {
                hovering
                    .get()
                    .then(|| {
                        let (x, y) = position.get();
                        view! {
                            <div
                                class="absolute -inset-12 z-0 opacity-50 pointer-events-none"
                                style=glow_background(x, y, CARD_GLOW_RADIUS, &glow_color)
                            ></div>
                        }
                    })
            }}
            <div class="relative z-10 h-full">{children()}</div>
        </div>
    }
}

/// Button with optional pointer glow and shimmer sweep. Scale feedback on
/// hover/press comes from utility classes.
#[component]
pub fn MagicButton(
    #[prop(optional)] glow: bool,
    #[prop(optional)] shimmer: bool,
    #[prop(default = String::from("rgba(76, 0, 255, 0.7)"))] glow_color: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let (position, set_position) = signal((0, 0));
    let (hovering, set_hovering) = signal(false);

    view! {
        <button
            class=format!(
                "relative overflow-hidden inline-flex items-center justify-center rounded-md text-sm font-medium transition-all duration-200 hover:scale-[1.03] active:scale-[0.97] group {class}",
            )
            on:mouseenter=move |_| set_hovering(true)
            on:mouseleave=move |_| set_hovering(false)
            on:mousemove=move |ev: MouseEvent| set_position((ev.offset_x(), ev.offset_y()))
        >
            {move || {
                (glow && hovering.get())
                    .then(|| {
                        let (x, y) = position.get();
                        view! {
                            <div
                                class="absolute -inset-8 z-0 opacity-80 pointer-events-none"
                                style=glow_background(x, y, BUTTON_GLOW_RADIUS, &glow_color)
                            ></div>
                        }
                    })
            }}
            {shimmer
                .then(|| {
                    view! {
                        <span class="absolute inset-0 w-full h-full bg-gradient-to-r from-transparent via-white to-transparent opacity-0 group-hover:opacity-30 transform -skew-x-12 -translate-x-full group-hover:translate-x-full transition-all duration-1000 ease-out"></span>
                    }
                })}
            <span class="relative z-10">{children()}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_backdrop_centers_on_the_pointer() {
        let style = glow_background(42, 17, 100, "rgba(76, 0, 255, 0.5)");
        assert_eq!(
            style,
            "background: radial-gradient(circle 100px at 42px 17px, rgba(76, 0, 255, 0.5), transparent);"
        );
    }
}
