use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::theme::{use_theme, Theme};

const MILESTONES: [f64; 3] = [0.3, 0.6, 0.9];
const SHOW_AFTER_PX: f64 = 500.0;
// Scroll distance over which the hero icons finish drifting out
const HERO_SCROLL_SPAN: f64 = 600.0;
// Matches the `d` attribute of the progress path below
const PATH_LEN: f64 = 1000.0;

/// Fraction of the document scrolled, clamped to [0, 1].
fn scroll_fraction(scroll_y: f64, scroll_height: f64, client_height: f64) -> f64 {
    let track = scroll_height - client_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_y / track).clamp(0.0, 1.0)
}

/// Drawn portion of the progress line, with a 5% floor so the line is
/// visible before any scrolling happens.
fn path_progress(fraction: f64) -> f64 {
    0.05 + fraction * 0.95
}

/// Milestone highlight opacity: ramps 0 -> 1 approaching the milestone and
/// settles at 0.7 once passed, over a +/-0.05 window.
fn milestone_opacity(fraction: f64, milestone: f64) -> f64 {
    let d = fraction - milestone;
    if d <= -0.05 {
        0.0
    } else if d < 0.0 {
        (d + 0.05) / 0.05
    } else if d < 0.05 {
        1.0 - 0.3 * (d / 0.05)
    } else {
        0.7
    }
}

/// Horizontal drift of a floating hero icon: left icons slide out to -150px,
/// right icons to +150px, linearly over the first half of the hero scroll.
pub(super) fn drift_x(fraction: f64, is_left: bool) -> f64 {
    let t = (fraction / 0.5).clamp(0.0, 1.0);
    let mag = 150.0 * t;
    if is_left {
        -mag
    } else {
        mag
    }
}

/// Floating icons fade from 0.8 to 0 over the first 30% of the hero scroll.
pub(super) fn hero_opacity(fraction: f64) -> f64 {
    let t = (fraction / 0.3).clamp(0.0, 1.0);
    0.8 * (1.0 - t)
}

pub(super) fn hero_fraction(scroll_y: f64) -> f64 {
    (scroll_y / HERO_SCROLL_SPAN).clamp(0.0, 1.0)
}

/// Fixed full-width neon line under the header whose drawn length tracks
/// window scroll progress, with milestone dots at 30/60/90%.
#[component]
pub fn NeonProgressLine() -> impl IntoView {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let (dims, set_dims) = signal((0.0_f64, 0.0_f64));

    // Document dimensions are only measurable in the browser; re-measure on
    // scroll so late-loading content is accounted for.
    Effect::new(move |_| {
        scroll_y.track();
        if let Some(el) = document().document_element() {
            set_dims((el.scroll_height() as f64, el.client_height() as f64));
        }
    });

    let fraction = Signal::derive(move || {
        let (sh, ch) = dims.get();
        scroll_fraction(scroll_y.get(), sh, ch)
    });
    let neon = move || {
        if theme() == Theme::Dark {
            "#4C00FF"
        } else {
            "#0151a0"
        }
    };
    let glow = move || {
        let radius = if theme() == Theme::Dark { 6 } else { 2 };
        format!("filter: drop-shadow(0 0 {}px {});", radius, neon())
    };

    view! {
        <div class="fixed top-14 inset-x-0 z-20 w-screen pointer-events-none">
            <svg class="w-full" viewBox="0 0 1000 4" fill="none" preserveAspectRatio="xMinYMid meet">
                <path
                    d="M0 2 L1000 2"
                    stroke=neon
                    stroke-width="0.8"
                    stroke-linecap="round"
                    opacity="0.15"
                />
                <path
                    d="M0 2 L1000 2"
                    stroke=neon
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-dasharray="1000"
                    stroke-dashoffset=move || format!("{}", PATH_LEN * (1.0 - path_progress(fraction.get())))
                    opacity=move || format!("{}", path_progress(fraction.get()))
                    style=glow
                />
                {MILESTONES
                    .iter()
                    .map(|&m| {
                        let cx = format!("{}", m * PATH_LEN);
                        let cx2 = cx.clone();
                        view! {
                            <circle
                                cx=cx
                                cy="2"
                                r="1.2"
                                fill="none"
                                stroke=neon
                                stroke-width="0.5"
                                opacity="0.5"
                            />
                            <g
                                style=move || format!("filter: drop-shadow(0 0 4px {});", neon())
                                opacity=move || format!("{}", milestone_opacity(fraction.get(), m))
                            >
                                <circle cx=cx2.clone() cy="2" r="1.8" fill=neon opacity="0.6" />
                                <circle cx=cx2.clone() cy="2" r="1" fill=neon />
                            </g>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}

/// Floating button that appears after 500px of scroll and jumps back to the
/// top (smoothness comes from the stylesheet's `scroll-behavior`).
#[component]
pub fn BackToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let show = Signal::derive(move || scroll_y.get() > SHOW_AFTER_PX);

    view! {
        <button
            class=move || {
                format!(
                    "fixed bottom-6 right-6 z-50 h-10 w-10 rounded-full shadow-md bg-primary text-background transition-all duration-300 {}",
                    if show.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-10 pointer-events-none"
                    },
                )
            }
            on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            aria-label="Back to top"
        >
            "↑"
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn scroll_fraction_clamps_and_handles_short_documents() {
        assert_eq!(scroll_fraction(0.0, 2000.0, 800.0), 0.0);
        assert!((scroll_fraction(600.0, 2000.0, 800.0) - 0.5).abs() < EPS);
        assert_eq!(scroll_fraction(5000.0, 2000.0, 800.0), 1.0);
        // document shorter than the viewport has no track to scroll
        assert_eq!(scroll_fraction(100.0, 500.0, 800.0), 0.0);
    }

    #[test]
    fn path_progress_keeps_a_visible_floor() {
        assert!((path_progress(0.0) - 0.05).abs() < EPS);
        assert!((path_progress(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn milestone_opacity_ramps_up_then_settles() {
        let m = 0.6;
        assert_eq!(milestone_opacity(0.2, m), 0.0);
        assert!((milestone_opacity(m - 0.025, m) - 0.5).abs() < EPS);
        assert!((milestone_opacity(m, m) - 1.0).abs() < EPS);
        assert!((milestone_opacity(m + 0.025, m) - 0.85).abs() < EPS);
        assert!((milestone_opacity(0.9, m) - 0.7).abs() < EPS);
        assert!((milestone_opacity(1.0, m) - 0.7).abs() < EPS);
    }

    #[test]
    fn icons_drift_apart_and_fade_out() {
        assert_eq!(drift_x(0.0, true), 0.0);
        assert!((drift_x(0.25, true) + 75.0).abs() < EPS);
        assert!((drift_x(0.25, false) - 75.0).abs() < EPS);
        // saturates past the half-way point
        assert!((drift_x(0.9, false) - 150.0).abs() < EPS);

        assert!((hero_opacity(0.0) - 0.8).abs() < EPS);
        assert!((hero_opacity(0.15) - 0.4).abs() < EPS);
        assert_eq!(hero_opacity(0.5), 0.0);
    }

    #[test]
    fn hero_fraction_clamps_to_unit_range() {
        assert_eq!(hero_fraction(0.0), 0.0);
        assert!((hero_fraction(300.0) - 0.5).abs() < EPS);
        assert_eq!(hero_fraction(10_000.0), 1.0);
    }
}
