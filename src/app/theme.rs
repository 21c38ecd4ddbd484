use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn from_stored(s: &str) -> Self {
        if s == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

/// Install the theme signal in context. The server always renders the
/// default (dark); the stored preference is applied on hydration and every
/// change is written back to localStorage.
pub fn provide_theme() -> RwSignal<Theme> {
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) = use_local_storage::<String, JsonSerdeWasmCodec>("theme");
        theme.set(Theme::from_stored(&stored.get_untracked()));
        Effect::watch(
            move || theme.get(),
            move |t, _, _| {
                set_stored.set(t.as_str().to_string());
            },
            false,
        );
    }

    provide_context(theme);
    theme
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="relative inline-flex h-9 w-9 items-center justify-center rounded-md border border-muted/40 hover:bg-muted/20 transition-colors duration-200"
            on:click=move |_| theme.update(|t| *t = t.toggled())
            aria-label="Toggle theme"
        >
            {move || if theme() == Theme::Dark { "🌙" } else { "☀️" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_and_round_trips_through_storage() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::from_stored(Theme::Light.as_str()), Theme::Light);
        // anything unexpected falls back to the default
        assert_eq!(Theme::from_stored("solarized"), Theme::Dark);
    }
}
