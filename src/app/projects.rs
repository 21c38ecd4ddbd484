use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;

use crate::content::{self, Project, GLOBAL_PROJECT_CACHE};

use super::magic::{MagicButton, MagicCard};

#[server(input = GetUrl)]
pub async fn get_projects_server(tag: String) -> Result<Vec<Project>, ServerFnError> {
    content::get_projects(tag)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Glow color for a project card, keyed off its tag.
pub(super) fn tag_glow(tag: &str) -> &'static str {
    match tag {
        "Full Stack" => "rgba(59, 130, 246, 0.5)",
        "Frontend" => "rgba(34, 197, 94, 0.5)",
        "Mobile App" => "rgba(236, 72, 153, 0.5)",
        "E-commerce" => "rgba(234, 179, 8, 0.5)",
        "Developer Tool" => "rgba(6, 182, 212, 0.5)",
        _ => "rgba(76, 0, 255, 0.5)",
    }
}

fn tag_badge(tag: &str) -> &'static str {
    match tag {
        "Full Stack" => "bg-blue-500/10 text-blue-500",
        "Frontend" => "bg-green-500/10 text-green-500",
        "Mobile App" => "bg-pink-500/10 text-pink-500",
        "E-commerce" => "bg-yellow-500/10 text-yellow-500",
        "Developer Tool" => "bg-cyan-500/10 text-cyan-500",
        _ => "bg-purple-500/10 text-purple-500",
    }
}

/// Load the full embedded list once, then narrow client-side by tag chip.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (tag, set_tag) = signal(String::new());
    let projects = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(cached) = cache.get("") {
                return (*cached).clone();
            }
            let list = get_projects_server(String::new()).await.unwrap_or_default();
            // only cache on the browser; the server caches in content::get_projects
            #[cfg(feature = "hydrate")]
            cache.insert(String::new(), list.clone());
            list
        },
    );

    view! {
        <Title text="Projects" />
        <section class="container py-12 md:py-16 lg:py-20 px-4">
            <div class="mx-auto max-w-[64rem] space-y-4 section-content">
                <h1 class="font-heading text-3xl sm:text-4xl md:text-5xl font-bold">
                    "My Projects"
                </h1>
                <p class="max-w-[85%] text-lg text-muted">
                    "Here's a collection of projects I've worked on."
                </p>
            </div>
            <Transition fallback=move || {
                view! {
                    <div class="mx-auto mt-12 max-w-[64rem] space-y-4">
                        <div class="loading-skeleton h-8 rounded"></div>
                        <div class="loading-skeleton h-48 rounded"></div>
                        <div class="loading-skeleton h-48 rounded w-3/4"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let all = projects.await;
                    let chips = content::tags(&all);
                    view! {
                        <div class="mx-auto mt-8 flex flex-wrap gap-2 max-w-[64rem] section-content">
                            <FilterChip
                                label="All".to_string()
                                value=String::new()
                                tag=tag
                                set_tag=set_tag
                            />
                            {chips
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <FilterChip label=t.clone() value=t tag=tag set_tag=set_tag />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mx-auto mt-8 grid gap-6 sm:grid-cols-2 lg:grid-cols-3 max-w-[64rem]">
                            {move || {
                                content::filter_by_tag(&all, &tag.get())
                                    .into_iter()
                                    .map(|p| view! { <ProjectCard project=p /> })
                                    .collect_view()
                            }}
                        </div>
                    }
                })}
            </Transition>
        </section>
    }
}

#[component]
fn FilterChip(
    label: String,
    value: String,
    tag: ReadSignal<String>,
    set_tag: WriteSignal<String>,
) -> impl IntoView {
    let selected = {
        let value = value.clone();
        move || tag.get() == value
    };
    view! {
        <button
            class=move || {
                format!(
                    "rounded-full border px-3 py-1 text-sm transition-colors duration-200 {}",
                    if selected() {
                        "border-primary bg-primary/20 text-primary"
                    } else {
                        "border-muted/40 text-muted hover:border-primary/50"
                    },
                )
            }
            on:click=move |_| set_tag(value.clone())
        >
            {label}
        </button>
    }
}

#[component]
pub(super) fn ProjectCard(project: Project) -> impl IntoView {
    let glow = tag_glow(&project.tag).to_string();
    let badge = tag_badge(&project.tag);
    view! {
        <MagicCard glow_color=glow class="h-full min-h-[280px]">
            <div class="flex h-full flex-col">
                <div class="w-full h-48 overflow-hidden rounded-t-lg">
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full h-full object-cover object-center"
                        loading="lazy"
                    />
                </div>
                <div class="p-6 flex-grow flex flex-col justify-between">
                    <div class="space-y-4">
                        <div class="flex items-center justify-between gap-2">
                            <h3 class="font-bold text-xl">{project.title.clone()}</h3>
                            <span class=format!(
                                "rounded-full px-2.5 py-0.5 text-xs font-semibold whitespace-nowrap {badge}",
                            )>{project.tag.clone()}</span>
                        </div>
                        <p class="text-sm text-muted">{project.description.clone()}</p>
                        <div class="flex flex-wrap gap-1.5 pt-2">
                            {project
                                .technologies
                                .iter()
                                .map(|t| {
                                    view! {
                                        <span class="inline-flex items-center rounded-full border border-transparent bg-muted/20 px-2.5 py-0.5 text-xs font-semibold">
                                            {t.to_string()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="mt-4 flex flex-wrap gap-2 justify-between">
                        <a href=project.repo_url.clone() target="_blank" rel="noopener noreferrer">
                            <MagicButton class="h-9 px-3 border border-primary/20 hover:border-primary/40">
                                "View Project"
                            </MagicButton>
                        </a>
                        {match (&project.live_url, project.in_development) {
                            (Some(url), false) => {
                                leptos::either::EitherOf3::A(
                                    view! {
                                        <a href=url.clone() target="_blank" rel="noopener noreferrer">
                                            <MagicButton
                                                shimmer=true
                                                class="h-9 px-3 bg-gradient-to-r from-primary/80 to-primary text-background"
                                            >
                                                "Visit Site"
                                            </MagicButton>
                                        </a>
                                    },
                                )
                            }
                            (_, true) => {
                                leptos::either::EitherOf3::B(
                                    view! {
                                        <span class="inline-flex items-center rounded-md bg-yellow-500/10 px-3 py-1.5 text-xs font-medium text-yellow-500">
                                            "🚧 In development"
                                        </span>
                                    },
                                )
                            }
                            (None, false) => leptos::either::EitherOf3::C(()),
                        }}
                    </div>
                </div>
            </div>
        </MagicCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_fall_back_to_the_default_glow() {
        assert_eq!(tag_glow("Full Stack"), "rgba(59, 130, 246, 0.5)");
        assert_eq!(tag_glow("Something Else"), "rgba(76, 0, 255, 0.5)");
        assert_eq!(tag_badge("Something Else"), "bg-purple-500/10 text-purple-500");
    }
}
