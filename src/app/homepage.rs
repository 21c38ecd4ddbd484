use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_use::use_window_scroll;

use crate::content::GLOBAL_PROJECT_CACHE;

use super::magic::MagicButton;
use super::projects::{get_projects_server, ProjectCard};
use super::scroll::{drift_x, hero_fraction, hero_opacity};
use super::typing::TypingEffect;

struct TechIcon {
    icon: &'static str,
    position: &'static str,
    color: &'static str,
    visible_on: &'static str,
}

// Decorative hero icons; the outer ones only appear on wider screens.
const TECH_ICONS: [TechIcon; 8] = [
    TechIcon {
        icon: "devicon-react-original",
        position: "left-[8%] top-[20%]",
        color: "text-blue-400",
        visible_on: "block",
    },
    TechIcon {
        icon: "devicon-nodejs-plain",
        position: "left-[5%] top-[60%]",
        color: "text-green-600",
        visible_on: "block",
    },
    TechIcon {
        icon: "devicon-mongodb-plain",
        position: "left-[10%] bottom-[20%]",
        color: "text-green-500",
        visible_on: "hidden md:block",
    },
    TechIcon {
        icon: "devicon-html5-plain",
        position: "left-[15%] bottom-[38%]",
        color: "text-orange-500",
        visible_on: "hidden lg:block",
    },
    TechIcon {
        icon: "devicon-tailwindcss-plain",
        position: "right-[8%] top-[22%]",
        color: "text-cyan-500",
        visible_on: "block",
    },
    TechIcon {
        icon: "devicon-github-original",
        position: "right-[5%] top-[60%]",
        color: "text-muted",
        visible_on: "block",
    },
    TechIcon {
        icon: "devicon-git-plain",
        position: "right-[10%] top-[42%]",
        color: "text-red-500",
        visible_on: "hidden md:block",
    },
    TechIcon {
        icon: "devicon-docker-plain",
        position: "right-[12%] bottom-[15%]",
        color: "text-blue-500",
        visible_on: "hidden lg:block",
    },
];

struct TechEntry {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
}

const MAIN_TECH: [TechEntry; 10] = [
    TechEntry {
        name: "React",
        description: "JavaScript library for building user interfaces",
        icon: "devicon-react-original",
        color: "text-blue-400",
    },
    TechEntry {
        name: "Next.js",
        description: "React framework for production",
        icon: "devicon-nextjs-plain",
        color: "text-foreground",
    },
    TechEntry {
        name: "JavaScript",
        description: "Programming language for the web",
        icon: "devicon-javascript-plain",
        color: "text-yellow-400",
    },
    TechEntry {
        name: "Express",
        description: "Web application framework for Node.js",
        icon: "devicon-express-original",
        color: "text-muted",
    },
    TechEntry {
        name: "TypeScript",
        description: "Typed superset of JavaScript",
        icon: "devicon-typescript-plain",
        color: "text-blue-600",
    },
    TechEntry {
        name: "Tailwind CSS",
        description: "Utility-first CSS framework",
        icon: "devicon-tailwindcss-plain",
        color: "text-cyan-500",
    },
    TechEntry {
        name: "MongoDB",
        description: "NoSQL database for modern applications",
        icon: "devicon-mongodb-plain",
        color: "text-green-500",
    },
    TechEntry {
        name: "Docker",
        description: "Platform for containerized applications",
        icon: "devicon-docker-plain",
        color: "text-blue-500",
    },
    TechEntry {
        name: "Python",
        description: "General-purpose programming language",
        icon: "devicon-python-plain",
        color: "text-yellow-600",
    },
    TechEntry {
        name: "UI/UX",
        description: "User interface & user experience design",
        icon: "devicon-figma-plain",
        color: "text-purple-500",
    },
];

const LEARNING_TECH: [TechEntry; 5] = [
    TechEntry {
        name: "FastAPI",
        description: "Modern, fast web framework for Python",
        icon: "devicon-fastapi-plain",
        color: "text-teal-500",
    },
    TechEntry {
        name: "Machine Learning",
        description: "Building systems that learn from data",
        icon: "devicon-pytorch-original",
        color: "text-indigo-600",
    },
    TechEntry {
        name: "LangChain",
        description: "Framework for LLM-powered applications",
        icon: "devicon-python-plain",
        color: "text-yellow-500",
    },
    TechEntry {
        name: "React Native",
        description: "Framework for building native apps",
        icon: "devicon-react-original",
        color: "text-blue-400",
    },
    TechEntry {
        name: "GenAI",
        description: "Generative AI and ML models",
        icon: "devicon-tensorflow-original",
        color: "text-purple-600",
    },
];

const TOOLS_TECH: [TechEntry; 5] = [
    TechEntry {
        name: "Git",
        description: "Distributed version control system",
        icon: "devicon-git-plain",
        color: "text-red-500",
    },
    TechEntry {
        name: "GitHub",
        description: "Platform for version control and collaboration",
        icon: "devicon-github-original",
        color: "text-muted",
    },
    TechEntry {
        name: "Figma",
        description: "Collaborative interface design tool",
        icon: "devicon-figma-plain",
        color: "text-purple-400",
    },
    TechEntry {
        name: "VS Code",
        description: "Code editing. Redefined.",
        icon: "devicon-vscode-plain",
        color: "text-blue-500",
    },
    TechEntry {
        name: "Azure",
        description: "Microsoft's cloud computing service",
        icon: "devicon-azure-plain",
        color: "text-blue-600",
    },
];

// Tiles shown before "Show More" expands a section
const VISIBLE_TILES: usize = 8;

fn tile_class(i: usize) -> &'static str {
    match i % 5 {
        0 => "bg-blue-500/5",
        1 => "bg-purple-500/5",
        2 => "bg-green-500/5",
        3 => "bg-amber-500/5",
        _ => "bg-cyan-500/5",
    }
}

/// Decorative tech icons floating around the hero. Each bobs on a CSS
/// keyframe; scrolling drifts the two sides apart and fades them out.
#[component]
fn FloatingIcons() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let fraction = Signal::derive(move || hero_fraction(scroll_y.get()));

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none">
            {TECH_ICONS
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let is_left = item.position.starts_with("left-");
                    view! {
                        <div
                            class=format!("absolute {} z-0 {} float-bob", item.position, item.visible_on)
                            style=move || {
                                format!(
                                    "transform: translateX({}px); opacity: {}; animation-delay: {}ms;",
                                    drift_x(fraction.get(), is_left),
                                    hero_opacity(fraction.get()),
                                    i * 300,
                                )
                            }
                        >
                            <i class=format!(
                                "{} {} text-4xl md:text-5xl drop-shadow-md",
                                item.icon,
                                item.color,
                            )></i>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = Resource::new(
        || (),
        move |_| async move {
            let cache = &*GLOBAL_PROJECT_CACHE;
            if let Some(cached) = cache.get("") {
                return (*cached).clone();
            }
            let list = get_projects_server(String::new()).await.unwrap_or_default();
            #[cfg(feature = "hydrate")]
            cache.insert(String::new(), list.clone());
            list
        },
    );

    let typing_words = vec![
        "React", "Node.js", "TypeScript", "MongoDB", "Next.js", "Express", "Tailwind",
    ]
    .into_iter()
    .map(String::from)
    .collect::<Vec<_>>();
    let typing_colors = vec![
        "text-blue-400",
        "text-green-500",
        "text-blue-600",
        "text-green-600",
        "text-foreground",
        "text-red-500",
        "text-blue-400",
    ]
    .into_iter()
    .map(String::from)
    .collect::<Vec<_>>();

    view! {
        <Title text="Home" />
        <section class="space-y-6 pb-8 pt-6 md:pb-12 md:pt-10 lg:py-32 relative">
            <FloatingIcons />
            <div class="container flex max-w-[64rem] flex-col items-center gap-4 text-center m-auto px-4 section-content">
                <div class="flex flex-col md:flex-row items-center gap-6 md:gap-8">
                    <div class="relative h-40 w-40 md:h-52 md:w-52 flex items-center justify-center group flex-shrink-0">
                        <div class="absolute h-full w-full bg-primary/40 morph-shape transition-all duration-700 group-hover:scale-105"></div>
                        <div class="relative h-36 w-36 md:h-48 md:w-48 z-10 overflow-hidden rounded-full">
                            <img
                                src="/avatar.svg"
                                alt="John Doe"
                                class="h-full w-full object-cover"
                            />
                        </div>
                    </div>
                    <div>
                        <h1 class="font-heading text-4xl sm:text-6xl lg:text-7xl mt-4 md:mt-0 font-extrabold text-center md:text-left relative">
                            "Hi, I'm " <span class="text-primary relative">
                                "John"
                                <svg
                                    class="absolute -bottom-1 md:-bottom-2 left-0 w-full"
                                    viewBox="0 0 200 20"
                                    xmlns="http://www.w3.org/2000/svg"
                                    preserveAspectRatio="none"
                                >
                                    <path
                                        d="M0,15 C66,5 134,5 200,15"
                                        class="draw-underline"
                                        stroke="currentColor"
                                        stroke-width="2"
                                        stroke-linecap="round"
                                        fill="none"
                                    />
                                </svg>
                            </span>
                        </h1>
                        <p class="max-w-[42rem] leading-normal text-muted sm:text-xl sm:leading-8 mt-4 text-center md:text-left">
                            "Full Stack Developer specializing in "
                            <span class="font-mono">
                                <TypingEffect
                                    words=typing_words
                                    colors=typing_colors
                                    typing_speed=150
                                    deleting_speed=80
                                    delay_between=1500
                                />
                            </span>
                            <br />
                            "I build modern, responsive, and user-friendly web applications."
                        </p>
                    </div>
                </div>
                <div class="flex flex-wrap justify-center md:justify-start gap-4 w-full mt-6">
                    <A href="/contact">
                        <MagicButton
                            shimmer=true
                            class="h-11 px-8 bg-gradient-to-r from-primary/80 to-primary text-background"
                        >
                            "📧 Get in touch"
                        </MagicButton>
                    </A>
                    <A href="/about">
                        <MagicButton
                            shimmer=true
                            class="h-11 px-8 border border-primary/30 hover:border-primary/20"
                        >
                            "Learn more about me"
                        </MagicButton>
                    </A>
                </div>
            </div>
        </section>

        <section class="container space-y-6 py-8 md:py-12 lg:py-24 relative bg-muted/10 rounded-xl m-auto px-4">
            <div class="mx-auto flex max-w-[58rem] flex-col items-center space-y-4 text-center px-4 section-content">
                <h2 class="font-heading text-3xl leading-[1.1] md:text-6xl">"My Tech Stack"</h2>
                <p class="max-w-[85%] leading-normal text-muted sm:text-lg sm:leading-7">
                    "Here are some technologies I work with to build amazing digital experiences."
                </p>
            </div>
            <TechSection entries=&MAIN_TECH />
            <div class="mx-auto flex max-w-[58rem] flex-col items-center space-y-4 text-center px-4 mt-12 section-content">
                <h3 class="font-heading text-2xl leading-[1.1] md:text-4xl">"Currently Learning"</h3>
            </div>
            <TechSection entries=&LEARNING_TECH />
            <div class="mx-auto flex max-w-[58rem] flex-col items-center space-y-4 text-center px-4 mt-12 section-content">
                <h3 class="font-heading text-2xl leading-[1.1] md:text-4xl">"Tools I Use"</h3>
            </div>
            <TechSection entries=&TOOLS_TECH />
        </section>

        <section class="container space-y-6 py-8 md:py-12 lg:py-24 m-auto px-4">
            <div class="mx-auto flex max-w-[58rem] flex-col items-center space-y-4 text-center px-4 section-content">
                <h2 class="font-heading text-3xl leading-[1.1] md:text-6xl">"Featured Projects"</h2>
                <p class="max-w-[85%] leading-normal text-muted sm:text-lg sm:leading-7">
                    "Check out some of my recent work that showcases my skills and expertise."
                </p>
            </div>
            <Transition fallback=move || {
                view! {
                    <div class="mx-auto max-w-[64rem] space-y-4">
                        <div class="loading-skeleton h-48 rounded"></div>
                        <div class="loading-skeleton h-48 rounded w-3/4"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    let projects = featured.await;
                    view! {
                        <div class="mx-auto grid justify-center gap-4 sm:grid-cols-2 md:max-w-[64rem] md:grid-cols-3">
                            {projects
                                .into_iter()
                                .take(3)
                                .map(|p| view! { <ProjectCard project=p /> })
                                .collect_view()}
                        </div>
                    }
                })}
            </Transition>
            <div class="flex justify-center section-content">
                <A href="/projects">
                    <MagicButton class="h-10 px-4 hover:bg-muted/20">
                        "View All Projects"
                    </MagicButton>
                </A>
            </div>
        </section>

        <section class="container py-8 md:py-12 lg:py-24 m-auto px-4">
            <div class="mx-auto flex max-w-[58rem] flex-col items-center justify-center gap-4 text-center px-4 section-content">
                <h2 class="font-heading text-3xl leading-[1.1] md:text-6xl">"Let's Connect"</h2>
                <p class="max-w-[85%] leading-normal text-muted sm:text-lg sm:leading-7">
                    "Feel free to reach out to discuss opportunities or just to say hello!"
                </p>
                <div class="flex flex-wrap justify-center gap-4 py-8">
                    <a
                        href="https://github.com/johndoe-dev"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 h-11 rounded-md border border-muted/40 px-8 hover:bg-muted/10"
                    >
                        <i class="devicon-github-original"></i>
                        "GitHub"
                    </a>
                    <a
                        href="https://linkedin.com/in/john-doe-developer"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 h-11 rounded-md border border-muted/40 px-8 hover:border-blue-500 hover:text-blue-500"
                    >
                        <i class="devicon-linkedin-plain"></i>
                        "LinkedIn"
                    </a>
                    <a
                        href="mailto:johndoe@example.com"
                        class="inline-flex items-center gap-2 h-11 rounded-md border border-muted/40 px-8 hover:border-red-500 hover:text-red-500"
                    >
                        <i class="extra-email"></i>
                        "Email"
                    </a>
                    <A
                        href="/resume"
                        attr:class="inline-flex items-center gap-2 h-11 rounded-md border border-muted/40 px-8 hover:border-primary hover:text-primary"
                    >
                        "📄 Resume"
                    </A>
                </div>
            </div>
        </section>
    }
}

/// Grid of tech tiles with a show-more toggle once it overflows the default
/// tile count.
#[component]
fn TechSection(entries: &'static [TechEntry]) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let overflows = entries.len() > VISIBLE_TILES;

    view! {
        <div class="relative mx-auto max-w-[80rem] mt-8 section-content">
            <div class="grid justify-center gap-4 grid-cols-2 md:grid-cols-3 lg:grid-cols-4 auto-rows-max">
                {entries
                    .iter()
                    .enumerate()
                    .map(|(i, tech)| {
                        view! {
                            <div class=move || {
                                format!(
                                    "flex flex-col items-center space-y-2 p-4 {} backdrop-blur-sm rounded-lg border border-muted/20 hover:border-primary/50 transition-all duration-200 hover:shadow-md group {}",
                                    tile_class(i),
                                    if !expanded.get() && i >= VISIBLE_TILES { "hidden" } else { "" },
                                )
                            }>
                                <div class="h-12 w-12 rounded-full bg-muted/20 flex items-center justify-center group-hover:scale-110 transition-transform duration-200">
                                    <i class=format!("{} {} text-2xl", tech.icon, tech.color)></i>
                                </div>
                                <h3 class="font-medium text-md">{tech.name}</h3>
                                <p class="text-xs text-muted text-center">{tech.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {overflows
                .then(|| {
                    view! {
                        <div class="flex justify-center mt-4">
                            <button
                                class="text-primary hover:text-primary/80 transition-all duration-150 text-sm font-medium"
                                on:click=move |_| set_expanded.update(|e| *e = !*e)
                            >
                                {move || if expanded.get() { "Show Less" } else { "Show More" }}
                            </button>
                        </div>
                    }
                })}
        </div>
    }
}
