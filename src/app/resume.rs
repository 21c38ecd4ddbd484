use leptos::prelude::*;
use leptos_meta::Title;

struct ResumeProject {
    title: &'static str,
    kind: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    achievements: &'static [&'static str],
}

const RESUME_PROJECTS: [ResumeProject; 3] = [
    ResumeProject {
        title: "PixelPerfect Dashboard",
        kind: "Full Stack",
        description: "A responsive admin dashboard with dark mode and customizable widgets for data visualization.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Chart.js", "Redux"],
        achievements: &[
            "Designed a widget system with drag-and-drop layout persistence",
            "Cut initial bundle size roughly in half with route-level code splitting",
        ],
    },
    ResumeProject {
        title: "TastyBites Recipe App",
        kind: "Full Stack",
        description: "A mobile-friendly recipe application with search, filtering, and personalized recommendations.",
        technologies: &["Next.js", "MongoDB", "Prisma", "Tailwind CSS", "Auth.js"],
        achievements: &[
            "Built full-text recipe search with typo tolerance",
            "Implemented OAuth sign-in and per-user favorites",
        ],
    },
    ResumeProject {
        title: "CloudSync",
        kind: "Full Stack",
        description: "A file storage and sharing platform with real-time collaboration and version control.",
        technologies: &["Vue.js", "Firebase", "Express", "Socket.io", "Stripe API"],
        achievements: &[
            "Real-time presence and conflict-free concurrent edits",
            "Subscription billing with metered storage tiers",
        ],
    },
];

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <section class="container py-8 md:py-12 px-4">
            <div class="mx-auto max-w-4xl space-y-8 px-4 section-content">
                <div class="flex flex-col justify-between gap-4 sm:flex-row sm:items-center">
                    <h1 class="font-heading text-3xl sm:text-4xl md:text-5xl">"Resume"</h1>
                    <DownloadResumeButton />
                </div>
                <Resume />
            </div>
        </section>
    }
}

/// The resume proper, styled to survive the print dialog.
#[component]
fn Resume() -> impl IntoView {
    view! {
        <div class="space-y-8 rounded-lg border border-muted/40 p-6 print:border-none print:p-0">
            <div class="space-y-2">
                <h2 class="text-2xl font-bold">"John Doe"</h2>
                <h3 class="text-xl text-muted">"Full Stack Developer"</h3>
                <div class="flex flex-col gap-1 pt-2 sm:flex-row sm:items-center sm:gap-6">
                    <div class="flex items-center gap-2">
                        <i class="extra-email"></i>
                        <a href="mailto:johndoe@example.com">"johndoe@example.com"</a>
                    </div>
                    <div class="flex items-center gap-2">
                        <i class="devicon-github-plain"></i>
                        <a href="https://github.com/johndoe-dev" target="_blank" rel="noreferrer">
                            "/johndoe-dev"
                        </a>
                    </div>
                </div>
            </div>
            <section id="summary" class="space-y-2">
                <h3 class="text-lg font-semibold border-b border-muted/40 pb-0.5">"Summary"</h3>
                <p class="text-muted">
                    "A passionate Full Stack Developer with expertise in building modern, responsive web applications using JavaScript, TypeScript, React, and Node.js. Self-taught developer with strong problem-solving abilities and a focus on creating intuitive, high-performance user experiences."
                </p>
            </section>
            <section id="skills" class="space-y-4">
                <h3 class="text-lg font-semibold border-b border-muted/40 pb-0.5">
                    "Technical Skills"
                </h3>
                <div class="grid gap-2 sm:grid-cols-2">
                    <div>
                        <h4 class="font-medium">"Frontend"</h4>
                        <p class="text-sm text-muted">
                            "React, Next.js, TypeScript, JavaScript, HTML5, CSS3, Tailwind CSS, UI/UX Design"
                        </p>
                    </div>
                    <div>
                        <h4 class="font-medium">"Backend"</h4>
                        <p class="text-sm text-muted">
                            "Node.js, Express, REST API Design, MongoDB, Authentication & Authorization"
                        </p>
                    </div>
                    <div>
                        <h4 class="font-medium">"Tools & Technologies"</h4>
                        <p class="text-sm text-muted">
                            "Git, GitHub, Docker, VS Code, Azure, Figma"
                        </p>
                    </div>
                    <div>
                        <h4 class="font-medium">"Currently Learning"</h4>
                        <p class="text-sm text-muted">
                            "FastAPI, Machine Learning, LangChain, React Native, GenAI"
                        </p>
                    </div>
                </div>
            </section>
            <section id="projects" class="space-y-4">
                <h3 class="text-lg font-semibold border-b border-muted/40 pb-0.5">"Projects"</h3>
                {RESUME_PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <div class="space-y-1">
                                <div class="flex flex-col justify-between gap-1 sm:flex-row sm:items-center">
                                    <h4 class="font-medium">{project.title}</h4>
                                    <p class="text-sm font-medium text-muted">{project.kind}</p>
                                </div>
                                <p class="text-sm">{project.description}</p>
                                <div class="flex flex-wrap gap-1 pt-1">
                                    {project
                                        .technologies
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="rounded-full bg-muted/20 px-2 py-0.5 text-xs">
                                                    {*tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <ul class="list-inside list-disc text-sm text-muted pt-1">
                                    {project
                                        .achievements
                                        .iter()
                                        .map(|item| view! { <li>{*item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section id="education" class="space-y-2">
                <h3 class="text-lg font-semibold border-b border-muted/40 pb-0.5">"Education"</h3>
                <div class="space-y-4">
                    <div class="space-y-1">
                        <div class="flex flex-col justify-between gap-1 sm:flex-row sm:items-center">
                            <h4 class="font-medium">"Bachelor of Science in Computer Science"</h4>
                            <p class="text-sm font-medium text-muted">"2023 - 2027"</p>
                        </div>
                        <p class="text-sm">"State University"</p>
                        <p class="text-sm text-muted">
                            "Key courses: Data Structures & Algorithms, Computer Networks, Database Management, Software Engineering"
                        </p>
                    </div>
                    <div class="space-y-1">
                        <div class="flex flex-col justify-between gap-1 sm:flex-row sm:items-center">
                            <h4 class="font-medium">"Full Stack Web Development"</h4>
                            <p class="text-sm font-medium text-muted">"Self taught"</p>
                        </div>
                        <p class="text-sm text-muted">"Youtube, Blogs, Documentations, etc"</p>
                    </div>
                </div>
            </section>
        </div>
    }
}

/// "Download" hands the page to the browser's print dialog; the stylesheet
/// hides the chrome with print rules.
#[component]
fn DownloadResumeButton() -> impl IntoView {
    view! {
        <button
            class="inline-flex items-center gap-2 h-10 rounded-md bg-primary text-background px-4 py-2 text-sm font-medium hover:bg-primary/90 print:hidden"
            on:click=move |_| {
                let _ = window().print();
            }
        >
            "⬇ Download PDF"
        </button>
    }
}
