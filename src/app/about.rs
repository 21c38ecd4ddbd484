use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::magic::{MagicButton, MagicCard};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <section class="container py-12 md:py-16 lg:py-20 px-4">
            <div class="mx-auto max-w-[64rem] space-y-8">
                <h1 class="font-heading text-3xl sm:text-5xl md:text-6xl lg:text-7xl section-content">
                    "About " <span class="text-primary">"Me"</span>
                </h1>
                <div class="grid gap-10 md:grid-cols-2">
                    <div class="space-y-6 section-content">
                        <div class="bg-muted/10 backdrop-blur-sm rounded-xl p-6 border border-muted/30">
                            <p class="text-lg text-muted">
                                "Hello! I'm John Doe, a passionate Full Stack Developer with a focus on building modern web applications using JavaScript, TypeScript, React, and Node.js."
                            </p>
                            <p class="text-lg text-muted mt-4">
                                "As a young developer, I've built a strong foundation in both frontend and backend technologies through self-learning and academic studies. I enjoy solving complex problems and creating intuitive user experiences that make a difference."
                            </p>
                            <p class="text-lg text-muted mt-4">
                                "I'm constantly learning and adapting to new technologies to stay at the forefront of web development. My goal is to build applications that are not only functional but also scalable, maintainable, and enjoyable to use."
                            </p>
                            <div class="flex items-center gap-4 pt-6 flex-wrap">
                                <A href="/resume">
                                    <MagicButton
                                        shimmer=true
                                        class="h-11 px-8 gap-2 bg-primary text-background"
                                    >
                                        "📄 View Resume"
                                    </MagicButton>
                                </A>
                                <A href="/contact">
                                    <MagicButton
                                        shimmer=true
                                        class="h-11 px-8 gap-2 border-2 border-muted/40 hover:border-primary/50 hover:bg-background/30"
                                    >
                                        "📧 Get in Touch"
                                    </MagicButton>
                                </A>
                            </div>
                        </div>
                    </div>
                    <div class="section-content">
                        <MagicCard class="h-full p-6">
                            <h2 class="text-2xl font-bold flex items-center mb-6">
                                "🎓 Education"
                            </h2>
                            <div class="relative">
                                <div class="absolute left-0 top-1.5 bottom-0 w-0.5 bg-gradient-to-b from-primary/60 to-primary/10 hidden sm:block"></div>
                                <div class="sm:pl-8 space-y-8">
                                    <div class="relative">
                                        <div class="absolute left-[-35px] top-2 h-3 w-3 rounded-full bg-primary hidden sm:block"></div>
                                        <div class="flex flex-col space-y-2">
                                            <div>
                                                <h3 class="font-bold text-lg">
                                                    "Full Stack Web Development"
                                                </h3>
                                                <p class="text-sm text-muted">"Self taught"</p>
                                            </div>
                                            <div>
                                                <span class="text-sm px-3 py-1.5 rounded-lg bg-muted/20 text-muted">
                                                    "Youtube, Blogs, Documentations, etc"
                                                </span>
                                            </div>
                                        </div>
                                    </div>
                                    <div class="relative">
                                        <div class="absolute left-[-35px] top-2 h-3 w-3 rounded-full bg-primary hidden sm:block"></div>
                                        <div class="flex flex-col space-y-3">
                                            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-2 flex-wrap">
                                                <div>
                                                    <h3 class="font-bold text-xl text-primary/90">
                                                        "Bachelor of Science"
                                                    </h3>
                                                    <p class="text-lg">"Computer Science"</p>
                                                </div>
                                                <div class="flex items-center px-3 py-1.5 rounded-full bg-primary/10 text-primary text-sm self-start">
                                                    "📅 2023 - 2027"
                                                </div>
                                            </div>
                                            <div class="flex items-center space-x-2">
                                                <span class="px-3 py-1.5 rounded-lg bg-muted/20 text-muted">
                                                    "State University"
                                                </span>
                                            </div>
                                            <div class="bg-muted/10 p-4 rounded-lg border border-muted/30 mt-2">
                                                <h4 class="font-semibold flex items-center mb-3">
                                                    "📚 Key Courses"
                                                </h4>
                                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                                                    <span class="text-sm px-3 py-1.5 bg-blue-500/10 rounded-full text-center border border-blue-500/20">
                                                        "Data Structures & Algorithms"
                                                    </span>
                                                    <span class="text-sm px-3 py-1.5 bg-green-500/10 rounded-full text-center border border-green-500/20">
                                                        "Computer Networks"
                                                    </span>
                                                    <span class="text-sm px-3 py-1.5 bg-purple-500/10 rounded-full text-center border border-purple-500/20">
                                                        "Database Management"
                                                    </span>
                                                    <span class="text-sm px-3 py-1.5 bg-amber-500/10 rounded-full text-center border border-amber-500/20">
                                                        "Software Engineering"
                                                    </span>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </MagicCard>
                    </div>
                </div>
            </div>
        </section>
    }
}
