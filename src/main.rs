// StudyForge project showcase — Leptos 0.8 Edition

mod content;
mod scroll;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ScrollChrome />
        <main>
            <Hero />
            <Features />
            <Stats />
            <TechStack />
        </main>
        <Footer />
    }
}
