use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio OS" />
        <Meta
            name="description"
            content="A personal portfolio presented as a desktop with draggable application windows."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// Desktop shell mounted at the site root. `?open=` deep links are read by the provider at boot.
#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <section class="site-not-found">
            <h1>"Nothing here"</h1>
            <p>{move || format!("No page lives at {}.", location.pathname.get())}</p>
            <A href="/">"Back to the desktop"</A>
        </section>
    }
}
